pub mod paint;

pub use paint::{data_url, get_2d_context, paint_square};
