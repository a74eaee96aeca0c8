pub mod action_buttons;
pub mod color_picker;
pub mod data_url_field;
pub mod square_canvas;

pub use action_buttons::{CopyButton, DownloadButton};
pub use color_picker::ColorPicker;
pub use data_url_field::DataUrlField;
pub use square_canvas::SquareCanvas;
