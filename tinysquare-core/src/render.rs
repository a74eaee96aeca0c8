//! Pure render commands.
//!
//! `plan` turns a [`ResolvedState`] into a [`RenderPlan`]: everything the
//! UI needs to paint the canvas and mirror the result into the readouts,
//! buttons and download action. No DOM access here; the UI crate applies
//! the plan.

use crate::color::normalize_hex;
use crate::palette::{stripe_palette, stripe_stops, StripePalette};
use crate::state::ResolvedState;
use std::fmt::Write;

/// How to fill the square.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// Solid fill with a `#`-prefixed color
    Solid(String),
    /// Horizontal stripes from a reserved palette
    Stripes(&'static StripePalette),
}

impl Fill {
    /// CSS background for the action buttons.
    ///
    /// Solid fills use the color itself; stripe palettes get a hard-stop
    /// CSS gradient built from the same band math as the canvas fill.
    pub fn css_background(&self) -> String {
        match self {
            Fill::Solid(color) => color.clone(),
            Fill::Stripes(palette) => {
                let mut css = String::from("linear-gradient(to bottom");
                for stop in stripe_stops(palette.colors) {
                    let _ = write!(css, ", {} {:.2}%", stop.color, stop.offset * 100.0);
                }
                css.push(')');
                css
            }
        }
    }
}

/// Commands for one render of the square.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Canvas width and height in pixels
    pub size: u32,
    pub fill: Fill,
    /// Text for the color readout: the normalized color, or the palette id
    pub color_label: String,
    /// Filename offered by the download action
    pub filename: String,
}

/// Derive the render plan for the resolved state.
pub fn plan(state: &ResolvedState) -> RenderPlan {
    let (fill, color_label) = match stripe_palette(&state.color) {
        Some(palette) => (Fill::Stripes(palette), palette.id.to_string()),
        None => {
            let color = normalize_hex(&state.color);
            (Fill::Solid(color.clone()), color)
        }
    };
    RenderPlan {
        size: state.size,
        filename: download_filename(&color_label, state.size),
        fill,
        color_label,
    }
}

/// Filename for the downloaded image.
pub fn download_filename(color: &str, size: u32) -> String {
    format!("tinysquare-{color}-{size}.png")
}
