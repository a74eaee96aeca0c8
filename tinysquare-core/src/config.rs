//! Square configuration.
//!
//! Process-wide defaults applied when the page URL carries no `color` or
//! `size` parameters. Set once at startup, immutable thereafter.

/// Configuration for the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareConfig {
    /// Default fill color as bare hex digits (no leading `#`)
    pub default_color: &'static str,
    /// Default edge length in pixels, kept as a string because it shares
    /// the parse path with the `size` query parameter
    pub default_size: &'static str,
}

impl SquareConfig {
    /// The default size parsed to pixels.
    pub fn default_size_px(&self) -> u32 {
        crate::query::parse_size(self.default_size).expect("Default size in SquareConfig must parse")
    }
}

/// The built-in configuration.
pub static SQUARE_CONFIG: SquareConfig = SquareConfig {
    default_color: "FF6F61",
    default_size: "200",
};

/// Get the active configuration.
pub fn default_config() -> &'static SquareConfig {
    &SQUARE_CONFIG
}
