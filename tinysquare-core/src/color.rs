//! Color normalization.

/// Normalize a color to `#`-prefixed form.
///
/// Query parameters usually carry bare hex digits (`FF6F61`) while the
/// picker emits `#ff6f61`; the canvas wants the prefixed form either way.
/// The value is not validated; anything that is not a stripe palette id
/// is handed to the canvas as-is.
pub fn normalize_hex(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}
