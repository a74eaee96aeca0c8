//! Query parameter resolution.
//!
//! Resolves the optional `color` and `size` parameters (and the
//! `autocopydataurl` flag) against the built-in defaults. The parameters
//! arrive already decoded in a [`RawQuery`]; reading them out of the page
//! URL is the UI crate's job.

use crate::config::SquareConfig;
use thiserror::Error;

/// Decoded query parameters from the page URL.
///
/// `auto_copy` is presence-only: any value (including empty) counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub color: Option<String>,
    pub size: Option<String>,
    pub auto_copy: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum SizeError {
    #[error("size is not a number: {0:?}")]
    NotANumber(String),

    #[error("size must be positive, got {0}")]
    NotPositive(f64),
}

/// Resolve the fill color: the `color` parameter if present, else the
/// configured default. No validation; invalid values pass through.
pub fn resolve_color(query: &RawQuery, config: &SquareConfig) -> String {
    query
        .color
        .clone()
        .unwrap_or_else(|| config.default_color.to_string())
}

/// Resolve the square size: the `size` parameter if present, else the
/// configured default, parsed as a decimal number and ceiling-rounded.
pub fn resolve_size(query: &RawQuery, config: &SquareConfig) -> Result<u32, SizeError> {
    parse_size(query.size.as_deref().unwrap_or(config.default_size))
}

/// Parse a size string to pixels.
///
/// Parses the whole string as a decimal number, then rounds up, so
/// fractional sizes like "199.4" become 200. Trailing garbage is an error
/// rather than a truncated parse.
pub fn parse_size(raw: &str) -> Result<u32, SizeError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SizeError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(SizeError::NotANumber(raw.to_string()));
    }
    let size = value.ceil();
    if size <= 0.0 {
        return Err(SizeError::NotPositive(value));
    }
    Ok(size as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    fn query_with(color: Option<&str>, size: Option<&str>) -> RawQuery {
        RawQuery {
            color: color.map(String::from),
            size: size.map(String::from),
            auto_copy: false,
        }
    }

    #[test]
    fn color_param_passes_through() {
        let query = query_with(Some("00FF00"), None);
        assert_eq!(resolve_color(&query, default_config()), "00FF00");
    }

    #[test]
    fn color_falls_back_to_default() {
        let query = RawQuery::default();
        assert_eq!(resolve_color(&query, default_config()), "FF6F61");
    }

    #[test]
    fn invalid_color_is_not_rejected() {
        // No hex validation by design; the renderer normalizes, nothing more.
        let query = query_with(Some("not-a-color"), None);
        assert_eq!(resolve_color(&query, default_config()), "not-a-color");
    }

    #[test]
    fn size_param_parses() {
        let query = query_with(None, Some("250"));
        assert_eq!(resolve_size(&query, default_config()), Ok(250));
    }

    #[test]
    fn size_falls_back_to_default() {
        let query = RawQuery::default();
        assert_eq!(resolve_size(&query, default_config()), Ok(200));
    }

    #[test]
    fn fractional_size_rounds_up() {
        assert_eq!(parse_size("199.4"), Ok(200));
        assert_eq!(parse_size("199.0"), Ok(199));
    }

    #[test]
    fn unparseable_size_is_an_error() {
        assert_eq!(
            parse_size("abc"),
            Err(SizeError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_size(""), Err(SizeError::NotANumber(String::new())));
        assert_eq!(
            parse_size("200px"),
            Err(SizeError::NotANumber("200px".to_string()))
        );
    }

    #[test]
    fn non_positive_size_is_an_error() {
        assert_eq!(parse_size("0"), Err(SizeError::NotPositive(0.0)));
        assert_eq!(parse_size("-3"), Err(SizeError::NotPositive(-3.0)));
    }

    #[test]
    fn nan_size_is_an_error() {
        assert!(matches!(parse_size("NaN"), Err(SizeError::NotANumber(_))));
        assert!(matches!(parse_size("inf"), Err(SizeError::NotANumber(_))));
    }
}
