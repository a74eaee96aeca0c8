//! Resolved render state.

use crate::config::SquareConfig;
use crate::query::{resolve_color, resolve_size, RawQuery, SizeError};

/// The color/size pair actually used for the current render.
///
/// Fully replaced on each resolution, never merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedState {
    pub color: String,
    pub size: u32,
}

impl ResolvedState {
    /// Resolve from query parameters. Fails only on an unusable `size`
    /// parameter; callers decide whether to surface or default that.
    pub fn from_query(query: &RawQuery, config: &SquareConfig) -> Result<Self, SizeError> {
        Ok(Self {
            color: resolve_color(query, config),
            size: resolve_size(query, config)?,
        })
    }

    /// Replace the color from picker input, keeping the current size.
    pub fn with_color(&self, color: String) -> Self {
        Self {
            color,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    #[test]
    fn resolves_both_parameters() {
        let query = RawQuery {
            color: Some("00FF00".to_string()),
            size: Some("64".to_string()),
            auto_copy: false,
        };
        let state = ResolvedState::from_query(&query, default_config()).unwrap();
        assert_eq!(state.color, "00FF00");
        assert_eq!(state.size, 64);
    }

    #[test]
    fn empty_query_resolves_to_defaults() {
        let state = ResolvedState::from_query(&RawQuery::default(), default_config()).unwrap();
        assert_eq!(state.color, "FF6F61");
        assert_eq!(state.size, 200);
    }

    #[test]
    fn bad_size_surfaces_the_error() {
        let query = RawQuery {
            color: None,
            size: Some("huge".to_string()),
            auto_copy: false,
        };
        assert!(ResolvedState::from_query(&query, default_config()).is_err());
    }

    #[test]
    fn picker_color_replaces_color_and_keeps_size() {
        let state = ResolvedState {
            color: "FF6F61".to_string(),
            size: 200,
        };
        let updated = state.with_color("#123456".to_string());
        assert_eq!(updated.color, "#123456");
        assert_eq!(updated.size, 200);
    }
}
