//! Page URL query adapter.
//!
//! Reads the current page's query string into a [`RawQuery`] for the pure
//! resolver. The browser's `URLSearchParams` does the decoding; absence of
//! a window or location yields an empty query.

use tinysquare_core::RawQuery;
use web_sys::UrlSearchParams;

/// Read the query parameters from `window.location.search`.
pub fn read_query() -> RawQuery {
    let Some(search) = page_search() else {
        return RawQuery::default();
    };
    match UrlSearchParams::new_with_str(&search) {
        Ok(params) => raw_query_from_params(&params),
        Err(_) => RawQuery::default(),
    }
}

/// Extract the parameters tinysquare cares about.
///
/// `autocopydataurl` is presence-only: `has`, not `get`, so an empty value
/// still counts.
pub fn raw_query_from_params(params: &UrlSearchParams) -> RawQuery {
    RawQuery {
        color: params.get("color"),
        size: params.get("size"),
        auto_copy: params.has("autocopydataurl"),
    }
}

fn page_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}
