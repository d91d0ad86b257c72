//! Canonical and pagination URLs.
//!
//! Listing pages live under `/<segment>/<n>/`. Page 1 is canonicalized to the
//! unpaginated URL so `/strona/1/` and `/` are not indexed as duplicates.

use super::RouteState;
use crate::config::SiteConfig;

/// Canonical URL: `host + path`, minus `/<segment>/1` on the first page.
pub fn canonical_url(route: &RouteState, config: &SiteConfig) -> String {
    let host = &config.site.host;
    if route.page_number == Some(1)
        && let Some(path) = strip_first_page(&route.path, &config.seo.pagination_segment)
    {
        return format!("{host}{path}");
    }
    format!("{host}{}", route.path)
}

/// URL of listing page `n`.
pub fn page_url(n: u32, config: &SiteConfig) -> String {
    format!("{}/{}/{n}/", config.site.host, config.seo.pagination_segment)
}

/// Following page; emitted whenever a page number is known.
pub fn next_page(page: Option<u32>) -> Option<u32> {
    page.map(|n| n.saturating_add(1))
}

/// Preceding page; only for pages past the first.
pub fn prev_page(page: Option<u32>) -> Option<u32> {
    page.and_then(|n| n.checked_sub(1)).filter(|&prev| prev > 0)
}

/// Remove the first whole `/<segment>/1` from `path`.
///
/// Returns `None` when the path has no such segment (`/strona/10` does not count).
fn strip_first_page(path: &str, segment: &str) -> Option<String> {
    let needle = format!("/{segment}/1");
    let start = path.match_indices(&needle).map(|(idx, _)| idx).find(|&idx| {
        matches!(
            path[idx + needle.len()..].chars().next(),
            None | Some('/' | '?' | '#')
        )
    })?;

    let stripped = format!("{}{}", &path[..start], &path[start + needle.len()..]);
    Some(if stripped.starts_with('/') {
        stripped
    } else {
        format!("/{stripped}")
    })
}
