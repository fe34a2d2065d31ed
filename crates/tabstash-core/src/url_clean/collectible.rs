//! Pages that cannot be collected.

/// Prefixes of internal browser pages, extension pages and `about:` pages.
const UNCOLLECTIBLE_PREFIXES: &[&str] = &["chrome://", "chrome-extension://", "about:"];

/// Returns false for an empty string or a page whose URL starts with one of
/// the browser-internal prefixes. The test is case-sensitive and runs on the
/// raw URL, before any cleaning.
pub fn is_collectible(raw: &str) -> bool {
    !raw.is_empty()
        && !UNCOLLECTIBLE_PREFIXES
            .iter()
            .any(|prefix| raw.starts_with(prefix))
}
