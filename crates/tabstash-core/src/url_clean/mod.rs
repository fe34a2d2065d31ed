//! URL cleaning: tracking-parameter removal and the collectibility check.
//!
//! Cleaning is all-or-nothing. A string that parses as an absolute URL comes
//! back with every tracking parameter removed; anything else comes back
//! unchanged.

mod collectible;
mod params;

pub use collectible::is_collectible;
pub use params::TrackingParamSet;

use url::{form_urlencoded, Url};

/// Removes tracking parameters from `raw` using the standard parameter set.
///
/// # Examples
///
/// - `clean("https://shop.example.com/item?id=5&utm_source=fb&ref=abc")` → `"https://shop.example.com/item?id=5"`
/// - `clean("https://a.example.com/?utm_source=x")` → `"https://a.example.com/"`
/// - `clean("not a url")` → `"not a url"`
pub fn clean(raw: &str) -> String {
    clean_with(raw, TrackingParamSet::standard())
}

/// Same as [`clean`] with an explicit parameter set.
pub fn clean_with(raw: &str, params: &TrackingParamSet) -> String {
    let mut url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            tracing::trace!(raw, error = %e, "not an absolute URL; keeping as-is");
            return raw.to_string();
        }
    };

    // Decide on the surviving pairs before touching the URL.
    let (rewrite, remaining) = match url.query() {
        None => (None, 0),
        Some(query) => {
            let pairs: Vec<&str> = query.split('&').filter(|p| !p.is_empty()).collect();
            let kept: Vec<&str> = pairs
                .iter()
                .copied()
                .filter(|pair| !is_tracking_pair(pair, params))
                .collect();
            let rewrite = (kept.len() != pairs.len()).then(|| kept.join("&"));
            (rewrite, kept.len())
        }
    };

    if let Some(query) = rewrite {
        url.set_query((!query.is_empty()).then_some(query.as_str()));
    }

    let mut out: String = url.into();
    if remaining == 0 && out.ends_with('?') {
        out.pop();
    }
    out
}

/// True when the decoded key of a raw `key=value` pair is a tracking parameter.
fn is_tracking_pair(pair: &str, params: &TrackingParamSet) -> bool {
    form_urlencoded::parse(pair.as_bytes())
        .next()
        .is_some_and(|(key, _)| params.contains(&key))
}
