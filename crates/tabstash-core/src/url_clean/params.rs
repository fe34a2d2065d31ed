//! The fixed set of tracking query parameters.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase names of query parameters that carry advertising or analytics
/// provenance rather than page content.
const TRACKING_PARAMS: &[&str] = &[
    // Google Analytics / UTM
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "utm_source_platform",
    "utm_creative_format",
    "utm_marketing_tactic",
    // Google Ads
    "gclid",
    "gclsrc",
    "dclid",
    "gbraid",
    "wbraid",
    // Facebook, Microsoft Ads, X, Instagram
    "fbclid",
    "msclkid",
    "twclid",
    "igshid",
    // Mailchimp
    "mc_cid",
    "mc_eid",
    // Google Analytics client id / linker
    "_ga",
    "_gl",
    // Spotify share
    "si",
    // Google Shopping
    "srsltid",
    // Adobe
    "s_kwcid",
    // Zanox
    "zanpid",
    // Generic referral
    "ref",
    "referrer",
    "source",
];

static STANDARD: LazyLock<TrackingParamSet> =
    LazyLock::new(|| TrackingParamSet::from_names(TRACKING_PARAMS.iter().copied()));

/// Immutable set of tracking parameter names. Membership is case-insensitive.
#[derive(Debug, Clone)]
pub struct TrackingParamSet {
    names: HashSet<String>,
}

impl TrackingParamSet {
    /// The process-wide set used by [`crate::url_clean::clean`].
    pub fn standard() -> &'static TrackingParamSet {
        &STANDARD
    }

    fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: names.into_iter().map(str::to_ascii_lowercase).collect(),
        }
    }

    /// True when `key`, lowercased, is a tracking parameter.
    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
