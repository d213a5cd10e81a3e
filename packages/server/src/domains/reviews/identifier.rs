use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

lazy_static! {
    // Product page path: .../dp/B07TPWWH77/...
    static ref DP_PATH_REGEX: Regex = Regex::new(r"(?i)/dp/([A-Z0-9]{10})").unwrap();

    // Recommendation query parameter: ...&pd_rd_i=B07TPWWH77&...
    static ref RD_I_PARAM_REGEX: Regex = Regex::new(r"(?i)rd_i=([A-Z0-9]{10})").unwrap();
}

/// No product identifier could be found in a link.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no product identifier found in link")]
pub struct InvalidLinkError {
    pub link: String,
}

/// Ten-character alphanumeric product identifier (ASIN).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Extract the identifier from an arbitrary product link.
    ///
    /// The `/dp/<id>` form wins over `rd_i=<id>` when both are present.
    /// Matching is case-insensitive; the identifier is returned as matched.
    pub fn from_link(link: &str) -> Result<Self, InvalidLinkError> {
        DP_PATH_REGEX
            .captures(link)
            .or_else(|| RD_I_PARAM_REGEX.captures(link))
            .and_then(|caps| caps.get(1))
            .map(|m| ProductId(m.as_str().to_string()))
            .ok_or_else(|| InvalidLinkError {
                link: link.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
