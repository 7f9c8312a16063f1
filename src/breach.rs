//! Breach corpus lookup over the k-anonymity range protocol.
//!
//! The core only ever exposes the first 5 hex characters of the password's
//! SHA-1 digest; the service answers with every known suffix under that
//! prefix and the match is resolved locally.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

const HIBP_BASE_URL: &str = "https://api.pwnedpasswords.com";

/// Length of the digest prefix sent over the wire.
const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("breach lookup request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("breach lookup returned status {0}")]
    Unavailable(StatusCode),
}

/// Uppercase SHA-1 hex digest of the password, split into the 5-character
/// range-query prefix and the 35-character suffix matched locally.
pub fn hash_prefix_suffix(password: &SecretString) -> (String, String) {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let hex = hex::encode_upper(digest);
    let suffix = hex[PREFIX_LEN..].to_string();
    let mut prefix = hex;
    prefix.truncate(PREFIX_LEN);
    (prefix, suffix)
}

/// Finds the occurrence count for `suffix` in a `SUFFIX:COUNT` range
/// response. Unknown suffixes and malformed lines count as zero.
fn parse_range_response(body: &str, suffix: &str) -> u64 {
    body.lines()
        .filter_map(|line| line.trim().split_once(':'))
        .find(|(s, _)| s.eq_ignore_ascii_case(suffix))
        .and_then(|(_, count)| count.trim().parse().ok())
        .unwrap_or(0)
}

/// Source of breach occurrence counts.
///
/// A count of zero means "not found in any known breach"; service failures
/// surface as [`BreachError`] instead, so callers can tell the two apart.
#[allow(async_fn_in_trait)]
pub trait BreachOracle {
    async fn breach_count(&self, password: &SecretString) -> Result<u64, BreachError>;
}

/// Client for the Have I Been Pwned range API.
pub struct HibpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    pub fn new() -> Self {
        Self::with_base_url(HIBP_BASE_URL)
    }

    /// Overrides the service base URL (used to point tests at a stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        HibpClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HibpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BreachOracle for HibpClient {
    async fn breach_count(&self, password: &SecretString) -> Result<u64, BreachError> {
        let (prefix, suffix) = hash_prefix_suffix(password);
        let url = format!("{}/range/{}", self.base_url, prefix);

        let res = self.http.get(&url).send().await?;
        if !res.status().is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = %res.status(), "breach range query failed");
            return Err(BreachError::Unavailable(res.status()));
        }

        let body = res.text().await?;
        Ok(parse_range_response(&body, &suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_known_sha1_split() {
        // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        let (prefix, suffix) = hash_prefix_suffix(&secret("password"));
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_split_lengths() {
        let (prefix, suffix) = hash_prefix_suffix(&secret("anything at all"));
        assert_eq!(prefix.len(), 5);
        assert_eq!(suffix.len(), 35);
        assert!(prefix.chars().chain(suffix.chars()).all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_range_response_found() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471\r\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:1";
        assert_eq!(
            parse_range_response(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"),
            3730471
        );
    }

    #[test]
    fn test_parse_range_response_not_found() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1";
        assert_eq!(
            parse_range_response(body, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
            0
        );
    }

    #[test]
    fn test_parse_range_response_malformed_lines_are_skipped() {
        let body = "not a pair\nAAAA:\nBBBB:12";
        assert_eq!(parse_range_response(body, "BBBB"), 12);
        assert_eq!(parse_range_response(body, "AAAA"), 0);
    }
}
