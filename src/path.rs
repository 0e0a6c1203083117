use regex::Regex;
use tracing::trace;

use crate::config::ShortenerConfig;
use crate::error::{Result, ShortenerError};

/// Compiled shape of an inbound short-link path.
///
/// Matches `/{uri_prefix}/{token}` with an optional trailing slash, where the
/// token is exactly `token_length` symbols from the token alphabet.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
    token_length: usize,
}

impl TokenPattern {
    /// Compiles the pattern for a prefix and token length.
    ///
    /// Leading and trailing slashes on `uri_prefix` are ignored and the
    /// remainder is matched literally.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `token_length` is zero or the pattern cannot
    /// be compiled (for example when `token_length` exceeds the regex size limit).
    pub fn new(uri_prefix: &str, token_length: usize) -> Result<Self> {
        if token_length == 0 {
            return Err(ShortenerError::config("token_length", "must be positive"));
        }

        let prefix = regex::escape(uri_prefix.trim_matches('/'));
        let pattern = format!(r"^/{prefix}/([0-9a-zA-Z_-]{{{token_length}}})/?$");
        let regex = Regex::new(&pattern).map_err(|e| ShortenerError::config("uri_prefix", e))?;

        Ok(Self {
            regex,
            token_length,
        })
    }

    /// Compiles the pattern described by `config`.
    ///
    /// # Errors
    ///
    /// See [`TokenPattern::new`].
    pub fn from_config(config: &ShortenerConfig) -> Result<Self> {
        Self::new(&config.uri_prefix, config.token_length)
    }

    #[must_use]
    pub const fn token_length(&self) -> usize {
        self.token_length
    }

    /// Extracts the token from `request_path`, or `None` if the path is not
    /// a short-link request.
    #[must_use]
    pub fn match_path<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        let token = self
            .regex
            .captures(request_path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        if token.is_none() {
            trace!(request_path, "path is not a short-link request");
        }
        token
    }

    #[must_use]
    pub fn is_match(&self, request_path: &str) -> bool {
        self.regex.is_match(request_path)
    }
}

/// One-shot form of [`TokenPattern::match_path`].
///
/// An invalid prefix or length is treated the same as a non-matching path.
#[must_use]
pub fn match_token_path<'a>(
    request_path: &'a str,
    uri_prefix: &str,
    token_length: usize,
) -> Option<&'a str> {
    TokenPattern::new(uri_prefix, token_length)
        .ok()?
        .match_path(request_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Accepted shapes ==========

    #[test]
    fn test_match_simple() {
        assert_eq!(match_token_path("/s/obLD1OX2", "s", 8), Some("obLD1OX2"));
    }

    #[test]
    fn test_match_trailing_slash() {
        assert_eq!(match_token_path("/s/obLD1OX2/", "s", 8), Some("obLD1OX2"));
    }

    #[test]
    fn test_match_url_safe_symbols() {
        assert_eq!(match_token_path("/s/-__-ab09", "s", 8), Some("-__-ab09"));
    }

    #[test]
    fn test_match_prefix_with_slashes_configured() {
        assert_eq!(match_token_path("/s/obLD1OX2", "/s/", 8), Some("obLD1OX2"));
    }

    #[test]
    fn test_match_multi_segment_prefix() {
        assert_eq!(match_token_path("/go/to/obLD", "go/to", 4), Some("obLD"));
    }

    // ========== Rejected shapes ==========

    #[test]
    fn test_reject_wrong_length() {
        assert_eq!(match_token_path("/shortprefix/ABC", "shortprefix", 8), None);
        assert_eq!(match_token_path("/s/obLD1OX2a", "s", 8), None);
    }

    #[test]
    fn test_reject_wrong_prefix() {
        assert_eq!(match_token_path("/x/obLD1OX2", "s", 8), None);
        assert_eq!(match_token_path("/ss/obLD1OX2", "s", 8), None);
    }

    #[test]
    fn test_reject_wrong_segment_count() {
        assert_eq!(match_token_path("/obLD1OX2", "s", 8), None);
        assert_eq!(match_token_path("/s/obLD1OX2/extra", "s", 8), None);
        assert_eq!(match_token_path("/a/s/obLD1OX2", "s", 8), None);
        assert_eq!(match_token_path("/s//obLD1OX2", "s", 8), None);
    }

    #[test]
    fn test_reject_missing_leading_slash() {
        assert_eq!(match_token_path("s/obLD1OX2", "s", 8), None);
    }

    #[test]
    fn test_reject_foreign_symbols() {
        assert_eq!(match_token_path("/s/obLD+OX2", "s", 8), None);
        assert_eq!(match_token_path("/s/obLD=OX2", "s", 8), None);
        assert_eq!(match_token_path("/s/obLD.OX2", "s", 8), None);
    }

    #[test]
    fn test_reject_double_trailing_slash() {
        assert_eq!(match_token_path("/s/obLD1OX2//", "s", 8), None);
    }

    #[test]
    fn test_prefix_is_literal() {
        // A dot in the prefix must not match arbitrary characters
        assert_eq!(match_token_path("/s.x/obLD", "s.x", 4), Some("obLD"));
        assert_eq!(match_token_path("/sax/obLD", "s.x", 4), None);
    }

    #[test]
    fn test_zero_length_never_matches() {
        assert_eq!(match_token_path("/s/", "s", 0), None);
        assert!(TokenPattern::new("s", 0).is_err());
    }

    // ========== TokenPattern ==========

    #[test]
    fn test_pattern_from_config() {
        let config = ShortenerConfig::new("go").token_length(4);
        let pattern = TokenPattern::from_config(&config).unwrap();
        assert_eq!(pattern.token_length(), 4);
        assert!(pattern.is_match("/go/obLD"));
        assert!(!pattern.is_match("/go/obLD1OX2"));
    }

    #[test]
    fn test_pattern_reusable() {
        let pattern = TokenPattern::new("s", 8).unwrap();
        assert_eq!(pattern.match_path("/s/obLD1OX2"), Some("obLD1OX2"));
        assert_eq!(pattern.match_path("/s/________"), Some("________"));
        assert_eq!(pattern.match_path("/about"), None);
    }
}
