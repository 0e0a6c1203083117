use serde::Deserialize;
use tracing::warn;

use crate::codec::derive_short_length;
use crate::error::{Result, ShortenerError};

/// Settings for emitting and resolving short links.
///
/// Passed by value or reference into every operation; nothing in the crate
/// reads configuration from ambient state. Deserializes from a host's settings
/// file, accepting the plugin-style keys `length`, `uri`, `home_if_wrong` and
/// `root` as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShortenerConfig {
    /// Exact character count of emitted and accepted short tokens.
    #[serde(alias = "length")]
    pub token_length: usize,
    /// Path segment that short links live under, e.g. `s` for `/s/{token}`.
    #[serde(alias = "uri")]
    pub uri_prefix: String,
    /// Redirect unmatched short links to the site root instead of falling through.
    #[serde(alias = "home_if_wrong")]
    pub fallback_to_home: bool,
    /// Absolute site root used to compose advertised links and the home redirect.
    #[serde(alias = "root")]
    pub root_url: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self::new("s")
    }
}

impl ShortenerConfig {
    pub fn new(uri_prefix: impl Into<String>) -> Self {
        Self {
            token_length: 8,
            uri_prefix: uri_prefix.into(),
            fallback_to_home: false,
            root_url: String::new(),
        }
    }

    #[must_use]
    pub const fn token_length(mut self, len: usize) -> Self {
        self.token_length = len;
        self
    }

    #[must_use]
    pub const fn fallback_to_home(mut self, enabled: bool) -> Self {
        self.fallback_to_home = enabled;
        self
    }

    #[must_use]
    pub fn root_url(mut self, root: impl Into<String>) -> Self {
        self.root_url = root.into();
        self
    }

    /// Length of the identifier suffix a token stands for.
    #[must_use]
    pub const fn short_length(&self) -> usize {
        derive_short_length(self.token_length)
    }

    /// The uri prefix without leading or trailing slashes.
    #[must_use]
    pub fn trimmed_prefix(&self) -> &str {
        self.uri_prefix.trim_matches('/')
    }

    /// Where fallback-to-home redirects point. An empty root means `/`.
    #[must_use]
    pub fn home_location(&self) -> String {
        let root = self.root_url.trim_end_matches('/');
        if root.is_empty() {
            "/".to_string()
        } else {
            root.to_string()
        }
    }

    /// Checks that short-link paths built from this config can be matched.
    ///
    /// A token length whose derived short length is odd still resolves, but
    /// links for it cannot be built; that only logs a warning here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - `token_length` is zero
    /// - the uri prefix is empty or contains characters outside `[A-Za-z0-9._~/-]`
    pub fn validate(&self) -> Result<()> {
        if self.token_length == 0 {
            return Err(ShortenerError::config("token_length", "must be positive"));
        }

        let short_length = self.short_length();
        if short_length % 2 != 0 {
            warn!(
                token_length = self.token_length,
                short_length, "odd identifier suffix length, short links cannot be encoded"
            );
        }

        let prefix = self.trimmed_prefix();
        if prefix.is_empty() {
            return Err(ShortenerError::config("uri_prefix", "must not be empty"));
        }
        if !prefix.chars().all(is_path_char) {
            return Err(ShortenerError::config(
                "uri_prefix",
                format!("'{prefix}' contains characters that are not path-safe"),
            ));
        }

        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML for this struct
    /// or the parsed values fail [`ShortenerConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ShortenerError::config("toml", e))?;
        config.validate()?;
        Ok(config)
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '/')
}
