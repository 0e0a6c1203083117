use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::{debug, warn};

use crate::config::ShortenerConfig;
use crate::error::{Result, ShortenerError};

/// The 64 symbols a short token may contain.
pub const TOKEN_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Accepts unpadded input and ignores the sub-byte remainder of a cut group.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Number of identifier characters a token of `token_length` represents.
///
/// This is `floor(token_length * 1.5)`.
#[must_use]
pub const fn derive_short_length(token_length: usize) -> usize {
    token_length * 3 / 2
}

/// Returns the last `short_length` characters of `full_id`.
///
/// Identifiers shorter than `short_length` are returned whole.
#[must_use]
pub fn partial_id(full_id: &str, short_length: usize) -> &str {
    if short_length == 0 {
        return "";
    }
    let start = full_id
        .char_indices()
        .rev()
        .nth(short_length - 1)
        .map_or(0, |(index, _)| index);
    &full_id[start..]
}

/// Returns true if `c` belongs to [`TOKEN_ALPHABET`].
#[must_use]
pub const fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Encoder/decoder bound to one token length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    token_length: usize,
}

impl Codec {
    #[must_use]
    pub const fn new(token_length: usize) -> Self {
        Self { token_length }
    }

    #[must_use]
    pub const fn token_length(&self) -> usize {
        self.token_length
    }

    #[must_use]
    pub const fn short_length(&self) -> usize {
        derive_short_length(self.token_length)
    }

    /// The suffix of `full_id` that tokens of this length encode.
    #[must_use]
    pub fn partial_id<'a>(&self, full_id: &'a str) -> &'a str {
        partial_id(full_id, self.short_length())
    }

    /// Encodes a hex suffix into a token of at most `token_length` characters.
    ///
    /// The padded encoding is cut to `token_length`, so `=` only survives when
    /// the input is too short to fill the token.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if `partial_id` has odd length or contains
    /// non-hex characters.
    pub fn encode(&self, partial_id: &str) -> Result<String> {
        let bytes = hex::decode(partial_id).map_err(|e| {
            warn!(partial_id, error = %e, "refusing to encode non-hex identifier suffix");
            ShortenerError::malformed(partial_id, e)
        })?;

        let mut token = URL_SAFE.encode(bytes);
        token.truncate(self.token_length);
        Ok(token)
    }

    /// Encodes the suffix of a full identifier.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if the suffix is not well-formed hex.
    pub fn token_for(&self, full_id: &str) -> Result<String> {
        self.encode(self.partial_id(full_id))
    }

    /// Decodes a token into a candidate identifier suffix.
    ///
    /// Never fails. `+` and `/` are read as `-` and `_`, other symbols outside
    /// the alphabet are skipped, and a dangling symbol that cannot complete a
    /// byte is dropped. The hex result is cut to [`Codec::short_length`].
    #[must_use]
    pub fn decode(&self, token: &str) -> String {
        let mut symbols: String = token.chars().filter_map(url_safe_symbol).collect();
        if symbols.len() % 4 == 1 {
            symbols.pop();
        }

        let bytes = LENIENT.decode(&symbols).unwrap_or_else(|e| {
            debug!(token, error = %e, "token did not decode, using empty candidate");
            Vec::new()
        });

        let mut candidate = hex::encode(bytes);
        candidate.truncate(self.short_length());
        candidate
    }
}

impl From<&ShortenerConfig> for Codec {
    fn from(config: &ShortenerConfig) -> Self {
        Self::new(config.token_length)
    }
}

fn url_safe_symbol(c: char) -> Option<char> {
    match c {
        '+' => Some('-'),
        '/' => Some('_'),
        c if is_token_char(c) => Some(c),
        _ => None,
    }
}
