pub mod advertise;
pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod path;
pub mod resolve;
pub mod resource;

pub use error::{ShortenerError, Result};
pub use config::ShortenerConfig;
pub use codec::{Codec, TOKEN_ALPHABET, derive_short_length, partial_id};
pub use path::{TokenPattern, match_token_path};
pub use resource::{Page, Resource};
pub use resolve::{Decision, Resolver, find_first_match};
pub use advertise::{build_short_url, on_advertise_resource};

/// Hex SHA-256 identifier for content without one of its own.
#[must_use]
pub fn resource_id(input: impl AsRef<[u8]>) -> String {
    hash::resource_id(input)
}
