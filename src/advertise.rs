use tracing::trace;

use crate::codec::Codec;
use crate::config::ShortenerConfig;
use crate::error::Result;
use crate::resource::Resource;

/// Builds the canonical short link for a full identifier.
///
/// The identifier is cut to its last `floor(token_length * 1.5)` characters
/// (the same suffix the resolver matches on), encoded, and joined as
/// `{root_url}/{uri_prefix}/{token}`. Leading and trailing slashes of the
/// joined result are trimmed.
///
/// # Errors
///
/// Returns `MalformedInput` if the identifier's suffix is not well-formed hex.
pub fn build_short_url(full_id: &str, config: &ShortenerConfig) -> Result<String> {
    let token = Codec::from(config).token_for(full_id)?;
    Ok(compose_url(&config.root_url, config.trimmed_prefix(), &token))
}

/// Entry point for a host's page-initialized handling.
///
/// Returns `Ok(None)` for resources that opted out of short links.
///
/// # Errors
///
/// Returns `MalformedInput` if the resource identifier is not well-formed hex.
pub fn on_advertise_resource<R>(resource: &R, config: &ShortenerConfig) -> Result<Option<String>>
where
    R: Resource + ?Sized,
{
    if !resource.advertise_short_url() {
        trace!(route = resource.route(), "resource opted out of short links");
        return Ok(None);
    }
    build_short_url(resource.full_id(), config).map(Some)
}

fn compose_url(root: &str, prefix: &str, token: &str) -> String {
    format!("{}/{prefix}/{token}", root.trim_end_matches('/'))
        .trim_matches('/')
        .to_string()
}
