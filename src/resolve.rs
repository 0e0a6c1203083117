use tracing::debug;

use crate::codec::Codec;
use crate::config::ShortenerConfig;
use crate::error::Result;
use crate::path::TokenPattern;
use crate::resource::Resource;

/// HTTP status for a short link that resolved to a resource.
pub const FOUND: u16 = 302;
/// HTTP status for an unresolved short link sent to the site root.
pub const MOVED_PERMANENTLY: u16 = 301;

/// What the host should do with an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Token resolved: redirect to the resource's route.
    Found { route: String },
    /// Token did not resolve and fallback-to-home is on: redirect to the root.
    Home { location: String },
    /// Not a short-link request, or unresolved without fallback.
    PassThrough,
}

impl Decision {
    /// Redirect status to issue, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Found { .. } => Some(FOUND),
            Self::Home { .. } => Some(MOVED_PERMANENTLY),
            Self::PassThrough => None,
        }
    }

    /// Redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Found { route } => Some(route.as_str()),
            Self::Home { location } => Some(location.as_str()),
            Self::PassThrough => None,
        }
    }

    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// Resolver from short-link paths to resources.
///
/// Holds a validated config snapshot and the compiled path pattern; no other
/// state survives between calls.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ShortenerConfig,
    codec: Codec,
    pattern: TokenPattern,
}

impl Resolver {
    /// Creates a resolver for `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config fails validation or its path
    /// pattern cannot be compiled.
    pub fn new(config: ShortenerConfig) -> Result<Self> {
        config.validate()?;
        let pattern = TokenPattern::from_config(&config)?;
        let codec = Codec::from(&config);
        Ok(Self {
            config,
            codec,
            pattern,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Extracts the token if `request_path` is a short-link request.
    #[must_use]
    pub fn match_token_path<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        self.pattern.match_path(request_path)
    }

    /// Finds the resource a token points at.
    ///
    /// Decodes the token into a candidate suffix and returns the first
    /// resource, in iteration order, whose full identifier ends with it.
    /// A token that decodes to an empty candidate resolves to nothing, even
    /// though an empty string is a suffix of every identifier.
    pub fn resolve<'r, I, R>(&self, token: &str, resources: I) -> Option<&'r R>
    where
        I: IntoIterator<Item = &'r R>,
        R: Resource + ?Sized + 'r,
    {
        let candidate = self.codec.decode(token);
        debug!(token, candidate = %candidate, "decoded short token");
        find_first_match(&candidate, resources)
    }

    /// Turns a token into a redirect decision, applying fallback-to-home.
    pub fn decide<'r, I, R>(&self, token: &str, resources: I) -> Decision
    where
        I: IntoIterator<Item = &'r R>,
        R: Resource + ?Sized + 'r,
    {
        if let Some(resource) = self.resolve(token, resources) {
            debug!(token, route = resource.route(), "short token resolved");
            return Decision::Found {
                route: resource.route().to_string(),
            };
        }

        if self.config.fallback_to_home {
            let location = self.config.home_location();
            debug!(token, location = %location, "short token unresolved, redirecting home");
            Decision::Home { location }
        } else {
            debug!(token, "short token unresolved, passing through");
            Decision::PassThrough
        }
    }

    /// Entry point for a host's not-found handling.
    ///
    /// Paths that are not short-link requests pass through without touching
    /// `resources`.
    pub fn on_resolve_request<'r, I, R>(&self, request_path: &str, resources: I) -> Decision
    where
        I: IntoIterator<Item = &'r R>,
        R: Resource + ?Sized + 'r,
    {
        match self.match_token_path(request_path) {
            Some(token) => self.decide(token, resources),
            None => Decision::PassThrough,
        }
    }
}

/// Returns the first resource whose full identifier ends with `candidate`.
///
/// Collisions are settled by iteration order alone. An empty candidate
/// matches nothing.
pub fn find_first_match<'r, I, R>(candidate: &str, resources: I) -> Option<&'r R>
where
    I: IntoIterator<Item = &'r R>,
    R: Resource + ?Sized + 'r,
{
    if candidate.is_empty() {
        return None;
    }
    resources
        .into_iter()
        .find(|resource| resource.full_id().ends_with(candidate))
}
