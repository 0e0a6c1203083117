use crate::hash::resource_id;

/// An addressable item that short links can point at.
///
/// The crate only reads from resources; hosts own them and decide how they
/// are enumerated.
pub trait Resource {
    /// Stable, hex-like unique identifier.
    fn full_id(&self) -> &str;

    /// Location a resolved short link redirects to.
    fn route(&self) -> &str;

    /// Whether a short link should be advertised for this resource.
    fn advertise_short_url(&self) -> bool {
        true
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    fn full_id(&self) -> &str {
        (**self).full_id()
    }

    fn route(&self) -> &str {
        (**self).route()
    }

    fn advertise_short_url(&self) -> bool {
        (**self).advertise_short_url()
    }
}

/// Plain resource record for hosts without their own page type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub route: String,
    pub advertise: bool,
}

impl Page {
    pub fn new(id: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            route: route.into(),
            advertise: true,
        }
    }

    /// Builds a page whose identifier is derived from its route.
    pub fn from_route(route: impl Into<String>) -> Self {
        let route = route.into();
        Self::new(resource_id(&route), route)
    }

    #[must_use]
    pub const fn advertise(mut self, enabled: bool) -> Self {
        self.advertise = enabled;
        self
    }
}

impl Resource for Page {
    fn full_id(&self) -> &str {
        &self.id
    }

    fn route(&self) -> &str {
        &self.route
    }

    fn advertise_short_url(&self) -> bool {
        self.advertise
    }
}
