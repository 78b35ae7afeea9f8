//! Navigation resolution for plaque records.
//!
//! Given a tapped plaque and the presentation context it was tapped in,
//! decide whether to open an inline overlay, replace the current view, or
//! open an auxiliary view, and build the canonical location handed to the
//! host. The host's navigation primitive is injected behind
//! [`NavigationHost`] so the resolver is testable without a display.

use std::rc::Rc;

use crate::location::{canonical_location, LocationTarget};
use crate::types::{CollectionId, Plaque, PlaqueId, RouteId};

/// Which screen originated a navigation request.
///
/// Supplied by the calling UI at the moment of the request; exists only for
/// the duration of one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationContext {
    DiscoverGrid,
    DiscoverList,
    Map,
    Collection,
}

impl PresentationContext {
    /// Parse a context tag. Unknown tags yield `None`, which resolves to
    /// the modal default downstream.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "discover-grid" => Some(Self::DiscoverGrid),
            "discover-list" => Some(Self::DiscoverList),
            "map" => Some(Self::Map),
            "collection" => Some(Self::Collection),
            _ => None,
        }
    }

    /// Tag form of this context
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::DiscoverGrid => "discover-grid",
            Self::DiscoverList => "discover-list",
            Self::Map => "map",
            Self::Collection => "collection",
        }
    }

    /// Navigation mode for a plaque tapped in this context.
    ///
    /// Grid and list taps open an auxiliary view so the browsing position
    /// survives; map and collection taps stay inline to keep the map
    /// viewport and the scroll position.
    pub fn navigation_mode(&self) -> NavigationMode {
        match self {
            Self::DiscoverGrid | Self::DiscoverList => NavigationMode::NewTab,
            Self::Map | Self::Collection => NavigationMode::Modal,
        }
    }
}

/// How a plaque should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Inline overlay via the caller's callback
    #[default]
    Modal,
    /// Replace the current view
    Url,
    /// Open an auxiliary view, leaving the current view untouched
    NewTab,
}

impl NavigationMode {
    /// Parse a mode tag. Total: unrecognized input falls through to the
    /// modal default. This is deliberate fallback behaviour, not an
    /// oversight; do not tighten it into an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "url" => Self::Url,
            "new-tab" => Self::NewTab,
            _ => Self::Modal,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Url => "url",
            Self::NewTab => "new-tab",
        }
    }
}

/// Resolve the navigation mode for an optional presentation context.
///
/// `None` (an unrecognized or absent context tag) maps to the safe modal
/// default.
pub fn mode_for_context(context: Option<PresentationContext>) -> NavigationMode {
    context.map(|c| c.navigation_mode()).unwrap_or_default()
}

/// Navigation capabilities provided by the host environment.
///
/// The desktop shell backs this with the router and window manager; tests
/// back it with an in-memory recorder. Implementations run on the single
/// UI thread.
pub trait NavigationHost {
    /// Origin spliced into canonical locations, e.g. `https://plaquer.app`.
    /// Queried at call time so deployments can rebase links.
    fn origin(&self) -> String;

    /// Replace the current view with the given location
    fn navigate(&self, location: &str);

    /// Open the location in an auxiliary view; the current view's
    /// navigation state is not affected
    fn open_new_tab(&self, location: &str);
}

/// Decides, per navigation request, how a plaque is presented.
///
/// Stateless beyond the injected host; every call is a single synchronous
/// decision.
#[derive(Clone)]
pub struct NavigationResolver {
    host: Rc<dyn NavigationHost>,
}

impl NavigationResolver {
    pub fn new(host: Rc<dyn NavigationHost>) -> Self {
        Self { host }
    }

    /// Resolve one navigation request for `plaque`.
    ///
    /// `Url` replaces the current view and `NewTab` opens an auxiliary one,
    /// both via the host primitive. `Modal` hands the plaque to `on_modal`
    /// when supplied and is otherwise a silent no-op. Never fails.
    pub fn resolve(
        &self,
        plaque: &Plaque,
        mode: NavigationMode,
        on_modal: Option<&dyn Fn(&Plaque)>,
    ) {
        match mode {
            NavigationMode::Url => {
                let location = self.plaque_location(plaque.id);
                tracing::debug!(plaque_id = %plaque.id, %location, "replacing current view");
                self.host.navigate(&location);
            }
            NavigationMode::NewTab => {
                let location = self.plaque_location(plaque.id);
                tracing::debug!(plaque_id = %plaque.id, %location, "opening auxiliary view");
                self.host.open_new_tab(&location);
            }
            NavigationMode::Modal => match on_modal {
                Some(open) => open(plaque),
                None => {
                    tracing::debug!(plaque_id = %plaque.id, "modal requested without handler, ignoring")
                }
            },
        }
    }

    /// Resolve using the mode mapped from the presentation context.
    pub fn resolve_in_context(
        &self,
        plaque: &Plaque,
        context: Option<PresentationContext>,
        on_modal: Option<&dyn Fn(&Plaque)>,
    ) {
        self.resolve(plaque, mode_for_context(context), on_modal);
    }

    /// Canonical location for a plaque, using the host's origin
    pub fn plaque_location(&self, id: PlaqueId) -> String {
        canonical_location(&self.host.origin(), &LocationTarget::Plaque(id))
    }

    /// Canonical location for a collection
    pub fn collection_location(&self, id: &CollectionId) -> String {
        canonical_location(&self.host.origin(), &LocationTarget::Collection(id))
    }

    /// Canonical location for a route
    pub fn route_location(&self, id: &RouteId) -> String {
        canonical_location(&self.host.origin(), &LocationTarget::Route(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_context_tags_default_to_modal() {
        assert_eq!(PresentationContext::from_tag("unknown-xyz"), None);
        assert_eq!(
            mode_for_context(PresentationContext::from_tag("unknown-xyz")),
            NavigationMode::Modal
        );
    }

    #[test]
    fn context_tags_roundtrip() {
        for context in [
            PresentationContext::DiscoverGrid,
            PresentationContext::DiscoverList,
            PresentationContext::Map,
            PresentationContext::Collection,
        ] {
            assert_eq!(PresentationContext::from_tag(context.as_tag()), Some(context));
        }
    }

    #[test]
    fn mode_tags_fall_through_to_modal() {
        assert_eq!(NavigationMode::from_tag("url"), NavigationMode::Url);
        assert_eq!(NavigationMode::from_tag("new-tab"), NavigationMode::NewTab);
        assert_eq!(NavigationMode::from_tag("modal"), NavigationMode::Modal);
        assert_eq!(NavigationMode::from_tag("popup"), NavigationMode::Modal);
        assert_eq!(NavigationMode::from_tag(""), NavigationMode::Modal);
    }
}
