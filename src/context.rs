//! Shared context for the Plaquer shell.
//!
//! Provides the store, viewport classifier, connectivity watcher, and
//! haptics to all components via use_context, plus the desktop-backed
//! [`NavigationHost`] implementation.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page or component
//! let store = use_store();
//! let resolver = use_resolver();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;

use plaquer_core::{
    parse_plaque_location, ConnectivityWatcher, Haptics, NavigationHost, NavigationResolver,
    PlaqueId, PlaqueStore, SafeAreaInsets, ViewportClass,
};

use crate::app::Route;

/// Hook to access the plaque store from context.
pub fn use_store() -> Signal<PlaqueStore> {
    use_context::<Signal<PlaqueStore>>()
}

/// Hook to access the reactive viewport class.
///
/// Re-renders the caller whenever the classification changes.
pub fn use_viewport_class() -> Signal<ViewportClass> {
    use_context::<Signal<ViewportClass>>()
}

/// Hook to access the connectivity watcher.
pub fn use_connectivity() -> Signal<ConnectivityWatcher> {
    use_context::<Signal<ConnectivityWatcher>>()
}

/// Hook to access the haptics trigger.
pub fn use_haptics() -> Signal<Haptics> {
    use_context::<Signal<Haptics>>()
}

/// Hook to access the display safe-area insets.
pub fn use_safe_area() -> Signal<SafeAreaInsets> {
    use_context::<Signal<SafeAreaInsets>>()
}

/// Plaque currently shown in the inline overlay, if any.
///
/// Set by the navigation resolver's modal callback; cleared when the
/// overlay closes. Rendered from the navigation header so the overlay
/// works on every page.
pub fn use_plaque_modal() -> Signal<Option<PlaqueId>> {
    use_context::<Signal<Option<PlaqueId>>>()
}

/// Hook to build a [`NavigationResolver`] bound to the desktop host.
///
/// Must be called under the router.
pub fn use_resolver() -> NavigationResolver {
    let navigator = use_navigator();
    let origin = crate::launch_options().origin;
    NavigationResolver::new(Rc::new(DesktopNavigationHost::new(navigator, origin)))
}

/// NavigationHost backed by the desktop router and window manager.
pub struct DesktopNavigationHost {
    navigator: Navigator,
    origin: String,
}

impl DesktopNavigationHost {
    pub fn new(navigator: Navigator, origin: String) -> Self {
        Self { navigator, origin }
    }
}

impl NavigationHost for DesktopNavigationHost {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate(&self, location: &str) {
        match parse_plaque_location(location) {
            Some(parsed) => {
                self.navigator.push(Route::PlaqueDetail {
                    id: parsed.plaque_id.value(),
                });
            }
            None => tracing::warn!(%location, "not a plaque location, ignoring navigation"),
        }
    }

    fn open_new_tab(&self, location: &str) {
        match parse_plaque_location(location) {
            Some(parsed) => open_plaque_window(parsed.plaque_id.value()),
            None => tracing::warn!(%location, "not a plaque location, ignoring auxiliary view"),
        }
    }
}

/// Open a plaque in its own desktop window.
///
/// The desktop analog of a browser tab: the current window's navigation
/// state is untouched.
fn open_plaque_window(id: u64) {
    use dioxus::desktop::{window, Config, LogicalSize, WindowBuilder};

    use crate::pages::{PlaqueWindow, PlaqueWindowProps};

    tracing::debug!(plaque_id = id, "opening auxiliary plaque window");

    let dom = VirtualDom::new_with_props(PlaqueWindow, PlaqueWindowProps { id });
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("Plaquer - plaque {id}"))
            .with_inner_size(LogicalSize::new(520.0, 720.0)),
    );
    let _ = window().new_window(dom, config);
}
