//! Navigation resolution integration tests
//!
//! Drives the resolver against an in-memory recording host and verifies
//! the context-to-mode policy, the canonical locations handed to the host,
//! and the silent modal no-op.

use std::cell::RefCell;
use std::rc::Rc;

use plaquer_core::{
    mode_for_context, CollectionId, NavigationHost, NavigationMode, NavigationResolver, Plaque,
    PlaqueColour, PlaqueId, PresentationContext, RouteId,
};

// ============================================================================
// Recording Host
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Navigate(String),
    OpenNewTab(String),
}

#[derive(Default)]
struct RecordingHost {
    calls: RefCell<Vec<HostCall>>,
}

impl NavigationHost for RecordingHost {
    fn origin(&self) -> String {
        "https://plaquer.app".to_string()
    }

    fn navigate(&self, location: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::Navigate(location.to_string()));
    }

    fn open_new_tab(&self, location: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::OpenNewTab(location.to_string()));
    }
}

fn test_plaque(id: u64) -> Plaque {
    Plaque {
        id: PlaqueId::new(id),
        title: "Ada Lovelace".to_string(),
        inscription: "Pioneer of computing lived here.".to_string(),
        colour: PlaqueColour::Blue,
        latitude: 51.51,
        longitude: -0.14,
        erected: Some(1992),
        area: Some("St James's".to_string()),
    }
}

fn resolver_with_host() -> (NavigationResolver, Rc<RecordingHost>) {
    let host = Rc::new(RecordingHost::default());
    (NavigationResolver::new(host.clone()), host)
}

// ============================================================================
// Context Policy
// ============================================================================

#[test]
fn test_context_to_mode_table() {
    let cases = [
        ("discover-grid", NavigationMode::NewTab),
        ("discover-list", NavigationMode::NewTab),
        ("map", NavigationMode::Modal),
        ("collection", NavigationMode::Modal),
        ("unknown-xyz", NavigationMode::Modal),
        ("", NavigationMode::Modal),
    ];

    for (tag, expected) in cases {
        assert_eq!(
            mode_for_context(PresentationContext::from_tag(tag)),
            expected,
            "context tag {tag:?}"
        );
    }
}

#[test]
fn test_grid_tap_opens_auxiliary_view() {
    let (resolver, host) = resolver_with_host();
    let plaque = test_plaque(42);

    resolver.resolve_in_context(&plaque, Some(PresentationContext::DiscoverGrid), None);

    assert_eq!(
        *host.calls.borrow(),
        vec![HostCall::OpenNewTab(
            "https://plaquer.app/plaque/42".to_string()
        )]
    );
}

#[test]
fn test_map_tap_opens_modal_not_navigation() {
    let (resolver, host) = resolver_with_host();
    let plaque = test_plaque(7);
    let opened: Rc<RefCell<Vec<PlaqueId>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&opened);
    let on_modal = move |p: &Plaque| sink.borrow_mut().push(p.id);
    resolver.resolve_in_context(&plaque, Some(PresentationContext::Map), Some(&on_modal));

    assert_eq!(*opened.borrow(), vec![PlaqueId::new(7)]);
    assert!(host.calls.borrow().is_empty(), "modal must not touch the host");
}

// ============================================================================
// Resolve Modes
// ============================================================================

#[test]
fn test_url_mode_replaces_current_view() {
    let (resolver, host) = resolver_with_host();

    resolver.resolve(&test_plaque(3), NavigationMode::Url, None);

    assert_eq!(
        *host.calls.borrow(),
        vec![HostCall::Navigate("https://plaquer.app/plaque/3".to_string())]
    );
}

#[test]
fn test_modal_without_handler_is_silent_noop() {
    let (resolver, host) = resolver_with_host();

    // No callback supplied: no navigation, no panic
    resolver.resolve(&test_plaque(1), NavigationMode::Modal, None);

    assert!(host.calls.borrow().is_empty());
}

#[test]
fn test_default_mode_is_modal() {
    let (resolver, host) = resolver_with_host();
    let plaque = test_plaque(5);
    let opened = RefCell::new(0);

    let on_modal = |_: &Plaque| *opened.borrow_mut() += 1;
    resolver.resolve(&plaque, NavigationMode::default(), Some(&on_modal));

    assert_eq!(*opened.borrow(), 1);
    assert!(host.calls.borrow().is_empty());
}

// ============================================================================
// Locations via Host Origin
// ============================================================================

#[test]
fn test_locations_use_host_origin() {
    let (resolver, _host) = resolver_with_host();

    assert_eq!(
        resolver.plaque_location(PlaqueId::new(42)),
        "https://plaquer.app/plaque/42"
    );
    assert_eq!(
        resolver.collection_location(&CollectionId::new("scientists")),
        "https://plaquer.app/library/collections/scientists"
    );
    assert_eq!(
        resolver.route_location(&RouteId::new("west-end-walk")),
        "https://plaquer.app/library/routes/west-end-walk"
    );
}
