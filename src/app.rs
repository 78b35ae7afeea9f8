use std::rc::Rc;

use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;

use plaquer_core::{
    Connectivity, ConnectivityWatcher, Haptics, PlaqueId, PlaqueStore, SafeAreaInsets,
    ViewportClass, ViewportClassifier,
};

use crate::pages::{CollectionView, Discover, Library, MapView, PlaqueDetail, RouteView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Discover grid/list of all plaques
/// - `/map` - Map view with tappable pins
/// - `/library` - Collected plaques, collections, and routes
/// - `/library/collections/:id` - A single collection
/// - `/library/routes/:id` - A single walking route
/// - `/plaque/:id` - Full page for one plaque (the canonical location path)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Discover {},
    #[route("/map")]
    MapView {},
    #[route("/library")]
    Library {},
    #[route("/library/collections/:id")]
    CollectionView { id: String },
    #[route("/library/routes/:id")]
    RouteView { id: String },
    #[route("/plaque/:id")]
    PlaqueDetail { id: u64 },
}

/// Root application component.
///
/// Provides global styles, the shared store/classifier/watcher context, and
/// routing. Also bridges window resize events into the viewport classifier.
#[component]
pub fn App() -> Element {
    let options = crate::launch_options();

    let store = use_signal(PlaqueStore::seeded);
    let viewport = use_signal(|| ViewportClassifier::new(options.window_width));
    let haptics = use_signal(Haptics::disabled);
    let connectivity = use_signal(|| {
        ConnectivityWatcher::new(if options.offline {
            Connectivity::Offline
        } else {
            Connectivity::Online
        })
    });
    let insets = use_signal(SafeAreaInsets::default);
    let modal_plaque: Signal<Option<PlaqueId>> = use_signal(|| None);

    // Reactive mirror of the classifier, for components that re-render on
    // class changes
    let viewport_class = use_signal(|| ViewportClass::classify(options.window_width));

    use_context_provider(|| store);
    use_context_provider(|| viewport);
    use_context_provider(|| viewport_class);
    use_context_provider(|| haptics);
    use_context_provider(|| connectivity);
    use_context_provider(|| insets);
    use_context_provider(|| modal_plaque);

    // Keep the observer guard alive for the app's lifetime; dropping it
    // would detach the observer.
    let classifier = use_hook(|| viewport.peek().clone());
    let _subscription = use_hook(|| {
        let sub = classifier.subscribe(move |class| {
            let mut mirror = viewport_class;
            mirror.set(class);
        });
        Rc::new(sub)
    });

    // Resize bridge: feed logical widths of the main window into the
    // classifier. Auxiliary plaque windows are ignored.
    let main_window_id = use_hook(|| dioxus::desktop::window().id());
    let mut scale_factor = use_signal(|| dioxus::desktop::window().scale_factor());
    use_wry_event_handler(move |event, _target| {
        if let WryEvent::WindowEvent {
            window_id, event, ..
        } = event
        {
            if *window_id != main_window_id {
                return;
            }
            match event {
                WindowEvent::Resized(size) => {
                    let width = size.to_logical::<f64>(*scale_factor.peek()).width;
                    classifier.observe_width(width);
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor: new_scale,
                    ..
                } => {
                    scale_factor.set(*new_scale);
                }
                _ => {}
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
