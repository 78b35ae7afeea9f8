//! Plaquer Core Library
//!
//! Decision core for Plaquer, an app for browsing, collecting, and
//! navigating to map-based plaque records.
//!
//! ## Overview
//!
//! The core answers two questions the UI shell keeps asking:
//!
//! - **"The user tapped a plaque, what happens?"** The
//!   [`NavigationResolver`] maps the originating screen
//!   ([`PresentationContext`]) to a [`NavigationMode`] and either invokes
//!   the caller's inline-overlay callback or hands a canonical location to
//!   the injected [`NavigationHost`].
//! - **"How wide is the display right now?"** The [`ViewportClassifier`]
//!   folds resize signals into a compact/medium/expanded
//!   [`ViewportClass`] and notifies subscribers synchronously.
//!
//! Everything host-specific (router, window manager, vibration motor,
//! connectivity signal) sits behind small capability traits, so the whole
//! crate runs in plain unit tests.
//!
//! ## Quick Start
//!
//! ```
//! use plaquer_core::{mode_for_context, NavigationMode, PresentationContext};
//!
//! let context = PresentationContext::from_tag("map");
//! assert_eq!(mode_for_context(context), NavigationMode::Modal);
//! ```

pub mod connectivity;
pub mod error;
pub mod haptics;
pub mod location;
pub mod navigation;
mod observers;
pub mod store;
pub mod types;
pub mod viewport;

// Re-exports
pub use connectivity::{Connectivity, ConnectivitySubscription, ConnectivityWatcher};
pub use error::{PlaquerError, PlaquerResult};
pub use haptics::{HapticPattern, Haptics, NoVibration, VibrationHost};
pub use location::{
    canonical_location, parse_plaque_location, LocationTarget, ParsedPlaqueLocation,
};
pub use navigation::{
    mode_for_context, NavigationHost, NavigationMode, NavigationResolver, PresentationContext,
};
pub use store::PlaqueStore;
pub use types::*;
pub use viewport::{
    touch_target_size, SafeAreaInsets, ViewportClass, ViewportClassifier, ViewportSubscription,
    MIN_TOUCH_TARGET,
};
