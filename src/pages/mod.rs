//! Page components for Plaquer.

mod collection_view;
mod discover;
mod library;
mod map_view;
mod plaque_detail;
mod route_view;

pub use collection_view::CollectionView;
pub use discover::Discover;
pub use library::Library;
pub use map_view::MapView;
pub use plaque_detail::{PlaqueDetail, PlaqueWindow, PlaqueWindowProps};
pub use route_view::RouteView;
