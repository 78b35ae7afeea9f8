//! Canonical location strings for plaques, collections, and routes.
//!
//! Locations are the one wire-visible format in Plaquer: the links users
//! copy, share as QR codes, and open from outside the app. Building and
//! parsing are pure functions over an explicit `origin` so they can be
//! exercised without a host environment, and so the same build works across
//! deployments with different base URLs.
//!
//! Formats:
//! - Plaque: `{origin}/plaque/{integer-id}`
//! - Collection: `{origin}/library/collections/{string-id}`
//! - Route: `{origin}/library/routes/{string-id}`
//!
//! Parsing never errors: anything that is not an absolute URL whose path
//! matches `/plaque/<digits>` exactly yields `None`.

use url::Url;

use crate::types::{CollectionId, PlaqueId, RouteId};

/// Path segment for plaque locations
const PLAQUE_SEGMENT: &str = "plaque";
/// Path prefix for collection and route locations
const LIBRARY_SEGMENT: &str = "library";

/// The entity a canonical location points at
#[derive(Debug, Clone, PartialEq)]
pub enum LocationTarget<'a> {
    Plaque(PlaqueId),
    Collection(&'a CollectionId),
    Route(&'a RouteId),
}

/// Build the canonical location for a target.
///
/// `origin` is supplied by the host environment at call time (it is never
/// hardcoded here); a trailing slash on the origin is tolerated.
pub fn canonical_location(origin: &str, target: &LocationTarget<'_>) -> String {
    let origin = origin.trim_end_matches('/');
    match target {
        LocationTarget::Plaque(id) => {
            format!("{origin}/{PLAQUE_SEGMENT}/{id}")
        }
        LocationTarget::Collection(id) => {
            format!("{origin}/{LIBRARY_SEGMENT}/collections/{id}")
        }
        LocationTarget::Route(id) => {
            format!("{origin}/{LIBRARY_SEGMENT}/routes/{id}")
        }
    }
}

/// A successfully parsed plaque location.
///
/// The three optional fields are query-parameter hints (`?source=`,
/// `?route=`, `?collection=`) passed through verbatim when present. They
/// are opaque breadcrumb context for the caller; nothing here validates or
/// consumes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlaqueLocation {
    pub plaque_id: PlaqueId,
    pub source: Option<String>,
    pub route: Option<String>,
    pub collection: Option<String>,
}

/// Parse a plaque location.
///
/// Returns `None` when `text` is not a syntactically valid absolute URL, or
/// when its path is not exactly `/plaque/<digits>`: no trailing segments
/// or slash, no signs, and the id must fit in a u64. Callers treat `None`
/// as "not a plaque location" and degrade gracefully.
pub fn parse_plaque_location(text: &str) -> Option<ParsedPlaqueLocation> {
    let parsed = Url::parse(text).ok()?;

    let mut segments = parsed.path_segments()?;
    if segments.next()? != PLAQUE_SEGMENT {
        return None;
    }
    let id_segment = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    if id_segment.is_empty() || !id_segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id: u64 = id_segment.parse().ok()?;

    let mut source = None;
    let mut route = None;
    let mut collection = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "source" if source.is_none() => source = Some(value.into_owned()),
            "route" if route.is_none() => route = Some(value.into_owned()),
            "collection" if collection.is_none() => collection = Some(value.into_owned()),
            _ => {}
        }
    }

    Some(ParsedPlaqueLocation {
        plaque_id: PlaqueId::new(id),
        source,
        route,
        collection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://plaquer.app";

    #[test]
    fn builds_plaque_location() {
        let location = canonical_location(ORIGIN, &LocationTarget::Plaque(PlaqueId::new(42)));
        assert_eq!(location, "https://plaquer.app/plaque/42");
    }

    #[test]
    fn builds_collection_and_route_locations() {
        let collection = CollectionId::new("scientists");
        let route = RouteId::new("bloomsbury-walk");
        assert_eq!(
            canonical_location(ORIGIN, &LocationTarget::Collection(&collection)),
            "https://plaquer.app/library/collections/scientists"
        );
        assert_eq!(
            canonical_location(ORIGIN, &LocationTarget::Route(&route)),
            "https://plaquer.app/library/routes/bloomsbury-walk"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_origin() {
        let location =
            canonical_location("https://plaquer.app/", &LocationTarget::Plaque(PlaqueId::new(7)));
        assert_eq!(location, "https://plaquer.app/plaque/7");
    }

    #[test]
    fn parses_query_hints_verbatim() {
        let parsed =
            parse_plaque_location("https://plaquer.app/plaque/42?source=map&route=r1").unwrap();
        assert_eq!(parsed.plaque_id, PlaqueId::new(42));
        assert_eq!(parsed.source.as_deref(), Some("map"));
        assert_eq!(parsed.route.as_deref(), Some("r1"));
        assert_eq!(parsed.collection, None);
    }

    #[test]
    fn rejects_non_plaque_paths() {
        for text in [
            "https://plaquer.app/plaque/abc",
            "https://plaquer.app/plaque/42/photos",
            "https://plaquer.app/plaque/42/",
            "https://plaquer.app/plaque/",
            "https://plaquer.app/plaque",
            "https://plaquer.app/library/collections/scientists",
            "/plaque/42",
            "not a url",
        ] {
            assert!(
                parse_plaque_location(text).is_none(),
                "expected {text:?} to be rejected"
            );
        }
    }
}
