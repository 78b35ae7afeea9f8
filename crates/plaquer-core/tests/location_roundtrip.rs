//! Property-based tests for canonical location build/parse
//!
//! Uses proptest to verify the round-trip invariant and the parsing
//! contract over adversarial inputs.

use proptest::prelude::*;

use plaquer_core::{canonical_location, parse_plaque_location, LocationTarget, PlaqueId};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate origins across schemes, hosts, ports, and trailing slashes
fn origin_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("https?://[a-z][a-z0-9]{0,15}(\\.[a-z]{2,6}){0,2}(:[1-9][0-9]{1,3})?/?")
        .expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A location built for any id parses back to that same id
    #[test]
    fn build_then_parse_roundtrips(id in any::<u64>(), origin in origin_strategy()) {
        let location = canonical_location(&origin, &LocationTarget::Plaque(PlaqueId::new(id)));
        let parsed = parse_plaque_location(&location)
            .expect("generated locations must parse");
        prop_assert_eq!(parsed.plaque_id, PlaqueId::new(id));
        prop_assert_eq!(parsed.source, None);
        prop_assert_eq!(parsed.route, None);
        prop_assert_eq!(parsed.collection, None);
    }

    /// Query hints survive verbatim alongside the id
    #[test]
    fn query_hints_pass_through(
        id in any::<u64>(),
        source in "[a-z]{1,12}",
        route in "[a-z0-9-]{1,12}",
    ) {
        let location = format!("https://plaquer.app/plaque/{id}?source={source}&route={route}");
        let parsed = parse_plaque_location(&location).expect("valid location");
        prop_assert_eq!(parsed.plaque_id.value(), id);
        prop_assert_eq!(parsed.source.as_deref(), Some(source.as_str()));
        prop_assert_eq!(parsed.route.as_deref(), Some(route.as_str()));
        prop_assert_eq!(parsed.collection, None);
    }

    /// Arbitrary text never panics the parser
    #[test]
    fn parser_never_panics(text in ".{0,200}") {
        let _ = parse_plaque_location(&text);
    }

    /// Extra path segments are rejected no matter the suffix
    #[test]
    fn trailing_segments_are_rejected(id in any::<u64>(), suffix in "[a-z]{1,8}") {
        let location = format!("https://plaquer.app/plaque/{id}/{suffix}");
        prop_assert!(parse_plaque_location(&location).is_none());
    }
}

// ============================================================================
// Fixed Cases
// ============================================================================

/// Non-digit ids are rejected even when they look numeric-ish
#[test]
fn test_non_digit_ids_rejected() {
    for id in ["abc", "4a2", "+42", "-1", "0x2a", "42.0", "４２"] {
        let location = format!("https://example.com/plaque/{id}");
        assert!(
            parse_plaque_location(&location).is_none(),
            "expected id {id:?} to be rejected"
        );
    }
}

/// Ids beyond u64 are absence, not a panic or wraparound
#[test]
fn test_overflowing_id_rejected() {
    let location = "https://example.com/plaque/99999999999999999999999999";
    assert!(parse_plaque_location(location).is_none());
}

/// Unknown query parameters are ignored, known ones still read
#[test]
fn test_unknown_query_parameters_ignored() {
    let parsed =
        parse_plaque_location("https://example.com/plaque/7?utm_campaign=x&collection=c9&foo=bar")
            .unwrap();
    assert_eq!(parsed.plaque_id, PlaqueId::new(7));
    assert_eq!(parsed.collection.as_deref(), Some("c9"));
    assert_eq!(parsed.source, None);
    assert_eq!(parsed.route, None);
}

/// Schemes without a hierarchical path cannot be plaque locations
#[test]
fn test_non_hierarchical_urls_rejected() {
    for text in ["mailto:a@b.com", "data:text/plain,plaque/42"] {
        assert!(parse_plaque_location(text).is_none(), "{text:?}");
    }
}

/// The id 0 and u64::MAX are both valid ids
#[test]
fn test_extreme_ids_roundtrip() {
    for id in [0u64, u64::MAX] {
        let location =
            canonical_location("https://plaquer.app", &LocationTarget::Plaque(PlaqueId::new(id)));
        let parsed = parse_plaque_location(&location).unwrap();
        assert_eq!(parsed.plaque_id.value(), id);
    }
}
