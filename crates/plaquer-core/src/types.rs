//! Core types for Plaquer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlaquerError;

/// Unique identifier for a plaque record
///
/// Plaques are identified by plain integers, which is what appears in the
/// canonical location format (`/plaque/42`). The id is owned by external
/// state management; Plaquer only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaqueId(pub u64);

impl PlaqueId {
    /// Create a PlaqueId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaqueId {
    type Err = PlaquerError;

    /// Parse from a decimal string.
    ///
    /// Only plain digit runs are accepted. Signs, whitespace, and values
    /// that overflow u64 are rejected, matching the canonical location
    /// parser's `<digits>` rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlaquerError::InvalidPlaqueId(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| PlaquerError::InvalidPlaqueId(s.to_string()))
    }
}

/// Colour of the physical plaque
///
/// The well-known heritage colours get their own variants; anything else is
/// carried through as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaqueColour {
    Blue,
    Green,
    Brown,
    Black,
    Other(String),
}

impl PlaqueColour {
    /// Human-readable colour name
    pub fn display_name(&self) -> &str {
        match self {
            PlaqueColour::Blue => "blue",
            PlaqueColour::Green => "green",
            PlaqueColour::Brown => "brown",
            PlaqueColour::Black => "black",
            PlaqueColour::Other(name) => name,
        }
    }
}

/// A plaque record
///
/// Supplied by external state management. The navigation core reads only
/// the id; everything else exists for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plaque {
    /// Unique identifier, also the canonical location path segment
    pub id: PlaqueId,
    /// Title, usually the commemorated person or event
    pub title: String,
    /// Inscription text, markdown
    pub inscription: String,
    /// Physical plaque colour
    pub colour: PlaqueColour,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Year the plaque was erected, if known
    pub erected: Option<i32>,
    /// Area or borough name, if known
    pub area: Option<String>,
}

/// Unique identifier for a collection
///
/// Collections use opaque string ids, which appear verbatim in
/// `/library/collections/{id}` locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(pub String);

impl CollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a walking route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteId(pub String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named set of plaques curated around a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    /// Short blurb shown on the library page
    pub description: String,
    pub plaques: Vec<PlaqueId>,
}

/// An ordered walking route visiting a sequence of plaques
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaqueRoute {
    pub id: RouteId,
    pub name: String,
    pub description: String,
    /// Stops in walking order
    pub plaques: Vec<PlaqueId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaque_id_roundtrip() {
        let id: PlaqueId = "42".parse().unwrap();
        assert_eq!(id, PlaqueId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn plaque_id_rejects_non_digits() {
        for input in ["", "abc", "4a2", "+42", "-42", " 42", "42 ", "4.2"] {
            assert!(
                input.parse::<PlaqueId>().is_err(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn plaque_id_rejects_overflow() {
        // u64::MAX is 18446744073709551615; one more digit overflows
        assert!("184467440737095516150".parse::<PlaqueId>().is_err());
    }

    #[test]
    fn colour_serde_tags_are_lowercase() {
        let json = serde_json::to_string(&PlaqueColour::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
    }
}
