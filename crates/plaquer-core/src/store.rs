//! In-memory plaque data store.
//!
//! Plaque, collection, and route data is supplied by external state
//! management; this store is the in-process stand-in the desktop shell
//! reads from. Nothing here touches disk or the network. All reads return
//! clones so callers never hold the lock across a render.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{PlaquerError, PlaquerResult};
use crate::types::{Collection, CollectionId, Plaque, PlaqueColour, PlaqueId, PlaqueRoute, RouteId};

struct StoreState {
    plaques: BTreeMap<PlaqueId, Plaque>,
    collections: Vec<Collection>,
    routes: Vec<PlaqueRoute>,
    collected: BTreeSet<PlaqueId>,
}

/// Shared handle to the plaque data. Cheap to clone.
#[derive(Clone)]
pub struct PlaqueStore {
    state: Arc<RwLock<StoreState>>,
}

impl PlaqueStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                plaques: BTreeMap::new(),
                collections: Vec::new(),
                routes: Vec::new(),
                collected: BTreeSet::new(),
            })),
        }
    }

    /// Store loaded with the bundled sample records
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut state = store.state.write();
            for plaque in sample_plaques() {
                state.plaques.insert(plaque.id, plaque);
            }
            state.collections = sample_collections();
            state.routes = sample_routes();
        }
        tracing::info!(count = store.len(), "seeded plaque store");
        store
    }

    pub fn insert(&self, plaque: Plaque) {
        self.state.write().plaques.insert(plaque.id, plaque);
    }

    pub fn get(&self, id: PlaqueId) -> PlaquerResult<Plaque> {
        self.state
            .read()
            .plaques
            .get(&id)
            .cloned()
            .ok_or(PlaquerError::PlaqueNotFound(id))
    }

    /// All plaques, ordered by id
    pub fn list(&self) -> Vec<Plaque> {
        self.state.read().plaques.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().plaques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().plaques.is_empty()
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.state.read().collections.clone()
    }

    pub fn collection(&self, id: &CollectionId) -> PlaquerResult<Collection> {
        self.state
            .read()
            .collections
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| PlaquerError::CollectionNotFound(id.to_string()))
    }

    pub fn routes(&self) -> Vec<PlaqueRoute> {
        self.state.read().routes.clone()
    }

    pub fn route(&self, id: &RouteId) -> PlaquerResult<PlaqueRoute> {
        self.state
            .read()
            .routes
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| PlaquerError::RouteNotFound(id.to_string()))
    }

    /// Whether the user has collected this plaque
    pub fn is_collected(&self, id: PlaqueId) -> bool {
        self.state.read().collected.contains(&id)
    }

    /// Toggle the collected flag for a plaque. Returns the new state.
    pub fn toggle_collected(&self, id: PlaqueId) -> PlaquerResult<bool> {
        let mut state = self.state.write();
        if !state.plaques.contains_key(&id) {
            return Err(PlaquerError::PlaqueNotFound(id));
        }
        let now_collected = if state.collected.contains(&id) {
            state.collected.remove(&id);
            false
        } else {
            state.collected.insert(id);
            true
        };
        tracing::debug!(plaque_id = %id, collected = now_collected, "toggled collected");
        Ok(now_collected)
    }

    /// Ids of collected plaques, ordered
    pub fn collected(&self) -> Vec<PlaqueId> {
        self.state.read().collected.iter().copied().collect()
    }

    pub fn collected_count(&self) -> usize {
        self.state.read().collected.len()
    }
}

impl Default for PlaqueStore {
    fn default() -> Self {
        Self::new()
    }
}

fn plaque(
    id: u64,
    title: &str,
    inscription: &str,
    colour: PlaqueColour,
    latitude: f64,
    longitude: f64,
    erected: Option<i32>,
    area: &str,
) -> Plaque {
    Plaque {
        id: PlaqueId::new(id),
        title: title.to_string(),
        inscription: inscription.to_string(),
        colour,
        latitude,
        longitude,
        erected,
        area: Some(area.to_string()),
    }
}

fn sample_plaques() -> Vec<Plaque> {
    vec![
        plaque(
            1,
            "Ada Lovelace",
            "**Ada, Countess of Lovelace** (1815-1852)\n\nPioneer of computing lived here.",
            PlaqueColour::Blue,
            51.5101,
            -0.1478,
            Some(1992),
            "St James's",
        ),
        plaque(
            2,
            "Alan Turing",
            "**Alan Turing** (1912-1954)\n\nCode-breaker and founder of computer science was born here.",
            PlaqueColour::Blue,
            51.5230,
            -0.1838,
            Some(1998),
            "Maida Vale",
        ),
        plaque(
            3,
            "Mary Seacole",
            "**Mary Seacole** (1805-1881)\n\nJamaican nurse, heroine of the Crimean War, lived here.",
            PlaqueColour::Blue,
            51.5200,
            -0.1870,
            Some(2005),
            "Paddington",
        ),
        plaque(
            4,
            "Charles Dickens",
            "**Charles Dickens** (1812-1870)\n\nNovelist lived here and wrote *Oliver Twist*.",
            PlaqueColour::Brown,
            51.5238,
            -0.1166,
            Some(1903),
            "Bloomsbury",
        ),
        plaque(
            5,
            "Sylvia Pankhurst",
            "**Sylvia Pankhurst** (1882-1960)\n\nCampaigner for the rights of women lived here.",
            PlaqueColour::Green,
            51.5412,
            -0.0032,
            Some(1985),
            "Bow",
        ),
        plaque(
            6,
            "Jimi Hendrix",
            "**Jimi Hendrix** (1942-1970)\n\nGuitarist and songwriter lived here.",
            PlaqueColour::Blue,
            51.5115,
            -0.1466,
            Some(1997),
            "Mayfair",
        ),
        plaque(
            7,
            "Florence Nightingale",
            "**Florence Nightingale** (1820-1910)\n\nPioneer of nursing lived and died in a house on this site.",
            PlaqueColour::Blue,
            51.5103,
            -0.1527,
            Some(1955),
            "Mayfair",
        ),
        plaque(
            8,
            "George Orwell",
            "**George Orwell** (1903-1950)\n\nNovelist and political essayist lived here.",
            PlaqueColour::Black,
            51.5441,
            -0.1465,
            Some(1980),
            "Camden",
        ),
    ]
}

fn sample_collections() -> Vec<Collection> {
    vec![
        Collection {
            id: CollectionId::new("scientists"),
            name: "Scientists & Engineers".to_string(),
            description: "Minds that measured, computed, and cured".to_string(),
            plaques: vec![PlaqueId::new(1), PlaqueId::new(2), PlaqueId::new(7)],
        },
        Collection {
            id: CollectionId::new("writers"),
            name: "Writers".to_string(),
            description: "Novelists and essayists of the city".to_string(),
            plaques: vec![PlaqueId::new(4), PlaqueId::new(8)],
        },
    ]
}

fn sample_routes() -> Vec<PlaqueRoute> {
    vec![PlaqueRoute {
        id: RouteId::new("west-end-walk"),
        name: "West End Walk".to_string(),
        description: "A short loop past three Mayfair and St James's plaques".to_string(),
        plaques: vec![PlaqueId::new(6), PlaqueId::new(7), PlaqueId::new(1)],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unknown_plaque_is_not_found() {
        let store = PlaqueStore::new();
        let err = store.get(PlaqueId::new(999)).unwrap_err();
        assert!(matches!(err, PlaquerError::PlaqueNotFound(id) if id == PlaqueId::new(999)));
    }

    #[test]
    fn toggle_collected_roundtrip() {
        let store = PlaqueStore::seeded();
        let id = PlaqueId::new(1);

        assert!(!store.is_collected(id));
        assert!(store.toggle_collected(id).unwrap());
        assert!(store.is_collected(id));
        assert_eq!(store.collected_count(), 1);
        assert!(!store.toggle_collected(id).unwrap());
        assert_eq!(store.collected_count(), 0);
    }

    #[test]
    fn toggle_collected_requires_known_plaque() {
        let store = PlaqueStore::new();
        assert!(store.toggle_collected(PlaqueId::new(1)).is_err());
    }

    #[test]
    fn seeded_collections_reference_known_plaques() {
        let store = PlaqueStore::seeded();
        for collection in store.collections() {
            for id in &collection.plaques {
                assert!(store.get(*id).is_ok(), "collection references unknown {id}");
            }
        }
        for route in store.routes() {
            for id in &route.plaques {
                assert!(store.get(*id).is_ok(), "route references unknown {id}");
            }
        }
    }
}
