use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use pantheon_compare::compare::entity::Entity;
use pantheon_compare::compare::parse::parse_entities;
use pantheon_compare::store::resolver::EntityStore;
use serde_json::{Value, json};

/// A small deity collection in document store response form.
pub fn deity_documents() -> Value {
    json!({
        "value": [
            {
                "id": "zeus",
                "name": "Zeus",
                "type": "deity",
                "mythology": "Greek",
                "domain": "Sky",
                "domains": ["Sky", "Thunder", "Law"],
                "title": "King of the Gods",
                "gender": "Male",
                "symbols": ["Thunderbolt", "Eagle", "Oak"],
                "parents": {"father": "Kronos", "mother": "Rhea"}
            },
            {
                "id": "odin",
                "name": "Odin",
                "type": "deity",
                "mythology": "Norse",
                "domain": "Wisdom",
                "domains": ["Wisdom", "War", "Death"],
                "title": "Allfather",
                "gender": "Male",
                "symbols": ["Raven", "Spear", "Oak"]
            },
            {
                "id": "thor",
                "name": "Thor",
                "type": "deity",
                "mythology": "Norse",
                "domain": "Thunder",
                "domains": ["thunder", "Storms", "Strength"],
                "gender": "male",
                "symbols": ["Mjolnir", "Goat", "oak"],
                "parents": {"father": "Odin", "mother": "Jord"}
            },
            {
                "id": "ra",
                "name": "Ra",
                "type": "deity",
                "mythology": "Egyptian",
                "domain": "Sun",
                "gender": "Male",
                "symbols": ["Sun disk", "Falcon"]
            }
        ]
    })
}

/// Entity store over [`deity_documents`], counting batch requests.
pub struct FixtureStore {
    collections: HashMap<String, Vec<Entity>>,
    requests: AtomicUsize,
}

impl FixtureStore {
    pub fn load() -> Result<Self, String> {
        let deities = parse_entities("deities", &deity_documents())?;
        let mut collections = HashMap::new();
        collections.insert("deities".to_string(), deities);
        Ok(FixtureStore {
            collections,
            requests: AtomicUsize::new(0),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl EntityStore for FixtureStore {
    async fn fetch_batch(
        &self,
        collection_name: &str,
        ids: &[String],
    ) -> Result<Vec<Entity>, String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let collection = self
            .collections
            .get(collection_name)
            .ok_or_else(|| format!("Unknown collection: {collection_name}"))?;

        Ok(collection
            .iter()
            .filter(|entity| ids.contains(&entity.id))
            .cloned()
            .collect())
    }
}
