use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An official entity (ministry, central bank, health authority...) with the
/// domains trusted to carry its statements.
///
/// Static reference data: loaded at process start, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialEntity {
    /// Canonical name.
    pub name: String,
    /// Trusted domains/endpoints for this entity's publications.
    pub domains: Vec<String>,
    /// Known aliases ("RBI" for "Reserve Bank of India").
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Lookup table from official-entity name to trusted domains.
#[derive(Debug, Clone, Default)]
pub struct OfficialSourceRegistry {
    entities: Vec<OfficialEntity>,
    /// Lowercased name/alias → indices into `entities`. An alias may map to
    /// several entities; canonical names map to exactly one.
    index: HashMap<String, Vec<usize>>,
}

impl OfficialSourceRegistry {
    /// Build a registry from entities. Callers are expected to have
    /// validated the entities already (see the registry loader).
    pub fn new(entities: Vec<OfficialEntity>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entity) in entities.iter().enumerate() {
            index.entry(entity.name.to_lowercase()).or_default().push(i);
            for alias in &entity.aliases {
                index.entry(alias.to_lowercase()).or_default().push(i);
            }
        }
        Self { entities, index }
    }

    /// Look up by exact canonical name first, then by alias.
    /// Returns the first match.
    pub fn lookup(&self, name: &str) -> Option<&OfficialEntity> {
        self.lookup_all(name).into_iter().next()
    }

    /// Every entity matching the name or alias, canonical matches first.
    /// Used for the conservative multi-entity tie-break.
    pub fn lookup_all(&self, name: &str) -> Vec<&OfficialEntity> {
        let key = name.to_lowercase();
        let mut matches: Vec<&OfficialEntity> = self
            .index
            .get(&key)
            .map(|ids| ids.iter().map(|&i| &self.entities[i]).collect())
            .unwrap_or_default();
        matches.sort_by_key(|e| e.name.to_lowercase() != key);
        matches
    }

    pub fn entities(&self) -> &[OfficialEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
