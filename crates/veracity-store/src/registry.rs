//! Official-source registry loader.
//!
//! The registry is a TOML file of `[[entity]]` tables:
//!
//! ```toml
//! [[entity]]
//! name = "Reserve Bank of India"
//! domains = ["rbi.org.in"]
//! aliases = ["RBI"]
//! ```
//!
//! Loaded once at process start and validated strictly: a malformed
//! registry is a startup failure, never a mid-request surprise.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use veracity_core::errors::{ConfigurationError, VeracityResult};
use veracity_core::models::{OfficialEntity, OfficialSourceRegistry};

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "entity")]
    entities: Vec<OfficialEntity>,
}

/// Load and validate the registry at `path`.
///
/// Rejects duplicate canonical names (case-insensitive) and entities with
/// no trusted domains. Duplicate aliases are allowed; the citation check
/// resolves them conservatively.
pub fn load_registry(path: impl AsRef<Path>) -> VeracityResult<OfficialSourceRegistry> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigurationError::RegistryMissing {
        path: path.display().to_string(),
    })?;

    let file: RegistryFile =
        toml::from_str(&raw).map_err(|e| ConfigurationError::RegistryInvalid {
            reason: e.to_string(),
        })?;

    validate(&file.entities)?;
    info!(
        path = %path.display(),
        entities = file.entities.len(),
        "official-source registry loaded"
    );
    Ok(OfficialSourceRegistry::new(file.entities))
}

fn validate(entities: &[OfficialEntity]) -> Result<(), ConfigurationError> {
    let mut seen = std::collections::HashSet::new();
    for entity in entities {
        if entity.name.trim().is_empty() {
            return Err(ConfigurationError::RegistryInvalid {
                reason: "entity with empty name".to_string(),
            });
        }
        if !seen.insert(entity.name.to_lowercase()) {
            return Err(ConfigurationError::DuplicateEntity {
                name: entity.name.clone(),
            });
        }
        if entity.domains.iter().all(|d| d.trim().is_empty()) {
            return Err(ConfigurationError::EmptyDomains {
                name: entity.name.clone(),
            });
        }
    }
    Ok(())
}
