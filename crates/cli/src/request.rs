//! Chargement des fichiers de requête

use anyhow::{Context, Result};
use dnacode_core::BuildRequest;
use std::path::Path;

/// Charge une requête de construction (format déduit de l'extension)
pub fn load_request(path: &Path) -> Result<BuildRequest> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("lecture de {}", path.display()))?;

    settings
        .try_deserialize::<BuildRequest>()
        .with_context(|| format!("requête invalide dans {}", path.display()))
}

/// Charge un fichier JSON brut
pub fn load_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("lecture de {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("JSON invalide dans {}", path.display()))
}
