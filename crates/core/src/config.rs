//! Requête de construction sérialisable (JSON)

use crate::constraints::{build_with_report, Constraint, ConstraintSet, ConstructionReport};
use crate::error::Result;
use crate::input::generator_from_value;
use crate::vector::GeneratorMatrix;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

fn default_constraints() -> Vec<String> {
    Constraint::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

/// Paramètres d'une construction de code ADN
///
/// Sans champ `constraints`, les trois contraintes sont appliquées; une liste
/// vide donne le code linéaire complet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Matrice génératrice k×n (liste de listes d'entiers 0/1)
    pub generator: Value,
    #[serde(default = "default_constraints")]
    pub constraints: Vec<String>,
    /// Poids GC cible, requis par `gc_content`
    #[serde(default)]
    pub gc_weight: Option<usize>,
}

impl BuildRequest {
    /// Charge une requête depuis une chaîne JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Charge une requête depuis un fichier JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Matrice génératrice validée
    pub fn generator_matrix(&self) -> Result<GeneratorMatrix> {
        generator_from_value(&self.generator)
    }

    /// Contraintes validées
    pub fn constraint_set(&self) -> Result<ConstraintSet> {
        ConstraintSet::parse(self.constraints.as_slice())
    }

    /// Exécute la construction décrite par la requête
    pub fn run(&self) -> Result<ConstructionReport> {
        let constraints = self.constraint_set()?;
        let generator = self.generator_matrix()?;
        build_with_report(&generator, constraints, self.gc_weight)
    }
}
