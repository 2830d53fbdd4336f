//! Types d'erreurs pour la construction de codes ADN

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaCodeError {
    #[error("Type invalide: {0}")]
    InvalidType(String),

    #[error("Valeur invalide: {0}")]
    InvalidValue(String),

    #[error("Dimensions incompatibles ({context}): attendu {expected}, obtenu {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DnaCodeError {
    pub(crate) fn shape(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        DnaCodeError::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Vrai pour les erreurs de type `InvalidType`
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, DnaCodeError::InvalidType(_))
    }

    /// Vrai pour les erreurs de type `InvalidValue`
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, DnaCodeError::InvalidValue(_))
    }

    /// Vrai pour les erreurs de type `ShapeMismatch`
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, DnaCodeError::ShapeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, DnaCodeError>;
