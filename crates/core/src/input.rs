//! Conversion d'entrées non typées (JSON) vers les types du domaine
//!
//! Ordre de validation: forme des listes et entiers (`InvalidType`), puis
//! valeurs binaires (`InvalidValue`), puis rectangularité (`ShapeMismatch`).

use crate::error::{DnaCodeError, Result};
use crate::vector::{BinaryVector, Code, GeneratorMatrix};
use serde_json::Value;

/// Lit une longueur entière non négative
pub fn length_from_value(value: &Value) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            DnaCodeError::InvalidType(format!(
                "la longueur doit être un entier non négatif, obtenu {}",
                value
            ))
        })
}

fn integer_row(value: &Value, what: &str) -> Result<Vec<i64>> {
    let items = value.as_array().ok_or_else(|| {
        DnaCodeError::InvalidType(format!("{} doit être une liste d'entiers", what))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                DnaCodeError::InvalidType(format!(
                    "{} contient un élément non entier: {}",
                    what, item
                ))
            })
        })
        .collect()
}

fn integer_matrix(value: &Value, what: &str) -> Result<Vec<Vec<i64>>> {
    let rows = value.as_array().ok_or_else(|| {
        DnaCodeError::InvalidType(format!("{} doit être une liste de listes d'entiers", what))
    })?;
    rows.iter().map(|row| integer_row(row, what)).collect()
}

fn to_bits(row: Vec<i64>, what: &str) -> Result<Vec<u8>> {
    row.into_iter()
        .map(|elem| match elem {
            0 => Ok(0),
            1 => Ok(1),
            other => Err(DnaCodeError::InvalidValue(format!(
                "{} doit être binaire (0 ou 1), obtenu {}",
                what, other
            ))),
        })
        .collect()
}

/// Lit un vecteur binaire depuis une liste JSON
pub fn vector_from_value(value: &Value) -> Result<BinaryVector> {
    let row = integer_row(value, "le mot de code")?;
    BinaryVector::new(to_bits(row, "le mot de code")?)
}

/// Lit un code (liste de mots de code) depuis une liste de listes JSON
pub fn code_from_value(value: &Value) -> Result<Code> {
    let rows = integer_matrix(value, "le code")?
        .into_iter()
        .map(|row| to_bits(row, "le code"))
        .collect::<Result<Vec<_>>>()?;
    Code::from_rows(rows)
}

/// Lit une matrice génératrice depuis une liste de listes JSON
pub fn generator_from_value(value: &Value) -> Result<GeneratorMatrix> {
    let rows = integer_matrix(value, "la matrice génératrice")?
        .into_iter()
        .map(|row| to_bits(row, "la matrice génératrice"))
        .collect::<Result<Vec<_>>>()?;
    GeneratorMatrix::new(rows)
}
