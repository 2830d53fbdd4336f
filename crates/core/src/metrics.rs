//! Poids, distances et énumérateur de poids GC

use crate::error::{DnaCodeError, Result};
use crate::vector::{BinaryVector, Code};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Distance minimale d'un code, infinie quand il a moins de deux mots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Distance {
    Finite(usize),
    Infinite,
}

impl Distance {
    pub fn finite(self) -> Option<usize> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Distance::Infinite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

/// Poids de Hamming (nombre de bits à 1)
pub fn weight(word: &BinaryVector) -> usize {
    word.bits().iter().filter(|&&b| b == 1).count()
}

/// Poids de chaque mot du code
pub fn weights(code: &Code) -> Vec<usize> {
    code.rows().par_iter().map(weight).collect()
}

/// Distance de Hamming entre deux mots de même longueur
pub fn hamming_distance(a: &BinaryVector, b: &BinaryVector) -> Result<usize> {
    if a.len() != b.len() {
        return Err(DnaCodeError::shape("distance de Hamming", a.len(), b.len()));
    }
    Ok(distance_unchecked(a, b))
}

fn distance_unchecked(a: &BinaryVector, b: &BinaryVector) -> usize {
    a.bits().iter().zip(b.bits()).filter(|(x, y)| x != y).count()
}

/// Distance minimale sur toutes les paires de mots (indices distincts)
pub fn minimum_distance(code: &Code) -> Distance {
    let rows = code.rows();
    (0..rows.len())
        .into_par_iter()
        .filter_map(|i| {
            rows[i + 1..]
                .iter()
                .map(|other| distance_unchecked(&rows[i], other))
                .min()
        })
        .min()
        .map_or(Distance::Infinite, Distance::Finite)
}

/// Nombre de symboles GC: paires de bits différents (01 ou 10)
pub fn gc_weight(word: &BinaryVector) -> Result<usize> {
    Ok(word.symbols()?.filter(|[high, low]| high != low).count())
}

/// Poids GC de chaque mot du code
pub fn gc_weights(code: &Code) -> Result<Vec<usize>> {
    code.ensure_even()?;
    code.rows().par_iter().map(gc_weight).collect()
}

/// Distribution des poids GC d'un code
///
/// Rendu polynomial à deux variables: chaque poids GC w donne le terme
/// `a^(m-w) b^w` (m = n/2), préfixé du nombre de mots quand il dépasse 1.
/// Termes triés par poids GC décroissant puis par effectif croissant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GcWeightEnumerator {
    symbol_length: usize,
    counts: BTreeMap<usize, usize>,
}

impl GcWeightEnumerator {
    /// Calcule la distribution des poids GC d'un code
    pub fn from_code(code: &Code) -> Result<Self> {
        let mut counts = BTreeMap::new();
        for w in gc_weights(code)? {
            *counts.entry(w).or_insert(0) += 1;
        }
        Ok(Self {
            symbol_length: code.width() / 2,
            counts,
        })
    }

    /// Longueur des mots en symboles (m = n/2)
    pub fn symbol_length(&self) -> usize {
        self.symbol_length
    }

    /// Nombre de mots de poids GC `gc`
    pub fn count(&self, gc: usize) -> usize {
        self.counts.get(&gc).copied().unwrap_or(0)
    }

    /// Couples (poids GC, effectif) dans l'ordre de rendu du polynôme
    pub fn terms(&self) -> Vec<(usize, usize)> {
        let mut terms: Vec<(usize, usize)> = self.counts.iter().map(|(&w, &c)| (w, c)).collect();
        terms.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        terms
    }

    /// Nombre total de mots comptés
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl fmt::Display for GcWeightEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (gc, count)) in self.terms().into_iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if count > 1 {
                write!(f, "{}", count)?;
            }
            write!(f, "a^{} b^{}", self.symbol_length - gc, gc)?;
        }
        Ok(())
    }
}

/// Rendu polynomial de l'énumérateur de poids GC
pub fn gc_weight_enumerator(code: &Code) -> Result<String> {
    Ok(GcWeightEnumerator::from_code(code)?.to_string())
}
