//! Transformations symboliques des mots de code ADN
//!
//! Un mot de longueur paire n est lu comme n/2 symboles de 2 bits, un
//! symbole par nucléotide.

use crate::error::Result;
use crate::vector::{BinaryVector, Code};
use rayon::prelude::*;
use std::fmt;

/// Inverse l'ordre des symboles; les deux bits de chaque symbole gardent
/// leur ordre interne.
pub fn reverse(word: &BinaryVector) -> Result<BinaryVector> {
    word.ensure_even()?;
    Ok(reverse_symbols(word))
}

/// Complémente chaque bit (A↔T, C↔G sous la convention de `Nucleotide`)
pub fn complement(word: &BinaryVector) -> Result<BinaryVector> {
    word.ensure_even()?;
    Ok(complement_bits(word))
}

/// Complément suivi de l'inversion des symboles (brin complémentaire inverse)
pub fn reverse_complement(word: &BinaryVector) -> Result<BinaryVector> {
    word.ensure_even()?;
    Ok(reverse_symbols(&complement_bits(word)))
}

fn reverse_symbols(word: &BinaryVector) -> BinaryVector {
    let bits = word
        .bits()
        .chunks_exact(2)
        .rev()
        .flatten()
        .copied()
        .collect();
    BinaryVector::from_bits_unchecked(bits)
}

fn complement_bits(word: &BinaryVector) -> BinaryVector {
    BinaryVector::from_bits_unchecked(word.bits().iter().map(|b| b ^ 1).collect())
}

/// Symétrie appliquée à un mot de code de longueur paire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTransform {
    Reverse,
    Complement,
    ReverseComplement,
}

impl SymbolTransform {
    /// Applique la transformation à un mot
    pub fn apply(self, word: &BinaryVector) -> Result<BinaryVector> {
        match self {
            SymbolTransform::Reverse => reverse(word),
            SymbolTransform::Complement => complement(word),
            SymbolTransform::ReverseComplement => reverse_complement(word),
        }
    }

    /// Applique la transformation ligne par ligne, en conservant l'ordre
    pub fn apply_all(self, code: &Code) -> Result<Code> {
        code.ensure_even()?;
        let rows: Vec<BinaryVector> = code
            .rows()
            .par_iter()
            .map(|word| match self {
                SymbolTransform::Reverse => reverse_symbols(word),
                SymbolTransform::Complement => complement_bits(word),
                SymbolTransform::ReverseComplement => reverse_symbols(&complement_bits(word)),
            })
            .collect();
        Ok(Code::from_vectors_unchecked(rows, code.width()))
    }
}

impl fmt::Display for SymbolTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolTransform::Reverse => "reverse",
            SymbolTransform::Complement => "complement",
            SymbolTransform::ReverseComplement => "reverse_complement",
        };
        write!(f, "{}", name)
    }
}

/// Inverse chaque mot du code
pub fn reverse_all(code: &Code) -> Result<Code> {
    SymbolTransform::Reverse.apply_all(code)
}

/// Complémente chaque mot du code
pub fn complement_all(code: &Code) -> Result<Code> {
    SymbolTransform::Complement.apply_all(code)
}

/// Complément inverse de chaque mot du code
pub fn reverse_complement_all(code: &Code) -> Result<Code> {
    SymbolTransform::ReverseComplement.apply_all(code)
}
