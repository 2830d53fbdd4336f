//! Encodage linéaire sur GF(2)

use crate::error::{DnaCodeError, Result};
use crate::vector::{BinaryVector, Code, GeneratorMatrix};
use rayon::prelude::*;

/// Encode un message de longueur k: c[j] = Σ_t m[t]·G[t][j] mod 2
fn encode_message(message: &BinaryVector, generator: &GeneratorMatrix) -> BinaryVector {
    let mut codeword = vec![0u8; generator.length()];
    for (bit, row) in message.bits().iter().zip(generator.rows()) {
        if *bit == 1 {
            for (c, g) in codeword.iter_mut().zip(row.bits()) {
                *c ^= g;
            }
        }
    }
    BinaryVector::from_bits_unchecked(codeword)
}

/// Calcule les mots de code `messages × generator` (mod 2)
///
/// Chaque message doit avoir la longueur k (nombre de lignes de la matrice
/// génératrice). L'ordre des mots de code suit celui des messages.
pub fn encode(messages: &Code, generator: &GeneratorMatrix) -> Result<Code> {
    if messages.is_empty() {
        return Ok(Code::empty(generator.length()));
    }
    if messages.width() != generator.dimension() {
        return Err(DnaCodeError::shape(
            "longueur des messages / lignes de la matrice génératrice",
            generator.dimension(),
            messages.width(),
        ));
    }

    let codewords: Vec<BinaryVector> = messages
        .rows()
        .par_iter()
        .map(|message| encode_message(message, generator))
        .collect();

    Ok(Code::from_vectors_unchecked(codewords, generator.length()))
}

/// Encode un message isolé
pub fn encode_vector(message: &BinaryVector, generator: &GeneratorMatrix) -> Result<BinaryVector> {
    if message.len() != generator.dimension() {
        return Err(DnaCodeError::shape(
            "longueur du message / lignes de la matrice génératrice",
            generator.dimension(),
            message.len(),
        ));
    }
    Ok(encode_message(message, generator))
}
