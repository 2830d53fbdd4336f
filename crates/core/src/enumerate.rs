//! Énumération exhaustive de l'espace des messages {0,1}^L

use crate::vector::{BinaryVector, Code};

/// Produit les 2^L vecteurs binaires de longueur `length`, dans l'ordre
/// numérique croissant (bit de gauche de poids fort).
///
/// Comptage binaire: à chaque étape le 0 le plus à droite passe à 1 et tous
/// les bits à sa droite sont remis à 0. L'énumération s'arrête sur le
/// vecteur tout-à-un. `length == 0` produit uniquement le vecteur vide.
pub fn enumerate_vectors(length: usize) -> Code {
    let mut current = vec![0u8; length];
    let capacity = 1usize.checked_shl(length as u32).unwrap_or(usize::MAX);
    let mut vectors = Vec::with_capacity(capacity.min(1 << 20));
    vectors.push(BinaryVector::from_bits_unchecked(current.clone()));

    while let Some(index) = current.iter().rposition(|&bit| bit == 0) {
        current[index] = 1;
        current[index + 1..].fill(0);
        vectors.push(BinaryVector::from_bits_unchecked(current.clone()));
    }

    tracing::trace!(length, count = vectors.len(), "espace des messages énuméré");
    Code::from_vectors_unchecked(vectors, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_length() {
        let code = enumerate_vectors(0);
        assert_eq!(code.len(), 1);
        assert!(code.rows()[0].is_empty());
    }

    #[test]
    fn test_numeric_order() {
        let code = enumerate_vectors(3);
        let bits: Vec<Vec<u8>> = code.iter().map(|v| v.bits().to_vec()).collect();
        assert_eq!(
            bits,
            vec![
                vec![0, 0, 0],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![0, 1, 1],
                vec![1, 0, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_count_and_bounds() {
        for length in 0..=10 {
            let code = enumerate_vectors(length);
            assert_eq!(code.len(), 1 << length);
            assert_eq!(code.width(), length);
            assert_eq!(code.rows()[0], BinaryVector::zeros(length));
            assert!(code.rows()[code.len() - 1].bits().iter().all(|&b| b == 1));
        }
    }
}
