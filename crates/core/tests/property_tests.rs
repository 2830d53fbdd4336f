//! Propriétés algébriques des transformations et métriques

use dnacode_core::{
    complement, encode, enumerate_vectors, gc_weight, hamming_distance, reverse,
    reverse_complement, BinaryVector, Code, GeneratorMatrix,
};
use proptest::prelude::*;

fn even_vector(max_symbols: usize) -> impl Strategy<Value = BinaryVector> {
    (0..=max_symbols)
        .prop_flat_map(|m| prop::collection::vec(0u8..=1, 2 * m))
        .prop_map(|bits| BinaryVector::new(bits).unwrap())
}

fn triple(len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>, Vec<u8>)> {
    let bits = || prop::collection::vec(0u8..=1, len);
    (bits(), bits(), bits())
}

fn generator_and_messages() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<u8>, Vec<u8>)> {
    (1usize..6, 1usize..10).prop_flat_map(|(k, n)| {
        (
            prop::collection::vec(prop::collection::vec(0u8..=1, n), k),
            prop::collection::vec(0u8..=1, k),
            prop::collection::vec(0u8..=1, k),
        )
    })
}

proptest! {
    #[test]
    fn reverse_is_involution(w in even_vector(16)) {
        prop_assert_eq!(reverse(&reverse(&w).unwrap()).unwrap(), w);
    }

    #[test]
    fn complement_is_involution(w in even_vector(16)) {
        prop_assert_eq!(complement(&complement(&w).unwrap()).unwrap(), w);
    }

    #[test]
    fn reverse_complement_is_involution(w in even_vector(16)) {
        prop_assert_eq!(reverse_complement(&reverse_complement(&w).unwrap()).unwrap(), w);
    }

    #[test]
    fn gc_weight_invariant_under_transforms(w in even_vector(16)) {
        let gc = gc_weight(&w).unwrap();
        prop_assert_eq!(gc_weight(&complement(&w).unwrap()).unwrap(), gc);
        prop_assert_eq!(gc_weight(&reverse(&w).unwrap()).unwrap(), gc);
    }

    #[test]
    fn hamming_is_a_metric((a, b, c) in (0usize..24).prop_flat_map(triple)) {
        let (a, b, c) = (
            BinaryVector::new(a).unwrap(),
            BinaryVector::new(b).unwrap(),
            BinaryVector::new(c).unwrap(),
        );
        prop_assert_eq!(hamming_distance(&a, &a).unwrap(), 0);
        prop_assert_eq!(hamming_distance(&a, &b).unwrap(), hamming_distance(&b, &a).unwrap());
        prop_assert!(
            hamming_distance(&a, &c).unwrap()
                <= hamming_distance(&a, &b).unwrap() + hamming_distance(&b, &c).unwrap()
        );
    }

    #[test]
    fn encode_is_linear((rows, m1, m2) in generator_and_messages()) {
        let g = GeneratorMatrix::new(rows).unwrap();
        let m1 = BinaryVector::new(m1).unwrap();
        let m2 = BinaryVector::new(m2).unwrap();
        let sum = m1.xor(&m2).unwrap();

        let messages = Code::new(vec![m1, m2, sum]).unwrap();
        let code = encode(&messages, &g).unwrap();
        let rows = code.rows();
        prop_assert_eq!(rows[0].xor(&rows[1]).unwrap(), rows[2].clone());
    }

    #[test]
    fn enumeration_is_strictly_increasing(length in 0usize..12) {
        let code = enumerate_vectors(length);
        prop_assert_eq!(code.len(), 1usize << length);
        let values: Vec<u64> = code
            .iter()
            .map(|v| v.bits().iter().fold(0u64, |acc, &b| (acc << 1) | b as u64))
            .collect();
        prop_assert!(values.windows(2).all(|w| w[0] + 1 == w[1]));
        prop_assert_eq!(values[0], 0);
    }
}
