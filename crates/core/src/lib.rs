//! DNA Code Core Library
//!
//! Construction de codes ADN à partir de codes linéaires binaires: chaque
//! symbole de 2 bits code un nucléotide, et le code est filtré selon les
//! contraintes reverse, reverse-complement et contenu GC.

pub mod config;
pub mod constraints;
pub mod encoder;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod transform;
pub mod vector;

// Réexportations principales
pub use config::BuildRequest;
pub use constraints::{
    build_dna_code, build_dna_code_from_names, build_with_report, gc_content_constraint,
    linear_code, orbit_filter, reverse_complement_constraint, reverse_constraint, Constraint,
    ConstraintFilter, ConstraintSet, ConstructionReport, StageSummary,
};
pub use encoder::{encode, encode_vector};
pub use enumerate::enumerate_vectors;
pub use error::{DnaCodeError, Result};
pub use logging::{init_logging, init_logging_with_verbosity};
pub use metrics::{
    gc_weight, gc_weight_enumerator, gc_weights, hamming_distance, minimum_distance, weight,
    weights, Distance, GcWeightEnumerator,
};
pub use transform::{
    complement, complement_all, reverse, reverse_all, reverse_complement,
    reverse_complement_all, SymbolTransform,
};
pub use vector::{BinaryVector, Code, GeneratorMatrix, Nucleotide};
