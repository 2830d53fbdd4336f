//! Commande d'énumération

use anyhow::Result;
use dnacode_core::enumerate_vectors;

pub fn run(length: usize) -> Result<()> {
    let vectors = enumerate_vectors(length);
    tracing::info!(length, count = vectors.len(), "vecteurs énumérés");

    for vector in &vectors {
        println!("{}", vector);
    }

    Ok(())
}
