//! Affichage des mots de code

use crate::OutputFormat;
use anyhow::Result;
use dnacode_core::{gc_weight, weight, Code};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CodewordRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Bits")]
    bits: String,
    #[tabled(rename = "DNA")]
    dna: String,
    #[tabled(rename = "Weight")]
    weight: usize,
    #[tabled(rename = "GC")]
    gc: String,
}

/// Affiche un code selon le format demandé
pub fn print_code(code: &Code, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<CodewordRow> = code
                .iter()
                .enumerate()
                .map(|(index, word)| CodewordRow {
                    index,
                    bits: word.to_string(),
                    dna: word.to_dna_string().unwrap_or_else(|_| "-".to_string()),
                    weight: weight(word),
                    gc: gc_weight(word).map_or_else(|_| "-".to_string(), |g| g.to_string()),
                })
                .collect();
            println!();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(code)?);
        }
        OutputFormat::Dna => {
            for (index, word) in code.iter().enumerate() {
                println!(">codeword_{}|bits:{}", index, word);
                println!("{}", word.to_dna_string()?);
            }
        }
    }
    Ok(())
}
