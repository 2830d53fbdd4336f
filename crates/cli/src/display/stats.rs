//! Affichage des statistiques

use crate::display::print_code;
use crate::OutputFormat;
use anyhow::Result;
use console::style;
use dnacode_core::{
    gc_weights, minimum_distance, weights, Code, ConstructionReport, Distance,
    GcWeightEnumerator,
};
use serde::Serialize;

/// Métriques d'un code
#[derive(Debug, Serialize)]
pub struct CodeAnalysis {
    pub size: usize,
    pub length: usize,
    pub weights: Vec<usize>,
    pub gc_weights: Option<Vec<usize>>,
    pub minimum_distance: Distance,
    pub gc_enumerator: Option<String>,
}

impl CodeAnalysis {
    pub fn compute(code: &Code) -> Result<Self> {
        let even = code.width() % 2 == 0;
        Ok(Self {
            size: code.len(),
            length: code.width(),
            weights: weights(code),
            gc_weights: if even { Some(gc_weights(code)?) } else { None },
            minimum_distance: minimum_distance(code),
            gc_enumerator: if even {
                Some(GcWeightEnumerator::from_code(code)?.to_string())
            } else {
                None
            },
        })
    }
}

/// Affiche l'analyse d'un code
pub fn print_analysis(code: &Code, analysis: &CodeAnalysis, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    println!("\n{}", style("📊 Analyse du code").bold());
    println!("   Mots de code       : {}", analysis.size);
    println!("   Longueur           : {}", analysis.length);
    println!("   Distance minimale  : {}", analysis.minimum_distance);
    if let Some(enumerator) = &analysis.gc_enumerator {
        println!("   Énumérateur GC     : {}", enumerator);
    }

    // le rendu ADN exige une longueur paire
    if format == OutputFormat::Dna && code.width() % 2 != 0 {
        return print_code(code, OutputFormat::Table);
    }
    print_code(code, format)
}

/// Affiche le rapport d'une construction
pub fn print_report(report: &ConstructionReport) {
    println!("\n{}", style("🧬 Construction du code ADN").bold());
    println!("   Matrice génératrice : {}×{}", report.dimension, report.length);
    for stage in &report.stages {
        println!("   {:<20}: {} mots", style(&stage.stage).cyan(), stage.size);
    }
    println!("   Distance minimale   : {}", report.minimum_distance);
    if let Some(enumerator) = &report.gc_enumerator {
        println!("   Énumérateur GC      : {}", enumerator);
    }
}
