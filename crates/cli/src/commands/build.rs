//! Commande de construction d'un code ADN

use crate::display::{print_code, print_report};
use crate::request::load_request;
use crate::{create_spinner, ConstraintArg, OutputFormat};
use anyhow::Result;
use dnacode_core::Constraint;
use std::path::PathBuf;

/// Options de la ligne de commande qui complètent le fichier de requête
pub struct BuildOptions {
    pub constraints: Vec<ConstraintArg>,
    pub unconstrained: bool,
    pub gc_weight: Option<usize>,
    pub format: OutputFormat,
    pub report: bool,
    pub output: Option<PathBuf>,
}

fn to_constraint(arg: ConstraintArg) -> Constraint {
    match arg {
        ConstraintArg::Reverse => Constraint::Reverse,
        ConstraintArg::ReverseComplement => Constraint::ReverseComplement,
        ConstraintArg::GcContent => Constraint::GcContent,
    }
}

pub fn run(input: PathBuf, options: BuildOptions) -> Result<()> {
    let mut request = load_request(&input)?;

    if options.unconstrained {
        request.constraints.clear();
    } else if !options.constraints.is_empty() {
        request.constraints = options
            .constraints
            .iter()
            .map(|&c| to_constraint(c).as_str().to_string())
            .collect();
    }
    if options.gc_weight.is_some() {
        request.gc_weight = options.gc_weight;
    }

    let spinner = create_spinner("Construction du code ADN...");
    let report = request.run()?;
    spinner.finish_with_message(format!("{} mots de code retenus", report.code.len()));

    if let Some(path) = &options.output {
        let json = if options.report {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string_pretty(&report.code)?
        };
        std::fs::write(path, json)?;
        println!("Code écrit dans {}", path.display());
        return Ok(());
    }

    if options.report && options.format != OutputFormat::Json {
        print_report(&report);
    }
    if options.report && options.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_code(&report.code, options.format)
}
