//! Commande d'analyse d'un code

use crate::display::{print_analysis, CodeAnalysis};
use crate::request::load_json;
use crate::OutputFormat;
use anyhow::Result;
use dnacode_core::input::code_from_value;
use std::path::PathBuf;

pub fn run(input: PathBuf, format: OutputFormat) -> Result<()> {
    let json = load_json(&input)?;
    let value = json.get("code").unwrap_or(&json);
    let code = code_from_value(value)?;

    let analysis = CodeAnalysis::compute(&code)?;
    print_analysis(&code, &analysis, format)
}
