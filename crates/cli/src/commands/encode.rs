//! Commande d'encodage linéaire

use crate::display::print_code;
use crate::request::load_request;
use crate::{create_spinner, OutputFormat};
use anyhow::Result;
use dnacode_core::linear_code;
use std::path::PathBuf;

pub fn run(generator: PathBuf, format: OutputFormat) -> Result<()> {
    let request = load_request(&generator)?;
    let matrix = request.generator_matrix()?;

    let spinner = create_spinner("Encodage des messages...");
    let code = linear_code(&matrix)?;
    spinner.finish_with_message(format!(
        "{} mots de code de longueur {}",
        code.len(),
        code.width()
    ));

    print_code(&code, format)
}
