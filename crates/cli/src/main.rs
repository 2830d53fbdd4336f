//! CLI pour la construction de codes ADN

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;
mod request;

use commands::{analyze, build, encode, enumerate};

#[derive(Parser)]
#[command(name = "dnacode")]
#[command(about = "Construction de codes ADN à partir de codes linéaires binaires", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Énumère tous les vecteurs binaires d'une longueur donnée
    Enumerate {
        /// Longueur des vecteurs
        #[arg(short, long)]
        length: usize,
    },

    /// Calcule le code linéaire complet d'une matrice génératrice
    Encode {
        /// Fichier contenant la matrice génératrice (JSON, TOML ou YAML)
        #[arg(short, long)]
        generator: PathBuf,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Construit un code ADN sous contraintes
    Build {
        /// Fichier de requête (generator, constraints, gc_weight)
        #[arg(short, long)]
        input: PathBuf,

        /// Contraintes à appliquer (remplace celles du fichier)
        #[arg(short, long = "constraint", value_enum)]
        constraints: Vec<ConstraintArg>,

        /// Ignore les contraintes du fichier et retourne le code linéaire
        #[arg(long, conflicts_with = "constraints")]
        unconstrained: bool,

        /// Poids GC cible (remplace celui du fichier)
        #[arg(short, long)]
        gc_weight: Option<usize>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Affiche le rapport de construction
        #[arg(short, long)]
        report: bool,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyse un code (poids, distance minimale, énumérateur GC)
    Analyze {
        /// Fichier JSON: liste de mots de code ou objet avec un champ "code"
        #[arg(short, long)]
        input: PathBuf,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ConstraintArg {
    Reverse,
    ReverseComplement,
    GcContent,
}

#[derive(clap::ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Dna,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dnacode_core::init_logging_with_verbosity(cli.verbose);

    match cli.command {
        Commands::Enumerate { length } => {
            enumerate::run(length)?;
        }
        Commands::Encode { generator, format } => {
            encode::run(generator, format)?;
        }
        Commands::Build {
            input,
            constraints,
            unconstrained,
            gc_weight,
            format,
            report,
            output,
        } => {
            let options = build::BuildOptions {
                constraints,
                unconstrained,
                gc_weight,
                format,
                report,
                output,
            };
            build::run(input, options)?;
        }
        Commands::Analyze { input, format } => {
            analyze::run(input, format)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}
