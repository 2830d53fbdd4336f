//! Affichage des codes et des rapports

mod stats;
mod table;

pub use stats::{print_analysis, print_report, CodeAnalysis};
pub use table::print_code;
