//! Sous-commandes

pub mod analyze;
pub mod build;
pub mod encode;
pub mod enumerate;
