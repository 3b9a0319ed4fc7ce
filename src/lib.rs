//! Meeras - Hanafi inheritance share calculation

pub mod core;
pub mod engine;
pub mod heirs;
pub mod prelude;
pub mod rules;
