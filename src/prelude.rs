//! Commonly used types and functions
//!
//! ```rust
//! use meeras::prelude::*;
//! ```

pub use crate::core::{config, set_config, DeceasedGender, EngineConfig, MeerasError, Result, Share};
pub use crate::engine::{
    calculate, calculate_batch, calculate_with_config, format_fraction, Blocker, CalculationOutcome,
    CalculationResult, CalculationStep, InheritanceEngine,
};
pub use crate::heirs::{HeirCategory, HeirGroup, HeirId, HeirQuantities};
pub use crate::rules::{Language, RuleCategory, RuleText};
