//! Engine configuration with documented constants
//!
//! Every tolerance the calculation depends on lives here. Changing the
//! defaults changes which boundary cases are treated as "nothing left over"
//! or which fraction a share prints as.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{MeerasError, Result};

/// Configuration for the inheritance engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === DISTRIBUTION ===
    /// Residue at or below this value counts as fully distributed
    ///
    /// Applied before Ta'seeb and again before Radd.
    pub residue_epsilon: f64,

    /// Whether a surplus left over with only a spouse present returns to
    /// the spouse (rule 26) instead of going to Bait-ul-Mal
    pub radd_to_sole_spouse: bool,

    // === FRACTION FORMATTING ===
    /// Maximum distance between a share and `n/d` for `n/d` to be printed
    pub fraction_tolerance: f64,

    /// Shares at or above this value print as "1/1"
    pub whole_threshold: f64,

    /// Denominators tried first, in order
    ///
    /// These are the denominators the prescribed shares and their common
    /// 'Awal bases produce, so most results print with a familiar base.
    pub preferred_denominators: Vec<u32>,

    /// Upper bound of the 1..=N scan used when no preferred denominator fits
    pub max_fallback_denominator: u32,

    // === BATCHES ===
    /// Minimum batch size before `calculate_batch` goes parallel
    ///
    /// A single calculation takes microseconds; below this many cases the
    /// thread pool costs more than it saves.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            residue_epsilon: 1e-4,
            radd_to_sole_spouse: false,

            fraction_tolerance: 1e-6,
            whole_threshold: 0.999,
            preferred_denominators: vec![2, 3, 4, 6, 8, 12, 16, 24, 27, 32, 48],
            max_fallback_denominator: 100,

            parallel_threshold: 256,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.residue_epsilon > 0.0 && self.residue_epsilon < 1.0) {
            return Err(MeerasError::InvalidConfig(format!(
                "residue_epsilon ({}) must be in (0, 1)",
                self.residue_epsilon
            )));
        }

        if !(self.fraction_tolerance > 0.0 && self.fraction_tolerance < 1.0) {
            return Err(MeerasError::InvalidConfig(format!(
                "fraction_tolerance ({}) must be in (0, 1)",
                self.fraction_tolerance
            )));
        }

        if !(self.whole_threshold > 0.0 && self.whole_threshold <= 1.0) {
            return Err(MeerasError::InvalidConfig(format!(
                "whole_threshold ({}) must be in (0, 1]",
                self.whole_threshold
            )));
        }

        if self.preferred_denominators.is_empty() {
            return Err(MeerasError::InvalidConfig(
                "preferred_denominators must not be empty".into(),
            ));
        }

        if self.preferred_denominators.iter().any(|&d| d == 0) {
            return Err(MeerasError::InvalidConfig(
                "preferred_denominators must not contain 0".into(),
            ));
        }

        if self.max_fallback_denominator == 0 {
            return Err(MeerasError::InvalidConfig(
                "max_fallback_denominator must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EngineConfig) -> std::result::Result<(), EngineConfig> {
    CONFIG.set(config)
}
