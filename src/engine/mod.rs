//! The inheritance calculation
//!
//! One calculation runs five stages over a fresh set of tables:
//! blocking, prescribed shares, 'Awal, Ta'seeb and Radd. Every stage
//! appends to the same trace.

pub mod blocking;
pub mod context;
pub mod correction;
pub mod fraction;
pub mod residue;
pub mod result;
pub mod shares;
pub mod trace;

pub use blocking::{determine_blocking, BlockingTable};
pub use context::HeirContext;
pub use fraction::{format_fraction, format_share};
pub use residue::{split_two_to_one, ResidueTable};
pub use result::{CalculationOutcome, CalculationResult};
pub use shares::ShareTable;
pub use trace::{Blocker, CalculationStep};

use rayon::prelude::*;

use crate::core::config::{config, EngineConfig};
use crate::core::types::DeceasedGender;
use crate::heirs::HeirQuantities;

/// Runs calculations against one configuration
#[derive(Debug, Clone, Default)]
pub struct InheritanceEngine {
    config: EngineConfig,
}

impl InheritanceEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine over the process-wide config
    pub fn global() -> Self {
        Self::new(config().clone())
    }

    /// Distribute the estate among the given heirs
    pub fn calculate(&self, quantities: &HeirQuantities, gender: DeceasedGender) -> CalculationOutcome {
        let ctx = HeirContext::new(quantities, gender);
        let mut steps = Vec::new();

        // Stage 1
        let blocking = determine_blocking(&ctx, &mut steps);

        // Stage 2
        let mut fixed = shares::assign_prescribed_shares(&ctx, &blocking, &mut steps);

        // Stage 3
        correction::apply_awal(&mut fixed, &mut steps);

        // Stage 4
        let (residue_table, residue) =
            residue::distribute_residue(&ctx, &blocking, &fixed, &self.config, &mut steps);

        // Stage 5
        let unclaimed = correction::apply_radd(&ctx, &mut fixed, residue, &self.config, &mut steps);

        let results = result::assemble_results(
            quantities,
            gender,
            &blocking,
            &fixed,
            &residue_table,
            &self.config,
        );

        tracing::debug!(
            gender = %gender,
            heirs = results.len(),
            blocked = blocking.len(),
            steps = steps.len(),
            "calculation complete"
        );

        CalculationOutcome { results, steps, unclaimed }
    }

    /// Calculate many independent cases; output order matches input order
    pub fn calculate_batch(&self, cases: &[(HeirQuantities, DeceasedGender)]) -> Vec<CalculationOutcome> {
        tracing::info!(cases = cases.len(), "calculating batch");

        if cases.len() >= self.config.parallel_threshold {
            // PARALLEL: cases share nothing but the config
            cases
                .par_iter()
                .map(|(quantities, gender)| self.calculate(quantities, *gender))
                .collect()
        } else {
            cases
                .iter()
                .map(|(quantities, gender)| self.calculate(quantities, *gender))
                .collect()
        }
    }
}

/// Calculate with the process-wide config
pub fn calculate(quantities: &HeirQuantities, gender: DeceasedGender) -> CalculationOutcome {
    calculate_with_config(quantities, gender, config())
}

pub fn calculate_with_config(
    quantities: &HeirQuantities,
    gender: DeceasedGender,
    config: &EngineConfig,
) -> CalculationOutcome {
    InheritanceEngine::new(config.clone()).calculate(quantities, gender)
}

/// Batch calculation with the process-wide config
pub fn calculate_batch(cases: &[(HeirQuantities, DeceasedGender)]) -> Vec<CalculationOutcome> {
    InheritanceEngine::global().calculate_batch(cases)
}
