//! Proportional corrections: 'Awal (Stage 3) and Radd (Stage 5)

use num_traits::{One, Zero};

use crate::core::config::EngineConfig;
use crate::core::types::{nothing, share_to_f64, whole, Share};
use crate::engine::context::HeirContext;
use crate::engine::shares::ShareTable;
use crate::engine::trace::CalculationStep;

/// Scale every fixed share down when together they exceed the estate
///
/// Spouses are reduced along with everyone else. Returns whether 'Awal
/// applied.
pub fn apply_awal(fixed: &mut ShareTable, steps: &mut Vec<CalculationStep>) -> bool {
    let total = fixed.total();
    if total <= Share::one() {
        return false;
    }

    tracing::debug!("'awal: fixed shares total {}", total);
    fixed.scale_all(total.recip());
    steps.push(CalculationStep::Awal { total });
    true
}

/// Return a surplus to the fixed-share heirs
///
/// Non-spouse holders are scaled up by `1 + surplus / their total`. With no
/// such holder the surplus goes to a sole spouse when the config allows it,
/// otherwise to Bait-ul-Mal. Returns the part of the estate left with no
/// heir.
pub fn apply_radd(
    ctx: &HeirContext,
    fixed: &mut ShareTable,
    surplus: Share,
    config: &EngineConfig,
    steps: &mut Vec<CalculationStep>,
) -> Share {
    if share_to_f64(&surplus) <= config.residue_epsilon {
        return nothing();
    }

    let radd_sum = fixed.total_where(|id| !id.is_spouse());
    if !radd_sum.is_zero() {
        let factor = whole() + surplus / radd_sum;
        tracing::debug!("radd: surplus {} factor {}", surplus, factor);
        fixed.scale_where(factor, |id| !id.is_spouse());
        steps.push(CalculationStep::Radd { surplus, factor });
        return nothing();
    }

    if config.radd_to_sole_spouse {
        if let Some(heir) = ctx.spouse() {
            tracing::debug!("surplus {} returned to {}", surplus, heir);
            fixed.add(heir, surplus);
            steps.push(CalculationStep::SpouseReturn { heir, surplus });
            return nothing();
        }
    }

    tracing::debug!("surplus {} to bait-ul-mal", surplus);
    steps.push(CalculationStep::BaitUlMal { surplus });
    surplus
}
