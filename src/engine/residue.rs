//! Stage 4 - residuary distribution (Ta'seeb)
//!
//! Residuary heirs are tried in priority order and only the first one
//! that applies takes the residue.

use crate::core::config::EngineConfig;
use crate::core::types::{nothing, share, share_to_f64, whole, Share};
use crate::engine::blocking::BlockingTable;
use crate::engine::context::HeirContext;
use crate::engine::shares::ShareTable;
use crate::engine::trace::CalculationStep;
use crate::heirs::HeirId;

/// Residuary portion per category, summed with the fixed share at output
pub type ResidueTable = ShareTable;

/// One residuary class: who qualifies and how the residue is divided
pub struct ResidueRule {
    pub name: &'static str,
    /// Rule text the trace cites
    pub rule: u8,
    pub applies: fn(&HeirContext, &BlockingTable) -> bool,
    pub distribute: fn(&HeirContext, &BlockingTable, Share) -> Vec<(HeirId, Share)>,
}

fn eligible(ctx: &HeirContext, blocking: &BlockingTable, id: HeirId) -> bool {
    ctx.has(id) && !blocking.is_blocked(id)
}

fn eligible_count(ctx: &HeirContext, blocking: &BlockingTable, id: HeirId) -> u32 {
    if blocking.is_blocked(id) {
        0
    } else {
        ctx.count(id)
    }
}

/// Divide `residue` so each male takes twice a female's portion
///
/// Returns the collective portions of the male and female categories.
pub fn split_two_to_one(residue: Share, males: u32, females: u32) -> (Share, Share) {
    let parts = 2 * males as i64 + females as i64;
    if parts == 0 {
        return (nothing(), nothing());
    }
    let part = residue * share(1, parts);
    (
        part * Share::from_integer(2 * males as i64),
        part * Share::from_integer(females as i64),
    )
}

fn male_with_female(
    ctx: &HeirContext,
    blocking: &BlockingTable,
    residue: Share,
    male: HeirId,
    female: HeirId,
) -> Vec<(HeirId, Share)> {
    let males = eligible_count(ctx, blocking, male);
    let females = eligible_count(ctx, blocking, female);
    let (male_share, female_share) = split_two_to_one(residue, males, females);

    let mut portions = vec![(male, male_share)];
    if females > 0 {
        portions.push((female, female_share));
    }
    portions
}

/// Residuary classes in priority order
pub static RESIDUE_PRIORITY: [ResidueRule; 7] = [
    ResidueRule {
        name: "sons with daughters",
        rule: 15,
        applies: |ctx, _| ctx.has(HeirId::Sons),
        distribute: |ctx, blocking, residue| {
            male_with_female(ctx, blocking, residue, HeirId::Sons, HeirId::Daughters)
        },
    },
    ResidueRule {
        name: "grandsons with granddaughters",
        rule: 15,
        applies: |ctx, blocking| eligible(ctx, blocking, HeirId::Grandsons),
        distribute: |ctx, blocking, residue| {
            male_with_female(ctx, blocking, residue, HeirId::Grandsons, HeirId::Granddaughters)
        },
    },
    ResidueRule {
        name: "father",
        rule: 14,
        applies: |ctx, _| ctx.has(HeirId::Father),
        distribute: |_, _, residue| vec![(HeirId::Father, residue)],
    },
    ResidueRule {
        name: "full brothers with full sisters",
        rule: 15,
        applies: |ctx, blocking| eligible(ctx, blocking, HeirId::FullBrothers),
        distribute: |ctx, blocking, residue| {
            male_with_female(ctx, blocking, residue, HeirId::FullBrothers, HeirId::FullSisters)
        },
    },
    ResidueRule {
        name: "full sisters with female descendants",
        rule: 44,
        applies: |ctx, blocking| {
            ctx.female_descendants && eligible(ctx, blocking, HeirId::FullSisters)
        },
        distribute: |_, _, residue| vec![(HeirId::FullSisters, residue)],
    },
    ResidueRule {
        name: "paternal sisters with female descendants",
        rule: 44,
        applies: |ctx, blocking| {
            ctx.female_descendants
                && !ctx.has(HeirId::PaternalBrothers)
                && eligible(ctx, blocking, HeirId::PaternalSisters)
        },
        distribute: |_, _, residue| vec![(HeirId::PaternalSisters, residue)],
    },
    ResidueRule {
        name: "grandfather",
        rule: 14,
        applies: |ctx, blocking| eligible(ctx, blocking, HeirId::Grandfather),
        distribute: |_, _, residue| vec![(HeirId::Grandfather, residue)],
    },
];

/// Hand whatever the fixed shares left over to the highest residuary class
///
/// Returns the residuary portions and the residue nobody took.
pub fn distribute_residue(
    ctx: &HeirContext,
    blocking: &BlockingTable,
    fixed: &ShareTable,
    config: &EngineConfig,
    steps: &mut Vec<CalculationStep>,
) -> (ResidueTable, Share) {
    let mut table = ResidueTable::new();
    let residue = whole() - fixed.total();

    if share_to_f64(&residue) <= config.residue_epsilon {
        return (table, residue);
    }

    let Some(rule) = RESIDUE_PRIORITY.iter().find(|r| (r.applies)(ctx, blocking)) else {
        tracing::debug!("no residuary heir for {}", residue);
        steps.push(CalculationStep::NoResiduaryHeir { residue });
        return (table, residue);
    };

    tracing::debug!(rule = rule.name, "residue {} distributed", residue);
    for (heir, portion) in (rule.distribute)(ctx, blocking, residue) {
        table.add(heir, portion);
        steps.push(CalculationStep::Residue { heir, share: portion, rule: rule.rule });
    }

    (table, nothing())
}
