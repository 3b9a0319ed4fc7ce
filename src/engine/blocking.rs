//! Stage 1 - exclusion of distant relatives by closer ones (Hajib)
//!
//! Blocking is recorded, not applied: a blocked category keeps its count
//! but later stages skip it. Every rule that reaches a present category
//! leaves a trace line; the category keeps the label of the first one.

use ahash::AHashMap;

use crate::engine::context::HeirContext;
use crate::engine::trace::{Blocker, CalculationStep};
use crate::heirs::HeirId;

const SIBLINGS_AND_NEPHEWS: [HeirId; 8] = [
    HeirId::FullBrothers,
    HeirId::FullSisters,
    HeirId::PaternalBrothers,
    HeirId::PaternalSisters,
    HeirId::MaternalBrothers,
    HeirId::MaternalSisters,
    HeirId::FullNephews,
    HeirId::PaternalNephews,
];

const FATHER_BLOCKS: [HeirId; 8] = [
    HeirId::Grandfather,
    HeirId::PaternalGrandmother,
    HeirId::FullBrothers,
    HeirId::FullSisters,
    HeirId::PaternalBrothers,
    HeirId::PaternalSisters,
    HeirId::MaternalBrothers,
    HeirId::MaternalSisters,
];

const GRANDMOTHERS: [HeirId; 2] = [HeirId::PaternalGrandmother, HeirId::MaternalGrandmother];
const GRANDCHILDREN: [HeirId; 2] = [HeirId::Grandsons, HeirId::Granddaughters];
const MATERNAL_SIBLINGS: [HeirId; 2] = [HeirId::MaternalBrothers, HeirId::MaternalSisters];
const PATERNAL_SIBLINGS: [HeirId; 2] = [HeirId::PaternalBrothers, HeirId::PaternalSisters];

/// A blocking rule: when its precondition holds, every listed category
/// that is present is excluded under the returned label
pub struct BlockingRule {
    pub name: &'static str,
    pub blocker: fn(&HeirContext) -> Option<Blocker>,
    pub targets: &'static [HeirId],
}

/// Blocking rules in evaluation order
pub static BLOCKING_RULES: [BlockingRule; 9] = [
    BlockingRule {
        name: "male descendant blocks siblings and nephews",
        blocker: |ctx| {
            if ctx.has(HeirId::Sons) {
                Some(Blocker::Son)
            } else if ctx.has(HeirId::Grandsons) {
                Some(Blocker::Grandson)
            } else {
                None
            }
        },
        targets: &SIBLINGS_AND_NEPHEWS,
    },
    BlockingRule {
        name: "father blocks grandfather, paternal grandmother and siblings",
        blocker: |ctx| ctx.has(HeirId::Father).then_some(Blocker::Father),
        targets: &FATHER_BLOCKS,
    },
    BlockingRule {
        name: "mother blocks grandmothers",
        blocker: |ctx| ctx.has(HeirId::Mother).then_some(Blocker::Mother),
        targets: &GRANDMOTHERS,
    },
    BlockingRule {
        name: "son blocks grandchildren",
        blocker: |ctx| ctx.has(HeirId::Sons).then_some(Blocker::Son),
        targets: &GRANDCHILDREN,
    },
    BlockingRule {
        name: "female descendant blocks maternal siblings",
        blocker: |ctx| {
            if ctx.has(HeirId::Daughters) {
                Some(Blocker::Daughter)
            } else if ctx.has(HeirId::Granddaughters) {
                Some(Blocker::Granddaughter)
            } else {
                None
            }
        },
        targets: &MATERNAL_SIBLINGS,
    },
    BlockingRule {
        name: "grandfather blocks maternal siblings",
        blocker: |ctx| ctx.has(HeirId::Grandfather).then_some(Blocker::Grandfather),
        targets: &MATERNAL_SIBLINGS,
    },
    BlockingRule {
        name: "two daughters exhaust the granddaughters' two-thirds",
        blocker: |ctx| {
            (ctx.count(HeirId::Daughters) >= 2 && !ctx.male_descendants)
                .then_some(Blocker::Daughters)
        },
        targets: &[HeirId::Granddaughters],
    },
    BlockingRule {
        name: "full brother blocks paternal siblings",
        blocker: |ctx| ctx.has(HeirId::FullBrothers).then_some(Blocker::FullBrother),
        targets: &PATERNAL_SIBLINGS,
    },
    BlockingRule {
        name: "two full sisters exhaust the paternal sisters' two-thirds",
        blocker: |ctx| {
            (ctx.count(HeirId::FullSisters) >= 2 && !ctx.has(HeirId::PaternalBrothers))
                .then_some(Blocker::FullSisters)
        },
        targets: &[HeirId::PaternalSisters],
    },
];

/// Which present categories are excluded, and by whom
#[derive(Debug, Clone, Default)]
pub struct BlockingTable {
    blocked: AHashMap<HeirId, Blocker>,
}

impl BlockingTable {
    pub fn is_blocked(&self, id: HeirId) -> bool {
        self.blocked.contains_key(&id)
    }

    pub fn blocker(&self, id: HeirId) -> Option<Blocker> {
        self.blocked.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Record a block; an earlier label is kept
    fn block(&mut self, id: HeirId, by: Blocker) {
        self.blocked.entry(id).or_insert(by);
    }
}

/// Run every blocking rule against the inputs
pub fn determine_blocking(ctx: &HeirContext, steps: &mut Vec<CalculationStep>) -> BlockingTable {
    let mut table = BlockingTable::default();

    for rule in &BLOCKING_RULES {
        let Some(by) = (rule.blocker)(ctx) else {
            continue;
        };
        for &heir in rule.targets {
            if ctx.has(heir) {
                tracing::debug!(rule = rule.name, "{} blocked by {}", heir, by);
                table.block(heir, by);
                steps.push(CalculationStep::Blocked { heir, by });
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DeceasedGender;
    use crate::heirs::HeirQuantities;

    fn run(q: &HeirQuantities) -> (BlockingTable, Vec<CalculationStep>) {
        let ctx = HeirContext::new(q, DeceasedGender::Male);
        let mut steps = Vec::new();
        let table = determine_blocking(&ctx, &mut steps);
        (table, steps)
    }

    #[test]
    fn test_son_blocks_siblings_and_nephews() {
        let q = HeirQuantities::new()
            .with(HeirId::Sons, 1)
            .with(HeirId::FullBrothers, 2)
            .with(HeirId::MaternalSisters, 1)
            .with(HeirId::FullNephews, 3);
        let (table, steps) = run(&q);

        assert_eq!(table.blocker(HeirId::FullBrothers), Some(Blocker::Son));
        assert_eq!(table.blocker(HeirId::MaternalSisters), Some(Blocker::Son));
        assert_eq!(table.blocker(HeirId::FullNephews), Some(Blocker::Son));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].to_string(), "Full Brothers blocked by Son");
    }

    #[test]
    fn test_grandson_label_without_son() {
        let q = HeirQuantities::new()
            .with(HeirId::Grandsons, 1)
            .with(HeirId::FullSisters, 1);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::FullSisters), Some(Blocker::Grandson));
        assert!(!table.is_blocked(HeirId::Grandsons));
    }

    #[test]
    fn test_absent_categories_are_not_blocked() {
        let q = HeirQuantities::new().with(HeirId::Father, 1);
        let (table, steps) = run(&q);
        assert!(table.is_empty());
        assert!(steps.is_empty());
    }

    #[test]
    fn test_father_blocks_grandfather_and_paternal_grandmother() {
        let q = HeirQuantities::new()
            .with(HeirId::Father, 1)
            .with(HeirId::Grandfather, 1)
            .with(HeirId::PaternalGrandmother, 1)
            .with(HeirId::MaternalGrandmother, 1);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::Grandfather), Some(Blocker::Father));
        assert_eq!(table.blocker(HeirId::PaternalGrandmother), Some(Blocker::Father));
        assert!(!table.is_blocked(HeirId::MaternalGrandmother));
    }

    #[test]
    fn test_first_label_wins() {
        let q = HeirQuantities::new()
            .with(HeirId::Father, 1)
            .with(HeirId::Mother, 1)
            .with(HeirId::PaternalGrandmother, 1);
        let (table, steps) = run(&q);
        assert_eq!(table.blocker(HeirId::PaternalGrandmother), Some(Blocker::Father));
        assert_eq!(table.len(), 1);

        let lines: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Paternal Grandmother blocked by Father",
                "Paternal Grandmother blocked by Mother",
            ]
        );
    }

    #[test]
    fn test_every_blocking_rule_leaves_a_line() {
        let q = HeirQuantities::new()
            .with(HeirId::Sons, 1)
            .with(HeirId::Father, 1)
            .with(HeirId::FullBrothers, 1);
        let (table, steps) = run(&q);

        assert_eq!(table.blocker(HeirId::FullBrothers), Some(Blocker::Son));
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].to_string(), "Full Brothers blocked by Son");
        assert_eq!(steps[1].to_string(), "Full Brothers blocked by Father");
    }

    #[test]
    fn test_mother_blocks_both_grandmothers() {
        let q = HeirQuantities::new()
            .with(HeirId::Mother, 1)
            .with(HeirId::PaternalGrandmother, 1)
            .with(HeirId::MaternalGrandmother, 1);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::PaternalGrandmother), Some(Blocker::Mother));
        assert_eq!(table.blocker(HeirId::MaternalGrandmother), Some(Blocker::Mother));
    }

    #[test]
    fn test_daughter_blocks_maternal_siblings() {
        let q = HeirQuantities::new()
            .with(HeirId::Daughters, 1)
            .with(HeirId::MaternalBrothers, 2);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::MaternalBrothers), Some(Blocker::Daughter));
    }

    #[test]
    fn test_two_daughters_block_granddaughters_unless_grandson() {
        let q = HeirQuantities::new()
            .with(HeirId::Daughters, 2)
            .with(HeirId::Granddaughters, 1);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::Granddaughters), Some(Blocker::Daughters));

        let q = q.with(HeirId::Grandsons, 1);
        let (table, _) = run(&q);
        assert!(!table.is_blocked(HeirId::Granddaughters));
    }

    #[test]
    fn test_full_brother_blocks_paternal_siblings() {
        let q = HeirQuantities::new()
            .with(HeirId::FullBrothers, 1)
            .with(HeirId::PaternalBrothers, 1)
            .with(HeirId::PaternalSisters, 2);
        let (table, _) = run(&q);
        assert_eq!(table.blocker(HeirId::PaternalBrothers), Some(Blocker::FullBrother));
        assert_eq!(table.blocker(HeirId::PaternalSisters), Some(Blocker::FullBrother));
    }

    #[test]
    fn test_spouses_never_blocked() {
        let mut q = HeirQuantities::all_zero();
        for id in HeirId::ALL {
            q.set(id, 1);
        }
        let (table, _) = run(&q);
        assert!(!table.is_blocked(HeirId::Wives));
        assert!(!table.is_blocked(HeirId::Husband));
        assert!(!table.is_blocked(HeirId::Sons));
        assert!(!table.is_blocked(HeirId::Mother));
    }
}
