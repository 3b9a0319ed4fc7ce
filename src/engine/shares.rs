//! Stage 2 - prescribed shares (Zawil Furud)
//!
//! Assignments run in a fixed order. Each targets its own categories, so
//! the order only shows in the trace, except that the mother's rule reads
//! the spouse share assigned before it.

use ahash::AHashMap;
use num_traits::Zero;

use crate::core::types::{nothing, share, whole, Share};
use crate::engine::blocking::BlockingTable;
use crate::engine::context::HeirContext;
use crate::engine::trace::CalculationStep;
use crate::heirs::HeirId;

/// Exact share per heir category
///
/// Used both for the prescribed shares and for the residue added on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareTable {
    shares: AHashMap<HeirId, Share>,
}

impl ShareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of a category, zero when unassigned
    pub fn get(&self, id: HeirId) -> Share {
        self.shares.get(&id).copied().unwrap_or_else(nothing)
    }

    pub fn set(&mut self, id: HeirId, value: Share) {
        self.shares.insert(id, value);
    }

    /// Add to a category's share
    pub fn add(&mut self, id: HeirId, value: Share) {
        let entry = self.shares.entry(id).or_insert_with(nothing);
        *entry += value;
    }

    pub fn total(&self) -> Share {
        self.shares.values().fold(nothing(), |acc, s| acc + s)
    }

    /// Multiply every share by `factor`
    pub fn scale_all(&mut self, factor: Share) {
        for value in self.shares.values_mut() {
            *value *= factor;
        }
    }

    /// Multiply the shares of categories matching `filter` by `factor`
    pub fn scale_where(&mut self, factor: Share, filter: impl Fn(HeirId) -> bool) {
        for (id, value) in self.shares.iter_mut() {
            if filter(*id) {
                *value *= factor;
            }
        }
    }

    /// Sum of shares of categories matching `filter`
    pub fn total_where(&self, filter: impl Fn(HeirId) -> bool) -> Share {
        self.shares
            .iter()
            .filter(|(id, _)| filter(**id))
            .fold(nothing(), |acc, (_, s)| acc + s)
    }

    /// Categories holding a nonzero share
    pub fn holders(&self) -> impl Iterator<Item = HeirId> + '_ {
        self.shares
            .iter()
            .filter(|(_, s)| !s.is_zero())
            .map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.shares.values().all(|s| s.is_zero())
    }
}

/// Half for a single heir, two-thirds for several
fn half_or_two_thirds(count: u32) -> Share {
    if count == 1 {
        share(1, 2)
    } else {
        share(2, 3)
    }
}

struct Assigner<'a, 'b> {
    ctx: &'a HeirContext<'b>,
    blocking: &'a BlockingTable,
    table: ShareTable,
    steps: &'a mut Vec<CalculationStep>,
}

impl Assigner<'_, '_> {
    /// Present and not blocked
    fn eligible(&self, id: HeirId) -> bool {
        self.ctx.has(id) && !self.blocking.is_blocked(id)
    }

    fn assign(&mut self, heir: HeirId, value: Share, rule: u8) {
        tracing::debug!("fixed share: {} = {}", heir, value);
        self.table.set(heir, value);
        self.steps.push(CalculationStep::FixedShare { heir, share: value, rule });
    }

    fn spouses(&mut self) {
        let ctx = self.ctx;
        if self.eligible(HeirId::Husband) {
            let value = if ctx.has_descendants { share(1, 4) } else { share(1, 2) };
            self.assign(HeirId::Husband, value, 1);
        }
        // One pool for all wives together
        if self.eligible(HeirId::Wives) {
            let value = if ctx.has_descendants { share(1, 8) } else { share(1, 4) };
            self.assign(HeirId::Wives, value, 2);
        }
    }

    fn daughters(&mut self) {
        // With a son present daughters share the residue instead
        if self.eligible(HeirId::Daughters) && !self.ctx.has(HeirId::Sons) {
            let value = half_or_two_thirds(self.ctx.count(HeirId::Daughters));
            self.assign(HeirId::Daughters, value, 3);
        }
    }

    fn mother(&mut self) {
        if !self.eligible(HeirId::Mother) {
            return;
        }
        let ctx = self.ctx;

        if let Some(spouse) = ctx.spouse() {
            let spouse_share = self.table.get(spouse);
            let umar_case = !ctx.has_descendants
                && ctx.total_siblings <= 1
                && ctx.has(HeirId::Father)
                && !spouse_share.is_zero();
            if umar_case {
                let value = (whole() - spouse_share) * share(1, 3);
                tracing::debug!("umar's case: mother = {}", value);
                self.table.set(HeirId::Mother, value);
                self.steps.push(CalculationStep::UmarCase { spouse, mother_share: value });
                return;
            }
        }

        let value = if ctx.has_descendants || ctx.total_siblings >= 2 {
            share(1, 6)
        } else {
            share(1, 3)
        };
        self.assign(HeirId::Mother, value, 6);
    }

    fn father(&mut self) {
        // Without descendants the father is purely residuary
        if self.eligible(HeirId::Father) && self.ctx.has_descendants {
            self.assign(HeirId::Father, share(1, 6), 5);
        }
    }

    fn maternal_siblings(&mut self) {
        let brothers = if self.eligible(HeirId::MaternalBrothers) {
            self.ctx.count(HeirId::MaternalBrothers)
        } else {
            0
        };
        let sisters = if self.eligible(HeirId::MaternalSisters) {
            self.ctx.count(HeirId::MaternalSisters)
        } else {
            0
        };
        let total = brothers + sisters;
        if total == 0 {
            return;
        }

        // Equal split per head, no 2:1 between brothers and sisters
        let pool = if total == 1 { share(1, 6) } else { share(1, 3) };
        for (heir, count) in [(HeirId::MaternalBrothers, brothers), (HeirId::MaternalSisters, sisters)] {
            if count > 0 {
                let value = pool * share(count as i64, total as i64);
                self.assign(heir, value, 12);
            }
        }
    }

    fn full_sisters(&mut self) {
        // With a full brother they share the residue; with a female
        // descendant they take the residue jointly with her
        let ctx = self.ctx;
        if self.eligible(HeirId::FullSisters)
            && !ctx.has(HeirId::FullBrothers)
            && !ctx.female_descendants
        {
            let value = half_or_two_thirds(ctx.count(HeirId::FullSisters));
            self.assign(HeirId::FullSisters, value, 10);
        }
    }

    fn grandfather(&mut self) {
        if self.eligible(HeirId::Grandfather) && self.ctx.has_descendants {
            self.assign(HeirId::Grandfather, share(1, 6), 7);
        }
    }

    fn grandmothers(&mut self) {
        let present: Vec<HeirId> = [HeirId::PaternalGrandmother, HeirId::MaternalGrandmother]
            .into_iter()
            .filter(|&id| self.eligible(id))
            .collect();
        if present.is_empty() {
            return;
        }

        let value = share(1, 6) * share(1, present.len() as i64);
        for heir in present {
            let rule = if heir == HeirId::PaternalGrandmother { 8 } else { 9 };
            self.assign(heir, value, rule);
        }
    }

    fn granddaughters(&mut self) {
        let ctx = self.ctx;
        if !self.eligible(HeirId::Granddaughters) || ctx.male_descendants {
            return;
        }
        let value = match ctx.count(HeirId::Daughters) {
            0 => half_or_two_thirds(ctx.count(HeirId::Granddaughters)),
            // completes the two-thirds with a single daughter
            1 => share(1, 6),
            _ => return,
        };
        self.assign(HeirId::Granddaughters, value, 4);
    }

    fn paternal_sisters(&mut self) {
        let ctx = self.ctx;
        if !self.eligible(HeirId::PaternalSisters)
            || ctx.has(HeirId::PaternalBrothers)
            || ctx.female_descendants
        {
            return;
        }
        let value = match ctx.count(HeirId::FullSisters) {
            0 => half_or_two_thirds(ctx.count(HeirId::PaternalSisters)),
            1 => share(1, 6),
            _ => return,
        };
        self.assign(HeirId::PaternalSisters, value, 11);
    }
}

/// Assign every prescribed share the inputs call for
pub fn assign_prescribed_shares(
    ctx: &HeirContext,
    blocking: &BlockingTable,
    steps: &mut Vec<CalculationStep>,
) -> ShareTable {
    let mut assigner = Assigner {
        ctx,
        blocking,
        table: ShareTable::new(),
        steps,
    };

    assigner.spouses();
    assigner.daughters();
    assigner.mother();
    assigner.father();
    assigner.maternal_siblings();
    assigner.full_sisters();
    assigner.grandfather();
    assigner.grandmothers();
    assigner.granddaughters();
    assigner.paternal_sisters();

    assigner.table
}
