//! Derived predicates every stage reads

use crate::core::types::DeceasedGender;
use crate::heirs::{HeirId, HeirQuantities};

/// Read-only view of one calculation's inputs plus the facts derived from them
#[derive(Debug, Clone, Copy)]
pub struct HeirContext<'a> {
    quantities: &'a HeirQuantities,
    pub gender: DeceasedGender,
    /// Any son, daughter, grandson or granddaughter
    pub has_descendants: bool,
    /// Any son or grandson
    pub male_descendants: bool,
    /// Any daughter or granddaughter
    pub female_descendants: bool,
    /// Sum over all six sibling categories, blocked or not
    pub total_siblings: u32,
}

impl<'a> HeirContext<'a> {
    pub fn new(quantities: &'a HeirQuantities, gender: DeceasedGender) -> Self {
        let has = |id: HeirId| quantities.get(id) > 0;

        let male_descendants = has(HeirId::Sons) || has(HeirId::Grandsons);
        let female_descendants = has(HeirId::Daughters) || has(HeirId::Granddaughters);

        Self {
            quantities,
            gender,
            has_descendants: male_descendants || female_descendants,
            male_descendants,
            female_descendants,
            total_siblings: quantities.total(&HeirId::SIBLINGS),
        }
    }

    /// Count for a category; 0 for the spouse category the gender rules out
    pub fn count(&self, id: HeirId) -> u32 {
        if id.applies_to(self.gender) {
            self.quantities.get(id)
        } else {
            0
        }
    }

    pub fn has(&self, id: HeirId) -> bool {
        self.count(id) > 0
    }

    /// The spouse category that can inherit, if one is present
    pub fn spouse(&self) -> Option<HeirId> {
        let id = match self.gender {
            DeceasedGender::Female => HeirId::Husband,
            DeceasedGender::Male => HeirId::Wives,
        };
        self.has(id).then_some(id)
    }
}
