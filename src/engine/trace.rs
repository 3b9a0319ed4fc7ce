//! Calculation trace
//!
//! Each stage appends typed steps; `Display` renders the line shown to the
//! user. Steps that correspond to a numbered rule carry its number so the
//! presentation layer can link into the rule-text catalog.

use serde::Serialize;
use std::fmt;

use crate::core::types::Share;
use crate::heirs::HeirId;
use crate::rules::RuleText;

/// Who (or what) excluded a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Blocker {
    Son,
    Grandson,
    Father,
    Mother,
    Daughter,
    Granddaughter,
    Grandfather,
    /// Two or more daughters exhaust the 2/3 for granddaughters
    Daughters,
    FullBrother,
    /// Two or more full sisters exhaust the 2/3 for paternal sisters
    FullSisters,
    /// No explicit rule fired, but nothing was left for this category
    HigherRank,
}

impl Blocker {
    pub fn label(&self) -> &'static str {
        match self {
            Blocker::Son => "Son",
            Blocker::Grandson => "Grandson",
            Blocker::Father => "Father",
            Blocker::Mother => "Mother",
            Blocker::Daughter => "Daughter",
            Blocker::Granddaughter => "Granddaughter",
            Blocker::Grandfather => "Grandfather",
            Blocker::Daughters => "Daughters",
            Blocker::FullBrother => "Full Brother",
            Blocker::FullSisters => "Full Sisters",
            Blocker::HigherRank => "Higher Rank Heir",
        }
    }
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the calculation trace
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationStep {
    /// Stage 1: a present category excluded by a closer relative
    Blocked { heir: HeirId, by: Blocker },
    /// Stage 2: a prescribed share
    FixedShare { heir: HeirId, share: Share, rule: u8 },
    /// Stage 2: mother takes a third of what the spouse leaves
    UmarCase { spouse: HeirId, mother_share: Share },
    /// Stage 3: fixed shares exceeded the estate and were scaled down
    Awal { total: Share },
    /// Stage 4: residuary share
    Residue { heir: HeirId, share: Share, rule: u8 },
    /// Stage 4: residue remained with nobody entitled to it
    NoResiduaryHeir { residue: Share },
    /// Stage 5: surplus returned to non-spouse fixed-share heirs
    Radd { surplus: Share, factor: Share },
    /// Stage 5: surplus returned to a spouse who is the only heir
    SpouseReturn { heir: HeirId, surplus: Share },
    /// Stage 5: surplus with no eligible recipient
    BaitUlMal { surplus: Share },
}

impl CalculationStep {
    /// Number of the rule text this step applies, if any
    pub fn rule_id(&self) -> Option<u8> {
        match self {
            CalculationStep::Blocked { by, .. } => Some(match by {
                Blocker::Father => 34,
                Blocker::Daughters | Blocker::FullSisters => 30,
                _ => 13,
            }),
            CalculationStep::FixedShare { rule, .. } => Some(*rule),
            CalculationStep::UmarCase { .. } => Some(21),
            CalculationStep::Awal { .. } => Some(18),
            CalculationStep::Residue { rule, .. } => Some(*rule),
            CalculationStep::NoResiduaryHeir { .. } => Some(14),
            CalculationStep::Radd { .. } => Some(19),
            CalculationStep::SpouseReturn { .. } => Some(26),
            CalculationStep::BaitUlMal { .. } => Some(27),
        }
    }

    /// Catalog entry for [`CalculationStep::rule_id`]
    pub fn rule(&self) -> Option<&'static RuleText> {
        self.rule_id().and_then(RuleText::by_id)
    }
}

fn ratio(share: &Share) -> String {
    format!("{}/{}", share.numer(), share.denom())
}

impl fmt::Display for CalculationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationStep::Blocked { heir, by } => {
                write!(f, "{} blocked by {}", heir.label(), by)
            }
            CalculationStep::FixedShare { heir, share, rule } => {
                write!(f, "{} receives {} (Rule {})", heir.label(), ratio(share), rule)
            }
            CalculationStep::UmarCase { spouse, mother_share } => write!(
                f,
                "Umar's Case: Mother receives 1/3 of the remainder after {} = {} (Rule 21)",
                spouse.label(),
                ratio(mother_share)
            ),
            CalculationStep::Awal { total } => write!(
                f,
                "'Awal applied: fixed shares total {}, all reduced proportionally (Rule 18)",
                ratio(total)
            ),
            CalculationStep::Residue { heir, share, rule } => write!(
                f,
                "{} receives residue {} as Asaba (Rule {})",
                heir.label(),
                ratio(share),
                rule
            ),
            CalculationStep::NoResiduaryHeir { residue } => write!(
                f,
                "No residuary heir present; residue {} remains (Rule 14)",
                ratio(residue)
            ),
            CalculationStep::Radd { surplus, factor } => write!(
                f,
                "Radd applied: surplus {} returned to fixed-share heirs except spouses, shares multiplied by {} (Rule 19)",
                ratio(surplus),
                ratio(factor)
            ),
            CalculationStep::SpouseReturn { heir, surplus } => write!(
                f,
                "No other heir: surplus {} returned to {} (Rule 26)",
                ratio(surplus),
                heir.label()
            ),
            CalculationStep::BaitUlMal { surplus } => write!(
                f,
                "Remaining {} goes to Bait-ul-Mal (Rule 27)",
                ratio(surplus)
            ),
        }
    }
}
