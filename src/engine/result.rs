//! Calculation output

use num_traits::Zero;
use serde::{Serialize, Serializer};

use crate::core::config::EngineConfig;
use crate::core::types::{nothing, share_to_f64, DeceasedGender, Share};
use crate::engine::blocking::BlockingTable;
use crate::engine::fraction::format_share;
use crate::engine::residue::ResidueTable;
use crate::engine::shares::ShareTable;
use crate::engine::trace::{Blocker, CalculationStep};
use crate::heirs::{HeirId, HeirQuantities};

/// What one heir category receives
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(rename = "heirName")]
    pub heir: HeirId,
    pub share_fraction: String,
    /// 0 to 100
    pub percentage: f64,
    pub is_blocked: bool,
    pub blocked_by: Option<String>,
    /// Exact share behind `share_fraction`
    #[serde(skip)]
    pub share: Share,
}

/// Everything one calculation produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    /// One entry per input category with a count or a share, in input order
    pub results: Vec<CalculationResult>,
    /// Rules that fired, in execution order
    #[serde(serialize_with = "serialize_steps")]
    pub steps: Vec<CalculationStep>,
    /// Portion of the estate that went to Bait-ul-Mal
    #[serde(serialize_with = "serialize_share")]
    pub unclaimed: Share,
}

fn serialize_steps<S: Serializer>(steps: &[CalculationStep], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(steps.iter().map(|s| s.to_string()))
}

fn serialize_share<S: Serializer>(value: &Share, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl CalculationOutcome {
    /// Trace rendered as text lines
    pub fn step_lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }

    pub fn result(&self, heir: HeirId) -> Option<&CalculationResult> {
        self.results.iter().find(|r| r.heir == heir)
    }

    /// Results for categories that receive something
    pub fn inheriting(&self) -> impl Iterator<Item = &CalculationResult> {
        self.results.iter().filter(|r| !r.is_blocked)
    }

    pub fn blocked(&self) -> impl Iterator<Item = &CalculationResult> {
        self.results.iter().filter(|r| r.is_blocked)
    }

    /// Exact sum of every distributed share
    pub fn total_distributed(&self) -> Share {
        self.inheriting().fold(nothing(), |acc, r| acc + r.share)
    }

    pub fn total_percentage(&self) -> f64 {
        self.inheriting().map(|r| r.percentage).sum()
    }
}

/// Combine fixed and residuary shares into per-category results
///
/// Categories the deceased's gender rules out are left out entirely. A
/// category with a count and no share is reported blocked.
pub fn assemble_results(
    quantities: &HeirQuantities,
    gender: DeceasedGender,
    blocking: &BlockingTable,
    fixed: &ShareTable,
    residue: &ResidueTable,
    config: &EngineConfig,
) -> Vec<CalculationResult> {
    let mut results = Vec::new();

    for (heir, count) in quantities.iter() {
        if !heir.applies_to(gender) {
            continue;
        }

        let total = fixed.get(heir) + residue.get(heir);
        if !total.is_zero() {
            results.push(CalculationResult {
                heir,
                share_fraction: format_share(&total, config),
                percentage: share_to_f64(&total) * 100.0,
                is_blocked: false,
                blocked_by: None,
                share: total,
            });
        } else if count > 0 {
            let by = blocking.blocker(heir).unwrap_or(Blocker::HigherRank);
            results.push(CalculationResult {
                heir,
                share_fraction: "0".to_string(),
                percentage: 0.0,
                is_blocked: true,
                blocked_by: Some(by.label().to_string()),
                share: nothing(),
            });
        }
    }

    results
}
