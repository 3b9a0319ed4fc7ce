//! Integration tests for the inheritance engine
//!
//! These tests run complete calculations through the public API and check
//! the shares, blocking labels and trace lines callers see:
//! - The five worked scenarios
//! - 'Awal, Radd and Bait-ul-Mal corrections
//! - Blocking labels and gender exclusivity

use meeras::core::types::{share, whole};
use meeras::prelude::*;

fn fraction(outcome: &CalculationOutcome, heir: HeirId) -> Option<&str> {
    outcome.result(heir).map(|r| r.share_fraction.as_str())
}

fn exact(outcome: &CalculationOutcome, heir: HeirId) -> Option<Share> {
    outcome.result(heir).map(|r| r.share)
}

fn assert_conserved(outcome: &CalculationOutcome) {
    assert_eq!(outcome.total_distributed() + outcome.unclaimed, whole());
}

// ============================================================================
// Worked Scenarios
// ============================================================================

/// Wife with two sons and a daughter: the wife takes 1/8 and the children
/// split 7/8 two-to-one
#[test]
fn test_scenario_wife_sons_daughter() {
    let q = HeirQuantities::new()
        .with(HeirId::Wives, 1)
        .with(HeirId::Sons, 2)
        .with(HeirId::Daughters, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(fraction(&outcome, HeirId::Wives), Some("1/8"));
    assert_eq!(exact(&outcome, HeirId::Sons), Some(share(7, 10)));
    assert_eq!(exact(&outcome, HeirId::Daughters), Some(share(7, 40)));
    assert_eq!(fraction(&outcome, HeirId::Daughters), Some("7/40"));

    let wives = outcome.result(HeirId::Wives).unwrap();
    assert!((wives.percentage - 12.5).abs() < 1e-9);
    assert_eq!(outcome.blocked().count(), 0);
    assert!((outcome.total_percentage() - 100.0).abs() < 1e-4);
    assert_conserved(&outcome);
}

/// Umar's Case: the mother takes a third of what the wife leaves
#[test]
fn test_scenario_umar_case() {
    let q = HeirQuantities::new()
        .with(HeirId::Wives, 1)
        .with(HeirId::Father, 1)
        .with(HeirId::Mother, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(fraction(&outcome, HeirId::Wives), Some("1/4"));
    assert_eq!(fraction(&outcome, HeirId::Mother), Some("1/4"));
    assert_eq!(fraction(&outcome, HeirId::Father), Some("1/2"));

    let lines = outcome.step_lines();
    assert_eq!(lines[0], "Wives receives 1/4 (Rule 2)");
    assert!(lines[1].starts_with("Umar's Case"));
    assert_eq!(lines[2], "Father receives residue 1/2 as Asaba (Rule 14)");
    assert_eq!(lines.len(), 3);
}

/// Husband and one full sister each take half; no correction needed
#[test]
fn test_scenario_husband_and_full_sister() {
    let q = HeirQuantities::new()
        .with(HeirId::Husband, 1)
        .with(HeirId::FullSisters, 1);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(fraction(&outcome, HeirId::Husband), Some("1/2"));
    assert_eq!(fraction(&outcome, HeirId::FullSisters), Some("1/2"));
    assert!(!outcome.steps.iter().any(|s| matches!(
        s,
        CalculationStep::Awal { .. } | CalculationStep::Radd { .. } | CalculationStep::BaitUlMal { .. }
    )));
    assert_conserved(&outcome);
}

/// A mother alone receives her third and the rest by Radd
#[test]
fn test_scenario_mother_alone() {
    let q = HeirQuantities::new().with(HeirId::Mother, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(fraction(&outcome, HeirId::Mother), Some("1/1"));
    assert_eq!(exact(&outcome, HeirId::Mother), Some(whole()));

    let lines = outcome.step_lines();
    assert_eq!(lines[0], "Mother receives 1/3 (Rule 6)");
    assert!(matches!(outcome.steps.last(), Some(CalculationStep::Radd { .. })));
    assert!(outcome.unclaimed == share(0, 1));
}

/// Two daughters alone: Radd scales their 2/3 up to the whole estate
#[test]
fn test_scenario_daughters_alone_receive_radd() {
    let q = HeirQuantities::new()
        .with(HeirId::Daughters, 2)
        .with(HeirId::Sons, 0);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(fraction(&outcome, HeirId::Daughters), Some("1/1"));
    assert!(outcome.result(HeirId::Sons).is_none());
    assert_eq!(outcome.results.len(), 1);

    let radd = outcome.steps.iter().find_map(|s| match s {
        CalculationStep::Radd { surplus, factor } => Some((*surplus, *factor)),
        _ => None,
    });
    assert_eq!(radd, Some((share(1, 3), share(3, 2))));
    assert!(!outcome.steps.iter().any(|s| matches!(s, CalculationStep::BaitUlMal { .. })));
}

// ============================================================================
// Corrections
// ============================================================================

#[test]
fn test_awal_reduces_every_share() {
    let q = HeirQuantities::new()
        .with(HeirId::Husband, 1)
        .with(HeirId::FullSisters, 2);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(fraction(&outcome, HeirId::Husband), Some("3/7"));
    assert_eq!(fraction(&outcome, HeirId::FullSisters), Some("4/7"));
    assert!(outcome
        .step_lines()
        .iter()
        .any(|l| l.starts_with("'Awal applied: fixed shares total 7/6")));
    assert_conserved(&outcome);
}

#[test]
fn test_awal_with_mother_and_maternal_siblings() {
    // 1/2 + 2/3 + 1/6 + 1/3 = 5/3
    let q = HeirQuantities::new()
        .with(HeirId::Husband, 1)
        .with(HeirId::FullSisters, 2)
        .with(HeirId::Mother, 1)
        .with(HeirId::MaternalBrothers, 2);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(exact(&outcome, HeirId::Husband), Some(share(3, 10)));
    assert_eq!(exact(&outcome, HeirId::FullSisters), Some(share(2, 5)));
    assert_eq!(exact(&outcome, HeirId::Mother), Some(share(1, 10)));
    assert_eq!(exact(&outcome, HeirId::MaternalBrothers), Some(share(1, 5)));
    assert_conserved(&outcome);
}

#[test]
fn test_radd_never_reaches_spouse() {
    let q = HeirQuantities::new()
        .with(HeirId::Husband, 1)
        .with(HeirId::Daughters, 1);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(fraction(&outcome, HeirId::Husband), Some("1/4"));
    assert_eq!(fraction(&outcome, HeirId::Daughters), Some("3/4"));
    assert_conserved(&outcome);
}

#[test]
fn test_spouse_only_surplus_goes_to_bait_ul_mal() {
    let q = HeirQuantities::new().with(HeirId::Wives, 2);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(fraction(&outcome, HeirId::Wives), Some("1/4"));
    assert_eq!(outcome.unclaimed, share(3, 4));
    assert_eq!(
        outcome.step_lines().last().map(String::as_str),
        Some("Remaining 3/4 goes to Bait-ul-Mal (Rule 27)")
    );
    assert_conserved(&outcome);
}

#[test]
fn test_spouse_only_surplus_returns_when_configured() {
    let config = EngineConfig { radd_to_sole_spouse: true, ..EngineConfig::default() };
    let q = HeirQuantities::new().with(HeirId::Husband, 1);
    let outcome = calculate_with_config(&q, DeceasedGender::Female, &config);

    assert_eq!(fraction(&outcome, HeirId::Husband), Some("1/1"));
    assert_eq!(outcome.unclaimed, share(0, 1));
    assert!(matches!(outcome.steps.last(), Some(CalculationStep::SpouseReturn { .. })));
}

/// 99 sons leave one daughter 7/1592, past every bounded denominator
#[test]
fn test_large_family_share_prints_exact_ratio() {
    let q = HeirQuantities::new()
        .with(HeirId::Wives, 1)
        .with(HeirId::Sons, 99)
        .with(HeirId::Daughters, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(exact(&outcome, HeirId::Daughters), Some(share(7, 1592)));
    assert_eq!(fraction(&outcome, HeirId::Daughters), Some("7/1592"));
    assert_eq!(exact(&outcome, HeirId::Sons), Some(share(693, 796)));
    assert_conserved(&outcome);
}

// ============================================================================
// Blocking
// ============================================================================

#[test]
fn test_son_blocks_brothers_with_label() {
    let q = HeirQuantities::new()
        .with(HeirId::Sons, 1)
        .with(HeirId::FullBrothers, 2)
        .with(HeirId::Father, 1)
        .with(HeirId::Mother, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    let brothers = outcome.result(HeirId::FullBrothers).unwrap();
    assert!(brothers.is_blocked);
    assert_eq!(brothers.blocked_by.as_deref(), Some("Son"));
    assert_eq!(brothers.share_fraction, "0");

    assert_eq!(fraction(&outcome, HeirId::Father), Some("1/6"));
    assert_eq!(fraction(&outcome, HeirId::Mother), Some("1/6"));
    assert_eq!(fraction(&outcome, HeirId::Sons), Some("2/3"));
    assert_eq!(outcome.step_lines()[0], "Full Brothers blocked by Son");
}

/// Son and father both exclude the brothers: two trace lines, one label
#[test]
fn test_each_blocker_appears_in_trace() {
    let q = HeirQuantities::new()
        .with(HeirId::Sons, 1)
        .with(HeirId::Father, 1)
        .with(HeirId::FullBrothers, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(
        outcome.step_lines(),
        vec![
            "Full Brothers blocked by Son",
            "Full Brothers blocked by Father",
            "Father receives 1/6 (Rule 5)",
            "Sons receives residue 5/6 as Asaba (Rule 15)",
        ]
    );
    let brothers = outcome.result(HeirId::FullBrothers).unwrap();
    assert_eq!(brothers.blocked_by.as_deref(), Some("Son"));
}

#[test]
fn test_father_blocks_grandfather() {
    let q = HeirQuantities::new()
        .with(HeirId::Father, 1)
        .with(HeirId::Grandfather, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    let grandfather = outcome.result(HeirId::Grandfather).unwrap();
    assert_eq!(grandfather.blocked_by.as_deref(), Some("Father"));
    assert_eq!(fraction(&outcome, HeirId::Father), Some("1/1"));
}

#[test]
fn test_blocked_siblings_still_reduce_mother() {
    let q = HeirQuantities::new()
        .with(HeirId::Mother, 1)
        .with(HeirId::Father, 1)
        .with(HeirId::FullBrothers, 2);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert_eq!(fraction(&outcome, HeirId::Mother), Some("1/6"));
    assert_eq!(fraction(&outcome, HeirId::Father), Some("5/6"));
    assert!(outcome.result(HeirId::FullBrothers).unwrap().is_blocked);
}

#[test]
fn test_extended_heirs_report_higher_rank() {
    let q = HeirQuantities::new()
        .with(HeirId::Father, 1)
        .with(HeirId::FullNephews, 3);
    let outcome = calculate(&q, DeceasedGender::Male);

    let nephews = outcome.result(HeirId::FullNephews).unwrap();
    assert!(nephews.is_blocked);
    assert_eq!(nephews.blocked_by.as_deref(), Some("Higher Rank Heir"));
}

#[test]
fn test_two_full_sisters_block_paternal_sister() {
    let q = HeirQuantities::new()
        .with(HeirId::FullSisters, 2)
        .with(HeirId::PaternalSisters, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    let paternal = outcome.result(HeirId::PaternalSisters).unwrap();
    assert_eq!(paternal.blocked_by.as_deref(), Some("Full Sisters"));
    assert_eq!(fraction(&outcome, HeirId::FullSisters), Some("1/1"));
}

#[test]
fn test_daughter_with_full_sister_as_residuary() {
    let q = HeirQuantities::new()
        .with(HeirId::Daughters, 1)
        .with(HeirId::FullSisters, 2)
        .with(HeirId::MaternalBrothers, 1);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert_eq!(fraction(&outcome, HeirId::Daughters), Some("1/2"));
    assert_eq!(fraction(&outcome, HeirId::FullSisters), Some("1/2"));
    assert_eq!(
        outcome.result(HeirId::MaternalBrothers).and_then(|r| r.blocked_by.as_deref()),
        Some("Daughter")
    );
}

// ============================================================================
// Gender exclusivity and input handling
// ============================================================================

#[test]
fn test_husband_absent_for_male_deceased() {
    let q = HeirQuantities::new()
        .with(HeirId::Husband, 1)
        .with(HeirId::Wives, 1)
        .with(HeirId::Sons, 1);
    let outcome = calculate(&q, DeceasedGender::Male);

    assert!(outcome.result(HeirId::Husband).is_none());
    assert_eq!(fraction(&outcome, HeirId::Wives), Some("1/8"));
    assert_eq!(fraction(&outcome, HeirId::Sons), Some("7/8"));
}

#[test]
fn test_wives_absent_for_female_deceased() {
    let q = HeirQuantities::new()
        .with(HeirId::Wives, 3)
        .with(HeirId::Husband, 1)
        .with(HeirId::Father, 1);
    let outcome = calculate(&q, DeceasedGender::Female);

    assert!(outcome.result(HeirId::Wives).is_none());
    assert_eq!(fraction(&outcome, HeirId::Husband), Some("1/2"));
    assert_eq!(fraction(&outcome, HeirId::Father), Some("1/2"));
}

#[test]
fn test_results_follow_input_order() {
    let q = HeirQuantities::from_pairs([("father", 1), ("daughters", 1), ("wives", 1)]).unwrap();
    let outcome = calculate(&q, DeceasedGender::Male);

    let order: Vec<HeirId> = outcome.results.iter().map(|r| r.heir).collect();
    assert_eq!(order, vec![HeirId::Father, HeirId::Daughters, HeirId::Wives]);
    // 1/8 + 1/2 + 1/6 fixed, father also takes the 5/24 residue
    assert_eq!(exact(&outcome, HeirId::Father), Some(share(3, 8)));
}

#[test]
fn test_quantities_from_json() {
    let q: HeirQuantities =
        serde_json::from_str(r#"{"mother": 5, "fullBrothers": 2, "sons": -1}"#).unwrap();
    assert_eq!(q.get(HeirId::Mother), 1);
    assert_eq!(q.get(HeirId::Sons), 0);

    let outcome = calculate(&q, DeceasedGender::Male);
    // Two brothers reduce the mother to 1/6 and take the residue
    assert_eq!(fraction(&outcome, HeirId::Mother), Some("1/6"));
    assert_eq!(fraction(&outcome, HeirId::FullBrothers), Some("5/6"));
}

#[test]
fn test_outcome_json_shape() {
    let q = HeirQuantities::new().with(HeirId::Mother, 1).with(HeirId::Father, 1);
    let outcome = calculate(&q, DeceasedGender::Male);
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["results"][0]["heirName"], "mother");
    assert_eq!(json["results"][0]["shareFraction"], "1/3");
    assert_eq!(json["results"][1]["shareFraction"], "2/3");
    assert_eq!(json["steps"][0], "Mother receives 1/3 (Rule 6)");
}
