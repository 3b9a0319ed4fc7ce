use proptest::prelude::*;

use meeras::core::types::{share_to_f64, whole};
use meeras::prelude::*;

fn quantities(entries: &[(usize, i64)]) -> HeirQuantities {
    let mut q = HeirQuantities::new();
    for &(idx, count) in entries {
        q.set(HeirId::ALL[idx], count);
    }
    q
}

fn gender(male: bool) -> DeceasedGender {
    if male {
        DeceasedGender::Male
    } else {
        DeceasedGender::Female
    }
}

/// Counts span the full plural range; `set` clamps singular ids to one
fn heir_entries() -> impl Strategy<Value = Vec<(usize, i64)>> {
    prop::collection::vec((0usize..HeirId::ALL.len(), 0i64..=99), 0..12)
}

proptest! {
    /// Invariant: the distributed shares and Bait-ul-Mal together make up the whole estate.
    #[test]
    fn estate_is_conserved(entries in heir_entries(), male in any::<bool>()) {
        let outcome = calculate(&quantities(&entries), gender(male));
        prop_assert_eq!(outcome.total_distributed() + outcome.unclaimed, whole());

        if outcome.unclaimed == Share::from_integer(0) {
            prop_assert!((outcome.total_percentage() - 100.0).abs() < 1e-4);
        }
    }

    /// Invariant: a blocked result never carries a share, and no heir is reported twice.
    #[test]
    fn no_double_counting(entries in heir_entries(), male in any::<bool>()) {
        let outcome = calculate(&quantities(&entries), gender(male));

        for result in &outcome.results {
            if result.is_blocked {
                prop_assert_eq!(result.share, Share::from_integer(0));
                prop_assert!(result.blocked_by.is_some());
            } else {
                prop_assert!(result.share > Share::from_integer(0));
            }
            prop_assert_eq!(outcome.results.iter().filter(|r| r.heir == result.heir).count(), 1);
        }
    }

    /// Invariant: the father's presence blocks everything his rule names.
    #[test]
    fn father_blocks_all_targets(entries in heir_entries(), male in any::<bool>()) {
        let q = quantities(&entries).with(HeirId::Father, 1);
        let outcome = calculate(&q, gender(male));

        let targets = [
            HeirId::Grandfather,
            HeirId::PaternalGrandmother,
            HeirId::FullBrothers,
            HeirId::FullSisters,
            HeirId::PaternalBrothers,
            HeirId::PaternalSisters,
            HeirId::MaternalBrothers,
            HeirId::MaternalSisters,
        ];
        for id in targets {
            if q.is_present(id) {
                let result = outcome.result(id);
                prop_assert!(result.is_some_and(|r| r.is_blocked), "{} not blocked by father", id);
            }
        }
    }

    /// Invariant: a son blocks every sibling and nephew under the same label.
    #[test]
    fn son_blocks_with_one_label(entries in heir_entries(), male in any::<bool>()) {
        let q = quantities(&entries).with(HeirId::Sons, 1);
        let outcome = calculate(&q, gender(male));

        for id in HeirId::SIBLINGS.into_iter().chain([HeirId::FullNephews, HeirId::PaternalNephews]) {
            if q.is_present(id) {
                let label = outcome.result(id).and_then(|r| r.blocked_by.clone());
                prop_assert_eq!(label.as_deref(), Some("Son"));
            }
        }
    }

    /// Invariant: only the spouse the deceased's gender allows appears in the results.
    #[test]
    fn gender_exclusivity(entries in heir_entries(), husband in 0i64..2, wives in 0i64..5, male in any::<bool>()) {
        let q = quantities(&entries).with(HeirId::Husband, husband).with(HeirId::Wives, wives);
        let outcome = calculate(&q, gender(male));

        if male {
            prop_assert!(outcome.result(HeirId::Husband).is_none());
        } else {
            prop_assert!(outcome.result(HeirId::Wives).is_none());
        }
    }

    /// Invariant: every share prints as `n/d` within tolerance of its value.
    #[test]
    fn fraction_round_trip(entries in heir_entries(), male in any::<bool>()) {
        let config = EngineConfig::default();
        let outcome = calculate(&quantities(&entries), gender(male));

        for result in outcome.inheriting() {
            let value = share_to_f64(&result.share);
            if value >= config.whole_threshold {
                continue;
            }
            let parts = result.share_fraction.split_once('/');
            prop_assert!(parts.is_some(), "{} printed as {}", result.heir, result.share_fraction);
            let (n, d) = parts.unwrap();
            let n: f64 = n.parse().unwrap();
            let d: f64 = d.parse().unwrap();
            prop_assert!((n / d - value).abs() < config.fraction_tolerance);
        }
    }
}
