use ennea_relations::{CompatibilityCalculator, PairTables, ScoringConfig, Source, Synthesizer};
use ennea_taxonomy::{Category, CategoryProfiles};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    (1u8..=9).prop_map(|id| Category::new(id).unwrap())
}

fn scoring() -> impl Strategy<Value = ScoringConfig> {
    (0u8..=5, 0u8..=3, 0u8..=4, 0u8..=3, 1u8..=5).prop_map(
        |(base, shared_group_bonus, growth_line_bonus, wing_bonus, min_score)| ScoringConfig {
            base,
            shared_group_bonus,
            growth_line_bonus,
            wing_bonus,
            min_score,
            max_score: 10,
        },
    )
}

proptest! {
    #[test]
    fn compatibility_ignores_argument_order(a in category(), b in category(), config in scoring()) {
        let calc = CompatibilityCalculator::new(config).unwrap();
        let forward = calc.compatibility(a, b);
        prop_assert_eq!(&forward, &calc.compatibility(b, a));
        prop_assert!(forward.score >= config.min_score && forward.score <= config.max_score);
    }

    #[test]
    fn curated_content_ignores_argument_order(a in category(), b in category()) {
        let profiles = CategoryProfiles::bundled();
        let tables = PairTables::bundled();
        let calc = CompatibilityCalculator::default();
        let synth = Synthesizer::new(&profiles, &tables);

        let forward = synth.synthesize(a, b, &calc.compatibility(a, b)).unwrap();
        let backward = synth.synthesize(b, a, &calc.compatibility(b, a)).unwrap();
        prop_assert_eq!(&forward.archetype, &backward.archetype);
        prop_assert_eq!(&forward.interaction, &backward.interaction);
        prop_assert_eq!(&forward.break_cycle, &backward.break_cycle);
        prop_assert_eq!(forward.stress_cycle.len(), 4);
    }
}

#[test]
fn all_pairs_are_symmetric() {
    let calc = CompatibilityCalculator::default();
    for a in Category::ALL {
        for b in Category::ALL {
            assert_eq!(calc.compatibility(a, b), calc.compatibility(b, a), "{a}-{b}");
        }
    }
}

#[test]
fn mirrored_only_for_self_pairs() {
    let profiles = CategoryProfiles::bundled();
    let tables = PairTables::bundled();
    let calc = CompatibilityCalculator::default();
    let synth = Synthesizer::new(&profiles, &tables);

    for a in Category::ALL {
        for b in Category::ALL {
            let insight = synth.synthesize(a, b, &calc.compatibility(a, b)).unwrap();
            let mirrored = insight.interaction.source == Source::Mirrored;
            assert_eq!(mirrored, a == b, "{a}-{b}");
        }
    }
}

#[test]
fn no_pair_shares_a_growth_line_both_ways() {
    for a in Category::ALL {
        for b in Category::ALL {
            assert!(
                !(a.integration_target() == b && b.integration_target() == a),
                "{a} and {b} integrate into each other"
            );
        }
    }
}

#[test]
fn one_seven_link_is_reported_identically() {
    let calc = CompatibilityCalculator::default();
    let forward = calc.compatibility(Category::One, Category::Seven);
    let backward = calc.compatibility(Category::Seven, Category::One);
    let link = forward.integration_link.expect("1 integrates to 7");
    assert_eq!((link.from, link.to), (Category::One, Category::Seven));
    assert_eq!(backward.integration_link, forward.integration_link);
    assert_eq!(forward.band.label(), "Moderate");
}
