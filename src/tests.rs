//! Unit tests for the `vp_strategy_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Classifier | Order invariance under seeded shuffles |
//! | Ranking | Pat winners rank first with exact schedule payouts; discard-everything ranks last |
//! | Determinism | Two generations with one schedule are identical entry for entry |
//! | Cache | Repeated schedules return the same shared result; the cache never changes output |
//! | Notes | Computed notes under 9/6; group-level notes; static fallback; vacuous satisfaction |
//! | Perturbation | Changing one payout value never changes the category set |
//! | Validation | Payout schedules of the wrong length are rejected |
//! | Simple table | Group order, merge labels, and single-member labels |

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::strategy_engine::evaluator::classify;
use crate::{
    generate_strategy, Card, Catalog, NoteRule, PayoutSchedule, StrategyCache,
    StrategyCategory, StrategyTables, Suit, Tier,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const FULL_PAY_9_6: [u32; 9] = [250, 50, 25, 9, 6, 4, 3, 2, 1];

fn full_pay() -> PayoutSchedule {
    PayoutSchedule::new(FULL_PAY_9_6)
}

fn generate_full_pay() -> StrategyTables {
    generate_strategy(&Catalog::standard(), &full_pay())
}

fn entry_ev(tables: &StrategyTables, id: &str) -> f64 {
    tables
        .optimal
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("missing entry `{id}`"))
        .ev
}

// ── classifier ───────────────────────────────────────────────────────────────

#[test]
fn classification_is_order_invariant() {
    let hands: [[Card; 5]; 4] = [
        // Royal flush, wheel straight, two pair, jacks-or-better.
        [10, 11, 12, 13, 14].map(|r| Card::new(r, Suit::Spades)),
        [
            Card::new(14, Suit::Clubs),
            Card::new(2, Suit::Diamonds),
            Card::new(3, Suit::Hearts),
            Card::new(4, Suit::Spades),
            Card::new(5, Suit::Clubs),
        ],
        [
            Card::new(7, Suit::Clubs),
            Card::new(7, Suit::Diamonds),
            Card::new(11, Suit::Hearts),
            Card::new(11, Suit::Spades),
            Card::new(4, Suit::Clubs),
        ],
        [
            Card::new(11, Suit::Clubs),
            Card::new(11, Suit::Diamonds),
            Card::new(4, Suit::Hearts),
            Card::new(7, Suit::Spades),
            Card::new(13, Suit::Clubs),
        ],
    ];

    let mut rng = StdRng::seed_from_u64(42);
    for hand in hands {
        let expected = classify(hand);
        let mut shuffled = hand;
        for _ in 0..20 {
            shuffled.shuffle(&mut rng);
            assert_eq!(
                classify(shuffled),
                expected,
                "permutation changed the result for {shuffled:?}"
            );
        }
    }
}

// ── ranking ──────────────────────────────────────────────────────────────────

#[test]
fn pat_winners_rank_first_with_exact_payouts() {
    let tables = generate_full_pay();
    assert_eq!(tables.optimal.len(), 27);

    // Pat hands pay the schedule value exactly — no averaging.
    assert_eq!(tables.optimal[0].id, "pat_royal");
    assert_eq!(tables.optimal[0].ev, 250.0);
    assert_eq!(tables.optimal[1].id, "pat_straight_flush");
    assert_eq!(tables.optimal[1].ev, 50.0);
    assert_eq!(tables.optimal[2].id, "pat_four_kind");
    assert_eq!(tables.optimal[2].ev, 25.0);
}

#[test]
fn discarding_everything_is_the_worst_hold() {
    let tables = generate_full_pay();
    let last = tables.optimal.last().unwrap();
    assert_eq!(last.id, "discard_all");
    assert!(last.ev > 0.0 && last.ev < 1.0, "ev = {}", last.ev);
}

#[test]
fn evs_are_sorted_descending() {
    let tables = generate_full_pay();
    for pair in tables.optimal.windows(2) {
        assert!(
            pair[0].ev >= pair[1].ev,
            "{} ({}) ranked above {} ({})",
            pair[0].id, pair[0].ev, pair[1].id, pair[1].ev
        );
    }
}

#[test]
fn a_high_pair_beats_a_low_pair() {
    let tables = generate_full_pay();
    assert!(entry_ev(&tables, "high_pair") > entry_ev(&tables, "low_pair"));
}

// ── determinism and caching ──────────────────────────────────────────────────

#[test]
fn generation_is_idempotent() {
    let a = generate_full_pay();
    let b = generate_full_pay();

    assert_eq!(a.optimal.len(), b.optimal.len());
    for (x, y) in a.optimal.iter().zip(b.optimal.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.ev.to_bits(), y.ev.to_bits(), "EV mismatch for {}", x.id);
        assert_eq!(x.note, y.note);
    }
    assert_eq!(a.simple.len(), b.simple.len());
    for (x, y) in a.simple.iter().zip(b.simple.iter()) {
        assert_eq!(x.group, y.group);
        assert_eq!(x.name, y.name);
        assert_eq!(x.evs, y.evs);
        assert_eq!(x.note, y.note);
    }
}

#[test]
fn cache_returns_the_same_result_for_a_repeated_schedule() {
    let cache = StrategyCache::standard();
    let first = cache.strategy_for(&full_pay());
    let second = cache.strategy_for(&full_pay());
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn cache_matches_a_direct_computation() {
    let cache = StrategyCache::standard();
    let cached = cache.strategy_for(&full_pay());
    let direct = generate_full_pay();
    for (a, b) in cached.optimal.iter().zip(direct.optimal.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.ev.to_bits(), b.ev.to_bits());
    }
}

// ── note rules ───────────────────────────────────────────────────────────────

#[test]
fn computed_notes_under_full_pay() {
    let tables = generate_full_pay();
    let note = |id: &str| {
        tables
            .optimal
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| e.note.as_deref())
    };

    // A 3-to-royal draw outranks 4 to a flush, and a low pair outranks an
    // outside straight draw, so both rules fire.
    assert_eq!(note("3_to_royal"), Some("Beats 4 to a Flush."));
    assert_eq!(note("low_pair"), Some("Beats an outside straight draw."));

    // With the royal at its base 250, four to a royal (~6.8) ranks below a
    // pat full house (9.0): the break rule stays silent.
    assert_eq!(note("4_to_royal"), None);
}

#[test]
fn break_note_fires_when_the_royal_pays_enough() {
    // At 800 per coin the 4-to-royal EV (~18.5) clears the pat full house.
    let schedule = PayoutSchedule::new([800, 50, 25, 9, 6, 4, 3, 2, 1]);
    let tables = generate_strategy(&Catalog::standard(), &schedule);
    let four_to_royal = tables.optimal.iter().find(|e| e.id == "4_to_royal").unwrap();
    assert_eq!(four_to_royal.note.as_deref(), Some("Break FH, Flush, or Straight!"));
}

#[test]
fn group_notes_use_catalog_order_not_ev() {
    let tables = generate_full_pay();
    // Group B (4 to a royal) precedes groups C and D in the catalog, so the
    // break note applies at group granularity even though the EV ranking
    // withholds it.
    let group_b = tables.simple.iter().find(|g| g.group == 'B').unwrap();
    assert_eq!(group_b.note.as_deref(), Some("Break FH, Flush, or Straight!"));
}

#[test]
fn static_note_applies_when_no_rule_fires() {
    let tables = generate_full_pay();
    let group_l = tables.simple.iter().find(|g| g.group == 'L').unwrap();
    assert_eq!(group_l.note.as_deref(), Some("Lowest 2 if 3+."));
}

#[test]
fn missing_above_categories_satisfy_a_rule_vacuously() {
    // A degenerate two-entry catalog whose rule references categories that
    // are not present: the note must still attach.
    let category = |id: &str, ranks: [u8; 5], group: char| StrategyCategory {
        id: id.into(),
        name: id.into(),
        cards: [
            Card::new(ranks[0], Suit::Clubs),
            Card::new(ranks[1], Suit::Diamonds),
            Card::new(ranks[2], Suit::Hearts),
            Card::new(ranks[3], Suit::Spades),
            Card::new(ranks[4], Suit::Clubs),
        ],
        hold_mask: vec![0, 1, 2, 3, 4],
        tier: Tier::Pat,
        simple_group: group,
    };
    let catalog = Catalog::new(
        vec![
            category("kept", [10, 11, 12, 13, 14], 'A'),
            category("other", [2, 4, 6, 8, 10], 'B'),
        ],
        vec![NoteRule {
            target: "kept".into(),
            above: vec!["absent_one".into(), "absent_two".into()],
            note: "still applies".into(),
        }],
        Default::default(),
        Default::default(),
    )
    .unwrap();

    let tables = generate_strategy(&catalog, &full_pay());
    let kept = tables.optimal.iter().find(|e| e.id == "kept").unwrap();
    assert_eq!(kept.note.as_deref(), Some("still applies"));

    let group_a = tables.simple.iter().find(|g| g.group == 'A').unwrap();
    assert_eq!(group_a.note.as_deref(), Some("still applies"));
}

// ── schedule perturbation ────────────────────────────────────────────────────

#[test]
fn changing_one_payout_keeps_the_category_set() {
    let catalog = Catalog::standard();
    let nine_six = generate_strategy(&catalog, &full_pay());
    let nine_five = generate_strategy(
        &catalog,
        &PayoutSchedule::new([250, 50, 25, 9, 5, 4, 3, 2, 1]),
    );

    let ids = |t: &StrategyTables| -> HashSet<String> {
        t.optimal.iter().map(|e| e.id.clone()).collect()
    };
    assert_eq!(ids(&nine_six), ids(&nine_five));

    // The flush payout dropped, so flush-driven holds lost EV.
    assert!(entry_ev(&nine_six, "pat_flush") > entry_ev(&nine_five, "pat_flush"));
    assert!(entry_ev(&nine_six, "4_to_flush") > entry_ev(&nine_five, "4_to_flush"));
    // A pat straight never draws, so its EV is untouched.
    assert_eq!(entry_ev(&nine_six, "pat_straight"), entry_ev(&nine_five, "pat_straight"));
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn short_payout_schedules_are_rejected() {
    let err = PayoutSchedule::from_slice(&[250, 50, 25]).unwrap_err();
    assert!(err.to_string().contains("exactly 9"));

    let ok = PayoutSchedule::from_slice(&FULL_PAY_9_6).unwrap();
    assert_eq!(ok, full_pay());
}

// ── simple table shape ───────────────────────────────────────────────────────

#[test]
fn simple_groups_follow_catalog_order() {
    let tables = generate_full_pay();
    let order: Vec<char> = tables.simple.iter().map(|g| g.group).collect();
    let expected: Vec<char> = "ABCDEFGHIJKLMN".chars().collect();
    assert_eq!(order, expected);
}

#[test]
fn group_labels_merge_multi_member_groups() {
    let tables = generate_full_pay();
    let name = |g: char| {
        tables
            .simple
            .iter()
            .find(|e| e.group == g)
            .map(|e| e.name.clone())
            .unwrap()
    };
    assert_eq!(name('A'), "Pat Royal / Straight Flush / 4 of a Kind");
    // Single-member groups use the member's own display name.
    assert_eq!(name('D'), "Pat Straight");
    assert_eq!(name('N'), "Discard Everything");
}

#[test]
fn group_a_keeps_three_distinct_evs() {
    let tables = generate_full_pay();
    let group_a = tables.simple.iter().find(|g| g.group == 'A').unwrap();
    assert_eq!(group_a.evs, vec![250.0, 50.0, 25.0]);
}
