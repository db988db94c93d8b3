//! Strategy-category catalog: the curated hold categories, note rules, and
//! pay-table presets that drive strategy generation.
//!
//! The catalog is configuration, not derivation — the authoring order of the
//! categories encodes the intended simplified-strategy ordering, and every
//! record is validated once here so the hot enumeration loops never have to
//! re-check card or mask invariants.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::strategy_engine::error::StrategyError;
use crate::strategy_engine::models::{
    Card, NoteRule, PayTable, PayoutSchedule, StrategyCategory, Suit, Tier,
};

/// Per-coin Royal Flush payout at maximum (5-coin) wager. Display-side only:
/// the EV enumeration always uses the schedule's base per-coin value.
pub const ROYAL_FLUSH_MAX_BET_PER_COIN: u32 = 800;

/// Immutable, validated strategy configuration.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<StrategyCategory>,
    note_rules: Vec<NoteRule>,
    /// Display label for a multi-member simple group.
    merge_labels: HashMap<char, String>,
    /// Unconditional per-group tips, used when no note rule fires.
    static_notes: HashMap<char, String>,
}

impl Catalog {
    /// Validate and build a catalog. Rejects malformed categories up front
    /// rather than failing deep inside enumeration.
    pub fn new(
        categories: Vec<StrategyCategory>,
        note_rules: Vec<NoteRule>,
        merge_labels: HashMap<char, String>,
        static_notes: HashMap<char, String>,
    ) -> Result<Self, StrategyError> {
        let mut ids = HashSet::new();
        for cat in &categories {
            validate_category(cat)?;
            if !ids.insert(cat.id.as_str()) {
                return Err(StrategyError::InvalidCategory {
                    id: cat.id.clone(),
                    reason: "duplicate category id".into(),
                });
            }
        }

        // Note rules referencing unknown ids are legal (the comparison is
        // vacuously satisfied) but usually indicate a data error.
        for rule in &note_rules {
            for id in std::iter::once(&rule.target).chain(rule.above.iter()) {
                if !ids.contains(id.as_str()) {
                    warn!("note rule references unknown category `{id}`");
                }
            }
        }

        Ok(Catalog { categories, note_rules, merge_labels, static_notes })
    }

    pub fn categories(&self) -> &[StrategyCategory] {
        &self.categories
    }

    pub fn note_rules(&self) -> &[NoteRule] {
        &self.note_rules
    }

    pub fn find(&self, id: &str) -> Option<&StrategyCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn merge_label(&self, group: char) -> Option<&str> {
        self.merge_labels.get(&group).map(String::as_str)
    }

    pub fn static_note(&self, group: char) -> Option<&str> {
        self.static_notes.get(&group).map(String::as_str)
    }

    /// The standard Jacks-or-Better catalog: 27 hold categories across
    /// simple groups A..N, with the stock note rules and merge labels.
    pub fn standard() -> Catalog {
        Catalog::new(
            standard_categories(),
            standard_note_rules(),
            standard_merge_labels(),
            standard_static_notes(),
        )
        .expect("standard catalog is valid")
    }
}

fn validate_category(cat: &StrategyCategory) -> Result<(), StrategyError> {
    for card in &cat.cards {
        if !card.rank.is_valid() {
            return Err(StrategyError::InvalidCard(format!(
                "category `{}` has a card with rank {} (valid: 2..=14)",
                cat.id, card.rank.0
            )));
        }
    }
    for i in 0..cat.cards.len() {
        for j in i + 1..cat.cards.len() {
            if cat.cards[i] == cat.cards[j] {
                return Err(StrategyError::InvalidCategory {
                    id: cat.id.clone(),
                    reason: format!("duplicate card {}", cat.cards[i]),
                });
            }
        }
    }
    let mut seen = [false; 5];
    for &pos in &cat.hold_mask {
        if pos > 4 {
            return Err(StrategyError::InvalidCategory {
                id: cat.id.clone(),
                reason: format!("hold mask position {pos} out of range 0..=4"),
            });
        }
        if seen[pos] {
            return Err(StrategyError::InvalidCategory {
                id: cat.id.clone(),
                reason: format!("hold mask repeats position {pos}"),
            });
        }
        seen[pos] = true;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Standard data
// ---------------------------------------------------------------------------

/// The standard pay-table presets, full-pay first.
pub fn standard_pay_tables() -> Vec<PayTable> {
    let table = |key: &str, label: &str, payouts: [u32; 9], expected_return: f64| PayTable {
        key: key.into(),
        label: label.into(),
        schedule: PayoutSchedule::new(payouts),
        expected_return,
    };
    vec![
        table("9-6", "9/6 Full Pay", [250, 50, 25, 9, 6, 4, 3, 2, 1], 99.5439),
        table("9-5", "9/5", [250, 50, 25, 9, 5, 4, 3, 2, 1], 98.4498),
        table("8-6", "8/6", [250, 50, 25, 8, 6, 4, 3, 2, 1], 98.3927),
        table("8-5", "8/5", [250, 50, 25, 8, 5, 4, 3, 2, 1], 97.2984),
    ]
}

fn standard_categories() -> Vec<StrategyCategory> {
    use Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};

    let c = Card::new;
    let cat = |id: &str,
               name: &str,
               cards: [Card; 5],
               hold_mask: &[usize],
               tier: Tier,
               simple_group: char| StrategyCategory {
        id: id.into(),
        name: name.into(),
        cards,
        hold_mask: hold_mask.to_vec(),
        tier,
        simple_group,
    };

    vec![
        // Pat winners.
        cat("pat_royal", "Pat Royal Flush",
            [c(10, C), c(11, C), c(12, C), c(13, C), c(14, C)],
            &[0, 1, 2, 3, 4], Tier::Pat, 'A'),
        cat("pat_straight_flush", "Pat Straight Flush",
            [c(6, H), c(7, H), c(8, H), c(9, H), c(10, H)],
            &[0, 1, 2, 3, 4], Tier::Pat, 'A'),
        cat("pat_four_kind", "Pat 4 of a Kind",
            [c(8, C), c(8, D), c(8, H), c(8, S), c(5, D)],
            &[0, 1, 2, 3, 4], Tier::Pat, 'A'),
        // Four to a royal: worth breaking any pat hand below a straight flush.
        cat("4_to_royal", "4 to a Royal Flush",
            [c(10, C), c(11, C), c(12, C), c(14, C), c(5, H)],
            &[0, 1, 2, 3], Tier::Made, 'B'),
        // Pat full house / flush / trips.
        cat("pat_full_house", "Pat Full House",
            [c(11, C), c(11, D), c(11, H), c(6, C), c(6, D)],
            &[0, 1, 2, 3, 4], Tier::Made, 'C'),
        cat("pat_flush", "Pat Flush",
            [c(3, S), c(6, S), c(8, S), c(11, S), c(14, S)],
            &[0, 1, 2, 3, 4], Tier::Made, 'C'),
        cat("pat_three_kind", "Pat 3 of a Kind",
            [c(7, C), c(7, D), c(7, H), c(3, S), c(12, D)],
            &[0, 1, 2], Tier::Made, 'C'),
        cat("pat_straight", "Pat Straight",
            [c(6, C), c(7, D), c(8, H), c(9, S), c(10, C)],
            &[0, 1, 2, 3, 4], Tier::Made, 'D'),
        // Four to a straight flush.
        cat("4_sf_open", "4 to a Straight Flush (open)",
            [c(6, H), c(7, H), c(8, H), c(9, H), c(13, C)],
            &[0, 1, 2, 3], Tier::Made, 'E'),
        cat("4_sf_inside", "4 to a Straight Flush (inside)",
            [c(6, H), c(7, H), c(8, H), c(10, H), c(13, C)],
            &[0, 1, 2, 3], Tier::Made, 'E'),
        // Two pair / high pair.
        cat("two_pair", "Two Pair",
            [c(7, C), c(7, D), c(11, H), c(11, S), c(4, C)],
            &[0, 1, 2, 3], Tier::Made, 'F'),
        cat("high_pair", "High Pair (J\u{2013}A)",
            [c(12, C), c(12, D), c(5, H), c(8, S), c(3, C)],
            &[0, 1], Tier::Made, 'F'),
        // Draws.
        cat("3_to_royal", "3 to a Royal Flush",
            [c(11, C), c(12, C), c(14, C), c(5, H), c(3, S)],
            &[0, 1, 2], Tier::Draw, 'G'),
        cat("4_to_flush", "4 to a Flush",
            [c(3, H), c(6, H), c(8, H), c(11, H), c(5, C)],
            &[0, 1, 2, 3], Tier::Draw, 'H'),
        cat("low_pair", "Low Pair (2\u{2013}10)",
            [c(7, C), c(7, D), c(4, H), c(10, S), c(13, C)],
            &[0, 1], Tier::Draw, 'I'),
        cat("4_outside_str", "4 to an Outside Straight",
            [c(7, C), c(8, D), c(9, H), c(10, S), c(3, C)],
            &[0, 1, 2, 3], Tier::Draw, 'J'),
        // Speculative holds.
        cat("3_sf_open", "3 to a Straight Flush (open)",
            [c(6, H), c(7, H), c(8, H), c(13, C), c(2, D)],
            &[0, 1, 2], Tier::Spec, 'K'),
        cat("3_sf_inside_1hc", "3 to a Straight Flush (1 high card)",
            [c(9, H), c(11, H), c(12, H), c(2, C), c(5, D)],
            &[0, 1, 2], Tier::Spec, 'K'),
        cat("2_suited_high", "2 Suited High Cards",
            [c(12, C), c(13, C), c(5, H), c(3, S), c(8, D)],
            &[0, 1], Tier::Spec, 'K'),
        cat("3_sf_inside_0hc", "3 to a Straight Flush (no high cards)",
            [c(5, H), c(6, H), c(8, H), c(13, C), c(2, D)],
            &[0, 1, 2], Tier::Spec, 'K'),
        cat("4_inside_str_3hc", "4 to an Inside Straight (3 high cards)",
            [c(11, C), c(12, D), c(13, H), c(14, S), c(5, C)],
            &[0, 1, 2, 3], Tier::Spec, 'L'),
        cat("2_unsuited_high", "2 Unsuited High Cards",
            [c(12, C), c(13, D), c(5, H), c(3, S), c(8, C)],
            &[0, 1], Tier::Spec, 'L'),
        cat("4_inside_str_2hc", "4 to an Inside Straight (2 high cards)",
            [c(10, C), c(11, D), c(12, H), c(14, S), c(5, C)],
            &[0, 1, 2, 3], Tier::Spec, 'L'),
        cat("4_inside_str_1hc", "4 to an Inside Straight (1 high card)",
            [c(14, C), c(2, D), c(3, H), c(4, S), c(8, C)],
            &[0, 1, 2, 3], Tier::Spec, 'L'),
        cat("suited_10_high", "Suited 10\u{2013}J/Q/K",
            [c(10, C), c(11, C), c(5, H), c(3, S), c(8, D)],
            &[0, 1], Tier::Spec, 'M'),
        cat("single_high", "Single High Card",
            [c(14, C), c(5, H), c(3, S), c(8, D), c(2, H)],
            &[0], Tier::Spec, 'M'),
        cat("discard_all", "Discard Everything",
            [c(2, C), c(4, D), c(6, H), c(8, S), c(10, C)],
            &[], Tier::Spec, 'N'),
    ]
}

fn standard_note_rules() -> Vec<NoteRule> {
    let rule = |target: &str, above: &[&str], note: &str| NoteRule {
        target: target.into(),
        above: above.iter().map(|s| s.to_string()).collect(),
        note: note.into(),
    };
    vec![
        rule("4_to_royal", &["pat_full_house", "pat_flush", "pat_straight"],
             "Break FH, Flush, or Straight!"),
        rule("3_to_royal", &["4_to_flush"], "Beats 4 to a Flush."),
        rule("low_pair", &["4_outside_str"], "Beats an outside straight draw."),
    ]
}

fn standard_merge_labels() -> HashMap<char, String> {
    [
        ('A', "Pat Royal / Straight Flush / 4 of a Kind"),
        ('C', "Pat Full House / Flush / 3 of a Kind"),
        ('E', "4 to a Straight Flush"),
        ('F', "Two Pair / High Pair (J\u{2013}A)"),
        ('K', "2 Suited High Cards / 3 to a Straight Flush"),
        ('L', "2 Unsuited High Cards"),
        ('M', "Suited 10\u{2013}J/Q/K / Single High Card"),
    ]
    .into_iter()
    .map(|(g, label)| (g, label.to_string()))
    .collect()
}

fn standard_static_notes() -> HashMap<char, String> {
    [('L', "Lowest 2 if 3+.")]
        .into_iter()
        .map(|(g, note)| (g, note.to_string()))
        .collect()
}
