//! Combinatorial expected-value calculator.
//!
//! For a held subset of cards, enumerates every combination of replacement
//! draws from the remaining deck, classifies each completed hand, and
//! averages the payout. The loops walk strictly ascending deck indices, so
//! each combination of cards is visited exactly once — combinations, never
//! permutations.

use crate::strategy_engine::evaluator::classify;
use crate::strategy_engine::models::{Card, PayoutSchedule};

/// Expected per-coin payout of holding `held` and drawing the rest.
///
/// `held` is 0..=5 distinct cards; `deck` is the remaining deck, disjoint
/// from `held` (47 cards for a 5-card dealt hand). The worst case — holding
/// nothing — classifies all C(47,5) = 1,533,939 completions.
pub fn hold_ev(held: &[Card], deck: &[Card], schedule: &PayoutSchedule) -> f64 {
    let n = deck.len();
    let payout = |hand: [Card; 5]| -> u64 {
        match classify(hand) {
            Some(rank) => schedule.payout(rank) as u64,
            None => 0,
        }
    };

    let mut total: u64 = 0;
    let combos: u64;

    match held.len() {
        5 => {
            // Pat hand — classify once, no averaging.
            return payout([held[0], held[1], held[2], held[3], held[4]]) as f64;
        }
        4 => {
            for a in 0..n {
                total += payout([held[0], held[1], held[2], held[3], deck[a]]);
            }
            combos = n as u64;
        }
        3 => {
            for a in 0..n - 1 {
                for b in a + 1..n {
                    total += payout([held[0], held[1], held[2], deck[a], deck[b]]);
                }
            }
            combos = binomial(n, 2);
        }
        2 => {
            for a in 0..n - 2 {
                for b in a + 1..n - 1 {
                    for c in b + 1..n {
                        total += payout([held[0], held[1], deck[a], deck[b], deck[c]]);
                    }
                }
            }
            combos = binomial(n, 3);
        }
        1 => {
            for a in 0..n - 3 {
                for b in a + 1..n - 2 {
                    for c in b + 1..n - 1 {
                        for d in c + 1..n {
                            total += payout([held[0], deck[a], deck[b], deck[c], deck[d]]);
                        }
                    }
                }
            }
            combos = binomial(n, 4);
        }
        _ => {
            // Hold nothing — full 5-card redraw.
            for a in 0..n - 4 {
                for b in a + 1..n - 3 {
                    for c in b + 1..n - 2 {
                        for d in c + 1..n - 1 {
                            for e in d + 1..n {
                                total += payout([deck[a], deck[b], deck[c], deck[d], deck[e]]);
                            }
                        }
                    }
                }
            }
            combos = binomial(n, 5);
        }
    }

    total as f64 / combos as f64
}

/// C(n, k) for the small k used here.
fn binomial(n: usize, k: usize) -> u64 {
    let n = n as u64;
    match k {
        2 => n * (n - 1) / 2,
        3 => n * (n - 1) * (n - 2) / 6,
        4 => n * (n - 1) * (n - 2) * (n - 3) / 24,
        5 => n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120,
        _ => n,
    }
}
