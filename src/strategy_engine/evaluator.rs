//! Five-card hand classifier for Jacks-or-Better.
//!
//! This is the innermost function of the EV enumeration — it runs up to
//! ~1.5 million times per strategy category, so it works off a fixed 13-slot
//! rank tally on the stack and never allocates.

use crate::strategy_engine::models::{Card, HandRank, Rank};

/// Classify a 5-card hand. Returns `None` for a non-paying hand.
///
/// Order-independent: any permutation of the same five cards yields the
/// same result. The caller guarantees the cards are distinct.
pub fn classify(hand: [Card; 5]) -> Option<HandRank> {
    let mut counts = [0u8; 13];
    for c in hand {
        counts[c.rank.tally_index()] += 1;
    }

    // Frequency pattern: highest count, second-highest count, pair count.
    let mut max_freq = 0u8;
    let mut second_freq = 0u8;
    let mut pairs = 0u8;
    let mut pair_rank = Rank(0);
    for (i, &f) in counts.iter().enumerate() {
        if f > max_freq {
            second_freq = max_freq;
            max_freq = f;
        } else if f > second_freq {
            second_freq = f;
        }
        if f == 2 {
            pairs += 1;
            pair_rank = Rank(i as u8 + 2);
        }
    }

    if max_freq == 4 {
        return Some(HandRank::FourOfAKind);
    }
    if max_freq == 3 && second_freq == 2 {
        return Some(HandRank::FullHouse);
    }
    if max_freq == 3 {
        return Some(HandRank::ThreeOfAKind);
    }
    if pairs == 2 {
        return Some(HandRank::TwoPair);
    }

    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);

    let mut lo = hand[0].rank;
    let mut hi = hand[0].rank;
    for c in &hand[1..] {
        if c.rank < lo { lo = c.rank; }
        if c.rank > hi { hi = c.rank; }
    }

    // Straight: five distinct ranks spanning exactly 4, or the wheel
    // A-2-3-4-5 where the Ace ranks below the 2.
    let mut is_straight = false;
    if max_freq == 1 {
        if hi.0 - lo.0 == 4 {
            is_straight = true;
        } else if counts[Rank::ACE.tally_index()] == 1
            && counts[0] == 1
            && counts[1] == 1
            && counts[2] == 1
            && counts[3] == 1
        {
            is_straight = true;
            lo = Rank(2); // wheel — the 2 is the low card
        }
    }

    if is_flush && is_straight {
        return Some(if lo == Rank::TEN {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        });
    }
    if is_flush {
        return Some(HandRank::Flush);
    }
    if is_straight {
        return Some(HandRank::Straight);
    }

    if pairs == 1 && pair_rank >= Rank::JACK {
        return Some(HandRank::JacksOrBetter);
    }

    None
}
