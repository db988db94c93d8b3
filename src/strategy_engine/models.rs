use std::fmt;
use serde::{Deserialize, Serialize};

use crate::strategy_engine::error::StrategyError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const ACE: Rank = Rank(14);

    pub fn is_valid(self) -> bool {
        (2..=14).contains(&self.0)
    }

    /// Index into a 13-slot tally array (rank 2 → 0, Ace → 12).
    pub fn tally_index(self) -> usize {
        (self.0 - 2) as usize
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Card { rank: Rank(rank), suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Hand ranks and payout schedules
// ---------------------------------------------------------------------------

/// The nine paying hand categories of Jacks-or-Better, best first.
///
/// The discriminant order is the payout-table order: index 0 pays the most.
/// Hands that pay nothing are represented as `None` by the classifier, not
/// as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandRank {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    JacksOrBetter,
}

impl HandRank {
    pub const COUNT: usize = 9;

    pub const ALL: [HandRank; HandRank::COUNT] = [
        HandRank::RoyalFlush,
        HandRank::StraightFlush,
        HandRank::FourOfAKind,
        HandRank::FullHouse,
        HandRank::Flush,
        HandRank::Straight,
        HandRank::ThreeOfAKind,
        HandRank::TwoPair,
        HandRank::JacksOrBetter,
    ];

    /// Index into a payout schedule.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::RoyalFlush    => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind   => "4 of a Kind",
            HandRank::FullHouse     => "Full House",
            HandRank::Flush         => "Flush",
            HandRank::Straight      => "Straight",
            HandRank::ThreeOfAKind  => "3 of a Kind",
            HandRank::TwoPair       => "Two Pair",
            HandRank::JacksOrBetter => "Jacks or Better",
        };
        write!(f, "{}", s)
    }
}

/// Per-coin payouts indexed by [`HandRank`]. Immutable once built.
///
/// Doubles as the memoization key: two schedules compare equal exactly when
/// all nine values match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoutSchedule([u32; HandRank::COUNT]);

impl PayoutSchedule {
    pub fn new(payouts: [u32; HandRank::COUNT]) -> Self {
        PayoutSchedule(payouts)
    }

    /// Build from a runtime slice, rejecting anything but exactly 9 values.
    /// Negative payouts are unrepresentable in `u32`.
    pub fn from_slice(payouts: &[u32]) -> Result<Self, StrategyError> {
        let values: [u32; HandRank::COUNT] = payouts.try_into().map_err(|_| {
            StrategyError::Config(format!(
                "payout schedule must have exactly {} entries (got {})",
                HandRank::COUNT,
                payouts.len()
            ))
        })?;
        Ok(PayoutSchedule(values))
    }

    pub fn payout(&self, rank: HandRank) -> u32 {
        self.0[rank.index()]
    }

    pub fn values(&self) -> &[u32; HandRank::COUNT] {
        &self.0
    }
}

/// A named pay-table preset: schedule plus display metadata.
///
/// `expected_return` is the published long-run return percentage for the
/// variant, shown by the client next to the pay table. It is reference data,
/// not derived from the enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayTable {
    pub key: String,
    pub label: String,
    pub schedule: PayoutSchedule,
    pub expected_return: f64,
}

// ---------------------------------------------------------------------------
// Strategy catalog records
// ---------------------------------------------------------------------------

/// Coarse display classification, independent of exact EV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Keep all five cards.
    Pat,
    /// A made paying hand or a near-lock draw.
    Made,
    /// A solid draw worth chasing.
    Draw,
    /// Speculative holds and last resorts.
    Spec,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Pat  => write!(f, "pat"),
            Tier::Made => write!(f, "made"),
            Tier::Draw => write!(f, "draw"),
            Tier::Spec => write!(f, "spec"),
        }
    }
}

/// One curated hold category: a representative dealt hand plus the positions
/// to keep. The EV computed from the representative hand stands for the whole
/// category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCategory {
    /// Stable unique key, e.g. `"4_to_royal"`.
    pub id: String,
    /// Display name for the hold, e.g. `"4 to a Royal Flush"`.
    pub name: String,
    /// Representative dealt hand; the five cards must be distinct.
    pub cards: [Card; 5],
    /// Positions (0..=4) of `cards` to keep before drawing.
    pub hold_mask: Vec<usize>,
    pub tier: Tier,
    /// Merges fine-grained categories into one simplified strategy line.
    pub simple_group: char,
}

/// Conditional annotation applied after sorting by EV: the note attaches to
/// `target` only when it outranks every listed `above` category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRule {
    pub target: String,
    pub above: Vec<String>,
    pub note: String,
}

// ---------------------------------------------------------------------------
// Computed strategy output
// ---------------------------------------------------------------------------

/// One line of the optimal strategy table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyEntry {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub simple_group: char,
    /// Average per-coin payout over all replacement draws.
    pub ev: f64,
    pub note: Option<String>,
}

/// One line of the simplified strategy table: all categories sharing a
/// simple group, merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleGroupEntry {
    pub group: char,
    pub name: String,
    pub tier: Tier,
    /// Member EVs, descending, with display-equal values deduplicated.
    pub evs: Vec<f64>,
    pub note: Option<String>,
}

/// The full result of one strategy generation: both output tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTables {
    pub optimal: Vec<StrategyEntry>,
    pub simple: Vec<SimpleGroupEntry>,
}
