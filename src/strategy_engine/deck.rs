use crate::strategy_engine::models::{Card, Rank, Suit};

/// The 52 distinct cards in a fixed suit-major order.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (2u8..=14).map(move |r| Card { rank: Rank(r), suit }))
        .collect()
}

/// The full deck minus `dealt` — for a 5-card dealt hand, always 47 cards.
pub fn remaining_deck(dealt: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !dealt.contains(c))
        .collect()
}
