//! Core strategy engine — hand classification, EV enumeration, and strategy
//! table generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: cards, hand ranks, schedules, catalog records, output entries |
//! | `error`     | `StrategyError` taxonomy for configuration and catalog validation |
//! | `deck`      | 52-card deck construction and remaining-deck subtraction |
//! | `evaluator` | The 5-card Jacks-or-Better hand classifier |
//! | `ev`        | Exhaustive draw enumeration and expected-value averaging |
//! | `catalog`   | Validated hold-category catalog, note rules, pay-table presets |
//! | `ranker`    | Per-category EV ranking plus note-rule annotation |
//! | `simple`    | Merges ranked categories into simplified strategy groups |
//! | `generator` | Single entry point `generate_strategy()` and the memo cache |

pub mod catalog;
pub mod deck;
pub mod error;
pub mod ev;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod ranker;
pub mod simple;

// Re-export the public API surface so callers can use
// `strategy_engine::generate_strategy` without reaching into sub-modules.
pub use catalog::{standard_pay_tables, Catalog, ROYAL_FLUSH_MAX_BET_PER_COIN};
pub use error::StrategyError;
pub use ev::hold_ev;
pub use evaluator::classify;
pub use generator::{generate_strategy, StrategyCache};
pub use models::{
    Card, HandRank, NoteRule, PayTable, PayoutSchedule, Rank, SimpleGroupEntry,
    StrategyCategory, StrategyEntry, StrategyTables, Suit, Tier,
};
