//! # vp_strategy_gen
//!
//! An offline, deterministic strategy calculator for Jacks-or-Better video
//! poker.
//!
//! Given a payout schedule, the engine computes the expected value of every
//! hold category in a curated catalog by exhaustively enumerating all
//! replacement draws, then produces two tables: the full optimal strategy
//! (sorted by EV) and a simplified strategy (categories merged into coarser
//! groups in chart order).
//!
//! ## How it works
//!
//! 1. Load a [`Catalog`] — [`Catalog::standard()`] ships the stock 27-entry
//!    Jacks-or-Better catalog, or build your own with [`Catalog::new`]
//!    (malformed categories are rejected at load).
//! 2. Pick a [`PayoutSchedule`] — the presets from [`standard_pay_tables`]
//!    cover the common 9/6, 9/5, 8/6, and 8/5 variants.
//! 3. Call [`generate_strategy`], or go through a [`StrategyCache`] to memoize
//!    the (expensive) enumeration per schedule. The worst-case category
//!    classifies all C(47,5) = 1,533,939 draw combinations.
//!
//! ## Key features
//!
//! - **Exact EVs**: exhaustive combination enumeration, not simulation — the
//!   same schedule always yields the same tables, entry for entry.
//! - **Conditional notes**: declarative rules attach clarifying notes
//!   ("Beats 4 to a Flush.") only when the computed ranking warrants them.
//! - **Client-ready output**: [`json_adapter`] shapes pay tables and strategy
//!   lists as JSON for a rendering front end.
//!
//! ## Quick start
//!
//! ```rust
//! use vp_strategy_gen::{PayoutSchedule, StrategyCache};
//!
//! let cache = StrategyCache::standard();
//! let full_pay = PayoutSchedule::new([250, 50, 25, 9, 6, 4, 3, 2, 1]);
//!
//! let tables = cache.strategy_for(&full_pay);
//! for entry in &tables.optimal {
//!     println!("{:<42} {:>8.4}", entry.name, entry.ev);
//! }
//! for group in &tables.simple {
//!     println!("{:<42} {:?}", group.name, group.evs);
//! }
//! ```

pub mod json_adapter;
pub mod strategy_engine;

// Convenience re-exports so callers can use `vp_strategy_gen::generate_strategy`
// directly without reaching into `strategy_engine::`.
pub use strategy_engine::{
    classify, generate_strategy, hold_ev, standard_pay_tables, Card, Catalog, HandRank, NoteRule,
    PayTable, PayoutSchedule, Rank, SimpleGroupEntry, StrategyCache,
    StrategyCategory, StrategyEntry, StrategyError, StrategyTables, Suit, Tier,
    ROYAL_FLUSH_MAX_BET_PER_COIN,
};

#[cfg(test)]
mod tests;
