//! End-to-end demo of the strategy engine.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows how `vp_strategy_gen` works end to end:
//!
//! 1. **Pay tables** — the four standard variants with their per-coin payouts
//!    and the 5-coin Royal Flush bonus column.
//! 2. **Optimal strategy** — all 26 hold categories ranked by computed EV for
//!    each variant, with conditional notes where the ranking warrants them.
//! 3. **Simple strategy** — the merged 14-line chart in catalog order.
//! 4. **Caching** — the second request for a variant is served from the memo
//!    cache (enable `RUST_LOG=debug` to see the compute/hit log lines).

use vp_strategy_gen::{
    json_adapter, standard_pay_tables, HandRank, PayTable, StrategyCache,
    ROYAL_FLUSH_MAX_BET_PER_COIN,
};

/// Print one variant's pay table, coins 1-5.
fn print_pay_table(table: &PayTable) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {} — expected return {:.2}%", table.label, table.expected_return);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for rank in HandRank::ALL {
        let base = table.schedule.payout(rank);
        let max_bet = if rank == HandRank::RoyalFlush {
            ROYAL_FLUSH_MAX_BET_PER_COIN * 5
        } else {
            base * 5
        };
        println!(
            "  {:<16} {:>6} {:>6} {:>6} {:>6} {:>6}",
            rank.to_string(), base, base * 2, base * 3, base * 4, max_bet
        );
    }
    println!();
}

fn main() {
    env_logger::init();

    let cache = StrategyCache::standard();
    let pay_tables = standard_pay_tables();

    // ── Pay tables ───────────────────────────────────────────────────────────
    println!();
    println!("══ Standard pay tables ══");
    println!();
    for table in &pay_tables {
        print_pay_table(table);
    }

    // ── Strategy per variant ─────────────────────────────────────────────────
    for table in &pay_tables {
        let tables = cache.strategy_for(&table.schedule);

        println!("══ Optimal strategy — {} ══", table.label);
        println!();
        for (i, entry) in tables.optimal.iter().enumerate() {
            let note = entry.note.as_deref().unwrap_or("");
            println!(
                "  {:>2}. [{:<4}] {:<42} {:>9.4}  {}",
                i + 1, entry.tier.to_string(), entry.name, entry.ev, note
            );
        }
        println!();

        println!("══ Simple strategy — {} ══", table.label);
        println!();
        for (i, group) in tables.simple.iter().enumerate() {
            let evs: Vec<String> = group.evs.iter().map(|ev| format!("{ev:.2}")).collect();
            let note = group.note.as_deref().unwrap_or("");
            println!(
                "  {:>2}. {:<48} [{}]  {}",
                i + 1, group.name, evs.join(", "), note
            );
        }
        println!();
    }

    // ── Cached re-request + JSON payload ─────────────────────────────────────
    // The second lookup for a schedule is a cache hit: same shared result.
    let again = cache.strategy_for(&pay_tables[0].schedule);
    println!("══ Client JSON payload ({} again, cached) ══", pay_tables[0].label);
    println!();
    let view = json_adapter::strategy_view(&again);
    println!("{}", serde_json::to_string_pretty(&view).unwrap());
}
