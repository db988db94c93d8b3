use serde_json::{json, Value};

use crate::strategy_engine::{
    HandRank, PayTable, StrategyTables, ROYAL_FLUSH_MAX_BET_PER_COIN,
};

/// Build one pay-table row: per-coin base payout scaled for coins 1-4, plus
/// the 5-coin column where the Royal Flush pays the max-bet bonus rate.
fn pay_table_row(rank: HandRank, base: u32) -> Value {
    let is_royal = rank == HandRank::RoyalFlush;
    let max_bet = if is_royal {
        ROYAL_FLUSH_MAX_BET_PER_COIN * 5
    } else {
        base * 5
    };
    json!({
        "hand": rank.to_string(),
        "coins": [base, base * 2, base * 3, base * 4],
        "max_bet": max_bet,
        "bonus": is_royal
    })
}

/// Map a [`PayTable`] to the JSON shape the pay-table view renders:
/// one row per hand rank, best hand first, plus the published return.
pub fn pay_table_view(table: &PayTable) -> Value {
    let rows: Vec<Value> = HandRank::ALL
        .iter()
        .map(|&rank| pay_table_row(rank, table.schedule.payout(rank)))
        .collect();
    json!({
        "key": table.key,
        "label": table.label,
        "expected_return": format!("{:.2}%", table.expected_return),
        "rows": rows
    })
}

/// Map computed [`StrategyTables`] to the JSON shape the strategy-list view
/// renders: the optimal list with one EV per line, and the simple list with
/// each group's deduplicated EV range.
pub fn strategy_view(tables: &StrategyTables) -> Value {
    let optimal: Vec<Value> = tables
        .optimal
        .iter()
        .map(|e| {
            json!({
                "hold": e.name,
                "tier": e.tier.to_string(),
                "note": e.note,
                "ev": e.ev
            })
        })
        .collect();
    let simple: Vec<Value> = tables
        .simple
        .iter()
        .map(|g| {
            json!({
                "hold": g.name,
                "tier": g.tier.to_string(),
                "note": g.note,
                "evs": g.evs
            })
        })
        .collect();
    json!({ "optimal": optimal, "simple": simple })
}
