//! Per-category EV ranking and note-rule annotation.

use crate::strategy_engine::catalog::Catalog;
use crate::strategy_engine::deck::remaining_deck;
use crate::strategy_engine::ev::hold_ev;
use crate::strategy_engine::models::{Card, NoteRule, PayoutSchedule, StrategyEntry};

/// Compute one EV per catalog category and return the entries sorted by
/// descending EV, with note rules applied.
///
/// The sort is stable, so equal EVs keep catalog definition order.
pub fn rank_categories(catalog: &Catalog, schedule: &PayoutSchedule) -> Vec<StrategyEntry> {
    let mut entries: Vec<StrategyEntry> = catalog
        .categories()
        .iter()
        .map(|cat| {
            let deck = remaining_deck(&cat.cards);
            let held: Vec<Card> = cat.hold_mask.iter().map(|&pos| cat.cards[pos]).collect();
            StrategyEntry {
                id: cat.id.clone(),
                name: cat.name.clone(),
                tier: cat.tier,
                simple_group: cat.simple_group,
                ev: hold_ev(&held, &deck, schedule),
                note: None,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.ev.total_cmp(&a.ev));
    apply_note_rules(&mut entries, catalog.note_rules());
    entries
}

/// Attach each rule's note to its target entry iff the target ranks strictly
/// above every listed `above` category that is present. Absent categories
/// are vacuously satisfied. A pure post-pass over the sorted entries.
pub fn apply_note_rules(entries: &mut [StrategyEntry], rules: &[NoteRule]) {
    for rule in rules {
        let Some(target) = entries.iter().position(|e| e.id == rule.target) else {
            continue;
        };
        let outranks_all = rule.above.iter().all(|id| {
            match entries.iter().position(|e| e.id == *id) {
                Some(pos) => pos > target,
                None => true,
            }
        });
        if outranks_all {
            entries[target].note = Some(rule.note.clone());
        }
    }
}
