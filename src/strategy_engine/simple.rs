//! Simple-strategy aggregator: merges ranked categories into coarser
//! display groups.
//!
//! Group order is NOT re-derived from EV — the catalog's authoring order
//! already encodes the intended simplified ranking, so groups appear in the
//! order their key is first seen while scanning the catalog.

use std::collections::HashMap;

use crate::strategy_engine::catalog::Catalog;
use crate::strategy_engine::models::{SimpleGroupEntry, StrategyEntry, Tier};

/// Two EVs closer than this render identically and collapse to one value.
const DISPLAY_EPSILON: f64 = 0.01;

struct GroupAccum {
    group: char,
    tier: Tier,
    member_names: Vec<String>,
    evs: Vec<f64>,
    note: Option<String>,
}

/// Merge `ranked` entries into simple-strategy groups.
pub fn aggregate(catalog: &Catalog, ranked: &[StrategyEntry]) -> Vec<SimpleGroupEntry> {
    let ev_by_id: HashMap<&str, f64> =
        ranked.iter().map(|e| (e.id.as_str(), e.ev)).collect();

    // Collect members per group, in catalog first-seen order.
    let mut order: Vec<char> = Vec::new();
    let mut groups: HashMap<char, GroupAccum> = HashMap::new();
    for cat in catalog.categories() {
        let ev = ev_by_id.get(cat.id.as_str()).copied().unwrap_or(0.0);
        let accum = groups.entry(cat.simple_group).or_insert_with(|| {
            order.push(cat.simple_group);
            GroupAccum {
                group: cat.simple_group,
                tier: cat.tier,
                member_names: Vec::new(),
                evs: Vec::new(),
                note: None,
            }
        });
        accum.member_names.push(cat.name.clone());
        accum.evs.push(ev);
    }

    for accum in groups.values_mut() {
        accum.evs.sort_by(|a, b| b.total_cmp(a));
        accum.evs = dedupe_display(&accum.evs);
    }

    apply_group_note_rules(catalog, &order, &mut groups);

    order
        .iter()
        .map(|&g| {
            let accum = &groups[&g];
            let name = if accum.member_names.len() == 1 {
                accum.member_names[0].clone()
            } else if let Some(label) = catalog.merge_label(g) {
                label.to_string()
            } else {
                accum.member_names.join(" / ")
            };
            let note = accum
                .note
                .clone()
                .or_else(|| catalog.static_note(g).map(String::from));
            SimpleGroupEntry {
                group: accum.group,
                name,
                tier: accum.tier,
                evs: accum.evs.clone(),
                note,
            }
        })
        .collect()
}

/// Collapse adjacent descending values that are display-equal, keeping the
/// first of each run. Input must already be sorted descending.
fn dedupe_display(evs: &[f64]) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::with_capacity(evs.len());
    for &ev in evs {
        match kept.last() {
            Some(&last) if (last - ev).abs() <= DISPLAY_EPSILON => {}
            _ => kept.push(ev),
        }
    }
    kept
}

/// The ranker's note logic at group granularity: compare first-seen group
/// positions instead of entry positions. A rule whose target maps into a
/// group annotates that group iff it precedes every present above-group.
fn apply_group_note_rules(
    catalog: &Catalog,
    order: &[char],
    groups: &mut HashMap<char, GroupAccum>,
) {
    for rule in catalog.note_rules() {
        let Some(target_group) = catalog.find(&rule.target).map(|c| c.simple_group) else {
            continue;
        };
        if !groups.contains_key(&target_group) {
            continue;
        }
        let Some(target_pos) = order.iter().position(|&g| g == target_group) else {
            continue;
        };
        let precedes_all = rule.above.iter().all(|id| {
            let Some(above_group) = catalog.find(id).map(|c| c.simple_group) else {
                return true;
            };
            match order.iter().position(|&g| g == above_group) {
                Some(pos) => pos > target_pos,
                None => true,
            }
        });
        if precedes_all {
            if let Some(accum) = groups.get_mut(&target_group) {
                accum.note = Some(rule.note.clone());
            }
        }
    }
}
