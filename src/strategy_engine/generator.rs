//! Strategy generation entry point and the per-schedule memo cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use parking_lot::Mutex;

use crate::strategy_engine::catalog::Catalog;
use crate::strategy_engine::models::{HandRank, PayoutSchedule, StrategyTables};
use crate::strategy_engine::ranker::rank_categories;
use crate::strategy_engine::simple::aggregate;

/// Compute both strategy tables for a payout schedule.
///
/// Pure: identical inputs produce identical ordered output, entry for entry.
pub fn generate_strategy(catalog: &Catalog, schedule: &PayoutSchedule) -> StrategyTables {
    let start = Instant::now();
    let optimal = rank_categories(catalog, schedule);
    let simple = aggregate(catalog, &optimal);
    debug!(
        "ranked {} categories into {} simple groups for schedule {:?} in {:?}",
        optimal.len(),
        simple.len(),
        schedule.values(),
        start.elapsed()
    );
    StrategyTables { optimal, simple }
}

/// Memoizes [`generate_strategy`] results per distinct payout schedule.
///
/// Only the insert-if-absent path takes the lock; completed results are
/// immutable and shared via `Arc`. Entries are never evicted — the domain
/// has a small fixed set of schedules. Purely a performance layer: bypassing
/// it changes nothing but speed.
pub struct StrategyCache {
    catalog: Catalog,
    computed: Mutex<HashMap<[u32; HandRank::COUNT], Arc<StrategyTables>>>,
}

impl StrategyCache {
    pub fn new(catalog: Catalog) -> Self {
        StrategyCache {
            catalog,
            computed: Mutex::new(HashMap::new()),
        }
    }

    /// Cache fronting the standard catalog.
    pub fn standard() -> Self {
        StrategyCache::new(Catalog::standard())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Return the cached tables for `schedule`, computing them on first use.
    pub fn strategy_for(&self, schedule: &PayoutSchedule) -> Arc<StrategyTables> {
        let mut computed = self.computed.lock();
        if let Some(hit) = computed.get(schedule.values()) {
            trace!("strategy cache hit for schedule {:?}", schedule.values());
            return Arc::clone(hit);
        }
        let tables = Arc::new(generate_strategy(&self.catalog, schedule));
        computed.insert(*schedule.values(), Arc::clone(&tables));
        tables
    }
}
