//! Sampling without replacement: `d` distinct values from `[1, n]`.
//!
//! Two strategies, chosen by density:
//!
//! - **sparse** (`d <= n/2`): draw uniform candidates and reject
//!   duplicates via an open-addressing membership table. Expected
//!   retries are short when `d` is well below `n`.
//! - **dense** (`d > n/2`): sequential selection (Knuth Vol. 2,
//!   §3.4.2, Algorithm S): walk the universe once in order and accept
//!   each candidate with probability `remaining_to_pick /
//!   remaining_in_universe`. Exactly `d` values come out, every
//!   `d`-subset equally likely, no membership structure needed.
//!
//! Selections are handed to a callback in acceptance order, and the
//! generator is re-lent to the callback so per-selection draws (arc
//! costs) interleave with candidate draws exactly as in the original
//! generators.

use crate::rng::PortableRng;
use crate::sampler::{uniform_float, uniform_int};

// ---------------------------------------------------------------------------
// ProbeTable
// ---------------------------------------------------------------------------

/// Open-addressing membership table for the sparse path.
///
/// Sized to twice the selection count, hashed by `item % len`, probing
/// *downward* with wrap-around on collision. The hash is crude, but the
/// items are themselves uniform draws; the 2x sizing keeps probe chains
/// short. `reset` re-sizes and clears so one table can be reused across
/// sources without leaking stale entries.
#[derive(Debug)]
pub struct ProbeTable {
    slots: Vec<i64>,
}

/// Sentinel for an empty slot; items are always positive.
const EMPTY: i64 = -1;

impl ProbeTable {
    /// Creates a table ready to hold `entries` distinct items.
    pub fn new(entries: usize) -> Self {
        ProbeTable {
            slots: vec![EMPTY; 2 * entries.max(1)],
        }
    }

    /// Clears the table and re-sizes it for `entries` distinct items.
    pub fn reset(&mut self, entries: usize) {
        let len = 2 * entries.max(1);
        self.slots.clear();
        self.slots.resize(len, EMPTY);
    }

    /// Returns true if `item` has been inserted since the last reset.
    pub fn contains(&self, item: i64) -> bool {
        let len = self.slots.len();
        let mut key = (item as usize) % len;
        while self.slots[key] != EMPTY {
            if self.slots[key] == item {
                return true;
            }
            key = if key == 0 { len - 1 } else { key - 1 };
        }
        false
    }

    /// Inserts `item`. The caller keeps the table under half full, so
    /// an empty slot always exists.
    pub fn insert(&mut self, item: i64) {
        let len = self.slots.len();
        let mut key = (item as usize) % len;
        while self.slots[key] != EMPTY {
            key = if key == 0 { len - 1 } else { key - 1 };
        }
        self.slots[key] = item;
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Density threshold: the sparse path runs when `d <= n / 2`.
fn is_sparse(d: i64, n: i64) -> bool {
    d <= n / 2
}

/// Reusable no-replacement selector.
///
/// Owns the probe table so repeated selections (one per source node)
/// reuse its allocation.
#[derive(Debug)]
pub struct Selector {
    table: ProbeTable,
}

impl Selector {
    pub fn new() -> Self {
        Selector {
            table: ProbeTable::new(1),
        }
    }

    /// Selects `d` distinct values from `[1, n]`, invoking `on_select`
    /// once per accepted value in acceptance order. A callback error
    /// aborts the selection and is returned as-is.
    ///
    /// Requires `0 < d <= n`. The sparse path consumes one draw per
    /// candidate (accepted or rejected); the dense path consumes one
    /// draw per universe element visited.
    pub fn select<F, E>(&mut self, rng: &mut PortableRng, d: i64, n: i64, mut on_select: F) -> Result<(), E>
    where
        F: FnMut(&mut PortableRng, i64) -> Result<(), E>,
    {
        debug_assert!(d > 0 && d <= n);
        if is_sparse(d, n) {
            self.select_sparse(rng, d, n, &mut on_select)
        } else {
            select_dense(rng, d, n, &mut on_select)
        }
    }

    fn select_sparse<F, E>(
        &mut self,
        rng: &mut PortableRng,
        d: i64,
        n: i64,
        on_select: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&mut PortableRng, i64) -> Result<(), E>,
    {
        self.table.reset(d as usize);
        let mut accepted = 0;
        while accepted < d {
            let candidate = uniform_int(rng, n);
            if !self.table.contains(candidate) {
                self.table.insert(candidate);
                accepted += 1;
                on_select(rng, candidate)?;
            }
        }
        Ok(())
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

/// Algorithm-S walk over `1..=n`. The float comparison matches the
/// original generator, so the accept/reject pattern is reproducible
/// draw for draw.
fn select_dense<F, E>(rng: &mut PortableRng, d: i64, n: i64, on_select: &mut F) -> Result<(), E>
where
    F: FnMut(&mut PortableRng, i64) -> Result<(), E>,
{
    let need = d as f64;
    let total = n as f64;
    let mut have = 0.0_f64;
    let mut seen = 0.0_f64;
    let mut candidate = 1_i64;

    while have < need {
        let x = uniform_float(rng);
        if (total - seen) * x < need - have {
            on_select(rng, candidate)?;
            have += 1.0;
        }
        seen += 1.0;
        candidate += 1;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use std::collections::HashSet;
    use std::convert::Infallible;

    fn collect(seed: i64, d: i64, n: i64) -> Vec<i64> {
        let mut rng = PortableRng::new(seed);
        let mut sel = Selector::new();
        let mut out = Vec::new();
        sel.select(&mut rng, d, n, |_, v| {
            out.push(v);
            Ok::<(), Infallible>(())
        })
        .expect("infallible");
        out
    }

    #[test]
    fn sparse_path_yields_exactly_d_distinct_values() {
        let picks = collect(42, 10, 1_000);
        assert_eq!(picks.len(), 10);
        let distinct: HashSet<i64> = picks.iter().copied().collect();
        assert_eq!(distinct.len(), 10);
        assert!(picks.iter().all(|v| (1..=1_000).contains(v)));
    }

    #[test]
    fn dense_path_yields_exactly_d_distinct_values() {
        let picks = collect(42, 90, 100);
        assert_eq!(picks.len(), 90);
        let distinct: HashSet<i64> = picks.iter().copied().collect();
        assert_eq!(distinct.len(), 90);
        assert!(picks.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn dense_path_visits_in_ascending_order() {
        let picks = collect(7, 60, 100);
        assert!(picks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn selecting_the_whole_universe_returns_it() {
        let picks = collect(3, 50, 50);
        assert_eq!(picks, (1..=50).collect::<Vec<i64>>());
    }

    #[test]
    fn single_pick_from_singleton_universe() {
        assert_eq!(collect(9, 1, 1), vec![1]);
    }

    #[test]
    fn selector_reuse_does_not_leak_entries() {
        let mut rng = PortableRng::new(11);
        let mut sel = Selector::new();
        for _ in 0..100 {
            let mut picks = Vec::new();
            sel.select(&mut rng, 5, 200, |_, v| {
                picks.push(v);
                Ok::<(), Infallible>(())
            })
            .expect("infallible");
            let distinct: HashSet<i64> = picks.iter().copied().collect();
            assert_eq!(distinct.len(), 5);
        }
    }

    #[test]
    fn callback_can_draw_between_selections() {
        let mut rng = PortableRng::new(13);
        let mut sel = Selector::new();
        let mut costs = Vec::new();
        sel.select(&mut rng, 4, 100, |rng, _| {
            costs.push(crate::sampler::uniform_int(rng, 50));
            Ok::<(), Infallible>(())
        })
        .expect("infallible");
        assert_eq!(costs.len(), 4);
        assert!(costs.iter().all(|c| (1..=50).contains(c)));
    }

    #[test]
    fn callback_error_aborts_selection() {
        let mut rng = PortableRng::new(17);
        let mut sel = Selector::new();
        let mut calls = 0;
        let result = sel.select(&mut rng, 10, 1_000, |_, _| {
            calls += 1;
            if calls == 3 { Err("stop") } else { Ok(()) }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn selection_frequency_is_near_d_over_n() {
        // d/n = 0.5; over 2000 trials each element should be picked
        // about half the time. Tolerance is ~5 sigma.
        let n = 10_i64;
        let d = 5_i64;
        let trials = 2_000;
        let mut counts = vec![0_u32; n as usize + 1];
        let mut rng = PortableRng::new(515_151);
        let mut sel = Selector::new();
        for _ in 0..trials {
            sel.select(&mut rng, d, n, |_, v| {
                counts[v as usize] += 1;
                Ok::<(), Infallible>(())
            })
            .expect("infallible");
        }
        for v in 1..=n {
            let freq = f64::from(counts[v as usize]) / f64::from(trials);
            assert!(
                (freq - 0.5).abs() < 0.06,
                "element {v}: frequency {freq} too far from 0.5"
            );
        }
    }

    #[test]
    fn probe_table_reports_membership() {
        let mut t = ProbeTable::new(4);
        assert!(!t.contains(17));
        t.insert(17);
        assert!(t.contains(17));
        // 9 and 17 collide mod 8; both must be found.
        t.insert(9);
        assert!(t.contains(9));
        assert!(t.contains(17));
        assert!(!t.contains(25));
    }

    #[test]
    fn probe_table_reset_clears_and_resizes() {
        let mut t = ProbeTable::new(2);
        t.insert(3);
        t.reset(8);
        assert!(!t.contains(3));
        for item in 1..=8 {
            t.insert(item);
        }
        for item in 1..=8 {
            assert!(t.contains(item));
        }
    }
}
