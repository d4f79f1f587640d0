/*!
Instrumented versions of the Monte Carlo searches. They return the same
verdicts as [`monte_carlo_sampling`](crate::search::mc_sampling::monte_carlo_sampling)
and [`monte_carlo_incremental`](crate::search::mc_incremental::monte_carlo_incremental)
(and consume the random source identically), while charging an
[`OperationCounter`] with the following cost model.

Sampling, per trial:
 - k units for drawing the sample
 - k·round(ln k) units for sorting it
 - 1 unit if the subset was already tested (the trial stops there)
 - k units for inserting the subset in the set of tested subsets
 - k(k-1)/2 units for the pairwise adjacency tests (charged in full)

Incremental, per trial:
 - n units for the shuffle
 - for each scanned vertex, 1 unit per candidate member it is adjacent to
 - 1 unit per vertex appended to the candidate
 - 1 unit for the size check that reports success

Calls that return before the first trial (k = 0, k > n) charge nothing.
*/
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::Error;
use crate::graph::{GraphInstance, VertexId};
use crate::search::exhaustive::is_clique;
use crate::search::mc_sampling::{check_sample_size, sample_subset};

/** monotone operation tally */
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationCounter {
    /// operations charged so far
    total: u64,
    /// if recording: running total after each charge
    history: Option<Vec<u64>>,
}

impl OperationCounter {
    /// counter that also keeps the running total after every charge
    pub fn recording() -> Self {
        Self { total: 0, history: Some(Vec::new()) }
    }

    /// adds `units` operations
    pub fn charge(&mut self, units:u64) {
        self.total += units;
        if let Some(h) = &mut self.history { h.push(self.total); }
    }

    /// operations charged so far
    pub fn total(&self) -> u64 { self.total }

    /// running totals (empty unless created with [`OperationCounter::recording`])
    pub fn history(&self) -> &[u64] {
        match &self.history {
            None => &[],
            Some(h) => h.as_slice(),
        }
    }
}

/// cost of sorting a sample of size k: k·round(ln k)
pub fn sort_cost(k:usize) -> u64 {
    if k <= 1 { return 0; }
    k as u64 * (k as f64).ln().round() as u64
}

/** [`monte_carlo_sampling`](crate::search::mc_sampling::monte_carlo_sampling) charging `counter`

# Errors
 - `InvalidArgument` if k exceeds the number of vertices
*/
pub fn counted_monte_carlo_sampling<R:Rng + ?Sized>(
    inst:&dyn GraphInstance,
    k:usize,
    iterations:usize,
    rng:&mut R,
    counter:&mut OperationCounter
) -> Result<bool, Error> {
    check_sample_size(inst, k)?;
    if k == 0 { return Ok(true); }
    let nb_pairs = (k * (k-1) / 2) as u64;
    let mut tested:HashSet<Vec<VertexId>> = HashSet::new();
    for _ in 0..iterations {
        counter.charge(k as u64);
        let subset = sample_subset(inst, k, rng);
        counter.charge(sort_cost(k));
        if tested.contains(&subset) {
            counter.charge(1);
            continue;
        }
        counter.charge(k as u64);
        counter.charge(nb_pairs);
        let found = is_clique(inst, &subset);
        tested.insert(subset);
        if found { return Ok(true); }
    }
    Ok(false)
}

/** [`monte_carlo_incremental`](crate::search::mc_incremental::monte_carlo_incremental) charging `counter` */
pub fn counted_monte_carlo_incremental<R:Rng + ?Sized>(
    inst:&dyn GraphInstance,
    k:usize,
    iterations:usize,
    rng:&mut R,
    counter:&mut OperationCounter
) -> bool {
    if k == 0 { return true; }
    if k > inst.nb_vertices() { return false; }
    let mut order:Vec<VertexId> = inst.vertices().collect();
    let mut clique:Vec<VertexId> = Vec::with_capacity(k);
    for _ in 0..iterations {
        counter.charge(order.len() as u64);
        order.shuffle(rng);
        clique.clear();
        for u in &order {
            let nb_adjacent = clique.iter().filter(|v| inst.are_adjacent(*u, **v)).count();
            counter.charge(nb_adjacent as u64);
            if nb_adjacent == clique.len() {
                clique.push(*u);
                counter.charge(1);
            }
            if clique.len() == k {
                counter.charge(1);
                return true;
            }
        }
    }
    false
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::graph::CompactGraph;
    use crate::generator::generate_graphs;
    use crate::params::PointParams;
    use crate::search::mc_incremental::monte_carlo_incremental;
    use crate::search::mc_sampling::monte_carlo_sampling;

    #[test]
    fn test_sort_cost() {
        assert_eq!(sort_cost(0), 0);
        assert_eq!(sort_cost(1), 0);
        assert_eq!(sort_cost(2), 2);  // ln 2 ≈ 0.69
        assert_eq!(sort_cost(3), 3);  // ln 3 ≈ 1.10
        assert_eq!(sort_cost(5), 10); // ln 5 ≈ 1.61
        assert_eq!(sort_cost(50), 200); // ln 50 ≈ 3.91
    }

    #[test]
    fn test_sampling_cost_on_complete_graph() {
        // one trial succeeds: k + k·round(ln k) + k + C(k,2)
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut counter = OperationCounter::default();
        let g = CompactGraph::complete(5);
        assert!(counted_monte_carlo_sampling(&g, 5, 1000, &mut rng, &mut counter).unwrap());
        assert_eq!(counter.total(), 5 + 10 + 5 + 10);
    }

    #[test]
    fn test_sampling_cost_with_duplicates() {
        // empty graph, k = n: every trial draws the same subset
        // first trial: 3 + 3 + 3 + 3, the 9 others: 3 + 3 + 1
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut counter = OperationCounter::default();
        let g = CompactGraph::with_vertices(3);
        assert!(!counted_monte_carlo_sampling(&g, 3, 10, &mut rng, &mut counter).unwrap());
        assert_eq!(counter.total(), 12 + 9 * 7);
    }

    #[test]
    fn test_incremental_cost_on_complete_graph() {
        // shuffle: 4, append i-th vertex: (i-1) checks + 1 append, final size check: 1
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut counter = OperationCounter::default();
        let g = CompactGraph::complete(4);
        assert!(counted_monte_carlo_incremental(&g, 4, 1000, &mut rng, &mut counter));
        assert_eq!(counter.total(), 4 + (0+1+2+3) + 4 + 1);
    }

    #[test]
    fn test_incremental_cost_on_empty_graph() {
        // each trial: n for the shuffle, 1 append, then no adjacency
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut counter = OperationCounter::default();
        let g = CompactGraph::with_vertices(5);
        assert!(!counted_monte_carlo_incremental(&g, 2, 10, &mut rng, &mut counter));
        assert_eq!(counter.total(), 10 * (5 + 1));
    }

    #[test]
    fn test_invalid_sample_charges_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut counter = OperationCounter::default();
        let g = CompactGraph::complete(3);
        assert!(counted_monte_carlo_sampling(&g, 4, 10, &mut rng, &mut counter).is_err());
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn test_counters_are_monotone() {
        let mut rng = ChaCha8Rng::seed_from_u64(123_578);
        let family = generate_graphs(12, &[0.5], &PointParams::default(), &mut rng).unwrap();
        let g = &family.graphs[0].1;
        let mut sampling = OperationCounter::recording();
        let mut incremental = OperationCounter::recording();
        counted_monte_carlo_sampling(g, 6, 200, &mut rng, &mut sampling).unwrap();
        counted_monte_carlo_incremental(g, 6, 200, &mut rng, &mut incremental);
        for c in &[sampling, incremental] {
            assert!(!c.history().is_empty());
            assert!(c.history().windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(*c.history().last().unwrap(), c.total());
        }
    }

    #[test]
    fn test_same_verdict_as_plain_searches() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let family = generate_graphs(9, &[0.25, 0.5, 0.75], &PointParams::default(), &mut rng).unwrap();
        for (_, g) in &family.graphs {
            for k in 1..=9 {
                let mut counter = OperationCounter::default();
                let plain = monte_carlo_sampling(g, k, 50, &mut ChaCha8Rng::seed_from_u64(k as u64)).unwrap();
                let counted = counted_monte_carlo_sampling(g, k, 50, &mut ChaCha8Rng::seed_from_u64(k as u64), &mut counter).unwrap();
                assert_eq!(plain, counted);
                let plain = monte_carlo_incremental(g, k, 50, &mut ChaCha8Rng::seed_from_u64(k as u64));
                let counted = counted_monte_carlo_incremental(g, k, 50, &mut ChaCha8Rng::seed_from_u64(k as u64), &mut counter);
                assert_eq!(plain, counted);
            }
        }
    }
}
