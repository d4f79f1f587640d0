use std::collections::HashSet;

use rand::Rng;

use crate::error::Error;
use crate::graph::{GraphInstance, VertexId};
use crate::search::exhaustive::is_clique;

/// uniform k-subset of the vertices, drawn without replacement and sorted (requires k <= n)
pub fn sample_subset<R:Rng + ?Sized>(inst:&dyn GraphInstance, k:usize, rng:&mut R) -> Vec<VertexId> {
    let mut res = rand::seq::index::sample(rng, inst.nb_vertices(), k).into_vec();
    res.sort_unstable();
    res
}

/// sampling without replacement requires k <= n
pub(crate) fn check_sample_size(inst:&dyn GraphInstance, k:usize) -> Result<(), Error> {
    if k > inst.nb_vertices() {
        return Err(Error::InvalidArgument(format!(
            "cannot sample {} vertices out of {}", k, inst.nb_vertices()
        )));
    }
    Ok(())
}

/** random sampling: draws `iterations` random k-subsets and tests whether one
of them is a clique. Subsets already tested during this call are skipped (the
trial still counts toward `iterations`).

# Errors
 - `InvalidArgument` if k exceeds the number of vertices (nothing is drawn)
*/
pub fn monte_carlo_sampling<R:Rng + ?Sized>(inst:&dyn GraphInstance, k:usize, iterations:usize, rng:&mut R) -> Result<bool, Error> {
    check_sample_size(inst, k)?;
    if k == 0 { return Ok(true); }
    let mut tested:HashSet<Vec<VertexId>> = HashSet::new();
    for _ in 0..iterations {
        let subset = sample_subset(inst, k, rng);
        if tested.contains(&subset) { continue; }
        let found = is_clique(inst, &subset);
        tested.insert(subset);
        if found { return Ok(true); }
    }
    Ok(false)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::graph::CompactGraph;

    #[test]
    fn test_full_sample() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(monte_carlo_sampling(&CompactGraph::complete(5), 5, 1, &mut rng).unwrap());
        assert!(monte_carlo_sampling(&CompactGraph::complete(3), 3, 1, &mut rng).unwrap());
    }

    #[test]
    fn test_k_larger_than_n() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut untouched = rng.clone();
        let res = monte_carlo_sampling(&CompactGraph::complete(4), 5, 1000, &mut rng);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
        // no randomness was consumed
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_single_triangle() {
        // 6 vertices, only {1,3,5} is a triangle: 1 chance out of 20 per draw
        let g = CompactGraph::from_edge_list(6, &[(1,3),(3,5),(1,5),(0,1),(2,4)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(123_578);
        assert!(monte_carlo_sampling(&g, 3, 1000, &mut rng).unwrap());
        assert!(!monte_carlo_sampling(&g, 4, 1000, &mut rng).unwrap());
    }

    #[test]
    fn test_sample_subset_is_sorted_and_distinct() {
        let g = CompactGraph::with_vertices(30);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let s = sample_subset(&g, 7, &mut rng);
            assert_eq!(s.len(), 7);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            assert!(s.iter().all(|u| *u < 30));
        }
    }
}
