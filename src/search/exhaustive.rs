use itertools::Itertools;

use crate::graph::{GraphInstance, VertexId};

/// true iff every pair of vertices in `subset` is adjacent
pub fn is_clique(inst:&dyn GraphInstance, subset:&[VertexId]) -> bool {
    subset.iter().tuple_combinations().all(|(u,v)| inst.are_adjacent(*u, *v))
}

/** exhaustive search: enumerates the k-subsets of the vertices in lexicographic
order and stops at the first one that is a clique.
O(C(n,k)·k²). Used as ground truth by the experiments.
*/
pub fn exhaustive_clique_search(inst:&dyn GraphInstance, k:usize) -> bool {
    if k == 0 { return true; } // the empty set is a clique
    if k > inst.nb_vertices() { return false; }
    inst.vertices().combinations(k).any(|subset| is_clique(inst, &subset))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::CompactGraph;

    #[test]
    fn test_complete_graph() {
        let k4 = CompactGraph::complete(4);
        for k in 0..=4 {
            assert!(exhaustive_clique_search(&k4, k));
        }
        assert!(!exhaustive_clique_search(&k4, 5));
    }

    #[test]
    fn test_path_has_no_triangle() {
        let g = CompactGraph::from_edge_list(4, &[(0,1),(1,2),(2,3)]).unwrap();
        assert!(exhaustive_clique_search(&g, 2));
        assert!(!exhaustive_clique_search(&g, 3));
    }

    #[test]
    fn test_hidden_clique() {
        // K4 on {2,4,5,7} plus a few distracting edges
        let g = CompactGraph::from_edge_list(8, &[
            (2,4),(2,5),(2,7),(4,5),(4,7),(5,7),
            (0,1),(1,3),(3,6),(0,6),(1,6),
        ]).unwrap();
        assert!(exhaustive_clique_search(&g, 4));
        assert!(!exhaustive_clique_search(&g, 5));
        assert!(is_clique(&g, &[2,4,5,7]));
        assert!(!is_clique(&g, &[0,1,3]));
    }

    #[test]
    fn test_empty_graph() {
        let g = CompactGraph::with_vertices(5);
        assert!(exhaustive_clique_search(&g, 1));
        assert!(!exhaustive_clique_search(&g, 2));
    }
}
