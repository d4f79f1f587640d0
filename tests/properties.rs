use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dogs_kclique::{CompactGraph, GraphInstance};
use dogs_kclique::generator::{generate_graphs, target_edges};
use dogs_kclique::params::PointParams;
use dogs_kclique::search::exhaustive::exhaustive_clique_search;
use dogs_kclique::search::greedy::greedy_clique_search;
use dogs_kclique::search::mc_incremental::monte_carlo_incremental;
use dogs_kclique::search::mc_sampling::monte_carlo_sampling;

/// random simple graph on up to 9 vertices
fn small_graph() -> impl Strategy<Value = CompactGraph> {
    (1usize..=9).prop_flat_map(|n| {
        proptest::collection::vec(proptest::bool::ANY, n*(n-1)/2).prop_map(move |mask| {
            let mut g = CompactGraph::with_vertices(n);
            let mut i = 0;
            for u in 0..n {
                for v in u+1..n {
                    if mask[i] { g.add_edge(u, v).unwrap(); }
                    i += 1;
                }
            }
            g
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn heuristics_have_no_false_positives(g in small_graph(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for k in 0..=g.nb_vertices() {
            let exact = exhaustive_clique_search(&g, k);
            prop_assert!(!greedy_clique_search(&g, k) || exact);
            prop_assert!(!monte_carlo_incremental(&g, k, 20, &mut rng) || exact);
            prop_assert!(!monte_carlo_sampling(&g, k, 20, &mut rng).unwrap() || exact);
        }
    }

    #[test]
    fn adjacency_is_symmetric(g in small_graph()) {
        for u in g.vertices() {
            prop_assert!(!g.are_adjacent(u, u));
            for v in g.vertices() {
                prop_assert_eq!(g.are_adjacent(u, v), g.are_adjacent(v, u));
            }
        }
    }

    #[test]
    fn generated_density_is_exact(n in 4usize..=20, density in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let family = generate_graphs(n, &[density], &PointParams::default(), &mut rng).unwrap();
        let expected = ((n*(n-1)/2) as f64 * density).floor() as usize;
        prop_assert_eq!(target_edges(n, density), expected);
        prop_assert_eq!(family.graphs[0].1.nb_edges(), expected);
    }
}
