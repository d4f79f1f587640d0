use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Error;
use crate::graph::{CompactGraph, GraphInstance, max_edges};
use crate::params::{PointParams, check_densities};
use crate::points::{Point, generate_points};

/** graphs sharing one node set, one per requested density */
#[derive(Debug, Clone)]
pub struct GeneratedFamily {
    /// coordinates of the vertices (points[i] belongs to vertex i)
    pub points: Vec<Point>,
    /// (density, graph) in the order the densities were requested
    pub graphs: Vec<(f64, CompactGraph)>,
}

/// number of edges a graph of density d over n vertices receives: ⌊n(n-1)/2 · d⌋
pub fn target_edges(n:usize, density:f64) -> usize {
    (max_edges(n) as f64 * density).floor() as usize
}

/** generates a family of random graphs over n vertices.
 1. places n separated points, one per vertex, in a zero-edge base graph
 2. for each density d: shuffles the non-edges of the base and adds the first
    ⌊n(n-1)/2 · d⌋ of them to a fresh copy of the base

Density levels are independent of each other (each one starts from the base).

# Errors
 - densities outside [0,1]
 - point placement failure (see [`generate_points`])
*/
pub fn generate_graphs<R:Rng + ?Sized>(
    n:usize,
    densities:&[f64],
    point_params:&PointParams,
    rng:&mut R
) -> Result<GeneratedFamily, Error> {
    check_densities(densities)?;
    let points = generate_points(n, point_params, rng)?;
    let base = CompactGraph::with_vertices(n);
    let mut graphs = Vec::with_capacity(densities.len());
    for density in densities {
        let mut candidates = base.non_edges();
        candidates.shuffle(rng);
        let mut g = base.clone();
        for (u,v) in candidates.into_iter().take(target_edges(n, *density)) {
            g.add_edge(u, v)?;
        }
        debug_assert_eq!(g.nb_edges(), target_edges(n, *density));
        graphs.push((*density, g));
    }
    Ok(GeneratedFamily { points, graphs })
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_density_exactness() {
        let densities = [0.125, 0.25, 0.5, 0.75, 1.0, 0.0];
        let mut rng = ChaCha8Rng::seed_from_u64(123_578);
        for n in 4..=15 {
            let family = generate_graphs(n, &densities, &PointParams::default(), &mut rng).unwrap();
            assert_eq!(family.points.len(), n);
            assert_eq!(family.graphs.len(), densities.len());
            for ((d, g), expected_d) in family.graphs.iter().zip(densities.iter()) {
                assert_eq!(d, expected_d);
                assert_eq!(g.nb_vertices(), n);
                assert_eq!(g.nb_edges(), ((n*(n-1)/2) as f64 * d).floor() as usize);
            }
        }
    }

    #[test]
    fn test_target_edges() {
        assert_eq!(target_edges(4, 0.125), 0);
        assert_eq!(target_edges(4, 0.25), 1);
        assert_eq!(target_edges(4, 0.5), 3);
        assert_eq!(target_edges(4, 0.75), 4);
        assert_eq!(target_edges(10, 0.5), 22);
        assert_eq!(target_edges(10, 1.0), 45);
    }

    #[test]
    fn test_reproducible() {
        let run = || {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            generate_graphs(10, &[0.25, 0.5], &PointParams::default(), &mut rng).unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.points, b.points);
        for ((_, ga), (_, gb)) in a.graphs.iter().zip(b.graphs.iter()) {
            assert_eq!(ga.edges(), gb.edges());
        }
    }

    #[test]
    fn test_rejects_bad_density() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let res = generate_graphs(5, &[0.5, 2.0], &PointParams::default(), &mut rng);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}
