use rand::Rng;
use serde::Serialize;

use crate::error::Error;
use crate::params::PointParams;

/** integer 2D coordinate attached to a generated vertex */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    /// abscissa
    pub x: i64,
    /// ordinate
    pub y: i64,
}

impl Point {
    /// euclidean distance to another point
    pub fn dist(&self, other:&Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx*dx + dy*dy).sqrt()
    }
}

/** generates n points that are pairwise at least `min_distance` apart.
Candidates are drawn uniformly in [coord_min, coord_max]² and rejected while too
close to an accepted point.

# Errors
 - `InfeasibleRegion` if `max_attempts` consecutive candidates are rejected
*/
pub fn generate_points<R:Rng + ?Sized>(n:usize, params:&PointParams, rng:&mut R) -> Result<Vec<Point>, Error> {
    let mut res:Vec<Point> = Vec::with_capacity(n);
    let mut nb_rejected = 0;
    while res.len() < n {
        let candidate = Point {
            x: rng.gen_range(params.coord_min..=params.coord_max),
            y: rng.gen_range(params.coord_min..=params.coord_max),
        };
        if res.iter().all(|p| candidate.dist(p) >= params.min_distance) {
            res.push(candidate);
            nb_rejected = 0;
        } else {
            nb_rejected += 1;
            if nb_rejected >= params.max_attempts {
                return Err(Error::InfeasibleRegion {
                    placed: res.len(),
                    requested: n,
                    attempts: params.max_attempts,
                });
            }
        }
    }
    Ok(res)
}
