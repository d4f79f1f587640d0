//! Parameter bundle for the k-clique experiments.
//!
//! Defaults reproduce the reference experiment: seed 123578, densities
//! 12.5/25/50/75%, 1000 Monte Carlo iterations, sweeps from 4 vertices up to
//! 20 (decision sweep) or 100 (operation counting).

use serde::Serialize;

use crate::error::Error;

/// Controls for the rejection sampling of node coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct PointParams {
    /// minimal euclidean distance between two accepted points
    pub min_distance: f64,
    /// smallest coordinate (inclusive)
    pub coord_min: i64,
    /// largest coordinate (inclusive)
    pub coord_max: i64,
    /// consecutive rejections tolerated for one point before giving up
    pub max_attempts: usize,
}

impl Default for PointParams {
    fn default() -> Self {
        PointParams {
            min_distance: 10.,
            coord_min:    1,
            coord_max:    1000,
            max_attempts: 10_000,
        }
    }
}

/// All tunable controls of an experiment run.
#[derive(Clone, Debug, Serialize)]
pub struct Params {
    /// seed of the single random source of the run
    pub seed: u64,
    /// edge densities used to generate graphs and derive k = ⌈n·d⌉
    pub densities: Vec<f64>,
    /// trials of each Monte Carlo search
    pub iterations: usize,
    /// first vertex count of the sweeps
    pub min_vertices: usize,
    /// last vertex count of the decision sweep (inclusive)
    pub vertex_limit: usize,
    /// last vertex count of the operation-count sweep (inclusive)
    pub op_vertex_limit: usize,
    /// fixed density of the operation-count sweep
    pub op_density: f64,
    /// run the exact search in file-graph mode (disable on large graphs)
    pub run_exact: bool,
    /// print one line per trial
    pub verbose: bool,
    /// coordinate generation
    pub points: PointParams,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            seed:            123_578,
            densities:       vec![0.125, 0.25, 0.5, 0.75],
            iterations:      1_000,
            min_vertices:    4,
            vertex_limit:    20,
            op_vertex_limit: 100,
            op_density:      0.5,
            run_exact:       true,
            verbose:         true,
            points:          PointParams::default(),
        }
    }
}

impl Params {
    /// defaults of the file-graph mode (small densities first: real graphs are large)
    pub fn file_graph() -> Self {
        Params {
            densities: vec![0.001, 0.010, 0.125, 0.25, 0.5, 0.75],
            ..Params::default()
        }
    }

    /** checks the parameters are consistent

# Errors
 - densities outside [0,1], empty vertex ranges, empty coordinate box
    */
    pub fn validate(&self) -> Result<(), Error> {
        check_densities(&self.densities)?;
        check_densities(&[self.op_density])?;
        if self.min_vertices == 0 {
            return Err(Error::InvalidArgument("min_vertices must be positive".to_string()));
        }
        if self.vertex_limit < self.min_vertices || self.op_vertex_limit < self.min_vertices {
            return Err(Error::InvalidArgument(format!(
                "vertex limits ({}, {}) must be at least min_vertices ({})",
                self.vertex_limit, self.op_vertex_limit, self.min_vertices
            )));
        }
        if self.points.coord_max < self.points.coord_min {
            return Err(Error::InvalidArgument("empty coordinate range".to_string()));
        }
        Ok(())
    }
}

/// every density must lie in [0,1]
pub fn check_densities(densities:&[f64]) -> Result<(), Error> {
    match densities.iter().find(|d| !(0. ..=1.).contains(*d)) {
        None => Ok(()),
        Some(d) => Err(Error::InvalidArgument(format!("density {} outside [0,1]", d))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = Params::default();
        assert_eq!(p.seed, 123_578);
        assert_eq!(p.densities, vec![0.125, 0.25, 0.5, 0.75]);
        assert_eq!(p.iterations, 1_000);
        assert_eq!(p.min_vertices, 4);
        assert_eq!(p.vertex_limit, 20);
        assert_eq!(p.op_vertex_limit, 100);
        assert!((p.points.min_distance - 10.).abs() < 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn file_graph_params() {
        let p = Params::file_graph();
        assert_eq!(p.densities.len(), 6);
        assert!((p.densities[0] - 0.001).abs() < 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_density() {
        let p = Params { densities: vec![0.5, 1.5], ..Params::default() };
        assert!(matches!(p.validate(), Err(Error::InvalidArgument(_))));
        let p = Params { densities: vec![-0.1], ..Params::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_empty_sweep() {
        let p = Params { vertex_limit: 3, ..Params::default() };
        assert!(p.validate().is_err());
        let p = Params { min_vertices: 0, ..Params::default() };
        assert!(p.validate().is_err());
    }
}
