//! DOGS experiments on the k-clique decision problem: exact, greedy and Monte Carlo searches

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error type of the crate
pub mod error;

/// undirected graph model
pub mod graph;

/// experiment parameters
pub mod params;

/// separated 2D points for synthetic vertices
pub mod points;

/// random graph families at given densities
pub mod generator;

/// read edge-list, CSV and DIMACS graphs
pub mod ingest;

/// k-clique decision procedures
pub mod search;

/// experiment harness (file-graph mode, sweeps, operation counting)
pub mod experiment;

/// helper and utility methods for executables
pub mod util;

pub use error::Error;
pub use graph::{CompactGraph, GraphInstance, VertexId};
pub use params::Params;
