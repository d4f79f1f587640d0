use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised while loading graphs, generating instances or running searches.
#[derive(Debug, Error)]
pub enum Error {
    /// the instance file cannot be opened or read
    #[error("unable to read {path}: {source}")]
    Io {
        /// file that was being read
        path: String,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// a line of the instance file does not follow the expected format
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// file that was being parsed
        path: String,
        /// 1-based line number
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// a tabular file lacks the requested source/target column
    #[error("{path}: column '{column}' not found in header")]
    MissingColumn {
        /// file that was being parsed
        path: String,
        /// column name that was requested
        column: String,
    },

    /// an edge that cannot exist in a simple undirected graph
    #[error("invalid edge ({u},{v}) in a graph with {n} vertices")]
    InvalidEdge {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// number of vertices of the graph
        n: usize,
    },

    /// a parameter outside its domain (e.g. sampling more vertices than available)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// the coordinate region could not host the requested number of separated points
    #[error("infeasible region: placed {placed} of {requested} points before {attempts} consecutive rejections")]
    InfeasibleRegion {
        /// points successfully placed
        placed: usize,
        /// points requested
        requested: usize,
        /// rejection ceiling that was hit
        attempts: usize,
    },

    /// statistics could not be written
    #[error("unable to export statistics to {path}: {reason}")]
    Export {
        /// output file
        path: String,
        /// what went wrong
        reason: String,
    },
}
