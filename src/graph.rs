use std::ops::Range;

use bit_set::BitSet;

use crate::error::Error;

/** Vertex Id */
pub type VertexId = usize;

/** read-only view of an undirected graph, as seen by the clique searches */
pub trait GraphInstance: std::fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges
    fn nb_edges(&self) -> usize;

    /// vertices of the graph (0..n)
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// number of neighbors of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent. O(1)
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId,VertexId)];

    /// identifier of u in the source it was built from (file label, or u itself)
    fn label(&self, u:VertexId) -> i64;

    /// print statistics of the graph
    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|u| self.degree(u)).collect();
        if let (Some(dmin), Some(dmax)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", dmin);
            println!("\t{} \t max degree", dmax);
        }
    }
}

/** simple undirected graph (adjacency lists + bitset adjacency matrix).
Edges can only be added while the graph is being built. Searches receive it
through the read-only [`GraphInstance`] trait.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactGraph {
    /// edges of the graph (u < v), in insertion order
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
    /// labels[i]: external identifier of vertex i
    labels: Vec<i64>,
}

impl GraphInstance for CompactGraph {
    fn nb_vertices(&self) -> usize { self.adj_list.len() }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    fn label(&self, u:VertexId) -> i64 { self.labels[u] }
}

impl CompactGraph {
    /** graph with n isolated vertices labelled 0..n */
    pub fn with_vertices(n:usize) -> Self {
        Self::with_labels((0..n as i64).collect())
    }

    /** graph with one isolated vertex per label */
    pub fn with_labels(labels:Vec<i64>) -> Self {
        let n = labels.len();
        Self {
            edges: Vec::new(),
            adj_list: vec![Vec::new() ; n],
            adj_matrix: vec![BitSet::with_capacity(n) ; n],
            labels,
        }
    }

    /** builds a graph from an edge list (0-based indices) */
    pub fn from_edge_list(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, Error> {
        let mut res = Self::with_vertices(n);
        for (u,v) in edges {
            res.add_edge(*u, *v)?;
        }
        Ok(res)
    }

    /** complete graph over n vertices */
    pub fn complete(n:usize) -> Self {
        let mut res = Self::with_vertices(n);
        for u in 0..n {
            for v in u+1..n {
                res.insert_unchecked(u, v);
            }
        }
        res
    }

    /** adds the edge {u,v}. Returns false if it was already present.

# Errors
 - self-loops and endpoints outside the vertex set
    */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) -> Result<bool, Error> {
        let n = self.nb_vertices();
        if u == v || u >= n || v >= n {
            return Err(Error::InvalidEdge { u, v, n });
        }
        if self.adj_matrix[u].contains(v) {
            return Ok(false);
        }
        self.insert_unchecked(u, v);
        Ok(true)
    }

    /** all absent edges (u < v), in lexicographic order */
    pub fn non_edges(&self) -> Vec<(VertexId,VertexId)> {
        let n = self.nb_vertices();
        let mut res = Vec::new();
        for u in 0..n {
            for v in u+1..n {
                if !self.adj_matrix[u].contains(v) {
                    res.push((u,v));
                }
            }
        }
        res
    }

    fn insert_unchecked(&mut self, u:VertexId, v:VertexId) {
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.edges.push((u.min(v), u.max(v)));
    }
}

/// number of edges of the complete graph over n vertices
pub fn max_edges(n:usize) -> usize {
    n * n.saturating_sub(1) / 2
}
