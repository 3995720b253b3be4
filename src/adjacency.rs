//! Weighted in-flow adjacency.
//!
//! The in-flow matrix is transposed relative to the usual "row = source"
//! convention: rows are targets, columns are sources, so `a[(i, j)]` is the
//! total weight flowing from node `j` into node `i`. Row sums are the
//! in-weights `k_in`, and a node is **basal** when its in-weight is zero.
//!
//! ```text
//! edges:  0 -> 1 (w=2), 0 -> 2 (w=1), 1 -> 2 (w=1)
//!
//!            src 0  src 1  src 2    k_in
//! tgt 0   [    0      0      0  ]    0    (basal)
//! tgt 1   [    2      0      0  ]    2
//! tgt 2   [    1      1      0  ]    2
//! ```
//!
//! Nodes are laid out in `NodeIndex` order; the same order is used for the
//! basal partition and for every output indexed by node.

use faer::Mat;
use petgraph::graph::{EdgeReference, Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::error::{Error, Result};

/// Weighted in-flow matrix of a directed graph together with its in-weights.
#[derive(Debug, Clone)]
pub struct InFlow {
    matrix: Mat<f64>,
    in_weight: Vec<f64>,
}

impl InFlow {
    /// The `n × n` in-flow matrix (`[(target, source)]`).
    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    /// In-weight sum `k_in` of every node.
    pub fn in_weights(&self) -> &[f64] {
        &self.in_weight
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.in_weight.len()
    }

    /// Whether node `i` has no incoming flow.
    pub fn is_basal(&self, i: usize) -> bool {
        self.in_weight[i] == 0.0
    }

    /// Basal node indices, ascending.
    pub fn basal_nodes(&self) -> Vec<usize> {
        (0..self.node_count()).filter(|&i| self.is_basal(i)).collect()
    }

    /// Non-basal node indices, ascending.
    pub fn non_basal_nodes(&self) -> Vec<usize> {
        (0..self.node_count()).filter(|&i| !self.is_basal(i)).collect()
    }

    /// Row-normalised transition matrix `P` over the non-basal nodes.
    ///
    /// `P[(r, c)] = a[(i, j)] / k_in[i]` for the `r`-th and `c`-th non-basal
    /// nodes `i` and `j`. Rows are divided by the *full* in-weight, so flow
    /// arriving from basal nodes leaves the row sum below one.
    pub fn transition_matrix(&self) -> Mat<f64> {
        let non_basal = self.non_basal_nodes();
        let n = non_basal.len();
        let mut p = Mat::<f64>::zeros(n, n);
        for (r, &i) in non_basal.iter().enumerate() {
            let k = self.in_weight[i];
            for (c, &j) in non_basal.iter().enumerate() {
                p[(r, c)] = self.matrix[(i, j)] / k;
            }
        }
        p
    }
}

/// Build the weighted in-flow matrix of a directed graph.
///
/// `weight` selects each edge's weight; parallel edges accumulate. Weights must
/// be finite and non-negative.
///
/// # Errors
///
/// - [`Error::NotDirected`] if the graph is undirected (checked first).
/// - [`Error::InvalidWeight`] for a negative, NaN or infinite weight.
pub fn in_flow_matrix<N, E, Ty, Ix, F>(graph: &Graph<N, E, Ty, Ix>, mut weight: F) -> Result<InFlow>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(EdgeReference<'_, E, Ix>) -> f64,
{
    if !graph.is_directed() {
        return Err(Error::NotDirected);
    }

    let n = graph.node_count();
    let mut matrix = Mat::<f64>::zeros(n, n);
    let mut in_weight = vec![0.0; n];

    for edge in graph.edge_references() {
        let w = weight(edge);
        if !w.is_finite() || w < 0.0 {
            return Err(Error::InvalidWeight {
                edge: edge.id().index(),
                weight: w,
            });
        }
        let source = edge.source().index();
        let target = edge.target().index();
        matrix[(target, source)] += w;
        in_weight[target] += w;
    }

    Ok(InFlow { matrix, in_weight })
}
