//! Trophic differences.
//!
//! For an edge `j -> i`, the trophic difference is `x_ij = s_i - s_j`: how far
//! up the food chain the flow travels. In a perfectly layered web every
//! difference is exactly one.

use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::error::{Error, Result};

/// Trophic difference of every edge, indexed by `EdgeIndex::index()`.
///
/// `levels` must hold one level per node (as returned by
/// [`trophic_levels`](crate::trophic_levels)). Self-loops give `0.0` and are kept.
///
/// # Errors
///
/// [`Error::NotDirected`] for undirected graphs, [`Error::DimensionMismatch`] if
/// `levels` does not cover every node.
pub fn trophic_differences<N, E, Ty, Ix>(
    graph: &Graph<N, E, Ty, Ix>,
    levels: &[f64],
) -> Result<Vec<f64>>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    if !graph.is_directed() {
        return Err(Error::NotDirected);
    }
    if levels.len() != graph.node_count() {
        return Err(Error::DimensionMismatch {
            expected: graph.node_count(),
            found: levels.len(),
        });
    }

    Ok(graph
        .edge_references()
        .map(|e| levels[e.target().index()] - levels[e.source().index()])
        .collect())
}
