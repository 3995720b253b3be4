//! Trophic levels.
//!
//! The trophic level of node `i` is one plus the in-flow weighted mean of the
//! levels of its predecessors:
//!
//! ```text
//! s_i = 1 + (1 / k_i) · Σ_j a_ij · s_j        k_i = Σ_j a_ij
//! ```
//!
//! Nodes with `k_i = 0` (basal nodes) have `s_i = 1` by convention.
//!
//! ## The Linear System
//!
//! Levels of non-basal nodes depend on each other, so they are solved jointly
//! (Levine 1980). Let `P` be the in-flow matrix restricted to non-basal rows and
//! columns, each row divided by that node's full in-weight. Then
//!
//! ```text
//! (I - P) · y = 1        s = y + 1   (non-basal nodes)
//! ```
//!
//! Flow arriving from basal nodes is what makes `I - P` invertible: every
//! non-basal node must be reachable from a basal one. A closed loop with no
//! basal input (a pure cycle, or a node fed only by itself) leaves the system
//! singular, and the computation fails with [`Error::SingularSystem`].
//!
//! ## Example
//!
//! ```rust
//! use petgraph::graph::DiGraph;
//! use trophic::trophic_levels;
//!
//! let mut graph = DiGraph::<&str, ()>::new();
//! let grass = graph.add_node("grass");
//! let rabbit = graph.add_node("rabbit");
//! let fox = graph.add_node("fox");
//! graph.add_edge(grass, rabbit, ());
//! graph.add_edge(rabbit, fox, ());
//!
//! let levels = trophic_levels(&graph).unwrap();
//! assert_eq!(levels, vec![1.0, 2.0, 3.0]);
//! ```
//!
//! ## References
//!
//! Levine, S. (1980). "Several measures of trophic structure applicable to
//! complex food webs." Journal of Theoretical Biology 83, 195-207.

use faer::Mat;
use petgraph::graph::{EdgeReference, Graph, IndexType};
use petgraph::EdgeType;

use crate::adjacency::in_flow_matrix;
use crate::error::{Error, Result};
use crate::solver::{LinearSolver, LuSolver};

/// Trophic levels with unit edge weights.
///
/// Returns one level per node, indexed by `NodeIndex::index()`.
///
/// # Errors
///
/// [`Error::NotDirected`] for undirected graphs, [`Error::SingularSystem`] when
/// the non-basal system has no unique solution.
pub fn trophic_levels<N, E, Ty, Ix>(graph: &Graph<N, E, Ty, Ix>) -> Result<Vec<f64>>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    trophic_levels_weighted(graph, |_| 1.0)
}

/// Trophic levels with edge weights chosen by `weight`.
///
/// ```rust
/// use petgraph::graph::DiGraph;
/// use trophic::trophic_levels_weighted;
///
/// let mut graph = DiGraph::<(), f64>::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, c, 3.0);
/// graph.add_edge(a, b, 1.0);
/// graph.add_edge(b, c, 1.0);
///
/// // c eats mostly from the basal node a.
/// let levels = trophic_levels_weighted(&graph, |e| *e.weight()).unwrap();
/// assert!((levels[2] - 2.25).abs() < 1e-12);
/// ```
pub fn trophic_levels_weighted<N, E, Ty, Ix, F>(
    graph: &Graph<N, E, Ty, Ix>,
    weight: F,
) -> Result<Vec<f64>>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(EdgeReference<'_, E, Ix>) -> f64,
{
    trophic_levels_with_solver(graph, weight, &LuSolver::new())
}

/// Trophic levels using a caller-supplied [`LinearSolver`].
pub fn trophic_levels_with_solver<N, E, Ty, Ix, F, S>(
    graph: &Graph<N, E, Ty, Ix>,
    weight: F,
    solver: &S,
) -> Result<Vec<f64>>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(EdgeReference<'_, E, Ix>) -> f64,
    S: LinearSolver + ?Sized,
{
    let flow = in_flow_matrix(graph, weight)?;
    let n = flow.node_count();
    let non_basal = flow.non_basal_nodes();

    tracing::debug!(
        nodes = n,
        basal = n - non_basal.len(),
        non_basal = non_basal.len(),
        "computing trophic levels"
    );

    let mut levels = vec![1.0; n];
    if non_basal.is_empty() {
        return Ok(levels);
    }

    // I - P
    let p = flow.transition_matrix();
    let m = non_basal.len();
    let mut system = Mat::<f64>::identity(m, m);
    for r in 0..m {
        for c in 0..m {
            system[(r, c)] -= p[(r, c)];
        }
    }
    let mut ones = Mat::<f64>::zeros(m, 1);
    for r in 0..m {
        ones[(r, 0)] = 1.0;
    }

    let y = solver.solve(&system, &ones)?;
    if y.nrows() != m || y.ncols() != 1 {
        return Err(Error::ShapeMismatch {
            expected: format!("{}x1 solution", m),
            actual: format!("{}x{} solution", y.nrows(), y.ncols()),
        });
    }

    for (r, &i) in non_basal.iter().enumerate() {
        levels[i] = y[(r, 0)] + 1.0;
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn test_chain() -> Result<()> {
        let mut graph = DiGraph::<&str, ()>::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b, ());
        graph.add_edge(b, c, ());

        assert_eq!(trophic_levels(&graph)?, vec![1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_edge_direction_raises_target() -> Result<()> {
        let mut graph = DiGraph::<(), ()>::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n1, n0, ());
        assert_eq!(trophic_levels(&graph)?, vec![2.0, 1.0]);

        let mut graph = DiGraph::<(), ()>::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        assert_eq!(trophic_levels(&graph)?, vec![1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_empty_and_all_basal() -> Result<()> {
        let graph = DiGraph::<(), ()>::new();
        assert!(trophic_levels(&graph)?.is_empty());

        let mut graph = DiGraph::<(), ()>::new();
        graph.add_node(());
        graph.add_node(());
        graph.add_node(());
        assert_eq!(trophic_levels(&graph)?, vec![1.0; 3]);
        Ok(())
    }

    #[test]
    fn test_all_basal_never_calls_solver() -> Result<()> {
        struct Refuse;
        impl LinearSolver for Refuse {
            fn solve(&self, _: &Mat<f64>, _: &Mat<f64>) -> Result<Mat<f64>> {
                Err(Error::SingularSystem { size: usize::MAX })
            }
        }

        let mut graph = DiGraph::<(), f64>::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, 0.0);

        let levels = trophic_levels_with_solver(&graph, |e| *e.weight(), &Refuse)?;
        assert_eq!(levels, vec![1.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_weighted_mean_of_prey() -> Result<()> {
        // c eats a (basal, weight 3) and b (level 2, weight 1): 1 + (3·1 + 1·2)/4.
        let mut graph = DiGraph::<(), f64>::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, c, 3.0);
        graph.add_edge(a, b, 1.0);
        graph.add_edge(b, c, 1.0);

        let levels = trophic_levels_weighted(&graph, |e| *e.weight())?;
        assert!((levels[0] - 1.0).abs() < 1e-12);
        assert!((levels[1] - 2.0).abs() < 1e-12);
        assert!((levels[2] - 2.25).abs() < 1e-12);

        // Unit weights ignore the edge payload.
        let unweighted = trophic_levels(&graph)?;
        assert!((unweighted[2] - 2.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_cycle_with_basal_input() -> Result<()> {
        // 0 -> 1, 1 <-> 2: s1 = 1 + (1 + s2)/2, s2 = 1 + s1  =>  s1 = 4, s2 = 5.
        let mut graph = DiGraph::<(), ()>::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n2, n1, ());

        let levels = trophic_levels(&graph)?;
        assert!((levels[1] - 4.0).abs() < 1e-9);
        assert!((levels[2] - 5.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_pure_cycle_is_singular() {
        let mut graph = DiGraph::<(), ()>::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());

        assert_eq!(
            trophic_levels(&graph).unwrap_err(),
            Error::SingularSystem { size: 2 }
        );
    }

    #[test]
    fn test_undirected_rejected() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());

        assert_eq!(trophic_levels(&graph).unwrap_err(), Error::NotDirected);
    }
}
