//! One-shot trophic analysis.
//!
//! [`TrophicAnalysis`] chains levels, differences and coherence over a single
//! graph snapshot and returns them together as a [`TrophicReport`].
//!
//! ```rust
//! use petgraph::graph::DiGraph;
//! use trophic::TrophicAnalysis;
//!
//! let mut web = DiGraph::<&str, f64>::new();
//! let algae = web.add_node("algae");
//! let snail = web.add_node("snail");
//! let crab = web.add_node("crab");
//! web.add_edge(algae, snail, 1.0);
//! web.add_edge(algae, crab, 1.0);
//! web.add_edge(snail, crab, 1.0);
//!
//! let report = TrophicAnalysis::new()
//!     .with_cannibalism(false)
//!     .run(&web, |e| *e.weight())
//!     .unwrap();
//!
//! assert_eq!(report.basal_nodes(), vec![0]);
//! assert!((report.levels[2] - 2.5).abs() < 1e-12);
//! assert!(report.coherence > 0.0);
//! ```

use petgraph::graph::{EdgeReference, Graph, IndexType};
use petgraph::EdgeType;

use crate::coherence::trophic_coherence;
use crate::differences::trophic_differences;
use crate::error::Result;
use crate::levels::trophic_levels_with_solver;
use crate::solver::{LinearSolver, LuSolver};

/// Trophic analysis configuration and runner.
#[derive(Debug, Clone)]
pub struct TrophicAnalysis<S = LuSolver> {
    /// Linear solver for the level system.
    solver: S,
    /// Whether self-loops count towards coherence.
    include_cannibalism: bool,
}

impl TrophicAnalysis<LuSolver> {
    /// Create an analysis with the default LU solver, counting self-loops.
    pub fn new() -> Self {
        Self {
            solver: LuSolver::new(),
            include_cannibalism: true,
        }
    }
}

impl Default for TrophicAnalysis<LuSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LinearSolver> TrophicAnalysis<S> {
    /// Set whether self-loops count towards coherence.
    pub fn with_cannibalism(mut self, include: bool) -> Self {
        self.include_cannibalism = include;
        self
    }

    /// Replace the linear solver.
    pub fn with_solver<T: LinearSolver>(self, solver: T) -> TrophicAnalysis<T> {
        TrophicAnalysis {
            solver,
            include_cannibalism: self.include_cannibalism,
        }
    }

    /// Whether self-loops count towards coherence.
    pub fn include_cannibalism(&self) -> bool {
        self.include_cannibalism
    }

    /// Run the analysis with edge weights chosen by `weight`.
    ///
    /// # Errors
    ///
    /// Any error from the level, difference or coherence stage. No partial
    /// report is returned.
    pub fn run<N, E, Ty, Ix, F>(
        &self,
        graph: &Graph<N, E, Ty, Ix>,
        weight: F,
    ) -> Result<TrophicReport>
    where
        Ty: EdgeType,
        Ix: IndexType,
        F: FnMut(EdgeReference<'_, E, Ix>) -> f64,
    {
        let levels = trophic_levels_with_solver(graph, weight, &self.solver)?;
        let differences = trophic_differences(graph, &levels)?;
        let coherence = trophic_coherence(graph, &levels, self.include_cannibalism)?;
        Ok(TrophicReport {
            levels,
            differences,
            coherence,
        })
    }

    /// Run the analysis with unit edge weights.
    pub fn run_unweighted<N, E, Ty, Ix>(&self, graph: &Graph<N, E, Ty, Ix>) -> Result<TrophicReport>
    where
        Ty: EdgeType,
        Ix: IndexType,
    {
        self.run(graph, |_| 1.0)
    }
}

/// Levels, differences and coherence of one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TrophicReport {
    /// Level per node, indexed by `NodeIndex::index()`.
    pub levels: Vec<f64>,
    /// Difference per edge, indexed by `EdgeIndex::index()`.
    pub differences: Vec<f64>,
    /// Standard deviation of the (possibly filtered) differences.
    pub coherence: f64,
}

impl TrophicReport {
    /// Nodes at level exactly one.
    ///
    /// With non-negative weights every non-basal node sits at level two or
    /// above, so this is the basal set.
    pub fn basal_nodes(&self) -> Vec<usize> {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Highest trophic level, or `None` for an empty graph.
    pub fn max_level(&self) -> Option<f64> {
        self.levels.iter().copied().reduce(f64::max)
    }
}
