//! # trophic
//!
//! Trophic levels, trophic differences and trophic coherence of weighted
//! directed graphs.
//!
//! Edges are flows (energy, resources, influence) from source to target. A
//! node's trophic level is one plus the in-flow weighted mean level of its
//! predecessors; nodes with no in-flow are basal and sit at level one. Levels
//! are solved jointly as one linear system.
//!
//! ```text
//! graph ──▶ levels ──▶ differences ──▶ coherence
//! ```
//!
//! Outputs are indexed the way `petgraph` indexes the input: levels by
//! `NodeIndex::index()`, differences by `EdgeIndex::index()`.
//!
//! ```rust
//! use petgraph::graph::DiGraph;
//! use trophic::{trophic_coherence, trophic_differences, trophic_levels};
//!
//! let mut graph = DiGraph::<(), ()>::new();
//! let plant = graph.add_node(());
//! let herbivore = graph.add_node(());
//! let omnivore = graph.add_node(());
//! graph.add_edge(plant, herbivore, ());
//! graph.add_edge(plant, omnivore, ());
//! graph.add_edge(herbivore, omnivore, ());
//!
//! let levels = trophic_levels(&graph).unwrap();
//! assert_eq!(levels, vec![1.0, 2.0, 2.5]);
//!
//! let diffs = trophic_differences(&graph, &levels).unwrap();
//! assert_eq!(diffs, vec![1.0, 1.5, 0.5]);
//!
//! let q = trophic_coherence(&graph, &levels, true).unwrap();
//! assert!(q > 0.0);
//! ```

pub mod adjacency;
pub mod analysis;
pub mod coherence;
pub mod differences;
/// Error types used across `trophic`.
pub mod error;
pub mod levels;
pub mod solver;


pub use adjacency::{in_flow_matrix, InFlow};
pub use analysis::{TrophicAnalysis, TrophicReport};
pub use coherence::{standard_deviation, trophic_coherence, trophic_incoherence_parameter};
pub use differences::trophic_differences;
pub use error::{Error, Result};
pub use levels::{trophic_levels, trophic_levels_weighted, trophic_levels_with_solver};
pub use solver::{LinearSolver, LuSolver};
