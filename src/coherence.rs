//! Trophic coherence.
//!
//! The trophic coherence `q` of a network is the standard deviation of its
//! trophic differences. `q = 0` is a perfectly layered (maximally coherent)
//! web where every edge climbs exactly the same distance; larger `q` means
//! more omnivory and less distinct levels.
//!
//! Self-loops ("cannibalism") always have difference zero. Whether they count
//! is a modelling choice, controlled by `include_cannibalism`.
//!
//! A graph with no qualifying edges has coherence `0.0`.
//!
//! ## References
//!
//! Johnson, Domínguez-García, Donetti, Muñoz (2014). "Trophic coherence
//! determines food-web stability." PNAS 111(50), 17923-17928.

use petgraph::graph::{EdgeReference, Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::differences::trophic_differences;
use crate::error::Result;
use crate::levels::trophic_levels_weighted;

/// Trophic coherence of a graph given its levels.
///
/// Population standard deviation of the trophic differences, with self-loop
/// edges dropped unless `include_cannibalism` is set.
///
/// ```rust
/// use petgraph::graph::DiGraph;
/// use trophic::{trophic_coherence, trophic_levels};
///
/// let mut graph = DiGraph::<(), ()>::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
///
/// let levels = trophic_levels(&graph).unwrap();
/// // A chain is perfectly coherent.
/// assert_eq!(trophic_coherence(&graph, &levels, false).unwrap(), 0.0);
/// ```
///
/// # Errors
///
/// Same as [`trophic_differences`].
pub fn trophic_coherence<N, E, Ty, Ix>(
    graph: &Graph<N, E, Ty, Ix>,
    levels: &[f64],
    include_cannibalism: bool,
) -> Result<f64>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let differences = trophic_differences(graph, levels)?;

    let kept: Vec<f64> = if include_cannibalism {
        differences
    } else {
        graph
            .edge_references()
            .filter(|e| e.source() != e.target())
            .map(|e| differences[e.id().index()])
            .collect()
    };

    tracing::trace!(
        edges = graph.edge_count(),
        kept = kept.len(),
        include_cannibalism,
        "scoring trophic coherence"
    );

    Ok(standard_deviation(&kept))
}

/// Trophic incoherence parameter: levels and coherence in one call.
///
/// Equivalent to [`trophic_levels_weighted`] followed by [`trophic_coherence`].
pub fn trophic_incoherence_parameter<N, E, Ty, Ix, F>(
    graph: &Graph<N, E, Ty, Ix>,
    weight: F,
    include_cannibalism: bool,
) -> Result<f64>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(EdgeReference<'_, E, Ix>) -> f64,
{
    let levels = trophic_levels_weighted(graph, weight)?;
    trophic_coherence(graph, &levels, include_cannibalism)
}

/// Population standard deviation (divides by `n`). Empty input gives `0.0`.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}
