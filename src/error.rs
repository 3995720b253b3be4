/// Result alias for `trophic`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by trophic level, difference and coherence computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The graph is undirected. Trophic structure only exists on directed graphs.
    #[error("trophic analysis requires a directed graph")]
    NotDirected,

    /// The non-basal level system `(I - P) y = 1` has no unique solution.
    ///
    /// Structural: some group of nodes receives no flow from any basal node.
    #[error("trophic level system of size {size} is singular")]
    SingularSystem {
        /// Number of unknowns (non-basal nodes) in the system.
        size: usize,
    },

    /// An edge weight is negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {edge}")]
    InvalidWeight {
        /// Edge index.
        edge: usize,
        /// Offending weight.
        weight: f64,
    },

    /// Length mismatch (usize).
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Shape mismatch (string description).
    #[error("shape mismatch: expected {expected}, actual {actual}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },
}
