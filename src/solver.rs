//! Dense linear solve behind a swappable seam.
//!
//! The level computation needs exactly one numeric primitive: solve `A x = b`
//! for square `A`, or report that `A` is singular. [`LinearSolver`] captures
//! that; [`LuSolver`] is the default, a full-pivot LU from `faer`.
//!
//! ## Singularity
//!
//! Floating-point LU rarely hits an exact zero pivot on a structurally
//! singular matrix, so [`LuSolver`] also estimates the reciprocal condition
//! number in the infinity norm,
//!
//! ```text
//! rcond(A) = 1 / (‖A‖∞ · ‖A⁻¹‖∞)
//! ```
//!
//! and treats `rcond` at or below the tolerance (default `n · ε`) as singular.

use faer::prelude::*;
use faer::Mat;

use crate::error::{Error, Result};

/// Solves square dense linear systems.
pub trait LinearSolver {
    /// Solve `a · x = b`.
    ///
    /// `a` is `n × n` and `b` is `n × k`; returns the `n × k` solution.
    ///
    /// # Errors
    ///
    /// [`Error::SingularSystem`] if `a` is not invertible,
    /// [`Error::ShapeMismatch`] if the shapes are inconsistent.
    fn solve(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>>;
}

/// Full-pivot LU solver with a reciprocal-condition singularity check.
#[derive(Debug, Clone, Default)]
pub struct LuSolver {
    /// Reciprocal-condition threshold. `None` means `n · f64::EPSILON`.
    tolerance: Option<f64>,
}

impl LuSolver {
    /// Create a solver with the default tolerance.
    pub fn new() -> Self {
        Self { tolerance: None }
    }

    /// Set the reciprocal-condition threshold.
    ///
    /// Systems whose estimated `rcond` is at or below this are reported singular.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    fn tolerance_for(&self, n: usize) -> f64 {
        self.tolerance.unwrap_or(n as f64 * f64::EPSILON)
    }
}

impl LinearSolver for LuSolver {
    fn solve(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(Error::ShapeMismatch {
                expected: format!("{}x{} matrix", n, n),
                actual: format!("{}x{} matrix", n, a.ncols()),
            });
        }
        if b.nrows() != n {
            return Err(Error::ShapeMismatch {
                expected: format!("{} rows", n),
                actual: format!("{} rows", b.nrows()),
            });
        }
        if n == 0 {
            return Ok(Mat::<f64>::zeros(0, b.ncols()));
        }

        let a_norm = inf_norm(a);
        if a_norm == 0.0 || !a_norm.is_finite() {
            tracing::debug!(size = n, "zero or non-finite system matrix");
            return Err(Error::SingularSystem { size: n });
        }

        let lu = a.full_piv_lu();
        let identity = Mat::<f64>::identity(n, n);
        let inverse = lu.solve(&identity);
        let rcond = 1.0 / (a_norm * inf_norm(&inverse));
        let tolerance = self.tolerance_for(n);
        if !(rcond > tolerance) {
            tracing::debug!(size = n, rcond, tolerance, "system matrix is singular");
            return Err(Error::SingularSystem { size: n });
        }

        // A zero pivot can leave a finite but meaningless factorisation behind.
        let product = a * &inverse;
        let residual = inf_norm(&(&product - &identity));
        if !(residual <= f64::EPSILON.sqrt() / rcond) {
            tracing::debug!(size = n, residual, "inverse does not reproduce identity");
            return Err(Error::SingularSystem { size: n });
        }

        let x = lu.solve(b);
        if !all_finite(&x) {
            return Err(Error::SingularSystem { size: n });
        }
        Ok(x)
    }
}

/// Maximum absolute row sum. Infinite if any entry is not finite.
fn inf_norm(m: &Mat<f64>) -> f64 {
    let mut norm = 0.0_f64;
    for i in 0..m.nrows() {
        let mut row = 0.0;
        for j in 0..m.ncols() {
            let v = m[(i, j)];
            if !v.is_finite() {
                return f64::INFINITY;
            }
            row += v.abs();
        }
        norm = norm.max(row);
    }
    norm
}

fn all_finite(m: &Mat<f64>) -> bool {
    (0..m.nrows()).all(|i| (0..m.ncols()).all(|j| m[(i, j)].is_finite()))
}
