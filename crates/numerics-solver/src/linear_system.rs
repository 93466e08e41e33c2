// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Linear System
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! System of linear algebraic equations with four direct strategies:
//! Cramer, Gaussian elimination, matrix inverse, and the run-through
//! (Thomas) sweep for tridiagonal coefficient matrices.
//!
//! Every strategy is stateless with respect to prior calls and operates on
//! private copies; the stored system is never mutated.

use ndarray::Array2;
use numerics_algebra::{Matrix, Vector};
use numerics_types::error::{NumericsError, NumericsResult};

#[derive(Debug, Clone)]
pub struct LinearSystem {
    coefficients: Matrix,
    right_part: Vector,
}

impl LinearSystem {
    /// Pair a coefficient matrix with its right-hand side.
    ///
    /// The right-hand side length must equal the coefficient row count.
    pub fn new(coefficients: Matrix, right_part: Vector) -> NumericsResult<Self> {
        if right_part.dimension() != coefficients.rows() {
            return Err(NumericsError::DimensionMismatch(format!(
                "right-hand side of length {} for a coefficient matrix with {} rows",
                right_part.dimension(),
                coefficients.rows()
            )));
        }
        Ok(LinearSystem {
            coefficients,
            right_part,
        })
    }

    pub fn coefficients(&self) -> &Matrix {
        &self.coefficients
    }

    pub fn right_part(&self) -> &Vector {
        &self.right_part
    }

    /// Determinant of the coefficient matrix.
    pub fn determinant(&self) -> NumericsResult<f64> {
        self.coefficients.determinant()
    }

    /// Uniquely solvable in the classical sense: square coefficients.
    pub fn is_closed(&self) -> bool {
        self.coefficients.is_square()
    }

    /// Every right-hand-side entry is exactly zero.
    pub fn is_homogeneous(&self) -> bool {
        self.right_part.is_zero()
    }

    /// Zero system determinant.
    pub fn is_degenerate(&self) -> NumericsResult<bool> {
        Ok(self.determinant()? == 0.0)
    }

    pub fn unknowns(&self) -> usize {
        self.coefficients.cols()
    }

    fn require_closed(&self, strategy: &str) -> NumericsResult<()> {
        if !self.is_closed() {
            return Err(NumericsError::InvalidOperation(format!(
                "{strategy} requires a closed (square) system, got {}x{}",
                self.coefficients.rows(),
                self.coefficients.cols()
            )));
        }
        Ok(())
    }

    fn trivial_solution(&self) -> NumericsResult<Vector> {
        log::debug!("homogeneous system, returning the trivial solution");
        Vector::zeros(self.right_part.dimension())
    }

    /// Copy of the coefficient matrix with column `index` replaced by the
    /// right-hand side.
    fn column_substituted(&self, index: usize) -> NumericsResult<Matrix> {
        let mut data = self.coefficients.to_array();
        for i in 0..self.coefficients.rows() {
            data[[i, index]] = self.right_part.get(i)?;
        }
        Matrix::from_array(data)
    }

    /// Cramer's rule: per unknown, the ratio of the column-substituted
    /// determinant to the system determinant.
    pub fn solve_cramer(&self) -> NumericsResult<Vector> {
        self.require_closed("Cramer's rule")?;
        if self.is_homogeneous() {
            return self.trivial_solution();
        }

        let det = self.determinant()?;
        let mut solution = Vec::with_capacity(self.unknowns());
        for i in 0..self.unknowns() {
            solution.push(self.column_substituted(i)?.determinant()? / det);
        }
        Vector::new(&solution)
    }

    /// Gaussian elimination with column-scan partial pivoting on a private
    /// copy of the system, followed by back substitution.
    pub fn solve_gauss(&self) -> NumericsResult<Vector> {
        self.require_closed("Gaussian elimination")?;
        if self.is_homogeneous() {
            return self.trivial_solution();
        }

        let n = self.coefficients.rows();
        let mut m = self.coefficients.to_array();
        let mut v: Vec<f64> = self.right_part.as_slice().to_vec();

        if !self.coefficients.is_upper_triangular() {
            eliminate_with_rhs(&mut m, &mut v)?;
        }

        let mut x = vec![0.0; n];
        for k in (0..n).rev() {
            let mut sum = 0.0;
            for i in (k + 1)..n {
                sum += m[[k, i]] * x[i];
            }
            if m[[k, k]] == 0.0 {
                return Err(NumericsError::InvalidOperation(format!(
                    "zero pivot on row {k} during back substitution"
                )));
            }
            x[k] = (v[k] - sum) / m[[k, k]];
        }

        Vector::new(&x)
    }

    /// Solve through the inverse: `x = A^-1 b`.
    pub fn solve_inverse(&self) -> NumericsResult<Vector> {
        if self.is_degenerate()? {
            return Err(NumericsError::InvalidOperation(
                "matrix-inverse solve of a degenerate system".to_string(),
            ));
        }
        self.coefficients.inverse()?.multiply_vector(&self.right_part)
    }

    /// Run-through (Thomas) sweep for tridiagonal coefficient matrices:
    /// forward recurrence for the sweep coefficients `xi`, `eta`, then
    /// backward substitution.
    pub fn solve_thomas(&self) -> NumericsResult<Vector> {
        if !self.coefficients.is_three_diagonal() {
            return Err(NumericsError::Unsupported(
                "run-through solve of a non-tridiagonal coefficient matrix".to_string(),
            ));
        }
        let rows = self.coefficients.rows();
        if rows < 2 {
            return Err(NumericsError::InvalidOperation(
                "run-through solve requires at least two equations".to_string(),
            ));
        }

        let m = self.coefficients.as_array();
        let v = self.right_part.as_slice();
        let last = rows - 1;

        let mut xi = vec![0.0; rows];
        let mut eta = vec![0.0; rows];

        let mut gamma = m[[0, 0]];
        if gamma == 0.0 {
            return Err(NumericsError::InvalidOperation(
                "zero leading pivot in run-through sweep".to_string(),
            ));
        }
        xi[0] = -m[[0, 1]] / gamma;
        eta[0] = v[0] / gamma;

        for i in 1..last {
            gamma = m[[i, i]] + m[[i, i - 1]] * xi[i - 1];
            if gamma == 0.0 {
                return Err(NumericsError::InvalidOperation(format!(
                    "zero pivot at row {i} in run-through sweep"
                )));
            }
            xi[i] = -m[[i, i + 1]] / gamma;
            eta[i] = (v[i] - m[[i, i - 1]] * eta[i - 1]) / gamma;
        }

        let denominator = m[[last, last]] + m[[last, last - 1]] * xi[last - 1];
        if denominator == 0.0 {
            return Err(NumericsError::InvalidOperation(
                "zero trailing pivot in run-through sweep".to_string(),
            ));
        }

        let mut x = vec![0.0; rows];
        x[last] = (v[last] - m[[last, last - 1]] * eta[last - 1]) / denominator;
        for i in (0..last).rev() {
            x[i] = xi[i] * x[i + 1] + eta[i];
        }

        Vector::new(&x)
    }
}

/// Forward elimination over matrix and right-hand side together, selecting
/// per column the remaining row with the largest absolute entry.
fn eliminate_with_rhs(m: &mut Array2<f64>, v: &mut [f64]) -> NumericsResult<()> {
    let n = m.nrows();
    for j in 0..n.saturating_sub(1) {
        let mut imax = j;
        let mut max = m[[j, j]].abs();
        for k in (j + 1)..n {
            if m[[k, j]].abs() > max {
                max = m[[k, j]].abs();
                imax = k;
            }
        }
        if m[[imax, j]] == 0.0 {
            return Err(NumericsError::InvalidOperation(format!(
                "zero pivot column {j} during elimination"
            )));
        }
        if imax != j {
            for col in 0..n {
                m.swap([j, col], [imax, col]);
            }
            v.swap(j, imax);
        }
        for i in (j + 1)..n {
            let factor = m[[i, j]] / m[[j, j]];
            v[i] -= factor * v[j];
            for col in (j + 1)..n {
                m[[i, col]] -= factor * m[[j, col]];
            }
            m[[i, j]] = 0.0;
        }
    }
    Ok(())
}
