//! Square-constrained matrix specialization.
//!
//! Adds the rank-invariant operations used on stress/strain-like objects:
//! trace and the isotropic/deviatoric decomposition.

use numerics_types::error::{NumericsError, NumericsResult};

use crate::matrix::Matrix;

#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    matrix: Matrix,
}

impl Tensor {
    /// Wrap a square matrix. Non-square input is rejected.
    pub fn new(matrix: Matrix) -> NumericsResult<Self> {
        if !matrix.is_square() {
            return Err(NumericsError::Unsupported(format!(
                "tensor requires a square matrix, got {}x{}",
                matrix.rows(),
                matrix.cols()
            )));
        }
        Ok(Tensor { matrix })
    }

    pub fn order(&self) -> usize {
        self.matrix.rows()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Sum of the diagonal entries (first invariant).
    pub fn trace(&self) -> f64 {
        (0..self.order())
            .map(|i| self.matrix.as_array()[[i, i]])
            .sum()
    }

    /// Isotropic part: `(tr/n) I`.
    pub fn isotropic(&self) -> Tensor {
        let mean = self.trace() / self.order() as f64;
        let identity = Matrix::identity(self.order()).expect("order >= 1");
        Tensor {
            matrix: identity.scale(mean),
        }
    }

    /// Deviatoric part: the trace-free remainder `A - (tr/n) I`.
    pub fn deviator(&self) -> Tensor {
        let iso = self.isotropic();
        Tensor {
            matrix: self
                .matrix
                .subtract(&iso.matrix)
                .expect("same order by construction"),
        }
    }

    pub fn determinant(&self) -> NumericsResult<f64> {
        self.matrix.determinant()
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }
}
