// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Vector
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-dimension dense real vector.
//!
//! The dimension is fixed at construction (`n >= 2`) and every arithmetic
//! operation allocates a fresh result. Conversions are explicit and named;
//! there is no operator overloading and no implicit coercion.

use ndarray::Array1;
use numerics_types::constants::{FNV_OFFSET_BASIS, FNV_PRIME, MIN_VECTOR_DIM};
use numerics_types::error::{NumericsError, NumericsResult};

use crate::matrix::Matrix;

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Array1<f64>,
}

impl Vector {
    /// Build a vector from an explicit component list.
    ///
    /// A vector of dimension 0 or 1 is rejected.
    pub fn new(components: &[f64]) -> NumericsResult<Self> {
        if components.len() < MIN_VECTOR_DIM {
            return Err(NumericsError::InvalidOperation(format!(
                "vector dimension must be at least {MIN_VECTOR_DIM}, got {}",
                components.len()
            )));
        }
        Ok(Vector {
            components: Array1::from_iter(components.iter().copied()),
        })
    }

    /// Zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> NumericsResult<Self> {
        if dimension < MIN_VECTOR_DIM {
            return Err(NumericsError::InvalidOperation(format!(
                "vector dimension must be at least {MIN_VECTOR_DIM}, got {dimension}"
            )));
        }
        Ok(Vector {
            components: Array1::zeros(dimension),
        })
    }

    /// Take ownership of an existing ndarray buffer.
    pub fn from_array(components: Array1<f64>) -> NumericsResult<Self> {
        if components.len() < MIN_VECTOR_DIM {
            return Err(NumericsError::InvalidOperation(format!(
                "vector dimension must be at least {MIN_VECTOR_DIM}, got {}",
                components.len()
            )));
        }
        Ok(Vector { components })
    }

    /// Parse a space-delimited numeric string.
    ///
    /// Malformed input falls back to the 2-dimensional zero vector; use
    /// [`Vector::try_parse`] to observe failure instead.
    pub fn parse(s: &str) -> Self {
        match Self::try_parse(s) {
            Some(v) => v,
            None => {
                log::debug!("vector parse fallback to zero vector for input {s:?}");
                Vector {
                    components: Array1::zeros(MIN_VECTOR_DIM),
                }
            }
        }
    }

    /// Parse a space-delimited numeric string, reporting failure.
    pub fn try_parse(s: &str) -> Option<Self> {
        let tokens: Vec<f64> = s
            .split_whitespace()
            .map(|t| t.parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        Self::new(&tokens).ok()
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn get(&self, index: usize) -> NumericsResult<f64> {
        self.components.get(index).copied().ok_or_else(|| {
            NumericsError::IndexOutOfRange(format!(
                "component {index} of a {}-dimensional vector",
                self.dimension()
            ))
        })
    }

    pub fn set(&mut self, index: usize, value: f64) -> NumericsResult<()> {
        let dimension = self.dimension();
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(NumericsError::IndexOutOfRange(format!(
                "component {index} of a {dimension}-dimensional vector"
            ))),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        self.components.as_slice().expect("contiguous buffer")
    }

    pub fn to_array(&self) -> Array1<f64> {
        self.components.clone()
    }

    /// True when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == 0.0)
    }

    fn check_same_dimension(&self, other: &Vector, operation: &str) -> NumericsResult<()> {
        if self.dimension() != other.dimension() {
            return Err(NumericsError::DimensionMismatch(format!(
                "{operation} of vectors with dimensions {} and {}",
                self.dimension(),
                other.dimension()
            )));
        }
        Ok(())
    }

    pub fn add(&self, other: &Vector) -> NumericsResult<Vector> {
        self.check_same_dimension(other, "addition")?;
        Ok(Vector {
            components: &self.components + &other.components,
        })
    }

    pub fn subtract(&self, other: &Vector) -> NumericsResult<Vector> {
        self.check_same_dimension(other, "subtraction")?;
        Ok(Vector {
            components: &self.components - &other.components,
        })
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector {
            components: &self.components * factor,
        }
    }

    /// Scalar product. Short-circuits to 0.0 when either operand is the
    /// zero vector.
    pub fn dot(&self, other: &Vector) -> NumericsResult<f64> {
        self.check_same_dimension(other, "scalar product")?;
        if self.is_zero() || other.is_zero() {
            return Ok(0.0);
        }
        Ok(self.components.dot(&other.components))
    }

    /// Cross product, defined for 3-dimensional vectors only.
    pub fn cross(&self, other: &Vector) -> NumericsResult<Vector> {
        if self.dimension() != 3 || other.dimension() != 3 {
            return Err(NumericsError::Unsupported(format!(
                "cross product of {}- and {}-dimensional vectors",
                self.dimension(),
                other.dimension()
            )));
        }
        let a = self.as_slice();
        let b = other.as_slice();
        Vector::new(&[
            a[1] * b[2] - a[2] * b[1],
            -(a[0] * b[2] - a[2] * b[0]),
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Maximum-magnitude (Chebyshev) norm.
    pub fn norm_max(&self) -> f64 {
        self.components.iter().fold(0.0_f64, |acc, &c| acc.max(c.abs()))
    }

    /// Unit vector in the same direction.
    pub fn normalized(&self) -> NumericsResult<Vector> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(NumericsError::InvalidOperation(
                "cannot normalize the zero vector".to_string(),
            ));
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Row-vector times matrix contraction: `(v M)_j = Σ_i v_i m_ij`.
    pub fn multiply_matrix(&self, matrix: &Matrix) -> NumericsResult<Vector> {
        if self.dimension() != matrix.rows() {
            return Err(NumericsError::DimensionMismatch(format!(
                "{}-dimensional row vector times {}x{} matrix",
                self.dimension(),
                matrix.rows(),
                matrix.cols()
            )));
        }
        let mut out = Array1::zeros(matrix.cols());
        for j in 0..matrix.cols() {
            let mut sum = 0.0;
            for i in 0..matrix.rows() {
                sum += self.components[i] * matrix.as_array()[[i, j]];
            }
            out[j] = sum;
        }
        Vector::from_array(out)
    }

    /// FNV-1a hash over the component bit patterns. The mixing function is
    /// fixed so hashes are portable across runtimes.
    pub fn mix_hash(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for component in self.components.iter() {
            for byte in component.to_bits().to_le_bytes() {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        hash
    }
}
