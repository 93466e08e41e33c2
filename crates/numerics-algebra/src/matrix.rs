// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense real matrix over a private contiguous buffer.
//!
//! Determinant, rank and triangularization share one Gaussian elimination
//! kernel with column-scan partial pivoting. The inverse uses cofactor
//! expansion. Returned views (minor, transpose) are always fresh copies,
//! never aliases, and the structural predicates are pure scans evaluated
//! on demand.

use ndarray::Array2;
use numerics_types::constants::FALLBACK_MATRIX_DIM;
use numerics_types::error::{NumericsError, NumericsResult};

use crate::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

/// Outcome of the shared elimination kernel: the reduced matrix, the sign
/// accumulated over row swaps, and whether a pivot column collapsed to zero.
struct Reduction {
    data: Array2<f64>,
    sign: f64,
    singular: bool,
}

fn reduce_to_upper(mut data: Array2<f64>) -> Reduction {
    let n = data.nrows();
    let mut sign = 1.0;
    let mut singular = false;

    for j in 0..n.saturating_sub(1) {
        // Column-scan partial pivot: largest |entry| among remaining rows.
        let mut imax = j;
        let mut max = data[[j, j]].abs();
        for k in (j + 1)..n {
            if data[[k, j]].abs() > max {
                max = data[[k, j]].abs();
                imax = k;
            }
        }

        if data[[imax, j]] == 0.0 {
            singular = true;
            continue;
        }

        if imax != j {
            for col in 0..n {
                data.swap([j, col], [imax, col]);
            }
            sign = -sign;
        }

        for i in (j + 1)..n {
            let factor = data[[i, j]] / data[[j, j]];
            for col in (j + 1)..n {
                data[[i, col]] -= factor * data[[j, col]];
            }
            data[[i, j]] = 0.0;
        }
    }

    Reduction {
        data,
        sign,
        singular,
    }
}

impl Matrix {
    /// Take ownership of an existing ndarray buffer.
    ///
    /// Both dimensions must be at least 1.
    pub fn from_array(data: Array2<f64>) -> NumericsResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(NumericsError::InvalidOperation(format!(
                "matrix dimensions must be at least 1x1, got {}x{}",
                data.nrows(),
                data.ncols()
            )));
        }
        Ok(Matrix { data })
    }

    /// Build from row slices. Ragged input is rejected.
    pub fn from_rows(rows: &[Vec<f64>]) -> NumericsResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(NumericsError::InvalidOperation(
                "matrix dimensions must be at least 1x1".to_string(),
            ));
        }
        let cols = rows[0].len();
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(NumericsError::DimensionMismatch(format!(
                "ragged matrix rows: expected {cols} columns, found {}",
                bad.len()
            )));
        }
        let mut data = Array2::zeros((rows.len(), cols));
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        Ok(Matrix { data })
    }

    pub fn zeros(rows: usize, cols: usize) -> NumericsResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(NumericsError::InvalidOperation(
                "matrix dimensions must be at least 1x1".to_string(),
            ));
        }
        Ok(Matrix {
            data: Array2::zeros((rows, cols)),
        })
    }

    pub fn identity(order: usize) -> NumericsResult<Self> {
        if order == 0 {
            return Err(NumericsError::InvalidOperation(
                "matrix dimensions must be at least 1x1".to_string(),
            ));
        }
        Ok(Matrix {
            data: Array2::eye(order),
        })
    }

    /// Parse newline/space-delimited numeric text.
    ///
    /// Rows that fail to tokenise as numbers (or ragged input) fall back to
    /// the default 2x2 zero matrix; use [`Matrix::try_parse`] to observe
    /// failure instead.
    pub fn parse(text: &str) -> Self {
        match Self::try_parse(text) {
            Some(m) => m,
            None => {
                log::debug!("matrix parse fallback to 2x2 zero matrix");
                Matrix {
                    data: Array2::zeros((FALLBACK_MATRIX_DIM, FALLBACK_MATRIX_DIM)),
                }
            }
        }
    }

    /// Parse newline/space-delimited numeric text, reporting failure.
    pub fn try_parse(text: &str) -> Option<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let row: Vec<f64> = line
                .split_whitespace()
                .map(|t| t.parse::<f64>())
                .collect::<Result<_, _>>()
                .ok()?;
            rows.push(row);
        }
        Self::from_rows(&rows).ok()
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn to_array(&self) -> Array2<f64> {
        self.data.clone()
    }

    pub fn get(&self, row: usize, col: usize) -> NumericsResult<f64> {
        self.data.get([row, col]).copied().ok_or_else(|| {
            NumericsError::IndexOutOfRange(format!(
                "element ({row}, {col}) of a {}x{} matrix",
                self.rows(),
                self.cols()
            ))
        })
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> NumericsResult<()> {
        let (rows, cols) = (self.rows(), self.cols());
        match self.data.get_mut([row, col]) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(NumericsError::IndexOutOfRange(format!(
                "element ({row}, {col}) of a {rows}x{cols} matrix"
            ))),
        }
    }

    /// Replace the whole component buffer in place. The replacement must
    /// preserve the `rows x cols` shape fixed at construction.
    pub fn replace_components(&mut self, components: Array2<f64>) -> NumericsResult<()> {
        if components.dim() != self.data.dim() {
            return Err(NumericsError::DimensionMismatch(format!(
                "component replacement must preserve shape {}x{}, got {}x{}",
                self.rows(),
                self.cols(),
                components.nrows(),
                components.ncols()
            )));
        }
        self.data = components;
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix, operation: &str) -> NumericsResult<()> {
        if self.data.dim() != other.data.dim() {
            return Err(NumericsError::DimensionMismatch(format!(
                "{operation} of {}x{} and {}x{} matrices",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(())
    }

    pub fn add(&self, other: &Matrix) -> NumericsResult<Matrix> {
        self.check_same_shape(other, "addition")?;
        Ok(Matrix {
            data: &self.data + &other.data,
        })
    }

    pub fn subtract(&self, other: &Matrix) -> NumericsResult<Matrix> {
        self.check_same_shape(other, "subtraction")?;
        Ok(Matrix {
            data: &self.data - &other.data,
        })
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        Matrix {
            data: &self.data * factor,
        }
    }

    /// Matrix product by the standard `O(n^3)` triple loop.
    ///
    /// The historical contract `a.rows == b.cols` is checked first and kept
    /// deliberately; the standard inner-dimension requirement
    /// `a.cols == b.rows` is enforced after it so the contraction itself is
    /// well defined.
    pub fn multiply(&self, other: &Matrix) -> NumericsResult<Matrix> {
        if self.rows() != other.cols() {
            return Err(NumericsError::DimensionMismatch(format!(
                "product requires left rows to equal right columns, got {}x{} times {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        if self.cols() != other.rows() {
            return Err(NumericsError::DimensionMismatch(format!(
                "product contraction requires left columns to equal right rows, got {}x{} times {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        let mut out = Array2::zeros((self.rows(), other.cols()));
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += self.data[[i, k]] * other.data[[k, j]];
                }
                out[[i, j]] = sum;
            }
        }
        Ok(Matrix { data: out })
    }

    /// Matrix times column vector: `(M v)_i = Σ_j m_ij v_j`.
    pub fn multiply_vector(&self, vector: &Vector) -> NumericsResult<Vector> {
        if self.cols() != vector.dimension() {
            return Err(NumericsError::DimensionMismatch(format!(
                "{}x{} matrix times {}-dimensional vector",
                self.rows(),
                self.cols(),
                vector.dimension()
            )));
        }
        let mut out = ndarray::Array1::zeros(self.rows());
        for i in 0..self.rows() {
            let mut sum = 0.0;
            for j in 0..self.cols() {
                sum += self.data[[i, j]] * vector.as_slice()[j];
            }
            out[i] = sum;
        }
        Vector::from_array(out)
    }

    /// Fresh matrix with swapped axes. Never mutates the receiver.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().to_owned(),
        }
    }

    /// Submatrix with the given row and column removed.
    pub fn minor(&self, row: usize, col: usize) -> NumericsResult<Matrix> {
        if row >= self.rows() || col >= self.cols() {
            return Err(NumericsError::IndexOutOfRange(format!(
                "minor ({row}, {col}) of a {}x{} matrix",
                self.rows(),
                self.cols()
            )));
        }
        if self.rows() == 1 || self.cols() == 1 {
            return Err(NumericsError::Unsupported(
                "minor of a matrix with a single row or column".to_string(),
            ));
        }
        let mut out = Array2::zeros((self.rows() - 1, self.cols() - 1));
        for i in 0..self.rows() {
            if i == row {
                continue;
            }
            for j in 0..self.cols() {
                if j == col {
                    continue;
                }
                let oi = if i < row { i } else { i - 1 };
                let oj = if j < col { j } else { j - 1 };
                out[[oi, oj]] = self.data[[i, j]];
            }
        }
        Ok(Matrix { data: out })
    }

    fn require_square(&self, operation: &str) -> NumericsResult<()> {
        if !self.is_square() {
            return Err(NumericsError::Unsupported(format!(
                "{operation} of a non-square {}x{} matrix",
                self.rows(),
                self.cols()
            )));
        }
        Ok(())
    }

    /// Determinant by Gaussian elimination on a private copy.
    pub fn determinant(&self) -> NumericsResult<f64> {
        self.require_square("determinant")?;
        let reduction = reduce_to_upper(self.data.clone());
        if reduction.singular {
            return Ok(0.0);
        }
        let mut det = reduction.sign;
        for i in 0..self.rows() {
            det *= reduction.data[[i, i]];
        }
        Ok(det)
    }

    /// Upper-triangular form of this matrix, computed on a copy.
    pub fn triangularized(&self) -> NumericsResult<Matrix> {
        self.require_square("triangularization")?;
        Ok(Matrix {
            data: reduce_to_upper(self.data.clone()).data,
        })
    }

    /// Row count of the triangularized form containing at least one exactly
    /// zero entry. This is the historical approximate measure carried by the
    /// engine, not the mathematical rank.
    pub fn rank(&self) -> NumericsResult<usize> {
        self.require_square("rank")?;
        let reduced = reduce_to_upper(self.data.clone()).data;
        let count = (0..self.rows())
            .filter(|&i| (0..self.cols()).any(|j| reduced[[i, j]] == 0.0))
            .count();
        Ok(count)
    }

    /// Inverse by cofactor expansion.
    ///
    /// A singular matrix is returned unchanged rather than raised as an
    /// error; callers that need a hard failure should test the determinant
    /// first.
    pub fn inverse(&self) -> NumericsResult<Matrix> {
        self.require_square("inverse")?;
        let det = self.determinant()?;
        if det == 0.0 {
            log::warn!(
                "inverse of a singular {}x{} matrix requested; returning the input unchanged",
                self.rows(),
                self.cols()
            );
            return Ok(self.clone());
        }
        let n = self.rows();
        if n == 1 {
            let mut data = Array2::zeros((1, 1));
            data[[0, 0]] = 1.0 / det;
            return Ok(Matrix { data });
        }
        let mut out = Array2::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[[j, i]] = sign * self.minor(i, j)?.determinant()? / det;
            }
        }
        Ok(Matrix { data: out })
    }

    /// Maximum absolute row sum.
    pub fn norm_max_row_sum(&self) -> NumericsResult<f64> {
        self.require_square("norm")?;
        Ok((0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.data[[i, j]].abs()).sum())
            .fold(0.0, f64::max))
    }

    /// Maximum absolute column sum.
    pub fn norm_max_col_sum(&self) -> NumericsResult<f64> {
        self.require_square("norm")?;
        Ok((0..self.cols())
            .map(|j| (0..self.rows()).map(|i| self.data[[i, j]].abs()).sum())
            .fold(0.0, f64::max))
    }

    /// Largest absolute element scaled by the order.
    pub fn norm_max_element(&self) -> NumericsResult<f64> {
        self.require_square("norm")?;
        let max = self.data.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
        Ok(max * self.rows() as f64)
    }

    /// Spherical (Frobenius) norm.
    pub fn norm_frobenius(&self) -> NumericsResult<f64> {
        self.require_square("norm")?;
        Ok(self.data.iter().map(|v| v * v).sum::<f64>().sqrt())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows())
                .all(|i| (0..i).all(|j| self.data[[i, j]] == self.data[[j, i]]))
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows())
                .all(|i| (0..self.cols()).all(|j| i == j || self.data[[i, j]] == 0.0))
    }

    /// Nonzero entries only on the main diagonal and its immediate
    /// neighbours.
    pub fn is_three_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows()).all(|i| {
                (0..self.cols())
                    .all(|j| i.abs_diff(j) <= 1 || self.data[[i, j]] == 0.0)
            })
    }

    pub fn is_upper_triangular(&self) -> bool {
        self.is_square()
            && (0..self.rows()).all(|i| (0..i).all(|j| self.data[[i, j]] == 0.0))
    }

    pub fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (0..self.rows()).all(|i| ((i + 1)..self.cols()).all(|j| self.data[[i, j]] == 0.0))
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.rows()).all(|i| {
                (0..self.cols()).all(|j| {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    self.data[[i, j]] == expected
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn matrix(rows: &[Vec<f64>]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_rejects_empty_shapes() {
        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::zeros(0, 3).is_err());
        assert!(Matrix::from_array(Array2::zeros((3, 0))).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(NumericsError::DimensionMismatch(_))));
    }

    #[test]
    fn test_determinant_2x2() {
        let m = matrix(&[vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert!((m.determinant().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_3x3_with_pivoting() {
        // Leading zero forces a row swap.
        let m = matrix(&[
            vec![0.0, 2.0, 1.0],
            vec![3.0, -1.0, 2.0],
            vec![1.0, 1.0, 1.0],
        ]);
        // Cofactor expansion by hand: det = -2*(3-2) + 1*(3+1) = 2.
        assert!((m.determinant().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_singular_is_exactly_zero() {
        let m = matrix(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(m.determinant().unwrap(), 0.0);
    }

    #[test]
    fn test_determinant_non_square_unsupported() {
        let m = matrix(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            m.determinant(),
            Err(NumericsError::Unsupported(_))
        ));
    }

    #[test]
    fn test_inverse_roundtrip_identity() {
        let m = matrix(&[
            vec![4.0, 7.0, 2.0],
            vec![3.0, 5.0, 1.0],
            vec![-1.0, 0.0, 2.0],
        ]);
        let product = m.multiply(&m.inverse().unwrap()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product.get(i, j).unwrap() - expected).abs() < 1e-9,
                    "product[{i},{j}] = {}",
                    product.get(i, j).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_inverse_singular_returns_input_unchanged() {
        let m = matrix(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, m);
    }

    #[test]
    fn test_minor_and_bounds() {
        let m = matrix(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let minor = m.minor(1, 1).unwrap();
        assert_eq!(minor.as_array(), &array![[1.0, 3.0], [7.0, 9.0]]);
        assert!(matches!(
            m.minor(3, 0),
            Err(NumericsError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_transpose_is_fresh_copy() {
        let m = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let t = m.transpose();
        assert_eq!(t.get(0, 1).unwrap(), 3.0);
        assert_eq!(m.get(0, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_multiply_contract() {
        let a = matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.as_array(), &array![[19.0, 22.0], [43.0, 50.0]]);

        // The historical contract compares left rows against right columns.
        let wide = matrix(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            a.multiply(&wide),
            Err(NumericsError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_multiply_vector_both_sides() {
        let m = matrix(&[vec![2.0, 0.0], vec![1.0, 3.0]]);
        let v = Vector::new(&[1.0, 2.0]).unwrap();
        let mv = m.multiply_vector(&v).unwrap();
        assert_eq!(mv.as_slice(), &[2.0, 7.0]);
        let vm = v.multiply_matrix(&m).unwrap();
        assert_eq!(vm.as_slice(), &[4.0, 6.0]);
    }

    #[test]
    fn test_rank_counts_rows_with_zero_entries() {
        // After reduction [[2,1],[0,2.5]]: only the second row holds a zero.
        let m = matrix(&[vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert_eq!(m.rank().unwrap(), 1);
        // Every identity row contains zeros.
        assert_eq!(Matrix::identity(3).unwrap().rank().unwrap(), 3);
    }

    #[test]
    fn test_triangularized_form() {
        let m = matrix(&[vec![2.0, 1.0], vec![1.0, 3.0]]);
        let t = m.triangularized().unwrap();
        assert!(t.is_upper_triangular());
        assert_eq!(t.get(1, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_norms() {
        let m = matrix(&[vec![1.0, -2.0], vec![3.0, 4.0]]);
        assert!((m.norm_max_row_sum().unwrap() - 7.0).abs() < 1e-12);
        assert!((m.norm_max_col_sum().unwrap() - 6.0).abs() < 1e-12);
        assert!((m.norm_max_element().unwrap() - 8.0).abs() < 1e-12);
        assert!((m.norm_frobenius().unwrap() - 30.0_f64.sqrt()).abs() < 1e-12);
        let rect = matrix(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(rect.norm_frobenius().is_err());
    }

    #[test]
    fn test_structural_predicates() {
        let tri = matrix(&[
            vec![2.0, 1.0, 0.0],
            vec![1.0, 2.0, 1.0],
            vec![0.0, 1.0, 2.0],
        ]);
        assert!(tri.is_three_diagonal());
        assert!(tri.is_symmetric());
        assert!(!tri.is_diagonal());

        let diag = matrix(&[vec![3.0, 0.0], vec![0.0, 4.0]]);
        assert!(diag.is_diagonal());
        assert!(diag.is_three_diagonal());
        assert!(diag.is_upper_triangular());
        assert!(diag.is_lower_triangular());

        assert!(Matrix::identity(4).unwrap().is_identity());
        assert!(Matrix::zeros(2, 3).unwrap().is_zero());
        assert!(!matrix(&[vec![1.0, 2.0], vec![2.0, 1.0]]).is_upper_triangular());
    }

    #[test]
    fn test_predicates_reflect_current_contents() {
        let mut m = Matrix::identity(2).unwrap();
        assert!(m.is_identity());
        m.set(0, 1, 5.0).unwrap();
        assert!(!m.is_identity());
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_parse_and_fallback() {
        let m = Matrix::parse("1 2 3\n4 5 6\n");
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2).unwrap(), 6.0);

        let fallback = Matrix::parse("1 2\nx y\n");
        assert_eq!((fallback.rows(), fallback.cols()), (2, 2));
        assert!(fallback.is_zero());

        assert!(Matrix::try_parse("1 2\n3").is_none());
    }

    #[test]
    fn test_replace_components_preserves_shape() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        assert!(m.replace_components(array![[1.0, 2.0], [3.0, 4.0]]).is_ok());
        assert_eq!(m.get(1, 1).unwrap(), 4.0);
        assert!(m.replace_components(Array2::zeros((3, 2))).is_err());
    }
}
