// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems at the slice level.
//!
//! Used by the run-through strategy of [`crate::linear_system`] and by the
//! cubic-spline coefficient solve in numerics-approx.

use numerics_types::error::{NumericsError, NumericsResult};

/// Solve the tridiagonal system `Ax = d` with one forward sweep and one
/// backward substitution.
///
/// - `a`: sub-diagonal \[n\] (a\[0\] unused)
/// - `b`: main diagonal \[n\]
/// - `c`: super-diagonal \[n\] (c\[n-1\] unused)
/// - `d`: right-hand side \[n\]
///
/// Fails if the band lengths disagree or a pivot collapses to zero
/// (singular system).
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> NumericsResult<Vec<f64>> {
    let n = d.len();
    if n == 0 {
        return Err(NumericsError::InvalidOperation(
            "tridiagonal system size must be at least 1".to_string(),
        ));
    }
    if a.len() != n || b.len() != n || c.len() != n {
        return Err(NumericsError::DimensionMismatch(format!(
            "tridiagonal bands must all have length {n}, got {}/{}/{}",
            a.len(),
            b.len(),
            c.len()
        )));
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // Forward sweep
    if b[0] == 0.0 {
        return Err(NumericsError::InvalidOperation(
            "zero leading pivot in tridiagonal sweep".to_string(),
        ));
    }
    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let den = b[i] - a[i] * c_prime[i - 1];
        if den == 0.0 {
            return Err(NumericsError::InvalidOperation(format!(
                "zero pivot at row {i} in tridiagonal sweep"
            )));
        }
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) / den;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}
