// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Property-Based Tests (proptest) for numerics-solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for numerics-solver using proptest.
//!
//! Covers: strategy agreement on well-posed systems, the homogeneous
//! short-circuit, residuals of the run-through sweep, and the slice-level
//! Thomas kernel.

use ndarray::Array2;
use numerics_algebra::{Matrix, Vector};
use numerics_solver::tridiag::thomas_solve;
use numerics_solver::LinearSystem;
use proptest::prelude::*;

/// Diagonally dominant dense matrix: comfortably non-singular.
fn dominant_system(n: usize, seed: f64, rhs_scale: f64) -> LinearSystem {
    let data = Array2::from_shape_fn((n, n), |(i, j)| {
        let base = ((i * 11 + j * 5) as f64 + seed).sin();
        if i == j {
            base + n as f64 + 3.0
        } else {
            base
        }
    });
    let rhs: Vec<f64> = (0..n)
        .map(|i| ((i as f64 + seed) * 0.7 - 1.0) * rhs_scale)
        .collect();
    LinearSystem::new(
        Matrix::from_array(data).unwrap(),
        Vector::new(&rhs).unwrap(),
    )
    .unwrap()
}

proptest! {
    /// Cramer, Gauss and matrix-inverse agree on well-posed systems.
    #[test]
    fn strategies_agree(n in 2usize..6, seed in 0.0f64..10.0) {
        let sys = dominant_system(n, seed, 1.0);
        let cramer = sys.solve_cramer().unwrap();
        let gauss = sys.solve_gauss().unwrap();
        let inverse = sys.solve_inverse().unwrap();
        for i in 0..n {
            prop_assert!((cramer.get(i).unwrap() - gauss.get(i).unwrap()).abs() < 1e-8,
                "cramer[{i}] = {}, gauss[{i}] = {}", cramer.get(i).unwrap(), gauss.get(i).unwrap());
            prop_assert!((cramer.get(i).unwrap() - inverse.get(i).unwrap()).abs() < 1e-8,
                "cramer[{i}] = {}, inverse[{i}] = {}", cramer.get(i).unwrap(), inverse.get(i).unwrap());
        }
    }

    /// The Gauss solution satisfies A x = b.
    #[test]
    fn gauss_residual_small(n in 2usize..7, seed in 0.0f64..10.0) {
        let sys = dominant_system(n, seed, 2.0);
        let x = sys.solve_gauss().unwrap();
        let ax = sys.coefficients().multiply_vector(&x).unwrap();
        for i in 0..n {
            let want = sys.right_part().get(i).unwrap();
            prop_assert!((ax.get(i).unwrap() - want).abs() < 1e-9,
                "Ax[{i}] = {}, b[{i}] = {want}", ax.get(i).unwrap());
        }
    }

    /// Every strategy returns the zero vector for a homogeneous system.
    #[test]
    fn homogeneous_short_circuit(n in 2usize..6, seed in 0.0f64..10.0) {
        let sys = dominant_system(n, seed, 0.0);
        prop_assert!(sys.is_homogeneous());
        prop_assert!(sys.solve_cramer().unwrap().is_zero());
        prop_assert!(sys.solve_gauss().unwrap().is_zero());
    }

    /// The run-through sweep recovers a planted solution on diagonally
    /// dominant tridiagonal systems.
    #[test]
    fn thomas_recovers_planted_solution(n in 2usize..20, seed in 0.0f64..10.0) {
        let mut data = Array2::zeros((n, n));
        for i in 0..n {
            data[[i, i]] = 4.0 + ((i as f64 + seed).sin()).abs();
            if i > 0 {
                data[[i, i - 1]] = -1.0;
            }
            if i < n - 1 {
                data[[i, i + 1]] = -1.0;
            }
        }
        let matrix = Matrix::from_array(data).unwrap();
        let x_star: Vec<f64> = (0..n).map(|i| ((i * 3) as f64 + seed).cos()).collect();
        let rhs = matrix
            .multiply_vector(&Vector::new(&x_star).unwrap())
            .unwrap();
        let sys = LinearSystem::new(matrix, rhs).unwrap();

        let x = sys.solve_thomas().unwrap();
        for i in 0..n {
            prop_assert!((x.get(i).unwrap() - x_star[i]).abs() < 1e-9,
                "x[{i}] = {}, planted {}", x.get(i).unwrap(), x_star[i]);
        }
    }

    /// The slice-level kernel satisfies A x = d.
    #[test]
    fn thomas_kernel_ax_eq_d(n in 3usize..30) {
        let a: Vec<f64> = (0..n).map(|i| if i > 0 { -0.3 } else { 0.0 }).collect();
        let b = vec![2.0; n];
        let c: Vec<f64> = (0..n).map(|i| if i < n - 1 { -0.3 } else { 0.0 }).collect();
        let d: Vec<f64> = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();

        let x = thomas_solve(&a, &b, &c, &d).unwrap();

        for i in 0..n {
            let mut ax_i = b[i] * x[i];
            if i > 0 { ax_i += a[i] * x[i - 1]; }
            if i < n - 1 { ax_i += c[i] * x[i + 1]; }
            prop_assert!((ax_i - d[i]).abs() < 1e-10,
                "Ax[{i}] = {ax_i}, d[{i}] = {}", d[i]);
        }
    }
}
