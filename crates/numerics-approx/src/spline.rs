//! Natural cubic spline segment table.
//!
//! One segment per sample point; the interior second-derivative
//! coefficients come out of a tridiagonal continuity system solved with
//! the run-through kernel, with the natural boundary condition
//! `c[0] = c[n-1] = 0`.

use numerics_solver::tridiag::thomas_solve;
use numerics_types::error::{NumericsError, NumericsResult};

use crate::node::Node;

/// Cubic coefficients anchored at the segment's right knot:
/// `y(x) = a + b dx + c/2 dx^2 + d/6 dx^3` with `dx = x - knot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSegment {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub x: f64,
}

/// Build the per-segment coefficient table for sorted sample points.
pub fn build_segments(nodes: &[Node]) -> NumericsResult<Vec<SplineSegment>> {
    let n = nodes.len();
    if n < 2 {
        return Err(NumericsError::InvalidOperation(format!(
            "cubic spline requires at least two sample points, got {n}"
        )));
    }

    // Second derivatives: natural boundary, interior from the continuity
    // system  h_i c[i-1] + 2(h_i + h_{i+1}) c[i] + h_{i+1} c[i+1] = rhs_i.
    let mut c = vec![0.0; n];
    if n > 2 {
        let m = n - 2;
        let mut sub = vec![0.0; m];
        let mut diag = vec![0.0; m];
        let mut sup = vec![0.0; m];
        let mut rhs = vec![0.0; m];

        for j in 0..m {
            let i = j + 1;
            let h_i = nodes[i].x() - nodes[i - 1].x();
            let h_next = nodes[i + 1].x() - nodes[i].x();
            if j > 0 {
                sub[j] = h_i;
            }
            diag[j] = 2.0 * (h_i + h_next);
            if j < m - 1 {
                sup[j] = h_next;
            }
            rhs[j] = 6.0
                * ((nodes[i + 1].y() - nodes[i].y()) / h_next
                    - (nodes[i].y() - nodes[i - 1].y()) / h_i);
        }

        let interior = thomas_solve(&sub, &diag, &sup, &rhs)?;
        c[1..(m + 1)].copy_from_slice(&interior);
    }

    let mut segments = Vec::with_capacity(n);
    segments.push(SplineSegment {
        a: nodes[0].y(),
        b: 0.0,
        c: 0.0,
        d: 0.0,
        x: nodes[0].x(),
    });
    for i in 1..n {
        let h = nodes[i].x() - nodes[i - 1].x();
        let d = (c[i] - c[i - 1]) / h;
        let b = h / 2.0 * c[i] - h * h / 6.0 * d + (nodes[i].y() - nodes[i - 1].y()) / h;
        segments.push(SplineSegment {
            a: nodes[i].y(),
            b,
            c: c[i],
            d,
            x: nodes[i].x(),
        });
    }

    Ok(segments)
}

/// Evaluate the spline at `x`: binary search for the enclosing segment,
/// clamped to the first/last segment outside the knot range.
///
/// The table must come from [`build_segments`], which always yields at
/// least two entries.
pub fn evaluate(segments: &[SplineSegment], x: f64) -> f64 {
    debug_assert!(segments.len() >= 2, "segment table from build_segments");
    let n = segments.len();
    let segment = if x <= segments[0].x {
        &segments[1]
    } else if x >= segments[n - 1].x {
        &segments[n - 1]
    } else {
        let index = segments.partition_point(|s| s.x < x);
        &segments[index]
    };

    let dx = x - segment.x;
    segment.a + (segment.b + (segment.c / 2.0 + segment.d * dx / 6.0) * dx) * dx
}
