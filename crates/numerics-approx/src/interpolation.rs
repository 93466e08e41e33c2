// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The interpolation engine.
//!
//! An `Interpolation` owns a sorted sample array and a kind tag. Changing
//! the kind rebuilds derived state synchronously through an explicit
//! `rebuild` path; there are no hidden notification events, and a spline
//! table is never left stale.

use numerics_types::error::{NumericsError, NumericsResult};

use crate::node::{Node, SortedNodes};
use crate::spline::{self, SplineSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationKind {
    Newton,
    Lagrange,
    Hermite,
    CubicSpline,
}

impl InterpolationKind {
    /// Resolve a configuration name such as "newton" or "cubic-spline".
    pub fn from_name(name: &str) -> NumericsResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "newton" => Ok(InterpolationKind::Newton),
            "lagrange" => Ok(InterpolationKind::Lagrange),
            "hermite" => Ok(InterpolationKind::Hermite),
            "cubic-spline" | "spline" => Ok(InterpolationKind::CubicSpline),
            other => Err(NumericsError::Parse(format!(
                "unknown interpolation kind {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Interpolation {
    kind: InterpolationKind,
    nodes: Vec<Node>,
    segments: Vec<SplineSegment>,
}

impl Interpolation {
    /// Build from caller-supplied sample points. The points are sorted by
    /// abscissa and value-duplicates are removed.
    pub fn from_points(
        kind: InterpolationKind,
        points: impl IntoIterator<Item = Node>,
    ) -> NumericsResult<Self> {
        Self::from_sorted(kind, SortedNodes::from_nodes(points))
    }

    /// Build by sampling `f` at the given abscissas.
    pub fn from_function(
        kind: InterpolationKind,
        xs: &[f64],
        f: impl Fn(f64) -> f64,
    ) -> NumericsResult<Self> {
        Self::from_points(kind, xs.iter().map(|&x| Node::new(x, f(x))))
    }

    /// Build by sampling `f` over `[start, end]` with the given step.
    pub fn from_step(
        kind: InterpolationKind,
        start: f64,
        end: f64,
        step: f64,
        f: impl Fn(f64) -> f64,
    ) -> NumericsResult<Self> {
        if step <= 0.0 || end <= start {
            return Err(NumericsError::InvalidOperation(format!(
                "sampling range [{start}, {end}] with step {step}"
            )));
        }
        let mut xs = Vec::new();
        let mut i = 0usize;
        loop {
            let x = start + step * i as f64;
            if x > end + step * 1e-9 {
                break;
            }
            xs.push(x);
            i += 1;
        }
        Self::from_function(kind, &xs, f)
    }

    /// Build by sampling `f` at `count` evenly spaced abscissas, spacing
    /// `(end - start) / (count - 1)`.
    pub fn from_count(
        kind: InterpolationKind,
        start: f64,
        end: f64,
        count: usize,
        f: impl Fn(f64) -> f64,
    ) -> NumericsResult<Self> {
        if count < 2 || end <= start {
            return Err(NumericsError::InvalidOperation(format!(
                "sampling range [{start}, {end}] with {count} points"
            )));
        }
        let step = (end - start) / (count - 1) as f64;
        let xs: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
        Self::from_function(kind, &xs, f)
    }

    fn from_sorted(kind: InterpolationKind, nodes: SortedNodes) -> NumericsResult<Self> {
        if nodes.len() < 2 {
            return Err(NumericsError::InvalidOperation(format!(
                "interpolation requires at least two distinct sample points, got {}",
                nodes.len()
            )));
        }
        let mut interpolation = Interpolation {
            kind,
            nodes: nodes.to_vec(),
            segments: Vec::new(),
        };
        interpolation.rebuild()?;
        Ok(interpolation)
    }

    pub fn kind(&self) -> InterpolationKind {
        self.kind
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The spline coefficient table; empty unless the kind is
    /// `CubicSpline`.
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Switch the interpolation kind. Derived state is regenerated before
    /// this returns, so the next `calculate` never sees a stale table.
    /// If the rebuild fails the previous kind is restored.
    pub fn set_kind(&mut self, kind: InterpolationKind) -> NumericsResult<()> {
        let previous = self.kind;
        self.kind = kind;
        if let Err(error) = self.rebuild() {
            self.kind = previous;
            return Err(error);
        }
        Ok(())
    }

    /// Regenerate derived state for the current kind.
    pub fn rebuild(&mut self) -> NumericsResult<()> {
        self.segments = match self.kind {
            InterpolationKind::CubicSpline => {
                let segments = spline::build_segments(&self.nodes)?;
                log::debug!("rebuilt {} spline segments", segments.len());
                segments
            }
            _ => Vec::new(),
        };
        Ok(())
    }

    /// Interpolated value at `x`.
    ///
    /// The Hermite kind is deliberately unimplemented and reports the 0.0
    /// sentinel rather than a fabricated value.
    pub fn calculate(&self, x: f64) -> f64 {
        match self.kind {
            InterpolationKind::Newton => self.newton(x),
            InterpolationKind::Lagrange => self.lagrange(x),
            InterpolationKind::Hermite => 0.0,
            InterpolationKind::CubicSpline => spline::evaluate(&self.segments, x),
        }
    }

    /// Newton form over divided differences.
    ///
    /// The difference table is rebuilt on every call; fine for the small
    /// node counts this engine targets.
    fn newton(&self, x: f64) -> f64 {
        let n = self.nodes.len();
        let mut coefficients: Vec<f64> = self.nodes.iter().map(Node::y).collect();
        for order in 1..n {
            for i in (order..n).rev() {
                coefficients[i] = (coefficients[i] - coefficients[i - 1])
                    / (self.nodes[i].x() - self.nodes[i - order].x());
            }
        }

        let mut result = coefficients[n - 1];
        for i in (0..n - 1).rev() {
            result = result * (x - self.nodes[i].x()) + coefficients[i];
        }
        result
    }

    /// Direct Lagrange evaluation, no precomputation.
    fn lagrange(&self, x: f64) -> f64 {
        let n = self.nodes.len();
        let mut sum = 0.0;
        for i in 0..n {
            let mut basis = 1.0;
            for j in 0..n {
                if j != i {
                    basis *= (x - self.nodes[j].x())
                        / (self.nodes[i].x() - self.nodes[j].x());
                }
            }
            sum += self.nodes[i].y() * basis;
        }
        sum
    }
}
