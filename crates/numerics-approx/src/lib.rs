// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Numerics Approx
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interpolation of tabulated functions: Newton divided differences,
//! Lagrange, and the natural cubic spline over always-sorted node sets.

pub mod interpolation;
pub mod node;
pub mod spline;

pub use interpolation::{Interpolation, InterpolationKind};
pub use node::{Node, SortedNodes};
