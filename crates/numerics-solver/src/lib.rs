// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Numerics Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct solvers for systems of linear algebraic equations.

pub mod linear_system;
pub mod tridiag;

pub use linear_system::LinearSystem;
