// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Numerics Algebra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense real algebra primitives: [`vector::Vector`], [`matrix::Matrix`]
//! and the square-constrained [`tensor::Tensor`].

pub mod matrix;
pub mod tensor;
pub mod vector;

pub use matrix::Matrix;
pub use tensor::Tensor;
pub use vector::Vector;
