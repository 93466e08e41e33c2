// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Absolute tolerance for solution-agreement and round-trip checks.
pub const DEFAULT_TOL: f64 = 1e-9;

/// Minimum admissible vector dimension. One-component vectors are rejected
/// at construction.
pub const MIN_VECTOR_DIM: usize = 2;

/// Shape of the fallback matrix produced when textual input cannot be
/// tokenised into numeric rows.
pub const FALLBACK_MATRIX_DIM: usize = 2;

/// FNV-1a offset basis (64-bit), used by the component mixing hashes.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a prime (64-bit).
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
