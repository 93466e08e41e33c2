// ─────────────────────────────────────────────────────────────────────
// SCPN Numerics Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Top-level problem definition.
///
/// Persistence lives in this adapter only: it reads and writes plain data
/// (dimensions plus component arrays), never the algebra types themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub problem_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<InterpolationConfig>,
}

/// Coefficient matrix and right-hand side of a linear system, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub coefficients: Vec<Vec<f64>>,
    pub right_part: Vec<f64>,
    /// Strategy name: "cramer", "gauss", "inverse" or "thomas".
    #[serde(default = "default_method")]
    pub method: String,
}

/// Tabulated sample points for the interpolation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Kind name: "newton", "lagrange", "hermite" or "cubic-spline".
    #[serde(default = "default_kind")]
    pub kind: String,
    /// (x, y) pairs. Need not be pre-sorted.
    pub nodes: Vec<[f64; 2]>,
}

fn default_method() -> String {
    "gauss".to_string()
}

fn default_kind() -> String {
    "newton".to_string()
}

impl ProblemConfig {
    /// Load a problem definition from a JSON file.
    pub fn from_file(path: &str) -> crate::error::NumericsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Parse a problem definition from a JSON string.
    pub fn from_json(json: &str) -> crate::error::NumericsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
