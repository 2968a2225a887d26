//! Error types for the meshwise circuit solver.
//!
//! This module provides a unified error type [`MeshwiseError`] that covers
//! all error conditions that can occur during circuit construction and
//! solving. Per-component resolution failures are a separate, non-fatal
//! type ([`crate::report::ResolveError`]) carried inside the report.

use thiserror::Error;

/// Result type alias using [`MeshwiseError`].
pub type Result<T> = std::result::Result<T, MeshwiseError>;

/// Unified error type for all meshwise operations.
#[derive(Error, Debug)]
pub enum MeshwiseError {
    // ============ Input Errors ============
    /// Non-numeric or otherwise unusable user input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Mesh index outside the circuit's mesh range
    #[error("Mesh index {mesh} out of range (circuit has {mesh_count} meshes)")]
    MeshOutOfRange { mesh: usize, mesh_count: usize },

    // ============ Registry Errors ============
    /// Duplicate resistor name
    #[error("Duplicate resistor name '{name}'")]
    DuplicateResistor { name: String },

    /// Resistance value not usable for the given topology
    #[error("Invalid resistance for '{name}': {value} ohms ({message})")]
    InvalidResistance {
        name: String,
        value: f64,
        message: String,
    },

    /// Shared resistor whose two meshes are the same
    #[error("Shared resistor '{name}' references mesh {mesh} on both sides")]
    SharedSameMesh { name: String, mesh: usize },

    // ============ Solver Errors ============
    /// Matrix and source vector dimensions disagree
    #[error("Dimension mismatch: {rows}x{rows} matrix with length-{len} source vector")]
    DimensionMismatch { rows: usize, len: usize },

    /// Resistance matrix is singular and cannot be solved
    #[error("System is indeterminate - the resistance matrix is singular, check the circuit topology")]
    SingularSystem,
}

impl MeshwiseError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid-resistance error
    pub fn invalid_resistance(
        name: impl Into<String>,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidResistance {
            name: name.into(),
            value,
            message: message.into(),
        }
    }
}
