//! Mesh-analysis linear solver.
//!
//! This module provides the numeric engine: assembly of the resistance
//! matrix from Kirchhoff's Voltage Law applied to each mesh, and a dense
//! direct solve of `R * I = V`.
//!
//! The matrix structure for N meshes is:
//! - diagonal `R[i,i]`: sum of the exclusive resistors of mesh `i` plus
//!   every shared resistor touching mesh `i`
//! - off-diagonal `R[i,j]`: negated sum of the resistors shared between
//!   meshes `i` and `j`
//!
//! The system is symmetric by construction and solved by LU decomposition
//! with partial pivoting. N is small (tens of meshes at most), so a dense
//! direct solve is the right tool; there is no iterative refinement.

mod system;

pub use system::MeshSystem;

/// Pivot magnitude below which the matrix is treated as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-15;
