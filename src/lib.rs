//! # Meshwise
//!
//! A DC circuit solver based on mesh (loop) analysis.
//!
//! This library provides:
//! - A construction API for describing a planar resistive circuit by its
//!   meshes: per-mesh source voltages plus named resistors that are either
//!   exclusive to one mesh or shared between two
//! - Assembly of the symmetric resistance matrix and source vector from
//!   Kirchhoff's Voltage Law
//! - A dense direct solve of `R * I = V` for the mesh currents
//! - A per-component report of current and dissipated power, with a total
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Resistor topology types, registry and the [`MeshCircuit`]
//!   construction API
//! - [`solver`] - Resistance-matrix assembly and the LU linear solver
//! - [`report`] - Mapping of mesh currents back onto components
//! - [`console`] - Interactive prompting and table rendering (CLI only)
//!
//! ## Usage
//!
//! ```
//! use meshwise::{MeshCircuit, MeshId, Topology};
//!
//! let mut circuit = MeshCircuit::new(2)?;
//! circuit.set_mesh_source(0, 10.0)?;
//! circuit.register_resistor("R1", 2.0, Topology::Exclusive(MeshId(0)))?;
//! circuit.register_resistor("R2", 3.0, Topology::Exclusive(MeshId(1)))?;
//! circuit.register_resistor("Rc", 1.0, Topology::Shared(MeshId(0), MeshId(1)))?;
//!
//! let report = circuit.component_report()?;
//! println!("total dissipated power: {:.4} W", report.total_power());
//! # Ok::<(), meshwise::MeshwiseError>(())
//! ```
//!
//! ## Mesh analysis
//!
//! For each mesh `i`, KVL gives one equation. The diagonal entry `R[i,i]`
//! accumulates every resistor traversed by mesh `i`; the off-diagonal
//! `R[i,j]` is the negated resistance shared between meshes `i` and `j`.
//! Solving `R * I = V` yields one current per mesh; an exclusive resistor
//! carries its mesh's current and a shared resistor carries the difference
//! of its two mesh currents. The whole pipeline is a straight-line
//! sequential computation - there is no concurrency to manage.

pub mod circuit;
pub mod error;
pub mod report;
pub mod solver;

#[cfg(feature = "cli")]
pub mod console;

// Re-export main types for convenience
pub use circuit::{MeshCircuit, MeshId, Resistor, ResistorRegistry, Topology};
pub use error::{MeshwiseError, Result};
pub use report::{ComponentFigures, ComponentResult, MeshCurrents, Report, ResolveError};
pub use solver::MeshSystem;

/// Default number of decimal places in rendered reports.
pub const DEFAULT_PRECISION: usize = 4;
