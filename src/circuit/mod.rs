//! Mesh-circuit representation.
//!
//! This module provides the topology side of the solver: resistor records
//! with their mesh placement, the append-only registry they live in, and
//! the [`MeshCircuit`] construction API that feeds the numeric engine.

mod network;
mod registry;
mod types;

pub use network::MeshCircuit;
pub use registry::ResistorRegistry;
pub use types::{MeshId, Resistor, Topology};
