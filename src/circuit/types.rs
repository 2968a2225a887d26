//! Core types for mesh-circuit representation.

use std::fmt;

/// A unique identifier for a mesh (independent current loop) in the circuit.
/// Meshes are indexed `0..N`, displayed 1-based for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub usize);

impl MeshId {
    /// Raw index into the resistance matrix / source vector.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0 + 1)
    }
}

/// Where a resistor sits in the mesh topology.
///
/// This is an explicit sum type: a resistor either belongs to exactly one
/// mesh, or bridges exactly two. There is no "neither" or "both keys
/// present" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Belongs solely to one mesh; carries that mesh's current.
    Exclusive(MeshId),
    /// Lies on the boundary between two meshes; carries the difference of
    /// their mesh currents (signed relative to the first mesh).
    Shared(MeshId, MeshId),
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Exclusive(m) => write!(f, "{m}"),
            Topology::Shared(i, j) => write!(f, "{i}-{j}"),
        }
    }
}

/// A named resistor with its value in ohms and its mesh topology.
#[derive(Debug, Clone)]
pub struct Resistor {
    pub name: String,
    /// Resistance in ohms. Positive, except that a shared resistor may be
    /// exactly 0 meaning "no connection between the two meshes".
    pub value: f64,
    pub topology: Topology,
}

impl Resistor {
    pub fn new(name: impl Into<String>, value: f64, topology: Topology) -> Self {
        Self {
            name: name.into(),
            value,
            topology,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_id_display_is_one_based() {
        assert_eq!(MeshId(0).to_string(), "M1");
        assert_eq!(MeshId(4).to_string(), "M5");
    }

    #[test]
    fn test_topology_display() {
        assert_eq!(Topology::Exclusive(MeshId(0)).to_string(), "M1");
        assert_eq!(Topology::Shared(MeshId(0), MeshId(2)).to_string(), "M1-M3");
    }
}
