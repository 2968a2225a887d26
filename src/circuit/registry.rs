//! Append-only resistor registry.

use std::collections::HashMap;

use crate::error::{MeshwiseError, Result};

use super::types::{Resistor, Topology};

/// Insertion-ordered collection of named resistors.
///
/// Entries are append-only: once registered, a resistor is never mutated or
/// removed, so the topology seen by the matrix builder is the same topology
/// seen later by the resolver.
#[derive(Debug, Default)]
pub struct ResistorRegistry {
    /// Resistors in registration order (reporting order)
    resistors: Vec<Resistor>,
    /// Name -> slot in `resistors`, for uniqueness checks
    name_map: HashMap<String, usize>,
}

impl ResistorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resistor.
    ///
    /// Rejects duplicate names, negative values, zero-valued exclusive
    /// resistors, and shared resistors whose two meshes coincide. A shared
    /// value of exactly 0 is accepted: it means "no connection" and will be
    /// skipped during matrix assembly.
    pub fn register(&mut self, resistor: Resistor) -> Result<()> {
        if self.name_map.contains_key(&resistor.name) {
            return Err(MeshwiseError::DuplicateResistor {
                name: resistor.name,
            });
        }

        match resistor.topology {
            Topology::Exclusive(_) => {
                if resistor.value <= 0.0 || !resistor.value.is_finite() {
                    return Err(MeshwiseError::invalid_resistance(
                        resistor.name,
                        resistor.value,
                        "exclusive resistors must have a positive finite value",
                    ));
                }
            }
            Topology::Shared(i, j) => {
                if i == j {
                    return Err(MeshwiseError::SharedSameMesh {
                        name: resistor.name,
                        mesh: i.index(),
                    });
                }
                if resistor.value < 0.0 || !resistor.value.is_finite() {
                    return Err(MeshwiseError::invalid_resistance(
                        resistor.name,
                        resistor.value,
                        "shared resistors must have a non-negative finite value",
                    ));
                }
            }
        }

        self.name_map
            .insert(resistor.name.clone(), self.resistors.len());
        self.resistors.push(resistor);
        Ok(())
    }

    /// Iterate over all resistors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Resistor> {
        self.resistors.iter()
    }

    /// Look up a resistor by name.
    pub fn get(&self, name: &str) -> Option<&Resistor> {
        self.name_map.get(name).map(|&idx| &self.resistors[idx])
    }

    /// Number of registered resistors.
    pub fn len(&self) -> usize {
        self.resistors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.resistors.is_empty()
    }
}
