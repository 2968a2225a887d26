//! The mesh circuit: construction API and solve entry points.

use log::debug;

use crate::error::{MeshwiseError, Result};
use crate::report::{resolve_components, MeshCurrents, Report};
use crate::solver::MeshSystem;

use super::registry::ResistorRegistry;
use super::types::{Resistor, Topology};

/// A planar DC circuit described by its meshes.
///
/// Holds the number of independent loops, the net source voltage driving
/// each loop (positive = clockwise-driving convention), and the registered
/// resistors. The circuit itself is the only construction surface; solving
/// never mutates it, so [`MeshCircuit::solve`] and
/// [`MeshCircuit::component_report`] can be called repeatedly with
/// identical results.
#[derive(Debug)]
pub struct MeshCircuit {
    /// Number of meshes N
    mesh_count: usize,
    /// Net source voltage per mesh (length N)
    sources: Vec<f64>,
    /// All registered resistors
    registry: ResistorRegistry,
}

impl MeshCircuit {
    /// Create an empty circuit with `mesh_count` meshes.
    pub fn new(mesh_count: usize) -> Result<Self> {
        if mesh_count == 0 {
            return Err(MeshwiseError::invalid_input(
                "the number of meshes must be positive",
            ));
        }
        Ok(Self {
            mesh_count,
            sources: vec![0.0; mesh_count],
            registry: ResistorRegistry::new(),
        })
    }

    /// Number of meshes in the circuit.
    pub fn mesh_count(&self) -> usize {
        self.mesh_count
    }

    /// The registered resistors.
    pub fn registry(&self) -> &ResistorRegistry {
        &self.registry
    }

    /// Net source voltage driving each mesh.
    pub fn sources(&self) -> &[f64] {
        &self.sources
    }

    /// Set the net source voltage driving mesh `mesh`.
    ///
    /// One value per mesh: a second call for the same mesh replaces the
    /// first, it does not accumulate.
    pub fn set_mesh_source(&mut self, mesh: usize, voltage: f64) -> Result<()> {
        if mesh >= self.mesh_count {
            return Err(MeshwiseError::MeshOutOfRange {
                mesh,
                mesh_count: self.mesh_count,
            });
        }
        if !voltage.is_finite() {
            return Err(MeshwiseError::invalid_input(format!(
                "source voltage for mesh {mesh} is not finite"
            )));
        }
        self.sources[mesh] = voltage;
        Ok(())
    }

    /// Register a resistor by name, value and topology.
    ///
    /// Mesh indices are deliberately not range-checked here: a resistor
    /// referencing a mesh the circuit does not have still registers, is
    /// ignored by matrix assembly, and surfaces as a per-component error in
    /// the report rather than failing the whole run.
    pub fn register_resistor(
        &mut self,
        name: impl Into<String>,
        value: f64,
        topology: Topology,
    ) -> Result<()> {
        self.registry.register(Resistor::new(name, value, topology))
    }

    /// Solve the circuit for its mesh currents.
    pub fn solve(&self) -> Result<MeshCurrents> {
        let mut system = MeshSystem::assemble(self);
        debug!(
            "solving {0}x{0} mesh system ({1} resistors)",
            self.mesh_count,
            self.registry.len()
        );
        system.factor()?;
        system.solve()?;
        Ok(MeshCurrents::new(system.into_solution()))
    }

    /// Solve and produce the full per-component report.
    pub fn component_report(&self) -> Result<Report> {
        let mesh_currents = self.solve()?;
        let components = resolve_components(&self.registry, &mesh_currents);
        Ok(Report {
            mesh_currents,
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::MeshId;

    #[test]
    fn test_zero_mesh_count_rejected() {
        let err = MeshCircuit::new(0).unwrap_err();
        assert!(matches!(err, MeshwiseError::InvalidInput { .. }));
    }

    #[test]
    fn test_set_source_out_of_range() {
        let mut circuit = MeshCircuit::new(2).unwrap();
        let err = circuit.set_mesh_source(2, 5.0).unwrap_err();
        assert!(matches!(
            err,
            MeshwiseError::MeshOutOfRange {
                mesh: 2,
                mesh_count: 2
            }
        ));
    }

    #[test]
    fn test_set_source_replaces_rather_than_accumulates() {
        let mut circuit = MeshCircuit::new(1).unwrap();
        circuit.set_mesh_source(0, 5.0).unwrap();
        circuit.set_mesh_source(0, 10.0).unwrap();
        assert_relative_eq!(circuit.sources()[0], 10.0);
    }

    #[test]
    fn test_single_mesh_circuit() {
        // 10V source, 5 ohm resistor: I = 2A, P = 20W
        let mut circuit = MeshCircuit::new(1).unwrap();
        circuit.set_mesh_source(0, 10.0).unwrap();
        circuit
            .register_resistor("R1", 5.0, Topology::Exclusive(MeshId(0)))
            .unwrap();

        let currents = circuit.solve().unwrap();
        assert_relative_eq!(currents.as_slice()[0], 2.0, max_relative = 1e-12);

        let report = circuit.component_report().unwrap();
        let figures = report.components[0].figures.as_ref().unwrap();
        assert_relative_eq!(figures.current, 2.0, max_relative = 1e-12);
        assert_relative_eq!(figures.power, 20.0, max_relative = 1e-12);
        assert_relative_eq!(report.total_power(), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_two_mesh_circuit_with_shared_resistor() {
        // Sources [10, 0], exclusive 2 and 3 ohms, shared 1 ohm:
        // [[3, -1], [-1, 4]] * I = [10, 0]
        // I1 = 40/11, I2 = 10/11, shared current 30/11, shared power 900/121
        let mut circuit = MeshCircuit::new(2).unwrap();
        circuit.set_mesh_source(0, 10.0).unwrap();
        circuit.set_mesh_source(1, 0.0).unwrap();
        circuit
            .register_resistor("R1", 2.0, Topology::Exclusive(MeshId(0)))
            .unwrap();
        circuit
            .register_resistor("R2", 3.0, Topology::Exclusive(MeshId(1)))
            .unwrap();
        circuit
            .register_resistor("Rc", 1.0, Topology::Shared(MeshId(0), MeshId(1)))
            .unwrap();

        let currents = circuit.solve().unwrap();
        assert_relative_eq!(currents.as_slice()[0], 40.0 / 11.0, max_relative = 1e-12);
        assert_relative_eq!(currents.as_slice()[1], 10.0 / 11.0, max_relative = 1e-12);

        let report = circuit.component_report().unwrap();
        let shared = report
            .components
            .iter()
            .find(|c| c.name == "Rc")
            .unwrap()
            .figures
            .as_ref()
            .unwrap();
        assert_relative_eq!(shared.current, 30.0 / 11.0, max_relative = 1e-12);
        assert_relative_eq!(shared.power, 900.0 / 121.0, max_relative = 1e-12);
    }

    #[test]
    fn test_singular_single_mesh() {
        // One mesh with no resistance is indeterminate
        let circuit = MeshCircuit::new(1).unwrap();
        let err = circuit.solve().unwrap_err();
        assert!(matches!(err, MeshwiseError::SingularSystem));
    }

    #[test]
    fn test_solve_failure_leaves_circuit_reusable() {
        // A singular solve is fatal to the attempt, not to the circuit:
        // fixing the topology afterwards must succeed.
        let mut circuit = MeshCircuit::new(1).unwrap();
        circuit.set_mesh_source(0, 10.0).unwrap();
        assert!(circuit.solve().is_err());

        circuit
            .register_resistor("R1", 5.0, Topology::Exclusive(MeshId(0)))
            .unwrap();
        let currents = circuit.solve().unwrap();
        assert_relative_eq!(currents.as_slice()[0], 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_component_report_is_idempotent() {
        let mut circuit = MeshCircuit::new(2).unwrap();
        circuit.set_mesh_source(0, 12.0).unwrap();
        circuit
            .register_resistor("R1", 4.0, Topology::Exclusive(MeshId(0)))
            .unwrap();
        circuit
            .register_resistor("Rc", 2.0, Topology::Shared(MeshId(0), MeshId(1)))
            .unwrap();
        circuit
            .register_resistor("R2", 6.0, Topology::Exclusive(MeshId(1)))
            .unwrap();

        let first = circuit.component_report().unwrap();
        let second = circuit.component_report().unwrap();

        assert_eq!(first.components.len(), second.components.len());
        for (a, b) in first.components.iter().zip(second.components.iter()) {
            assert_eq!(a.name, b.name);
            let (fa, fb) = (a.figures.as_ref().unwrap(), b.figures.as_ref().unwrap());
            assert_relative_eq!(fa.current, fb.current);
            assert_relative_eq!(fa.power, fb.power);
        }
        assert_relative_eq!(first.total_power(), second.total_power());
    }

    #[test]
    fn test_out_of_range_resistor_is_contained() {
        // Scenario: shared resistor referencing mesh 5 in a 3-mesh circuit.
        // Registration succeeds, the bad entry resolves to an error, the
        // rest of the report proceeds and total power excludes the entry.
        let mut circuit = MeshCircuit::new(3).unwrap();
        circuit.set_mesh_source(0, 9.0).unwrap();
        for (name, mesh) in [("R1", 0), ("R2", 1), ("R3", 2)] {
            circuit
                .register_resistor(name, 3.0, Topology::Exclusive(MeshId(mesh)))
                .unwrap();
        }
        circuit
            .register_resistor("Rbad", 1.0, Topology::Shared(MeshId(0), MeshId(5)))
            .unwrap();

        let report = circuit.component_report().unwrap();
        let bad = report.components.iter().find(|c| c.name == "Rbad").unwrap();
        assert!(bad.figures.is_err());

        let resolved = report
            .components
            .iter()
            .filter(|c| c.figures.is_ok())
            .count();
        assert_eq!(resolved, 3);

        // 9V across 3 ohms in mesh 1: I = 3A, P = 27W; meshes 2 and 3 idle
        assert_relative_eq!(report.total_power(), 27.0, max_relative = 1e-12);
    }
}
