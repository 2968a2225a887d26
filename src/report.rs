//! Per-component current/power resolution and report aggregation.
//!
//! Maps solved mesh currents back onto each registered resistor. An
//! exclusive resistor carries its mesh's current; a shared resistor carries
//! the signed difference of its two mesh currents. Reported current is the
//! magnitude, reported power is `I^2 * R` and therefore never negative.
//!
//! Resolution failures are contained per entry: a resistor whose topology
//! references a mesh the circuit does not have becomes an error record in
//! the report, and every other resistor still resolves.

use thiserror::Error;

use crate::circuit::{MeshId, ResistorRegistry, Topology};

/// Solved mesh currents, one per mesh. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCurrents(Vec<f64>);

impl MeshCurrents {
    pub(crate) fn new(currents: Vec<f64>) -> Self {
        Self(currents)
    }

    /// Number of meshes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Current of a mesh, or `None` when the index is out of range.
    pub fn get(&self, mesh: MeshId) -> Option<f64> {
        self.0.get(mesh.index()).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Non-fatal, per-resistor resolution failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resistor's topology references a mesh the circuit does not have
    #[error("mesh index {mesh} out of range (circuit has {mesh_count} meshes)")]
    MeshOutOfRange { mesh: usize, mesh_count: usize },
}

/// Successfully resolved figures for one resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentFigures {
    /// Magnitude of the current through the resistor, in amperes
    pub current: f64,
    /// Dissipated power `I^2 * R`, in watts (never negative)
    pub power: f64,
}

/// Report entry for one resistor: its figures, or the error that kept it
/// from resolving.
#[derive(Debug, Clone)]
pub struct ComponentResult {
    pub name: String,
    /// Resistance in ohms
    pub resistance: f64,
    pub figures: Result<ComponentFigures, ResolveError>,
}

/// The full solve output: mesh currents plus per-component results in
/// registration order.
#[derive(Debug, Clone)]
pub struct Report {
    pub mesh_currents: MeshCurrents,
    pub components: Vec<ComponentResult>,
}

impl Report {
    /// Total dissipated power over all resolved components.
    ///
    /// Entries in an error state are skipped, not treated as zero and not
    /// treated as fatal: one bad component does not block the report.
    pub fn total_power(&self) -> f64 {
        self.components
            .iter()
            .filter_map(|c| c.figures.as_ref().ok())
            .map(|f| f.power)
            .sum()
    }
}

/// Look up a mesh current, producing the per-component error on a bad index.
fn mesh_current(currents: &MeshCurrents, mesh: MeshId) -> Result<f64, ResolveError> {
    currents.get(mesh).ok_or(ResolveError::MeshOutOfRange {
        mesh: mesh.index(),
        mesh_count: currents.len(),
    })
}

/// Resolve every registered resistor against the solved mesh currents.
///
/// Output order is registration order. Each entry resolves independently;
/// failures never abort the batch.
pub fn resolve_components(
    registry: &ResistorRegistry,
    currents: &MeshCurrents,
) -> Vec<ComponentResult> {
    registry
        .iter()
        .map(|resistor| {
            let raw = match resistor.topology {
                Topology::Exclusive(m) => mesh_current(currents, m),
                Topology::Shared(i, j) => {
                    // Signed difference, relative to mesh i's reference
                    // direction; only the magnitude is reported.
                    match (mesh_current(currents, i), mesh_current(currents, j)) {
                        (Ok(ii), Ok(ij)) => Ok(ii - ij),
                        (Err(e), _) | (_, Err(e)) => Err(e),
                    }
                }
            };

            ComponentResult {
                name: resistor.name.clone(),
                resistance: resistor.value,
                figures: raw.map(|i| ComponentFigures {
                    current: i.abs(),
                    power: i * i * resistor.value,
                }),
            }
        })
        .collect()
}
