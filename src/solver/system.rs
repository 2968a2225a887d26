//! Resistance-matrix assembly and solving.

use log::{debug, trace};

use crate::circuit::{MeshCircuit, Topology};
use crate::error::{MeshwiseError, Result};

use super::PIVOT_TOLERANCE;

/// Dense mesh system `R * I = V`.
///
/// `R` is the N x N resistance matrix (row-major), `V` the per-mesh source
/// vector and `I` the mesh-current solution. Symmetry of `R` is guaranteed
/// by construction: every stamp writes symmetric entries.
#[derive(Debug)]
pub struct MeshSystem {
    /// Resistance matrix R (row-major)
    r: Vec<f64>,
    /// Source vector V
    v: Vec<f64>,
    /// Solution vector I
    x: Vec<f64>,
    /// Matrix dimension N
    size: usize,
    /// LU decomposition of R (for solving)
    lu: Vec<f64>,
    /// Pivot indices for the LU decomposition
    pivots: Vec<usize>,
}

impl MeshSystem {
    /// Create a zeroed system of dimension `size`.
    pub fn new(size: usize) -> Self {
        Self {
            r: vec![0.0; size * size],
            v: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            pivots: vec![0; size],
        }
    }

    /// Matrix dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.r[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    fn add(&mut self, row: usize, col: usize, value: f64) {
        self.r[row * self.size + col] += value;
    }

    /// Load the source vector. Fails if the length does not match the
    /// matrix dimension.
    pub fn load_sources(&mut self, sources: &[f64]) -> Result<()> {
        if sources.len() != self.size {
            return Err(MeshwiseError::DimensionMismatch {
                rows: self.size,
                len: sources.len(),
            });
        }
        self.v.copy_from_slice(sources);
        Ok(())
    }

    /// Stamp an exclusive resistor of value `r` into mesh `i`:
    ///   R[i,i] += r
    pub fn stamp_exclusive(&mut self, i: usize, r: f64) {
        self.add(i, i, r);
    }

    /// Stamp a shared resistor of value `r` on the boundary of meshes
    /// `i` and `j`:
    ///   R[i,i] += r
    ///   R[j,j] += r
    ///   R[i,j] -= r
    ///   R[j,i] -= r
    pub fn stamp_shared(&mut self, i: usize, j: usize, r: f64) {
        self.add(i, i, r);
        self.add(j, j, r);
        self.add(i, j, -r);
        self.add(j, i, -r);
    }

    /// Build the system for a circuit.
    ///
    /// Sources are copied verbatim, one value per mesh. Shared resistors
    /// stamp only when their value is strictly positive (0 means "no
    /// connection"). Resistors referencing a mesh outside `0..N` are
    /// skipped here; the resolver reports them per-component.
    pub fn assemble(circuit: &MeshCircuit) -> Self {
        let n = circuit.mesh_count();
        let mut system = Self::new(n);
        // Lengths agree by MeshCircuit construction
        system.v.copy_from_slice(circuit.sources());

        for resistor in circuit.registry().iter() {
            match resistor.topology {
                Topology::Exclusive(m) => {
                    if m.index() < n {
                        system.stamp_exclusive(m.index(), resistor.value);
                    } else {
                        trace!("skipping '{}': {} out of range", resistor.name, m);
                    }
                }
                Topology::Shared(mi, mj) => {
                    let (i, j) = (mi.index(), mj.index());
                    if i >= n || j >= n {
                        trace!("skipping '{}': {}-{} out of range", resistor.name, mi, mj);
                    } else if resistor.value > 0.0 {
                        system.stamp_shared(i, j, resistor.value);
                    }
                }
            }
        }

        system
    }

    /// Perform LU decomposition with partial pivoting.
    pub fn factor(&mut self) -> Result<()> {
        let n = self.size;
        self.lu.copy_from_slice(&self.r);

        for i in 0..n {
            self.pivots[i] = i;
        }

        for k in 0..n {
            // Find pivot
            let mut max_val = self.lu[k * n + k].abs();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = self.lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < PIVOT_TOLERANCE {
                debug!("pivot {max_val:.3e} below tolerance at column {k}");
                return Err(MeshwiseError::SingularSystem);
            }

            // Swap rows if needed
            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    let tmp = self.lu[k * n + j];
                    self.lu[k * n + j] = self.lu[max_row * n + j];
                    self.lu[max_row * n + j] = tmp;
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    self.lu[i * n + j] -= factor * self.lu[k * n + j];
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    pub fn solve(&mut self) -> Result<()> {
        let n = self.size;

        // Apply pivot permutation to V
        let b = self.v.clone();
        for i in 0..n {
            self.x[i] = b[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
            let diag = self.lu[i * n + i];
            if diag.abs() < PIVOT_TOLERANCE {
                return Err(MeshwiseError::SingularSystem);
            }
            self.x[i] /= diag;
        }

        Ok(())
    }

    /// The solution vector (valid after [`MeshSystem::solve`]).
    pub fn solution(&self) -> &[f64] {
        &self.x
    }

    /// Consume the system, keeping only the solution vector.
    pub fn into_solution(self) -> Vec<f64> {
        self.x
    }
}
