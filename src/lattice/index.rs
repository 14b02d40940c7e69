use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::lattice::geometry::PegasusGeometry;

/// Direction a qubit runs within the tile grid.
///
/// Horizontal and vertical qubits run along perpendicular axes of the same
/// tile grid; external labels encode the orientation as a raw bit (0 =
/// vertical, 1 = horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Decode the raw orientation bit used by external labels (nonzero = horizontal).
    pub fn from_bit(bit: usize) -> Self {
        match bit {
            0 => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Raw orientation bit used by external labels.
    pub fn to_bit(self) -> usize {
        match self {
            Orientation::Vertical => 0,
            Orientation::Horizontal => 1,
        }
    }
}

/// Lattice index (u, w, k, z) of a single qubit.
///
/// `w` is the tile coordinate along the perpendicular axis, `k` the shift
/// within the tile and `z` the tile coordinate along the parallel axis.
/// Ranges are not validated: out-of-range `w`/`z` produce geometrically
/// meaningless but well-defined positions. `k` resolves into the geometry's
/// offset tables and must stay below the tile width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticeIndex {
    pub u: Orientation,
    pub w: i32,
    pub k: usize,
    pub z: i32,
}

impl LatticeIndex {
    pub fn new(u: Orientation, w: i32, k: usize, z: i32) -> Self {
        LatticeIndex { u, w, k, z }
    }
}

/// Converter between linear node labels and lattice indices.
///
/// Linear labels enumerate the qubits of a lattice with grid dimension m as
/// `((u*m + w)*tile_width + k)*(m - 1) + z`. The scheme has no valid labels
/// for m < 2, which is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCoordinates {
    rows: usize,
    tile_width: usize,
}

impl LinearCoordinates {
    pub fn new(rows: usize, tile_width: usize) -> Result<Self, Error> {
        if rows < 2 {
            return Err(Error::msg(
                "linear labels require a grid dimension of at least two",
            ));
        }

        if tile_width == 0 {
            return Err(Error::msg("tile width must be positive"));
        }

        Ok(LinearCoordinates { rows, tile_width })
    }

    pub fn for_geometry(geometry: &PegasusGeometry) -> Result<Self, Error> {
        Self::new(geometry.rows(), geometry.tile_width())
    }

    /// Number of linear labels covered by the scheme: 2 * m * tile_width * (m - 1)
    pub fn label_count(&self) -> usize {
        2 * self.rows * self.tile_width * (self.rows - 1)
    }

    /// Linear label of an in-range lattice index.
    pub fn to_linear(&self, index: LatticeIndex) -> usize {
        let m = self.rows;
        ((index.u.to_bit() * m + index.w as usize) * self.tile_width + index.k) * (m - 1)
            + index.z as usize
    }

    /// Lattice index encoded by a linear label.
    pub fn from_linear(&self, label: usize) -> Result<LatticeIndex, Error> {
        if label >= self.label_count() {
            return Err(Error::msg(format!(
                "linear label {} is out of range for a lattice with {} qubits",
                label,
                self.label_count()
            )));
        }

        let m = self.rows;
        let z = label % (m - 1);
        let rest = label / (m - 1);
        let k = rest % self.tile_width;
        let rest = rest / self.tile_width;
        let w = rest % m;
        let u = rest / m;

        Ok(LatticeIndex::new(
            Orientation::from_bit(u),
            w as i32,
            k,
            z as i32,
        ))
    }
}
