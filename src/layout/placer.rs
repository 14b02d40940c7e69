// Placer module: Contains the coordinate mapper for Pegasus lattice indices
// This module turns a lattice geometry plus a scale/center/dimension configuration
// into a pure function from lattice index to display coordinates

use anyhow::Error;
use nalgebra::DVector;

use crate::config::PARITY_NUDGE;
use crate::lattice::geometry::PegasusGeometry;
use crate::lattice::index::{LatticeIndex, Orientation};

/// Maps lattice indices to display coordinates.
///
/// A placer is constructed once per layout request and closes over a fixed
/// geometry, scale, center and output dimension. It holds no mutable state:
/// every call to [`NodePlacer::place`] only reads the captured parameters and
/// returns a freshly allocated vector, so a placer is safe to share across
/// threads without coordination.
///
/// At `scale = 1` the full lattice maps into a unit-sized region; the y-axis
/// is negated so that increasing row index moves the drawing downward,
/// matching the conventional top-left origin for this lattice family.
#[derive(Debug, Clone)]
pub struct NodePlacer {
    tile_width: usize,
    horizontal_offsets: Vec<f64>,
    vertical_offsets: Vec<f64>,
    tile_center: f64,
    scale: f64,
    center: DVector<f64>,
    dim: usize,
}

impl NodePlacer {
    /// Build a placer for the given geometry.
    ///
    /// `scale` is normalized internally by `m * tile_width` so the lattice
    /// fills a unit-sized region at `scale = 1`. `center` defaults to the
    /// origin in `dim` dimensions.
    ///
    /// Configuration errors are reported here rather than per call: `dim`
    /// below two, or an explicit `center` whose length does not equal `dim`.
    pub fn new(
        geometry: &PegasusGeometry,
        scale: f64,
        center: Option<DVector<f64>>,
        dim: usize,
    ) -> Result<Self, Error> {
        if dim < 2 {
            return Err(Error::msg("layout must have at least two dimensions"));
        }

        let center = center.unwrap_or_else(|| DVector::zeros(dim));
        if center.len() != dim {
            return Err(Error::msg(
                "length of center coordinates must match dimension of layout",
            ));
        }

        let tile_width = geometry.tile_width();

        Ok(NodePlacer {
            tile_width,
            horizontal_offsets: geometry.horizontal_offsets().to_vec(),
            vertical_offsets: geometry.vertical_offsets().to_vec(),
            tile_center: tile_width as f64 / 2.0 - 0.5,
            // Fill [0, 1] x [-1, 0] when scale = 1
            scale: scale / (geometry.rows() * tile_width) as f64,
            center,
            dim,
        })
    }

    /// Display coordinates of the qubit at the given lattice index.
    pub fn place(&self, index: LatticeIndex) -> DVector<f64> {
        let tile = self.tile_width as f64;

        // Qubits sharing a nominal tile slot are nudged apart, alternating
        // direction by parity of the shift index
        let nudge = if index.k % 2 == 1 {
            -PARITY_NUDGE
        } else {
            PARITY_NUDGE
        };

        // w advances along the qubit's own axis, z along the other axis of
        // the tile grid; the orientation swaps which one feeds x and which
        // feeds y, and selects the matching offset table
        let (x, y) = match index.u {
            Orientation::Horizontal => (
                index.z as f64 * tile + self.horizontal_offsets[index.k] + self.tile_center,
                -(tile * index.w as f64 + index.k as f64 + nudge),
            ),
            Orientation::Vertical => (
                tile * index.w as f64 + index.k as f64 + nudge,
                -(index.z as f64 * tile + self.vertical_offsets[index.k] + self.tile_center),
            ),
        };

        let mut position = DVector::zeros(self.dim);
        position[0] = x * self.scale;
        position[1] = y * self.scale;
        position += &self.center;
        position
    }

    /// Output dimension of placed coordinates
    pub fn dim(&self) -> usize {
        self.dim
    }
}
