use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::config::{STANDARD_HORIZONTAL_OFFSETS, STANDARD_TILE_WIDTH, STANDARD_VERTICAL_OFFSETS};

/// Immutable parameters of a Pegasus-topology instance.
///
/// The geometry is read from an existing lattice description and consumed
/// read-only by the layout core. `rows` is the grid dimension m (unit cells
/// per side), `tile_width` the number of qubits per tile edge, and the two
/// offset tables give the per-shift perpendicular-axis adjustment that
/// produces the characteristic staggered layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PegasusGeometry {
    rows: usize,
    tile_width: usize,
    horizontal_offsets: Vec<f64>,
    vertical_offsets: Vec<f64>,
}

impl PegasusGeometry {
    pub fn new(
        rows: usize,
        tile_width: usize,
        horizontal_offsets: Vec<f64>,
        vertical_offsets: Vec<f64>,
    ) -> Result<Self, Error> {
        // Run tests on the parameters to decide whether a usable geometry can be constructed
        if rows == 0 {
            return Err(Error::msg("grid dimension must be positive"));
        }

        if tile_width == 0 {
            return Err(Error::msg("tile width must be positive"));
        }

        // Every shift index k < tile_width must resolve into both offset tables
        if horizontal_offsets.len() < tile_width {
            return Err(Error::msg(
                "horizontal offset table is shorter than the tile width",
            ));
        }

        if vertical_offsets.len() < tile_width {
            return Err(Error::msg(
                "vertical offset table is shorter than the tile width",
            ));
        }

        Ok(PegasusGeometry {
            rows,
            tile_width,
            horizontal_offsets,
            vertical_offsets,
        })
    }

    /// Geometry of the standard Pegasus family with the given grid dimension.
    pub fn standard(rows: usize) -> Result<Self, Error> {
        Self::new(
            rows,
            STANDARD_TILE_WIDTH,
            STANDARD_HORIZONTAL_OFFSETS.to_vec(),
            STANDARD_VERTICAL_OFFSETS.to_vec(),
        )
    }

    /// Grid dimension m (rows/columns of unit cells)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of qubits per tile edge
    pub fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Per-shift offsets applied to horizontal qubits
    pub fn horizontal_offsets(&self) -> &[f64] {
        &self.horizontal_offsets
    }

    /// Per-shift offsets applied to vertical qubits
    pub fn vertical_offsets(&self) -> &[f64] {
        &self.vertical_offsets
    }
}
