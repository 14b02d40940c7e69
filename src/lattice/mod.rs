// Lattice module: Contains Pegasus lattice parameters and index bookkeeping
// This module provides the geometry record and index types consumed by the layout core

// ======================== MODULE DECLARATIONS ========================
pub mod geometry;
pub mod index;

// Test modules
mod _tests_geometry;

// ======================== LATTICE GEOMETRY ========================
pub use geometry::PegasusGeometry; // struct - immutable Pegasus-topology parameters
// PegasusGeometry impl methods:
//   new(rows, tile_width, horizontal_offsets, vertical_offsets) -> Result<Self> - validated constructor
//   standard(rows: usize) -> Result<Self>  - standard Pegasus family (tile width 12)
//   rows(&self) -> usize                   - grid dimension m
//   tile_width(&self) -> usize             - qubits per tile edge
//   horizontal_offsets(&self) -> &[f64]    - per-shift offsets for horizontal qubits
//   vertical_offsets(&self) -> &[f64]      - per-shift offsets for vertical qubits

// ======================== LATTICE INDEXING ========================
pub use index::{
    LatticeIndex,      // struct - (u, w, k, z) lattice index of a qubit
    LinearCoordinates, // struct - converter between linear labels and lattice indices
    Orientation,       // enum - direction a qubit runs within the tile grid (Vertical, Horizontal)
};
// LinearCoordinates impl methods:
//   new(rows: usize, tile_width: usize) -> Result<Self>      - validated constructor (rows >= 2)
//   for_geometry(geometry: &PegasusGeometry) -> Result<Self> - converter matching a geometry
//   label_count(&self) -> usize                              - number of linear labels covered
//   to_linear(&self, index: LatticeIndex) -> usize           - lattice index -> linear label
//   from_linear(&self, label: usize) -> Result<LatticeIndex> - linear label -> lattice index
