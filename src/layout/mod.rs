// Layout module: Contains coordinate generation for Pegasus lattice drawings
// This module provides the placer core and the node-position orchestration built on it

// ======================== MODULE DECLARATIONS ========================
pub mod placer;
pub mod positions;

// Test modules
mod _tests_placer;

// ======================== COORDINATE MAPPER ========================
pub use placer::NodePlacer; // struct - pure mapping from lattice index to display coordinates
// NodePlacer impl methods:
//   new(geometry: &PegasusGeometry, scale: f64, center: Option<DVector<f64>>, dim: usize) -> Result<Self>
//                                                 - validated constructor (dim >= 2, center length == dim)
//   place(&self, index: LatticeIndex) -> DVector<f64> - display coordinates of a qubit
//   dim(&self) -> usize                               - output dimension

// ======================== POSITION MAPPING ========================
pub use positions::{
    layout,        // fn(source, scale, center, dim) -> Result<HashMap<NodeLabel, DVector<f64>>>
    LatticeSource, // trait - capabilities queried from the graph collaborator
    NodeLabel,     // enum - node identity (Linear label or Coordinate index)
    PegasusNodeSet, // struct - concrete LatticeSource over an explicit node list
};
