// Positions module: Contains the position-mapping orchestration layer
// This module decodes node identities into lattice indices and builds the
// node -> coordinate association consumed by an external rendering component

use std::collections::HashMap;

use anyhow::Error;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::config::PEGASUS_FAMILY;
use crate::lattice::geometry::PegasusGeometry;
use crate::lattice::index::{LatticeIndex, LinearCoordinates};
use crate::layout::placer::NodePlacer;

/// Identity of a node in a Pegasus lattice graph.
///
/// Nodes are identified either by a linear integer label or directly by
/// their lattice index, depending on how the source lattice was labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    Linear(usize),
    Coordinate(LatticeIndex),
}

/// Capabilities the orchestration layer queries from a lattice graph.
///
/// The layout never inspects graph structure itself; it asks the collaborator
/// for the lattice family, the geometry, the node identities, and the lattice
/// index behind each identity.
pub trait LatticeSource {
    /// Lattice family tag carried by the graph metadata
    fn family(&self) -> &str;

    /// Geometry parameters of the lattice
    fn geometry(&self) -> &PegasusGeometry;

    /// Snapshot of the node identities to lay out
    fn nodes(&self) -> Vec<NodeLabel>;

    /// Lattice index behind a node identity
    fn lattice_index(&self, node: &NodeLabel) -> Result<LatticeIndex, Error>;
}

// How a node set resolves identities into lattice indices
#[derive(Debug, Clone)]
enum IndexScheme {
    Coordinate,
    Linear(LinearCoordinates),
    Attached(HashMap<NodeLabel, LatticeIndex>),
}

/// A set of labeled Pegasus lattice nodes.
///
/// Concrete [`LatticeSource`] covering the three labeling conventions a
/// lattice graph may carry: node identities that are lattice indices, linear
/// integer labels decoded through [`LinearCoordinates`], or arbitrary
/// identities with lattice indices attached per node.
#[derive(Debug, Clone)]
pub struct PegasusNodeSet {
    family: String,
    geometry: PegasusGeometry,
    nodes: Vec<NodeLabel>,
    scheme: IndexScheme,
}

impl PegasusNodeSet {
    /// Node set whose identities are the lattice indices themselves.
    pub fn with_coordinate_labels(geometry: PegasusGeometry, indices: Vec<LatticeIndex>) -> Self {
        PegasusNodeSet {
            family: PEGASUS_FAMILY.to_string(),
            geometry,
            nodes: indices.into_iter().map(NodeLabel::Coordinate).collect(),
            scheme: IndexScheme::Coordinate,
        }
    }

    /// Node set identified by linear labels of the geometry's labeling scheme.
    pub fn with_linear_labels(
        geometry: PegasusGeometry,
        labels: Vec<usize>,
    ) -> Result<Self, Error> {
        let coordinates = LinearCoordinates::for_geometry(&geometry)?;

        Ok(PegasusNodeSet {
            family: PEGASUS_FAMILY.to_string(),
            geometry,
            nodes: labels.into_iter().map(NodeLabel::Linear).collect(),
            scheme: IndexScheme::Linear(coordinates),
        })
    }

    /// Node set with a lattice index attached to each identity.
    pub fn with_attached_indices(
        geometry: PegasusGeometry,
        nodes: Vec<(NodeLabel, LatticeIndex)>,
    ) -> Self {
        let labels = nodes.iter().map(|(label, _)| *label).collect();

        PegasusNodeSet {
            family: PEGASUS_FAMILY.to_string(),
            geometry,
            nodes: labels,
            scheme: IndexScheme::Attached(nodes.into_iter().collect()),
        }
    }

    /// Override the family tag (for lattices of foreign origin).
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }
}

impl LatticeSource for PegasusNodeSet {
    fn family(&self) -> &str {
        &self.family
    }

    fn geometry(&self) -> &PegasusGeometry {
        &self.geometry
    }

    fn nodes(&self) -> Vec<NodeLabel> {
        self.nodes.clone()
    }

    fn lattice_index(&self, node: &NodeLabel) -> Result<LatticeIndex, Error> {
        match &self.scheme {
            IndexScheme::Coordinate => match node {
                NodeLabel::Coordinate(index) => Ok(*index),
                NodeLabel::Linear(_) => Err(Error::msg(
                    "coordinate-labeled lattice cannot resolve a linear node label",
                )),
            },
            IndexScheme::Linear(coordinates) => match node {
                NodeLabel::Linear(label) => coordinates.from_linear(*label),
                NodeLabel::Coordinate(_) => Err(Error::msg(
                    "linear-labeled lattice cannot resolve a coordinate node label",
                )),
            },
            IndexScheme::Attached(table) => table.get(node).copied().ok_or_else(|| {
                Error::msg(format!("no lattice index attached to node {:?}", node))
            }),
        }
    }
}

/// Positions of all nodes of a Pegasus lattice graph.
///
/// Checks the family precondition, builds the placer once, and invokes it per
/// node. The result is an unordered association from node identity to
/// coordinate vector.
pub fn layout<S: LatticeSource>(
    source: &S,
    scale: f64,
    center: Option<DVector<f64>>,
    dim: usize,
) -> Result<HashMap<NodeLabel, DVector<f64>>, Error> {
    if source.family() != PEGASUS_FAMILY {
        return Err(Error::msg(
            "lattice metadata does not describe a Pegasus-family graph",
        ));
    }

    let placer = NodePlacer::new(source.geometry(), scale, center, dim)?;

    let mut positions = HashMap::new();
    for node in source.nodes() {
        let index = source.lattice_index(&node)?;
        positions.insert(node, placer.place(index));
    }

    Ok(positions)
}
