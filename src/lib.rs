
//! Pegasus lattice layout library
//!
//! This library computes display coordinates for the nodes of Pegasus-topology
//! qubit lattices, so that an external drawing facility can render them.

pub mod config;
pub mod lattice;
pub mod layout;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
