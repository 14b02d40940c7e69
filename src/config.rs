// Constants

// Standard Pegasus family parameters
pub const STANDARD_TILE_WIDTH: usize = 12; // Qubits per tile edge in the standard family
pub const STANDARD_VERTICAL_OFFSETS: [f64; 12] =
    [2.0, 2.0, 2.0, 2.0, 6.0, 6.0, 6.0, 6.0, 10.0, 10.0, 10.0, 10.0];
pub const STANDARD_HORIZONTAL_OFFSETS: [f64; 12] =
    [6.0, 6.0, 6.0, 6.0, 10.0, 10.0, 10.0, 10.0, 2.0, 2.0, 2.0, 2.0];

// Magnitude of the per-shift nudge that separates qubits sharing a tile slot.
// Applied with alternating sign by parity of the shift index k.
pub const PARITY_NUDGE: f64 = 0.1;

// Family tag carried by lattice metadata of Pegasus origin
pub const PEGASUS_FAMILY: &str = "pegasus";
