use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use nalgebra::DVector;
use serde::Serialize;

use pegasus_lattice::lattice::{LatticeIndex, LinearCoordinates, Orientation, PegasusGeometry};
use pegasus_lattice::layout::{layout, NodeLabel, PegasusNodeSet};
use pegasus_lattice::Result;

#[derive(Parser)]
#[command(name = "pegasus-lattice")]
#[command(about = "Display-coordinate generation for Pegasus qubit lattices")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute display coordinates for a standard Pegasus lattice
    Layout {
        /// Grid dimension m
        #[arg(short, long, default_value = "2")]
        rows: usize,

        /// Scale factor (the lattice fills a unit region at 1.0)
        #[arg(short, long, default_value = "1.0")]
        scale: f64,

        /// Output dimension (coordinates beyond the first two are zero)
        #[arg(short, long, default_value = "2")]
        dim: usize,

        /// Coordinates of the top-left corner, comma separated
        #[arg(short, long, value_delimiter = ',')]
        center: Option<Vec<f64>>,

        /// Node labeling convention
        #[arg(short, long, value_enum, default_value = "coordinate")]
        labels: LabelScheme,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the geometry parameters of a standard Pegasus lattice
    Info {
        /// Grid dimension m
        #[arg(short, long, default_value = "2")]
        rows: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LabelScheme {
    /// Node identities are lattice index tuples
    Coordinate,
    /// Node identities are linear integer labels
    Linear,
}

#[derive(Serialize)]
struct PlacedNode {
    label: NodeLabel,
    position: Vec<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting pegasus-lattice v{}", pegasus_lattice::VERSION);

    match cli.command {
        Commands::Layout {
            rows,
            scale,
            dim,
            center,
            labels,
            output,
        } => run_layout(rows, scale, dim, center, labels, output),
        Commands::Info { rows } => run_info(rows),
    }
}

fn run_layout(
    rows: usize,
    scale: f64,
    dim: usize,
    center: Option<Vec<f64>>,
    labels: LabelScheme,
    output: Option<String>,
) -> Result<()> {
    let geometry = PegasusGeometry::standard(rows)?;
    let indices = enumerate_indices(&geometry);
    info!("Laying out {} qubits of a P{} lattice", indices.len(), rows);

    let source = match labels {
        LabelScheme::Coordinate => PegasusNodeSet::with_coordinate_labels(geometry, indices),
        LabelScheme::Linear => {
            let coordinates = LinearCoordinates::for_geometry(&geometry)?;
            let linear = indices
                .iter()
                .map(|index| coordinates.to_linear(*index))
                .collect();
            PegasusNodeSet::with_linear_labels(geometry, linear)?
        }
    };

    let center = center.map(DVector::from_vec);
    let positions = layout(&source, scale, center, dim)?;

    let placed: Vec<PlacedNode> = positions
        .into_iter()
        .map(|(label, position)| PlacedNode {
            label,
            position: position.iter().copied().collect(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&placed)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!("Wrote {} positions to {}", placed.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn run_info(rows: usize) -> Result<()> {
    let geometry = PegasusGeometry::standard(rows)?;

    println!("family:             pegasus");
    println!("rows:               {}", geometry.rows());
    println!("tile width:         {}", geometry.tile_width());
    println!("horizontal offsets: {:?}", geometry.horizontal_offsets());
    println!("vertical offsets:   {:?}", geometry.vertical_offsets());
    println!(
        "qubits:             {}",
        2 * rows * geometry.tile_width() * rows.saturating_sub(1)
    );

    Ok(())
}

/// Enumerate the node identities of a lattice with the given geometry.
///
/// This walks the index space only; adjacency is the business of a graph
/// generator, not of this driver.
fn enumerate_indices(geometry: &PegasusGeometry) -> Vec<LatticeIndex> {
    let rows = geometry.rows();
    let mut indices = Vec::new();

    for u in [Orientation::Vertical, Orientation::Horizontal] {
        for w in 0..rows {
            for k in 0..geometry.tile_width() {
                for z in 0..rows.saturating_sub(1) {
                    indices.push(LatticeIndex::new(u, w as i32, k, z as i32));
                }
            }
        }
    }

    indices
}
