//! meshtopo CLI - inspect the topology of generated meshes.
//!
//! Usage: meshtopo <COMMAND> [OPTIONS]
//!
//! Run `meshtopo --help` for available commands. Set `RUST_LOG=debug` to see
//! adjacency build details.

use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};

use meshtopo::algo::{self, TopologyStats};
use meshtopo::mesh::{shapes, MeshBuffers, NonManifoldPolicy, Topology, TopologyOptions};
use meshtopo::prelude::{FaceId, VertexId};

#[derive(Parser)]
#[command(name = "meshtopo")]
#[command(author, version, about = "Half-edge mesh topology CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display connectivity statistics
    Info {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Find a shortest vertex path
    Path {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Start vertex
        start: usize,

        /// End vertex
        end: usize,
    },

    /// Walk the faces around a vertex
    Walk {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Vertex to walk around
        vertex: usize,

        /// Face to start from (default: first incident face)
        #[arg(short = 'f', long)]
        start_face: Option<usize>,
    },

    /// List the neighbours of a vertex
    Neighbors {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Vertex to inspect
        vertex: usize,
    },
}

#[derive(Args)]
struct MeshArgs {
    /// Mesh to generate
    #[arg(short, long, value_enum, default_value = "grid")]
    shape: Shape,

    /// Grid resolution (squares per side)
    #[arg(short = 'n', long, default_value = "8")]
    size: usize,

    /// Pairing policy for edges shared by more than two faces
    #[arg(long, value_enum, default_value = "pair-consecutive")]
    non_manifold: Policy,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Flat square grid with an open boundary
    Grid,
    /// Closed tetrahedron
    Tetrahedron,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Pair consecutively in discovery order
    PairConsecutive,
    /// Treat every half-edge of the edge as boundary
    Unpaired,
}

impl MeshArgs {
    fn build(&self) -> Result<Topology<MeshBuffers<u32>>, Box<dyn std::error::Error>> {
        let buffers = match self.shape {
            Shape::Grid => shapes::grid(self.size)?,
            Shape::Tetrahedron => shapes::tetrahedron(),
        };
        let policy = match self.non_manifold {
            Policy::PairConsecutive => NonManifoldPolicy::PairConsecutive,
            Policy::Unpaired => NonManifoldPolicy::Unpaired,
        };

        let start = Instant::now();
        let options = TopologyOptions::default().with_non_manifold(policy);
        let topo = Topology::with_options(buffers, options)?;
        log::info!(
            "Built topology: {} vertices, {} faces ({:.2?})",
            topo.vertex_count(),
            topo.face_count(),
            start.elapsed()
        );
        Ok(topo)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { mesh, sequential } => cmd_info(&mesh, sequential)?,
        Commands::Path { mesh, start, end } => cmd_path(&mesh, start, end)?,
        Commands::Walk {
            mesh,
            vertex,
            start_face,
        } => cmd_walk(&mesh, vertex, start_face)?,
        Commands::Neighbors { mesh, vertex } => cmd_neighbors(&mesh, vertex)?,
    }

    Ok(())
}

fn cmd_info(args: &MeshArgs, sequential: bool) -> Result<(), Box<dyn std::error::Error>> {
    let topo = args.build()?;

    let start = Instant::now();
    let s: TopologyStats = algo::stats(&topo, !sequential)?;
    let elapsed = start.elapsed();

    println!("Vertices: {}", s.vertex_count);
    println!("Faces: {}", s.face_count);
    println!("Half-edges: {}", topo.num_halfedges());
    println!("Boundary edges: {}", s.boundary_edges);
    println!("Non-manifold edges: {}", s.non_manifold_edges);
    println!("Isolated vertices: {}", s.isolated_vertices);
    println!(
        "Valence: min={}, max={}, mean={:.3}",
        s.min_valence, s.max_valence, s.mean_valence
    );
    if s.is_closed() {
        println!("Topology: Closed (no boundary)");
    } else {
        println!("Topology: Open");
    }
    println!("Computed in {:.2?}", elapsed);

    Ok(())
}

fn cmd_path(args: &MeshArgs, start: usize, end: usize) -> Result<(), Box<dyn std::error::Error>> {
    let topo = args.build()?;

    match topo.find_shortest_path(VertexId::new(start), VertexId::new(end))? {
        Some(path) => {
            let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("Path ({} edges): {}", path.len() - 1, hops.join(" -> "));
        }
        None => println!("No path from {} to {}", start, end),
    }

    Ok(())
}

fn cmd_walk(
    args: &MeshArgs,
    vertex: usize,
    start_face: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let topo = args.build()?;
    let vertex = VertexId::new(vertex);

    let walk = topo.walk_around_vertex(vertex, start_face.map(FaceId::new))?;
    let incident = topo.vertex_incident_faces(vertex)?;

    let faces: Vec<String> = walk.iter().map(|f| f.to_string()).collect();
    println!("Walk: [{}]", faces.join(", "));
    if walk.len() < incident.len() {
        println!(
            "Partial walk: {} of {} incident faces (stopped at boundary)",
            walk.len(),
            incident.len()
        );
    }

    Ok(())
}

fn cmd_neighbors(args: &MeshArgs, vertex: usize) -> Result<(), Box<dyn std::error::Error>> {
    let topo = args.build()?;
    let vertex = VertexId::new(vertex);

    let neighbors: Vec<String> = topo
        .vertex_neighbors(vertex)?
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("Neighbors: [{}]", neighbors.join(", "));
    println!("Valence: {}", neighbors.len());
    println!("Incident faces: {}", topo.vertex_incident_faces(vertex)?.len());
    println!("On boundary: {}", topo.is_vertex_on_boundary(vertex)?);

    Ok(())
}
