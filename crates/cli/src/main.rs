use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kitegrid::api::*;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod artifact;
mod input;

#[derive(Parser)]
#[command(name = "kitegrid-cli")]
#[command(about = "Kite-tiling queries: tiles, halos, adjacency and outlines as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Output {
    /// Write JSON here instead of stdout (parent dirs are created)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Drawable kite polygons of a rectangular region plus view bounds
    Grid {
        #[arg(long, default_value_t = 8)]
        ni: i64,
        #[arg(long, default_value_t = 8)]
        nj: i64,
        #[arg(long)]
        no_labels: bool,
        #[command(flatten)]
        output: Output,
    },
    /// Orientation, vertices and neighbor offsets of one lattice point
    Classify {
        /// Lattice point as `i,j`
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Halo (or edge-halo) of a shape
    Halo {
        /// Inline points `i,j;i,j;...` or a CSV file with columns i,j
        #[arg(long, allow_hyphen_values = true)]
        shape: String,
        #[arg(long)]
        edge: bool,
        #[command(flatten)]
        output: Output,
    },
    /// Whether two shapes touch without overlapping
    Adjacent {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long)]
        edge: bool,
    },
    /// Outline polygon of a shape
    Boundary {
        #[arg(long, allow_hyphen_values = true)]
        shape: String,
        /// Report every closed loop instead of failing on disconnected boundaries
        #[arg(long)]
        all_loops: bool,
        #[command(flatten)]
        output: Output,
    },
    /// Random connected polykite
    Grow {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        vertex_connected: bool,
        #[command(flatten)]
        output: Output,
    },
}

#[derive(Serialize)]
struct TileOut {
    i: i64,
    j: i64,
    orientation: String,
    vertices: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<LabelOut>,
}

#[derive(Serialize)]
struct LabelOut {
    text: String,
    at: [f64; 2],
}

fn xy(c: CartesianPoint) -> [f64; 2] {
    [c.x, c.y]
}

fn ij(p: &LatticePoint) -> [i64; 2] {
    [p.i, p.j]
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Grid {
            ni,
            nj,
            no_labels,
            output,
        } => grid(
            RegionCfg {
                ni,
                nj,
                labels: !no_labels,
            },
            output,
        ),
        Action::Classify { point } => classify_point(&point),
        Action::Halo {
            shape,
            edge,
            output,
        } => halo_cmd(&shape, edge, output),
        Action::Adjacent { a, b, edge } => adjacent_cmd(&a, &b, edge),
        Action::Boundary {
            shape,
            all_loops,
            output,
        } => boundary_cmd(&shape, all_loops, output),
        Action::Grow {
            size,
            seed,
            index,
            vertex_connected,
            output,
        } => grow_cmd(
            GrowCfg {
                size,
                edge_connected: !vertex_connected,
            },
            ReplayToken::new(seed, index),
            output,
        ),
    }
}

fn grid(cfg: RegionCfg, output: Output) -> Result<()> {
    tracing::info!(ni = cfg.ni, nj = cfg.nj, labels = cfg.labels, "grid");
    let tiles: Vec<TileOut> = region_tiles(cfg)
        .map(|t| TileOut {
            i: t.point.i,
            j: t.point.j,
            orientation: t.orientation.to_string(),
            vertices: t.vertices.iter().copied().map(xy).collect(),
            label: cfg.labels.then(|| LabelOut {
                text: format!("({},{})", t.point.i, t.point.j),
                at: xy(t.centroid),
            }),
        })
        .collect();
    let b = view_bounds(cfg);
    let result = json!({
        "tiles": tiles,
        "view": { "x": [b.x_min, b.x_max], "y": [b.y_min, b.y_max] }
    });
    let params = json!({ "ni": cfg.ni, "nj": cfg.nj, "labels": cfg.labels });
    artifact::emit(output.out.as_deref(), "grid", params, result)
}

fn classify_point(point: &str) -> Result<()> {
    let p = input::parse_point(point)?;
    tracing::info!(%p, "classify");
    let result = match classify(p) {
        Some(ori) => {
            let offsets = |vs: &[OffsetVector]| -> Vec<[i64; 2]> {
                vs.iter().map(|v| [v.di, v.dj]).collect()
            };
            json!({
                "orientation": ori.to_string(),
                "origin_offset": [origin_offset(p).di, origin_offset(p).dj],
                "vertices": cell_vertices(p).iter().map(ij).collect::<Vec<_>>(),
                "cartesian": cell_vertices(p).into_iter().map(vertex_to_cartesian).map(xy).collect::<Vec<_>>(),
                "centroid": cell_centroid(p).map(xy),
                "edge_neighbors": offsets(edge_neighbors(p)?.as_slice()),
                "full_neighbors": offsets(full_neighbors(p)?.as_slice())
            })
        }
        None => json!({ "orientation": null, "vertices": [] }),
    };
    artifact::emit(None, "classify", json!({ "point": ij(&p) }), result)
}

fn halo_cmd(spec: &str, edge: bool, output: Output) -> Result<()> {
    let shape = input::load_shape(spec)?;
    tracing::info!(tiles = shape.len(), edge, "halo");
    let ring = if edge {
        edge_halo(&shape)?
    } else {
        halo(&shape)?
    };
    let points: Vec<_> = ring.iter().map(ij).collect();
    let params = json!({ "shape": spec, "edge": edge });
    artifact::emit(output.out.as_deref(), "halo", params, json!(points))
}

fn adjacent_cmd(a: &str, b: &str, edge: bool) -> Result<()> {
    let (sa, sb) = (input::load_shape(a)?, input::load_shape(b)?);
    tracing::info!(a = sa.len(), b = sb.len(), edge, "adjacent");
    let touching = if edge {
        edge_adjacent(&sa, &sb)?
    } else {
        adjacent(&sa, &sb)?
    };
    let params = json!({ "a": a, "b": b, "edge": edge });
    artifact::emit(None, "adjacent", params, json!(touching))
}

fn boundary_cmd(spec: &str, all_loops: bool, output: Output) -> Result<()> {
    let shape = input::load_shape(spec)?;
    tracing::info!(tiles = shape.len(), all_loops, "boundary");
    let loops = if all_loops {
        boundary_loops(&shape)?
    } else {
        vec![extract_boundary_lattice(&shape)?]
    };
    let rendered: Vec<_> = loops
        .iter()
        .map(|ring| {
            let cart: Vec<_> = ring.iter().copied().map(vertex_to_cartesian).collect();
            json!({
                "lattice": ring.iter().map(ij).collect::<Vec<_>>(),
                "cartesian": cart.iter().copied().map(xy).collect::<Vec<_>>(),
                "signed_area": signed_area(&cart),
            })
        })
        .collect();
    let params = json!({ "shape": spec, "all_loops": all_loops });
    artifact::emit(
        output.out.as_deref(),
        "boundary",
        params,
        json!({ "loops": rendered }),
    )
}

fn grow_cmd(cfg: GrowCfg, tok: ReplayToken, output: Output) -> Result<()> {
    tracing::info!(size = cfg.size, seed = tok.seed, index = tok.index, "grow");
    let shape = grow_shape(cfg, tok)?;
    let points: Vec<_> = shape.iter().map(ij).collect();
    let params = json!({
        "size": cfg.size,
        "seed": tok.seed,
        "index": tok.index,
        "edge_connected": cfg.edge_connected
    });
    artifact::emit(output.out.as_deref(), "grow", params, json!(points))
}
