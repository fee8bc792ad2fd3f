//! Print the halo and outline of the six-kite hexagon around the origin.
//!
//! Usage:
//!   cargo run -p kitegrid --example hexagon_outline
//!   cargo run -p kitegrid --example hexagon_outline -- grown 12 2025

use kitegrid::api::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let shape = match args.next().as_deref() {
        Some("grown") => {
            let size = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
            let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let cfg = GrowCfg {
                size,
                edge_connected: true,
            };
            match grow_shape(cfg, ReplayToken::new(seed, 0)) {
                Ok(s) => s,
                Err(err) => {
                    eprintln!("grow failed: {err}");
                    return;
                }
            }
        }
        _ => [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)]
            .into_iter()
            .collect(),
    };

    for p in &shape {
        let ori = classify(*p).map_or("-", |o| o.name());
        println!("tile {p} {ori}");
    }
    match halo(&shape) {
        Ok(h) => println!("halo: {} tiles", h.len()),
        Err(err) => eprintln!("halo failed: {err}"),
    }
    match extract_boundary(&shape) {
        Ok(ring) => {
            println!("outline ({} vertices, area {:.4}):", ring.len(), signed_area(&ring).abs());
            for v in ring {
                println!("  ({:.4}, {:.4})", v.x, v.y);
            }
        }
        Err(err) => eprintln!("outline failed: {err}"),
    }
}
