//! Terrain report tool: generate the playground terrain and log what came
//! out. Takes an optional JSON config path as the first argument.

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::Context;

use veldt::mesh::terrain::{self, TerrainConfig};

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("veldt=info".parse()?))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading terrain config {path}"))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing terrain config {path}"))?
        }
        None => TerrainConfig::default(),
    };

    tracing::info!(
        "Generating terrain: extent {}, step {}, floor {}",
        config.extent,
        config.step,
        config.floor
    );

    let started = Instant::now();
    let mesh = terrain::generate(&config)?;
    let elapsed = started.elapsed();

    tracing::info!(
        "Terrain ready in {:.1?}: {} vertices, {} triangles",
        elapsed,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    tracing::info!(
        "Buffer sizes: {} vertex bytes, {} index bytes",
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len()
    );

    Ok(())
}
