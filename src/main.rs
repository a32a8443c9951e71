//! pennyvox - heightmap-driven voxel world builder
//!
//! Decodes a grayscale heightmap, generates a grid of chunks, and emits the
//! draw-directive stream a rasterization layer would consume. With `--dump`
//! the stream is also written as JSONL for diffing across revisions.

mod config;

use anyhow::{Context, Result};
use config::WorldConfig;
use pennyvox_render::ChunkGrid;
use pennyvox_world::{HeightField, TerrainGenerator, CHUNK_SIZE};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting pennyvox v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let cfg = match cli.config.as_deref() {
        Some(path) => WorldConfig::load_from_path(path),
        None => WorldConfig::load(),
    };

    let heightmap_path = cli.heightmap.unwrap_or(cfg.heightmap_path);
    let (grid_width, grid_depth) = cli.grid.unwrap_or((cfg.grid_width, cfg.grid_depth));

    let field = load_height_field(&heightmap_path)
        .with_context(|| format!("loading heightmap {}", heightmap_path.display()))?;
    info!(
        width = field.width(),
        depth = field.depth(),
        "decoded heightmap"
    );

    if !field.covers(grid_width * CHUNK_SIZE, grid_depth * CHUNK_SIZE) {
        anyhow::bail!(
            "heightmap {}x{} does not cover a {}x{} chunk grid ({}x{} samples needed)",
            field.width(),
            field.depth(),
            grid_width,
            grid_depth,
            grid_width * CHUNK_SIZE,
            grid_depth * CHUNK_SIZE,
        );
    }

    let generator = TerrainGenerator::new(&field);
    let mut grid = ChunkGrid::generate(&generator, grid_width, grid_depth)?;
    let directives = grid.directives();

    for row in 0..grid.depth() {
        for col in 0..grid.width() {
            let chunk = grid.chunk(col, row);
            let solid = chunk
                .voxels()
                .iter()
                .filter(|&&id| id != pennyvox_world::blocks::AIR)
                .count();
            info!(chunk_pos = %chunk.position(), solid, "chunk generated");
        }
    }
    info!(
        chunks = grid.chunk_count(),
        directives = directives.len(),
        "world build complete"
    );

    if let Some(path) = cli.dump {
        dump_directives(&path, &directives)
            .with_context(|| format!("writing dump file {}", path.display()))?;
        info!(path = %path.display(), records = directives.len(), "wrote directive dump");
    }

    Ok(())
}

/// Write one JSON record per directive, newline-delimited.
fn dump_directives(path: &Path, directives: &[pennyvox_render::DrawDirective]) -> Result<()> {
    use std::io::Write;

    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    for directive in directives {
        serde_json::to_writer(&mut writer, directive)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Decode a heightmap image into a sample field.
///
/// Any format the image crate understands is accepted; the decoded pixels
/// are collapsed to 8-bit grayscale before sampling.
fn load_height_field(path: &Path) -> Result<HeightField> {
    let image = image::ImageReader::open(path)?.decode()?.into_luma8();
    let (width, height) = image.dimensions();
    let field = HeightField::from_raw(width as usize, height as usize, image.into_raw())?;
    Ok(field)
}

struct CliOptions {
    config: Option<PathBuf>,
    heightmap: Option<PathBuf>,
    grid: Option<(usize, usize)>,
    dump: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: None,
            heightmap: None,
            grid: None,
            dump: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--heightmap" => {
                    if let Some(path) = args.next() {
                        opts.heightmap = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--heightmap requires an image path");
                    }
                }
                "--grid" => {
                    if let Some(raw) = args.next() {
                        match raw.split_once('x') {
                            Some((w, d)) => match (w.parse::<usize>(), d.parse::<usize>()) {
                                (Ok(width), Ok(depth)) if width > 0 && depth > 0 => {
                                    opts.grid = Some((width, depth));
                                }
                                _ => {
                                    tracing::error!(value = %raw, "--grid must be like 3x3");
                                }
                            },
                            None => {
                                tracing::error!(value = %raw, "--grid must be like 3x3");
                            }
                        }
                    } else {
                        tracing::error!("--grid requires a value like 3x3");
                    }
                }
                "--dump" => {
                    if let Some(path) = args.next() {
                        opts.dump = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--dump requires a file path");
                    }
                }
                _ => {}
            }
        }

        opts
    }
}
