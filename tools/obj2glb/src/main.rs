//! obj2glb - batch OBJ to GLB converter
//!
//! Recursively loads every .obj file under the input folder, applies the
//! Y-up to Z-up correction, and combines them into a single GLB with one
//! named node per source file.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use obj2glb::convert;

/// Directory the combined GLB is written into
const OUTPUT_DIR: &str = "model";

#[derive(Parser)]
#[command(name = "obj2glb")]
#[command(about = "Convert all OBJ files in a folder to a single GLB file")]
#[command(version)]
struct Cli {
    /// Folder scanned recursively for .obj files
    #[arg(default_value = "obj/")]
    input_folder: PathBuf,

    /// Name of the output GLB file, written to the `model` folder
    #[arg(short = 'o', long, default_value = "model.glb")]
    output_name: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_path = Path::new(OUTPUT_DIR).join(&cli.output_name);
    convert::combine_directory(&cli.input_folder, &output_path)?;

    Ok(())
}
