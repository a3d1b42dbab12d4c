//! vat-export - vertex animation texture baking tool
//!
//! Converts a directory of per-frame OBJ meshes into a pair of RGBA32F
//! textures (.ptex/.ntex in DDS or KTX containers) for vertex-shader
//! animation playback.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use vat_export::{export, ContainerKind, ExportConfig, DEFAULT_MAX_SHEET_WIDTH};

#[derive(Parser)]
#[command(name = "vat-export")]
#[command(about = "Bake per-frame OBJ meshes into vertex animation textures")]
#[command(version)]
struct Cli {
    /// Input directory containing one .obj file per animation frame
    #[arg(long = "in", value_name = "DIR")]
    input: PathBuf,

    /// Output directory
    #[arg(long = "out", value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Base name for output files (defaults to the input directory's name)
    #[arg(long)]
    name: Option<String>,

    /// Output container format
    #[arg(long = "type", value_enum, value_name = "dds|ktx")]
    container: ContainerKind,

    /// Maximum flattened sheet width
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SHEET_WIDTH)]
    max_width: u32,
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

    let name = cli.name.unwrap_or_else(|| {
        cli.input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("vat")
            .to_string()
    });

    let config = ExportConfig {
        input_dir: cli.input,
        output_dir: cli.output,
        name,
        container: cli.container,
        max_width: cli.max_width,
    };

    let outputs = export(&config)?;

    tracing::info!(
        "wrote {:?} and {:?} ({}x{})",
        outputs.position_path,
        outputs.normal_path,
        outputs.width,
        outputs.height
    );
    Ok(())
}
