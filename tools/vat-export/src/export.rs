//! Export pipeline
//!
//! Wires collector, flattening engine, and container writers together. The
//! configuration is built once by the CLI driver and passed in immutable;
//! nothing in the pipeline holds process-wide state.

use crate::collect;
use crate::error::ExportError;
use crate::flatten::{self, VatSheets};
use crate::formats::{self, DDS_EXT, KTX_EXT};
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use vat_common::Raster;

/// Output container variant, applied to both sheets of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContainerKind {
    Dds,
    Ktx,
}

impl ContainerKind {
    pub fn ext(self) -> &'static str {
        match self {
            ContainerKind::Dds => DDS_EXT,
            ContainerKind::Ktx => KTX_EXT,
        }
    }
}

/// Which sheet a file carries; determines the file name marker
#[derive(Debug, Clone, Copy)]
enum Channel {
    Position,
    Normal,
}

impl Channel {
    fn marker(self) -> &'static str {
        match self {
            Channel::Position => "p",
            Channel::Normal => "n",
        }
    }
}

/// One run's settings, resolved from CLI flags
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory holding one OBJ file per animation frame
    pub input_dir: PathBuf,
    /// Directory the two texture files are written into
    pub output_dir: PathBuf,
    /// Base name for output files
    pub name: String,
    pub container: ContainerKind,
    /// Sheet width policy bound
    pub max_width: u32,
}

/// Paths and dimensions of a completed run
#[derive(Debug)]
pub struct ExportOutputs {
    pub position_path: PathBuf,
    pub normal_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Run the full bake: collect frames, flatten, write both containers
///
/// All-or-nothing: any failure aborts before the remaining files are
/// written, and no error is swallowed.
pub fn export(config: &ExportConfig) -> Result<ExportOutputs, ExportError> {
    let frames = collect::collect_frames(&config.input_dir)?;

    tracing::info!("flattening {} frames", frames.len());
    let VatSheets { positions, normals } = flatten::flatten_frames(&frames, config.max_width)?;
    tracing::info!(
        "max flattened vertex count: {}, animation frames: {}",
        positions.width(),
        positions.height()
    );

    let position_path = output_path(config, Channel::Position);
    let normal_path = output_path(config, Channel::Normal);

    write_container(&position_path, config.container, &positions)?;
    write_container(&normal_path, config.container, &normals)?;

    Ok(ExportOutputs {
        position_path,
        normal_path,
        width: positions.width(),
        height: positions.height(),
    })
}

/// `<out>/<name>.<p|n>tex.<dds|ktx>`, replacing any extension `name` carries
fn output_path(config: &ExportConfig, channel: Channel) -> PathBuf {
    let suffix = format!("{}tex.{}", channel.marker(), config.container.ext());
    config
        .output_dir
        .join(&config.name)
        .with_extension(suffix)
}

fn write_container(path: &Path, kind: ContainerKind, raster: &Raster) -> Result<(), ExportError> {
    let as_io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(as_io_err)?;
    let mut writer = BufWriter::new(file);
    match kind {
        ContainerKind::Dds => formats::write_dds_texture(&mut writer, raster),
        ContainerKind::Ktx => formats::write_ktx_texture(&mut writer, raster),
    }
    .map_err(as_io_err)?;

    // BufWriter swallows flush errors on drop; surface them
    writer.into_inner().map_err(|e| as_io_err(e.into_error()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(container: ContainerKind, name: &str) -> ExportConfig {
        ExportConfig {
            input_dir: PathBuf::from("frames"),
            output_dir: PathBuf::from("out"),
            name: name.to_string(),
            container,
            max_width: flatten::DEFAULT_MAX_SHEET_WIDTH,
        }
    }

    #[test]
    fn test_output_naming() {
        let cfg = config(ContainerKind::Dds, "walk");
        assert_eq!(
            output_path(&cfg, Channel::Position),
            PathBuf::from("out/walk.ptex.dds")
        );
        assert_eq!(
            output_path(&cfg, Channel::Normal),
            PathBuf::from("out/walk.ntex.dds")
        );

        let cfg = config(ContainerKind::Ktx, "walk");
        assert_eq!(
            output_path(&cfg, Channel::Position),
            PathBuf::from("out/walk.ptex.ktx")
        );
    }

    #[test]
    fn test_output_naming_replaces_extension() {
        let cfg = config(ContainerKind::Dds, "walk.cycle");
        assert_eq!(
            output_path(&cfg, Channel::Position),
            PathBuf::from("out/walk.ptex.dds")
        );
    }
}
