use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing::Level;

use imgprobe::compression;
use imgprobe::{ImageMetadata, LegacyImageInfo};

#[derive(Parser, Debug)]
#[command(name = "imgprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect JPEG, PNG and GIF headers without decoding pixels", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Print one JSON object per file
    #[arg(long)]
    pub json: bool,

    /// Report the numeric format id used by older integrations
    #[arg(long)]
    pub legacy: bool,

    /// Reject PNG files with a bad IHDR checksum
    #[arg(long)]
    pub verify_crc: bool,

    /// Also report the size of the file as a FlateDecode stream at this level
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub deflate: Option<u32>,

    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::TRACE
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub path: String,
    pub mime_type: &'static str,
    #[serde(flatten)]
    pub metadata: &'a ImageMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deflated_bytes: Option<usize>,
}

impl<'a> Report<'a> {
    pub fn new(path: &Path, metadata: &'a ImageMetadata, cli: &Cli) -> Self {
        Self {
            path: path.display().to_string(),
            mime_type: metadata.format().mime_type(),
            metadata,
            legacy: cli.legacy.then(|| metadata.to_legacy()),
            deflated_bytes: cli
                .deflate
                .map(|level| compression::compress(metadata.raw_bytes(), level).len()),
        }
    }

    pub fn to_line(&self) -> String {
        let m = self.metadata;
        let mut line = format!(
            "{}: {} ({}) {}x{} {}-bit {} channel(s), {} bytes",
            self.path,
            m.format(),
            self.mime_type,
            m.width(),
            m.height(),
            m.bit_depth(),
            m.channel_count(),
            m.size_bytes()
        );
        if let Some(legacy) = &self.legacy {
            line.push_str(&format!(", legacy id {}", legacy.id));
        }
        if let Some(deflated) = self.deflated_bytes {
            line.push_str(&format!(", {} bytes deflated", deflated));
        }
        line
    }
}
