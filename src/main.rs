mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use cli::{Cli, Report};
use imgprobe::{ExtensionPoint, HookEvent, HookRegistry, ImageIntrospector, IntrospectorConfig};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let introspector = ImageIntrospector::with_config(IntrospectorConfig {
        verify_png_crc: cli.verify_crc,
    })
    .with_hooks(startup_hooks());

    let mut failures = 0usize;

    for path in &cli.paths {
        match introspector.parse_image(path) {
            Ok(metadata) => {
                let report = Report::new(path, &metadata, &cli);
                if cli.json {
                    let line = serde_json::to_string(&report)
                        .with_context(|| format!("Failed to serialize report for {}", path.display()))?;
                    println!("{line}");
                } else {
                    println!("{}", report.to_line());
                }
            }
            Err(e) => {
                failures += 1;
                error!("{}: {}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        debug!(failures, total = cli.paths.len(), "finished with failures");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn startup_hooks() -> HookRegistry {
    HookRegistry::new().with(ExtensionPoint::Loaded, "trace-load", |event| {
        if let HookEvent::Loaded { path, size_bytes } = event {
            debug!(path = %path.display(), size_bytes, "loaded");
        }
    })
}
