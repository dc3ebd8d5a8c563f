//! kmzkit - export a JSON map layer to KMZ

mod cli;

use std::process::ExitCode;

use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::info;

use kmzkit::export::{KmzConfig, KmzExporter, MAX_COMPRESSION_LEVEL};
use kmzkit::Symbol;

#[derive(Parser)]
#[command(name = "kmzkit")]
#[command(version, about = "Export map layers to KMZ", long_about = None)]
#[command(after_help = "EXAMPLES:
    kmzkit layer.json layer.kmz             Export with rendered icons
    kmzkit --seed 7 layer.json layer.kmz    Reproducible default style")]
struct Cli {
    /// Layer description (JSON)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output archive
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Seed for the default style color
    #[arg(long)]
    seed: Option<u64>,

    /// Deflate level (0-9)
    #[arg(long, default_value_t = MAX_COMPRESSION_LEVEL, value_parser = clap::value_parser!(i64).range(0..=9))]
    level: i64,

    /// Marker icon scale
    #[arg(long, default_value_t = 0.8)]
    icon_scale: f32,

    /// Edge length of rendered icons in pixels
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..=512))]
    icon_size: u32,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match init_logging(cli.quiet) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match export(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) -> Result<LoggerHandle, String> {
    let level = if quiet { "error" } else { "info" };
    Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| format!("failed to initialize logging: {e}"))
}

fn export(cli: &Cli) -> Result<(), String> {
    let json = std::fs::read_to_string(&cli.input)
        .map_err(|e| format!("failed to read {}: {e}", cli.input))?;
    let layer = cli::parse_layer(&json).map_err(|e| format!("invalid layer {}: {e}", cli.input))?;

    let config = KmzConfig {
        compression_level: Some(cli.level),
        icon_scale: cli.icon_scale,
        seed: cli.seed,
    };
    let size = cli.icon_size;
    let mut rasterize = |symbol: &Symbol| cli::render_png(symbol, size);

    let kmz = KmzExporter::new()
        .with_config(config)
        .export(&layer, &mut rasterize)
        .map_err(|e| e.to_string())?;
    std::fs::write(&cli.output, &kmz).map_err(|e| format!("failed to write {}: {e}", cli.output))?;

    info!("Wrote {} ({} bytes)", cli.output, kmz.len());
    Ok(())
}
