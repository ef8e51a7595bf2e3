use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::path::PathBuf;

use mlp_cursorgen::config::GenConfig;
use mlp_cursorgen::model::palette::Palette;
use mlp_cursorgen::pipeline::generator;

#[derive(Parser, Debug)]
#[command(version, about = "Generate the pony-themed cursor icon pack")]
struct Args {
    /// Directory the PNG pack is written into
    #[arg(long, default_value = "assets/UI/Cursors/MLP")]
    out_dir: PathBuf,

    /// TOML palette file overriding the built-in colors
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Skip writing the hotspot manifest
    #[arg(long)]
    no_manifest: bool,
}

fn run(args: Args) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => Palette::load_from_file(path)?,
        None => Palette::default(),
    };

    let config = GenConfig {
        output_dir: args.out_dir,
        palette,
        write_manifest: !args.no_manifest,
    };

    let written = generator::generate_all(&config)?;
    log::info!("Generated {} files", written.len());
    Ok(())
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("Failed to init logger: {}", e));

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
