//! sticky_showcase: interactive entry point.

use std::path::PathBuf;

use feature_deck::{ConfigSource, InputMode, ShowcaseConfig};
use sticky_showcase::app::{run, AppConfig, AppError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Sticky Showcase — Scroll-Pinned Feature Deck        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let cfg = match configure() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("  Wheel scrolls the page; the deck captures it while pinned.");
    println!("  Tab / Enter / Space navigate the list, M toggles input mode, Q quits.");
    println!();
    println!("  Opening visualizer window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure() -> Result<AppConfig, AppError> {
    let mut config_path: Option<PathBuf> = None;
    let mut forced: Option<InputMode>    = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config"  => config_path = args.next().map(PathBuf::from),
            "--pointer" => forced = Some(InputMode::Pointer),
            "--touch"   => forced = Some(InputMode::Touch),
            other       => tracing::warn!(arg = other, "ignoring unknown argument"),
        }
    }

    let mut showcase = match config_path {
        Some(path) => {
            let cfg = ShowcaseConfig::load_from_file(&path)?;
            tracing::info!(path = %path.display(), "configuration loaded");
            cfg
        }
        None => {
            let (cfg, source) = ShowcaseConfig::discover()?;
            match &source {
                ConfigSource::Default => tracing::info!("no configuration file found; using defaults"),
                other                 => tracing::info!(source = ?other, "configuration loaded"),
            }
            cfg
        }
    };
    if let Some(mode) = forced {
        showcase.input.mode = mode;
    }

    Ok(AppConfig { showcase, ..AppConfig::default() })
}
