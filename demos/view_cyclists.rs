//! View a chart dataset interactively using egui (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --example view_cyclists -- <dataset.json>

#[cfg(feature = "egui")]
use anyhow::Result;
#[cfg(feature = "egui")]
use camino::Utf8PathBuf;
#[cfg(feature = "egui")]
use clap::Parser;

#[cfg(feature = "egui")]
use {
    chartgen::chart::{Viewport, scene_for},
    chartgen::loader::{DatasetLoader, FsSource},
    chartgen::viewer::ChartApp,
    eframe::egui,
};

#[cfg(feature = "egui")]
#[derive(Parser, Debug)]
#[command(author, version, about = "View a chart dataset interactively", long_about = None)]
struct Args {
    /// Dataset JSON file (kind is detected from the JSON shape)
    #[arg(value_name = "DATASET_FILE")]
    file: String,
}

#[cfg(feature = "egui")]
fn main() -> Result<()> {
    let args = Args::parse();
    let path = Utf8PathBuf::from(&args.file);

    let mut loader = DatasetLoader::new(FsSource);
    let dataset = loader.load_auto(&path)?;
    let scene = scene_for(&dataset, Viewport::new(920.0, 630.0))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "chartgen viewer",
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(dataset, scene)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

#[cfg(not(feature = "egui"))]
fn main() {
    eprintln!("This demo requires the `egui` feature: cargo run --features egui --example view_cyclists");
}
