//! Render a cyclist dataset to SVG on stdout.
//!
//! Usage:
//!   cargo run --example render_cyclists -- <cyclist-data.json> [--show-traces]

use anyhow::Result;
use camino::Utf8PathBuf;
use chartgen::chart::{SvgOptions, Viewport, cyclists_chart, scene_to_svg};
use chartgen::loader::{DatasetLoader, FsSource};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a cyclist dataset to SVG on stdout", long_about = None)]
struct Args {
    /// Cyclist dataset JSON file
    #[arg(value_name = "DATASET_FILE")]
    file: String,

    /// Render the career-trace overlay visible
    #[arg(long)]
    show_traces: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = Utf8PathBuf::from(&args.file);

    let mut loader = DatasetLoader::new(FsSource);
    let records = loader.load_cyclists(&path)?;
    let scene = cyclists_chart(&records, Viewport::new(920.0, 630.0))?;
    let svg = scene_to_svg(
        &scene,
        &SvgOptions {
            show_traces: args.show_traces,
            ..Default::default()
        },
    );
    println!("{svg}");
    Ok(())
}
