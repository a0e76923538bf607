use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use chartgen::chart::{SvgOptions, Viewport, scene_for, scene_to_svg};
use chartgen::loader::{DatasetLoader, FsSource};
use chartgen::model::Dataset;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    /// Detect the dataset kind from the JSON shape
    Auto,
    Gdp,
    Cyclists,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render JSON chart datasets to SVG", long_about = None)]
struct Cli {
    /// Dataset files, or directories scanned recursively for .json files
    #[arg(value_name = "DATASET", required = true)]
    datasets: Vec<String>,

    /// Dataset kind
    #[arg(long, value_enum, default_value_t = Kind::Auto)]
    kind: Kind,

    /// Chart width in pixels
    #[arg(long, default_value_t = 920.0)]
    width: f32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 630.0)]
    height: f32,

    /// Output directory (default: next to each input file)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<String>,

    /// Render the trace overlay visible
    #[arg(long)]
    show_traces: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let inputs = collect_inputs(&cli.datasets)?;
    if inputs.is_empty() {
        bail!("No dataset files found");
    }
    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("Create output dir {}", dir))?;
    }

    let results: Vec<(Utf8PathBuf, Result<Utf8PathBuf>)> = inputs
        .par_iter()
        .map(|path| (path.clone(), render_one(path, &cli)))
        .collect();

    let total = results.len();
    let mut failed = 0usize;
    for (input, result) in results {
        match result {
            Ok(output) => println!("{} -> {}", input, output),
            Err(e) => {
                failed += 1;
                eprintln!("[chartgen] Error rendering {}: {:#}", input, e);
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {total} renders failed");
    }
    Ok(())
}

/// Expand the command-line arguments into a flat list of dataset files.
/// Directories are scanned recursively; non-JSON files inside them are
/// skipped silently, explicitly named files are taken as-is.
fn collect_inputs(args: &[String]) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        let path = Utf8PathBuf::from(arg);
        if path.is_dir() {
            for entry in walkdir::WalkDir::new(path.as_std_path()).sort_by_file_name() {
                let entry = entry.with_context(|| format!("Scan {}", path))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let p = Utf8PathBuf::from_path_buf(entry.into_path())
                    .map_err(|p| anyhow!("Non-UTF8 path {}", p.display()))?;
                if p.extension() == Some("json") {
                    files.push(p);
                }
            }
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

fn render_one(path: &Utf8Path, cli: &Cli) -> Result<Utf8PathBuf> {
    let mut loader = DatasetLoader::new(FsSource);
    let dataset = match cli.kind {
        Kind::Auto => loader.load_auto(path)?,
        Kind::Gdp => Dataset::Gdp(loader.load_gdp(path)?),
        Kind::Cyclists => Dataset::Cyclists(loader.load_cyclists(path)?),
    };

    let viewport = Viewport::new(cli.width, cli.height);
    let scene = scene_for(&dataset, viewport)?;
    let svg = scene_to_svg(
        &scene,
        &SvgOptions {
            show_traces: cli.show_traces,
            ..Default::default()
        },
    );

    let output = output_path(path, cli.out_dir.as_deref())?;
    std::fs::write(output.as_std_path(), svg)
        .with_context(|| format!("Failed to write {}", output))?;
    Ok(output)
}

fn output_path(input: &Utf8Path, out_dir: Option<&str>) -> Result<Utf8PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("No file name in {}", input))?;
    let mut output = match out_dir {
        Some(dir) => Utf8PathBuf::from(dir),
        None => input
            .parent()
            .unwrap_or_else(|| Utf8Path::new("."))
            .to_path_buf(),
    };
    output.push(format!("{stem}.svg"));
    Ok(output)
}
