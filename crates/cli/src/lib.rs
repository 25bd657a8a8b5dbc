use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use landplot_core::{
    check_connectivity, declared_perimeter, measure_parcel, pixel_perimeter, MeasurementBundle,
    PlotSettings, DEFAULT_CONNECTIVITY_TOLERANCE,
};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use storage::Storage;

#[derive(Debug, Parser)]
#[command(name = "landplot-cli")]
#[command(about = "Measure land parcels traced as segments")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the measured area of a saved plot as JSON.
    Area {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Display scale denominator (1:N); defaults to the stored setting.
        #[arg(long)]
        scale: Option<u32>,
    },
    /// Check that the segments of a saved plot form a connected loop.
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_CONNECTIVITY_TOLERANCE)]
        tolerance: f64,
    },
    /// Rewrite a saved plot with a freshly computed area.
    Recompute {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show or change the stored plot settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Print CLI version.
    Version,
}

#[derive(Debug, Subcommand)]
enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        scale: Option<u32>,
        #[arg(long)]
        default_length: Option<f64>,
    },
}

#[derive(Debug, Serialize)]
struct AreaOutput {
    area: f64,
    pixel_area: f64,
    strategy: &'static str,
    scale: String,
    segments: usize,
    perimeter: f64,
    pixel_perimeter: f64,
    formatted: String,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Area { file, scale } => run_area(&file, scale),
        Commands::Check { file, tolerance } => run_check(&file, tolerance),
        Commands::Recompute { file, output } => run_recompute(&file, output.as_deref()),
        Commands::Settings { action } => run_settings(action),
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_area(file: &Path, scale: Option<u32>) -> Result<()> {
    let bundle = load_plot(file)?;

    let mut settings = open_storage()?.load_settings().context("failed to load settings")?;
    if let Some(scale) = scale {
        settings.scale = scale;
    }
    settings.validate()?;

    let measurement = measure_parcel(&bundle.lines, &settings);
    let payload = AreaOutput {
        area: measurement.area,
        pixel_area: measurement.pixel_area,
        strategy: measurement.strategy.name(),
        scale: settings.scale_label(),
        segments: bundle.lines.len(),
        perimeter: declared_perimeter(&bundle.lines),
        pixel_perimeter: pixel_perimeter(&bundle.lines),
        formatted: measurement.formatted_area(),
    };

    let json = serde_json::to_string_pretty(&payload)?;
    println!("{json}");

    Ok(())
}

fn run_check(file: &Path, tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        anyhow::bail!("--tolerance must be a non-negative number");
    }

    let bundle = load_plot(file)?;
    let gaps = check_connectivity(&bundle.lines, tolerance);

    if gaps.is_empty() {
        println!("ok");
        return Ok(());
    }

    for gap in &gaps {
        println!(
            "gap: segment {} ends {:.2} from segment {}",
            bundle.lines[gap.index].id, gap.distance, bundle.lines[gap.next_index].id
        );
    }

    anyhow::bail!("segment chain is not connected ({} gaps)", gaps.len())
}

fn run_recompute(file: &Path, output: Option<&Path>) -> Result<()> {
    let mut bundle = load_plot(file)?;
    let settings = open_storage()?.load_settings().context("failed to load settings")?;

    let previous = bundle.area;
    let area = bundle.recompute(&settings);
    log::info!("area of {}: {previous} -> {area}", file.display());

    let output = output.unwrap_or(file);
    storage::save_bundle(output, &bundle)
        .with_context(|| format!("failed to write plot to {}", output.display()))?;

    println!("{}", output.display());

    Ok(())
}

fn run_settings(action: SettingsAction) -> Result<()> {
    let store = open_storage()?;
    let mut settings = store.load_settings().context("failed to load settings")?;

    if let SettingsAction::Set { scale, default_length } = action {
        if let Some(scale) = scale {
            settings.scale = scale;
        }
        if let Some(default_length) = default_length {
            settings.default_length = default_length;
        }
        store.save_settings(&settings).context("failed to save settings")?;
    }

    print_settings(&settings)
}

fn print_settings(settings: &PlotSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    println!("{json}");
    Ok(())
}

fn load_plot(path: &Path) -> Result<MeasurementBundle> {
    if !path.exists() {
        anyhow::bail!("file does not exist: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("path is not a file: {}", path.display());
    }

    storage::load_bundle(path).context("failed to load plot")
}

fn open_storage() -> Result<Storage> {
    if let Some(root) = std::env::var_os("LANDPLOT_DATA_DIR") {
        return Ok(Storage::with_root(root));
    }

    Storage::from_default_project().context("failed to locate settings directory")
}
