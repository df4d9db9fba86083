use airfoil_rs::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use airfoil_rs::export::{self, AirfoilRecord};
use airfoil_rs::geometry::embed::{embed_contour, validate_points, Axis};
use airfoil_rs::plot;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Generate NACA 4-digit airfoil coordinates and export them as X Y Z
/// columns in a text file, with an optional plot.
#[derive(Parser)]
#[command(name = "airfoil-rs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate NACA 4-digit airfoil coordinates", long_about = None)]
struct Cli {
    /// NACA 4-digit code, e.g. 2412 or 0012. Prompted for when omitted.
    naca: Option<String>,

    /// Axis the airfoil is normal to; that output column is written as
    /// zeros. Prompted for when omitted.
    #[arg(short, long)]
    normal: Option<String>,

    /// Chord length used to scale the section. Prompted for when omitted.
    #[arg(short, long)]
    chord: Option<f64>,

    /// Total number of contour points desired (upper and lower surfaces
    /// combined), mapped internally to cosine-spaced stations per surface
    #[arg(short, long, default_value_t = 50)]
    points: usize,

    /// Base name for the output files
    #[arg(short, long, default_value = "naca_airfoil")]
    output: String,

    /// PNG plot filename (defaults to <output>.png)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Also write the contour and its parameters to <output>.json
    #[arg(long)]
    json: bool,

    /// Do not open the plot in a viewer (useful for scripts/headless runs)
    #[arg(long)]
    no_show: bool,

    /// Do not save the plot PNG next to the text output
    #[arg(long)]
    no_save_plot: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    let code = match cli.naca {
        Some(c) => c,
        None => prompt("Enter NACA 4-digit code: ")?,
    };

    let normal = match cli.normal {
        Some(n) => n,
        None => prompt("Axis normal to (X, Y, Z): ")?,
    };
    let axis: Axis = normal.parse()?;

    let chord = match cli.chord {
        Some(c) => c,
        None => prompt("Chord length: ")?
            .parse::<f64>()
            .context("Invalid chord length")?,
    };

    let per_surface = stations_per_surface(cli.points);
    debug!(
        "requested {} total points, using {} stations per surface",
        cli.points, per_surface
    );

    let naca = Naca4Digit::from_code(&code, chord)?;
    debug!(
        "decoded NACA {}: m={:.4}, p={:.4}, t={:.4}",
        code.trim(),
        naca.max_camber(),
        naca.max_camber_position(),
        naca.max_thickness()
    );

    let airfoil = naca.generate(per_surface)?;
    let contour = airfoil.to_outer_contour();
    let coords = embed_contour(&contour, axis);
    validate_points(&coords)?;

    let txt_path = PathBuf::from(format!("{}.txt", cli.output));
    export::write_txt(&txt_path, &coords)
        .with_context(|| format!("Failed to save {}", txt_path.display()))?;
    info!(
        "saved {} points to '{}' (columns: X Y Z), normal axis {:?}",
        coords.len(),
        txt_path.display(),
        axis
    );

    if cli.json {
        let json_path = PathBuf::from(format!("{}.json", cli.output));
        export::write_json(&json_path, &AirfoilRecord::new(&code, chord, axis, &coords))
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", json_path.display(), e))?;
        info!("saved JSON record to '{}'", json_path.display());
    }

    // The text export above is the deliverable; anything that goes wrong
    // from here on is reported but does not fail the run.
    if !cli.no_save_plot {
        let png_path = cli
            .plot
            .unwrap_or_else(|| PathBuf::from(format!("{}.png", cli.output)));

        match plot::plot_contour(&contour, code.trim(), chord, &png_path) {
            Ok(()) => {
                info!("plot saved to '{}'", png_path.display());
                if !cli.no_show {
                    if let Err(e) = plot::show_plot(&png_path) {
                        warn!("could not open a viewer for the plot: {}", e);
                    }
                }
            }
            Err(e) => warn!("plotting failed, continuing without plot: {}", e),
        }
    }

    info!(
        "generated NACA {} with chord {} ({} stations per surface)",
        code.trim(),
        chord,
        airfoil.station_count()
    );

    Ok(())
}

/// Maps the requested total contour point count to the number of stations
/// per surface. The closed contour shares its leading edge point, so n
/// stations per surface yield 2n-1 combined points; at least 3 stations are
/// always used.
fn stations_per_surface(total_points: usize) -> usize {
    ((total_points.max(3) + 2) / 2).max(3)
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed reading from stdin")?;

    Ok(line.trim().to_string())
}
