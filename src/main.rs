//! `lorenz-viz`: open a window animating the Lorenz attractor.
//!
//! Options come from defaults, then an optional TOML preset, then
//! command-line overrides, in that order.

use std::path::PathBuf;

use clap::Parser;
use lorenz_viz::options::Options;
use lorenz_viz::util::color::ColorMode;
use lorenz_viz::{LorenzError, Viewer};

/// Interactive Lorenz attractor viewer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML preset to start from.
    #[arg(long, value_name = "TOML")]
    options: Option<PathBuf>,

    /// Directory for the F5/F9 quick preset.
    #[arg(
        long,
        value_name = "DIR",
        default_value = lorenz_viz::engine::DEFAULT_PRESETS_DIR
    )]
    presets_dir: PathBuf,

    /// Write the effective options to this file and exit.
    #[arg(long, value_name = "TOML")]
    write_options: Option<PathBuf>,

    /// Write the JSON Schema of the options to this file and exit.
    #[arg(long, value_name = "JSON")]
    write_schema: Option<PathBuf>,

    /// Number of trajectory points.
    #[arg(long)]
    points: Option<usize>,

    /// Prandtl number.
    #[arg(long)]
    sigma: Option<f64>,

    /// Geometric factor.
    #[arg(long)]
    beta: Option<f64>,

    /// Rayleigh number.
    #[arg(long)]
    rho: Option<f64>,

    /// Seconds for a full reveal.
    #[arg(long)]
    speed: Option<f64>,

    /// Trajectory coloring.
    #[arg(long, value_enum)]
    color_mode: Option<CliColorMode>,

    /// Draw the whole trajectory immediately.
    #[arg(long)]
    no_animation: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliColorMode {
    Single,
    Rainbow,
    Fade,
}

impl From<CliColorMode> for ColorMode {
    fn from(mode: CliColorMode) -> Self {
        match mode {
            CliColorMode::Single => Self::Single,
            CliColorMode::Rainbow => Self::Rainbow,
            CliColorMode::Fade => Self::Fade,
        }
    }
}

impl Cli {
    /// Defaults, then the preset, then flag overrides.
    fn resolve_options(&self) -> Result<Options, LorenzError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        let sim = &mut options.simulation;
        if let Some(points) = self.points {
            sim.point_count = points;
        }
        if let Some(sigma) = self.sigma {
            sim.sigma = sigma;
        }
        if let Some(beta) = self.beta {
            sim.beta = beta;
        }
        if let Some(rho) = self.rho {
            sim.rho = rho;
        }
        if let Some(speed) = self.speed {
            options.animation.speed_seconds = speed;
        }
        if let Some(mode) = self.color_mode {
            options.display.color_mode = mode.into();
        }
        if self.no_animation {
            options.animation.enabled = false;
        }
        options.validate()?;
        Ok(options)
    }
}

fn main() -> Result<(), LorenzError> {
    env_logger::init();
    let cli = Cli::parse();
    if let Some(path) = &cli.write_schema {
        return Options::write_schema(path);
    }
    let options = cli.resolve_options()?;

    if let Some(path) = &cli.write_options {
        return options.save(path);
    }

    Viewer::builder()
        .with_options(options)
        .with_presets_dir(cli.presets_dir)
        .build()
        .run()
}
