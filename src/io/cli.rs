//! Command-line interface for generating road grids in batches of seeds

use crate::algorithm::executor::GenerationSession;
use crate::algorithm::selection::RandomSelector;
use crate::algorithm::simulation::GenerationReport;
use crate::algorithm::topology::Topology;
use crate::io::catalog::load_catalog;
use crate::io::configuration::{
    DEFAULT_DEPTH, DEFAULT_LINEARITY_DECAY, DEFAULT_MAGNITUDE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_SEED, DEFAULT_SEPARATION_RADIUS, GenerationParams, GrowthMode, LinearityParams,
    SeparationParams, SizeBounds,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::placement::PlacementLog;
use crate::io::progress::RunProgress;
use crate::math::interpolation::ResponseCurve;
use crate::rules::GenerationRule;
use crate::spatial::direction::AxisMode;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "roadtile")]
#[command(
    author,
    version,
    about = "Generate road grids from connector-matched tile shapes"
)]
/// Command-line arguments for the road generator
// One flag per rule toggle and axis restriction
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON tile catalog; the built-in standard catalog is used when absent
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Random seed of the first run
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of growth passes
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Road tile budget per unit of depth
    #[arg(short, long, default_value_t = DEFAULT_MAGNITUDE)]
    pub magnitude: f64,

    /// Smallest accepted size, as a multiple of depth
    #[arg(long)]
    pub min_magnitude: Option<f64>,

    /// Largest accepted size, as a multiple of depth
    #[arg(long)]
    pub max_magnitude: Option<f64>,

    /// Attempts per run before giving up on the size range
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Keep growing until the tile budget is reached instead of stopping after depth passes
    #[arg(long)]
    pub until_target: bool,

    /// Minimum steps between junctions (0 disables)
    #[arg(long, default_value_t = 0)]
    pub separation: u32,

    /// How far a junction suppresses nearby junctions
    #[arg(long, default_value_t = DEFAULT_SEPARATION_RADIUS)]
    pub separation_radius: u32,

    /// Initial probability of continuing straight (0 disables)
    #[arg(long, default_value_t = 0.0)]
    pub linearity: f64,

    /// Drop in continuation probability per straight step
    #[arg(long, default_value_t = DEFAULT_LINEARITY_DECAY)]
    pub linearity_decay: f64,

    /// Response curve for the continuation probability as `x:y` control points
    #[arg(long, value_name = "X:Y", value_delimiter = ',')]
    pub linearity_curve: Vec<String>,

    /// Rule priority, highest first (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub rules: Vec<GenerationRule>,

    /// Only use up/down/left/right connectors
    #[arg(long)]
    pub square_only: bool,

    /// Only use diagonal connectors
    #[arg(long)]
    pub diagonal_only: bool,

    /// Number of runs over consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub runs: usize,

    /// Write placements as JSON; batch runs append the seed to the file name
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.runs > 1
    }

    /// Axis mode selected by the restriction flags
    ///
    /// # Errors
    ///
    /// Returns an error if both restrictions are set
    pub const fn axis_mode(&self) -> Result<AxisMode> {
        AxisMode::from_flags(self.square_only, self.diagonal_only)
    }

    /// Generation parameters assembled from the flags
    ///
    /// # Errors
    ///
    /// Returns an error if a curve point is malformed or the points do not form a curve
    pub fn params(&self) -> Result<GenerationParams> {
        let defaults = GenerationParams::default();

        let size_bounds = match (self.min_magnitude, self.max_magnitude) {
            (None, None) => None,
            (min, max) => Some(SizeBounds {
                min: min.unwrap_or(0.0),
                max: max.unwrap_or(f64::MAX),
            }),
        };

        let rule_priority = if self.rules.is_empty() {
            defaults.rule_priority
        } else {
            self.rules.clone()
        };

        let curve = if self.linearity_curve.is_empty() {
            defaults.linearity.curve
        } else {
            parse_curve(&self.linearity_curve)?
        };

        Ok(GenerationParams {
            depth: self.depth,
            magnitude: self.magnitude,
            growth_mode: if self.until_target {
                GrowthMode::Target
            } else {
                GrowthMode::Passes
            },
            size_bounds,
            max_attempts: self.attempts,
            max_termination_passes: defaults.max_termination_passes,
            separation: SeparationParams {
                threshold: self.separation,
                radius: self.separation_radius,
            },
            linearity: LinearityParams {
                coefficient: self.linearity,
                decay: self.linearity_decay,
                curve,
            },
            rule_priority,
        })
    }

    /// Seeds of every run in the batch
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.runs as u64).map(move |offset| first.wrapping_add(offset))
    }
}

/// Build a response curve from `x:y` control points
///
/// # Errors
///
/// Returns an error if:
/// - A point is not two numbers separated by `:`
/// - The points do not form a curve (too few, not finite, x not increasing)
pub fn parse_curve(points: &[String]) -> Result<ResponseCurve> {
    let parsed = points
        .iter()
        .map(|point| {
            point
                .split_once(':')
                .and_then(|(x, y)| Some([x.trim().parse().ok()?, y.trim().parse().ok()?]))
                .ok_or_else(|| {
                    invalid_parameter("linearity_curve", point, &"expected a point as x:y")
                })
        })
        .collect::<Result<Vec<[f64; 2]>>>()?;

    Ok(ResponseCurve::new(parsed)?)
}

/// Runs a batch of seeded generations and exports the placements
pub struct BatchRunner {
    cli: Cli,
    progress: RunProgress,
    reports: Vec<(u64, GenerationReport)>,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            RunProgress::new(cli.runs)
        } else {
            RunProgress::hidden(cli.runs)
        };

        Self {
            cli,
            progress,
            reports: Vec::new(),
        }
    }

    /// Reports of finished runs, keyed by seed
    pub fn reports(&self) -> &[(u64, GenerationReport)] {
        &self.reports
    }

    /// Run every seed of the batch
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The axis flags conflict or the parameters are invalid
    /// - The catalog cannot be loaded or is unusable in the axis mode
    /// - A run fails to converge or to land in the size range
    /// - An output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        let mode = self.cli.axis_mode()?;
        let catalog = match &self.cli.catalog {
            Some(path) => load_catalog(path)?,
            None => TileCatalog::standard(mode.valid_axes()),
        };
        let topology = Topology::new(catalog, mode)?;
        let mut session =
            GenerationSession::new(topology, self.cli.params()?, PlacementLog::new(), self.cli.seed)?;

        for seed in self.cli.seeds() {
            session.random_selector = RandomSelector::new(seed);
            let report = session.run()?;

            info!(
                seed,
                size = report.size,
                attempts = report.attempts,
                terminals = report.terminals,
                unclosed = report.unclosed_axes,
                "run complete"
            );

            if let Some(output) = &self.cli.output {
                let path = self.output_path(output, seed);
                session.placer.write_json(&path)?;
            }

            self.progress.complete_run(seed, report.size);
            self.reports.push((seed, report));
        }

        self.progress.finish();
        Ok(())
    }

    fn output_path(&self, output: &Path, seed: u64) -> PathBuf {
        if self.cli.runs <= 1 {
            return output.to_path_buf();
        }

        let stem = output.file_stem().unwrap_or_default();
        let name = match output.extension() {
            Some(extension) => format!(
                "{}_{seed}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            ),
            None => format!("{}_{seed}", stem.to_string_lossy()),
        };

        output.with_file_name(name)
    }
}
