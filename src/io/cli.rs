//! Command-line interface for rendering a fern to a PNG file

use crate::algorithm::cache::TransformCache;
use crate::algorithm::chains::generate_chains;
use crate::algorithm::generator::generate_seeded;
use crate::algorithm::selection::{GenerationConfig, Role, TransformSpec};
use crate::io::color::parse_hex_color;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CHAINS, DEFAULT_FOREGROUND, DEFAULT_OUTPUT, DEFAULT_POINT_COUNT,
    DEFAULT_RASTER_SIZE, DEFAULT_SEED, MAX_RASTER_DIMENSION, OUTPUT_EXTENSION,
    PROGRESS_UPDATE_INTERVAL, SUGGESTED_MAX_POINT_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::spatial::projection::{RasterSize, project};
use crate::spatial::raster::Canvas;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "barnsley")]
#[command(
    author,
    version,
    about = "Render a Barnsley fern variant with the chaos game"
)]
/// Command-line arguments for the fern renderer
pub struct Cli {
    /// Output PNG file (".png" is appended when missing)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of points to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_POINT_COUNT)]
    pub points: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Raster width in pixels (implies square if height not specified)
    #[arg(short = 'w', long, default_value_t = DEFAULT_RASTER_SIZE)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Number of independent chains generated in parallel
    #[arg(short, long, default_value_t = DEFAULT_CHAINS)]
    pub chains: usize,

    /// Override the first transform: m00,m01,m10,m11,bx,by,threshold
    #[arg(long, value_name = "SPEC", allow_hyphen_values = true)]
    pub first: Option<TransformSpec>,

    /// Override the second transform: m00,m01,m10,m11,bx,by,threshold
    #[arg(long, value_name = "SPEC", allow_hyphen_values = true)]
    pub second: Option<TransformSpec>,

    /// Override the third transform: m00,m01,m10,m11,bx,by,threshold
    #[arg(long, value_name = "SPEC", allow_hyphen_values = true)]
    pub third: Option<TransformSpec>,

    /// Override the fourth transform: m00,m01,m10,m11,bx,by,threshold (threshold unused)
    #[arg(long, value_name = "SPEC", allow_hyphen_values = true)]
    pub fourth: Option<TransformSpec>,

    /// Fern color as #rrggbb
    #[arg(long, value_parser = parse_hex_color, default_value = DEFAULT_FOREGROUND)]
    pub foreground: [u8; 3],

    /// Canvas color as #rrggbb
    #[arg(long, value_parser = parse_hex_color, default_value = DEFAULT_BACKGROUND)]
    pub background: [u8; 3],

    /// Apply transforms directly instead of through the memoization cache
    #[arg(long)]
    pub no_cache: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if transform applications go through the cache
    pub const fn use_cache(&self) -> bool {
        !self.no_cache
    }

    /// Reference configuration with any per-role overrides applied
    pub fn generation_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::default();
        for role in Role::ALL {
            let overridden = match role {
                Role::First => self.first,
                Role::Second => self.second,
                Role::Third => self.third,
                Role::Fourth => self.fourth,
            };
            if let Some(spec) = overridden {
                *config.spec_mut(role) = spec;
            }
        }
        config
    }

    /// Target raster dimensions
    pub fn raster_size(&self) -> RasterSize {
        RasterSize::new(self.width, self.height.unwrap_or(self.width))
    }

    /// Output path with the PNG extension enforced
    pub fn output_path(&self) -> PathBuf {
        let has_extension = self
            .output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
        if has_extension {
            self.output.clone()
        } else {
            let mut name = self.output.clone().into_os_string();
            name.push(".");
            name.push(OUTPUT_EXTENSION);
            PathBuf::from(name)
        }
    }
}

/// Outcome of a completed render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of points generated
    pub points: usize,
    /// Number of distinct pixels painted
    pub lit_pixels: usize,
    /// File the image was written to
    pub output: PathBuf,
}

/// Orchestrates generation, projection, rasterization and export
pub struct Renderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Renderer {
    /// Create a renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render the configured fern and write it to disk
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The raster has a zero dimension or no chains are requested
    /// - A transform contains non-finite parameters
    /// - The image cannot be written
    pub fn render(&mut self) -> Result<RenderSummary> {
        let size = self.validated_size()?;
        let config = self.cli.generation_config();
        self.warn_about_point_count();

        let mut canvas = Canvas::new(size);
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("generate", self.cli.points);
        }

        if self.cli.chains == 1 {
            let game = generate_seeded(self.cli.points, &config, self.cli.seed)?;
            let game = if self.cli.use_cache() {
                game.with_cache(TransformCache::new())
            } else {
                game
            };

            let progress = self.progress_manager.as_ref();
            let points = game.enumerate().map(|(index, point)| {
                if index % PROGRESS_UPDATE_INTERVAL == 0
                    && let Some(pm) = progress
                {
                    pm.update(index);
                }
                point
            });
            canvas.plot(project(points, size));
        } else {
            let points = generate_chains(
                self.cli.points,
                &config,
                self.cli.chains,
                self.cli.seed,
                self.cli.use_cache(),
            )?;
            canvas.plot(project(points, size));
        }

        if let Some(ref pm) = self.progress_manager {
            pm.update(self.cli.points);
            pm.complete_stage(
                &format!("{} pixels lit", canvas.lit_count()),
                start_time.elapsed(),
            );
        }

        let output = self.cli.output_path();
        let export_start = Instant::now();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("export", 1);
        }

        export_png(&canvas, self.cli.foreground, self.cli.background, &output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.update(1);
            pm.complete_stage(&output.display().to_string(), export_start.elapsed());
            pm.finish();
        }

        Ok(RenderSummary {
            points: self.cli.points,
            lit_pixels: canvas.lit_count(),
            output,
        })
    }

    fn validated_size(&self) -> Result<RasterSize> {
        let size = self.cli.raster_size();
        if size.width == 0 || size.height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", size.width, size.height),
                &"raster dimensions must be positive",
            ));
        }
        if size.width > MAX_RASTER_DIMENSION || size.height > MAX_RASTER_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", size.width, size.height),
                &format!("raster dimensions must not exceed {MAX_RASTER_DIMENSION}"),
            ));
        }
        if self.cli.chains == 0 {
            return Err(invalid_parameter(
                "chains",
                &self.cli.chains,
                &"at least one chain is required",
            ));
        }
        Ok(size)
    }

    // Allow print for user feedback on oversized runs
    #[allow(clippy::print_stderr)]
    fn warn_about_point_count(&self) {
        if self.cli.points > SUGGESTED_MAX_POINT_COUNT && !self.cli.quiet {
            eprintln!(
                "Generating {} points (more than the suggested {SUGGESTED_MAX_POINT_COUNT}); rendering may be slow",
                self.cli.points
            );
        }
    }
}
