// THEORY:
// The `pipeline` module is the top-level API. It strings the stages together in
// one synchronous pass:
//
//   load -> group -> render -> rasterise -> save
//
// Each stage is fallible and the first failure ends the run. Nothing is written
// to disk unless every segment could be styled and painted.

use crate::core_modules::loader::{LoadError, load_trajectory};
use crate::core_modules::raster::{RasterConfig, RasterError, rasterize};
use crate::core_modules::renderer::{RenderError, render_segments_with_width};
use crate::core_modules::style::DEFAULT_LINE_WIDTH;
use crate::core_modules::utils::image_helper::image_helper;
use std::path::{Path, PathBuf};

// Re-export key data structures for the public API.
pub use crate::core_modules::point::point::{Trajectory, TrajectoryPoint};
pub use crate::core_modules::renderer::Figure;
pub use crate::core_modules::segment::segment::{Segment, SegmentSummary};
pub use crate::core_modules::style::Mode;

pub const DEFAULT_INPUT_PATH: &str = "datasets/gatech_honeybee/sequence1.dat";
pub const DEFAULT_OUTPUT_PATH: &str = "trajectory.png";

/// Configuration for the TrajectoryPipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Whitespace-delimited `x y mode` table to read.
    pub input_path: PathBuf,
    /// Where the rendered PNG is written.
    pub output_path: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    /// Blank border around the chart, in pixels.
    pub margin: u32,
    /// Stroke width of every segment, in pixels.
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let raster = RasterConfig::default();
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            image_width: raster.width,
            image_height: raster.height,
            margin: raster.margin,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl PlotConfig {
    pub fn raster_config(&self) -> RasterConfig {
        RasterConfig {
            width: self.image_width,
            height: self.image_height,
            margin: self.margin,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("cannot write image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    pub sample_count: usize,
    pub segments: Vec<SegmentSummary>,
    pub output_path: PathBuf,
}

impl PlotReport {
    /// Number of segments drawn for `mode`.
    pub fn segments_for(&self, mode: Mode) -> usize {
        self.segments
            .iter()
            .filter(|s| s.mode == mode.as_str())
            .count()
    }
}

/// The main, top-level struct for turning a trajectory file into a picture.
pub struct TrajectoryPipeline {
    config: PlotConfig,
}

impl TrajectoryPipeline {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Loads the configured input and plots it to the configured output.
    pub fn run(&self) -> Result<PlotReport, PipelineError> {
        log::info!("loading trajectory from {}", self.config.input_path.display());
        let trajectory = load_trajectory(&self.config.input_path)?;
        self.plot(&trajectory, &self.config.output_path)
    }

    /// Plots an already loaded trajectory to `output_path`.
    pub fn plot(
        &self,
        trajectory: &Trajectory,
        output_path: impl AsRef<Path>,
    ) -> Result<PlotReport, PipelineError> {
        let output_path = output_path.as_ref();

        // Stage 1: Grouping
        let segments = trajectory.segments();
        if trajectory.is_empty() {
            log::warn!("trajectory is empty, writing a blank plot");
        }
        log::info!(
            "{} samples grouped into {} segments",
            trajectory.len(),
            segments.len()
        );

        // Stage 2: Styling
        let figure = render_segments_with_width(&segments, self.config.line_width)?;

        // Stage 3: Rasterising
        let raster = self.config.raster_config();
        let pixels = rasterize(&figure, &raster)?;

        // Stage 4: Output
        image_helper::save_png(output_path, raster.width, raster.height, &pixels).map_err(
            |source| PipelineError::Save {
                path: output_path.to_path_buf(),
                source,
            },
        )?;
        log::info!("plot written to {}", output_path.display());

        Ok(PlotReport {
            sample_count: trajectory.len(),
            segments: segments.iter().map(Segment::summary).collect(),
            output_path: output_path.to_path_buf(),
        })
    }
}
