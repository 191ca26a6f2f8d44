// THEORY:
// The `renderer` turns segments into draw calls. Each segment becomes exactly
// one `Stroke`: its coordinates plus the style resolved from its mode. The
// collected strokes form a `Figure`, which knows nothing about pixels and is
// handed to the rasteriser afterwards.
//
// Styles for every segment are resolved before the first stroke is built. An
// unknown mode therefore fails the whole pass and no half-drawn figure exists.

use crate::core_modules::segment::segment::Segment;
use crate::core_modules::style::{DEFAULT_LINE_WIDTH, Mode, Style};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unknown mode `{mode}` in segment {segment} (starting at sample {start})")]
    UnknownMode {
        mode: String,
        /// Position of the offending segment in the segment list.
        segment: usize,
        /// Index of the segment's first sample in the trajectory.
        start: usize,
    },
}

/// One polyline draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub mode: Mode,
    pub style: Style,
    /// Index of the first sample in the source trajectory.
    pub start: usize,
    pub points: Vec<(f64, f64)>,
}

/// Axis-aligned extent of everything drawn in a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    fn around(point: (f64, f64)) -> Self {
        Self {
            min_x: point.0,
            max_x: point.0,
            min_y: point.1,
            max_y: point.1,
        }
    }

    fn include(&mut self, point: (f64, f64)) {
        self.min_x = self.min_x.min(point.0);
        self.max_x = self.max_x.max(point.0);
        self.min_y = self.min_y.min(point.1);
        self.max_y = self.max_y.max(point.1);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// The ordered strokes of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    strokes: Vec<Stroke>,
}

impl Figure {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Extent of all stroke points, `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.strokes.iter().flat_map(|s| s.points.iter().copied());
        let mut bounds = Bounds::around(points.next()?);
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }
}

pub fn render_segments(segments: &[Segment<'_>]) -> Result<Figure, RenderError> {
    render_segments_with_width(segments, DEFAULT_LINE_WIDTH)
}

/// Builds one stroke per segment, drawing lines `line_width` pixels wide.
pub fn render_segments_with_width(
    segments: &[Segment<'_>],
    line_width: u32,
) -> Result<Figure, RenderError> {
    let modes = resolve_modes(segments)?;

    let strokes = segments
        .iter()
        .zip(modes)
        .map(|(segment, mode)| {
            log::debug!(
                "segment {}..{} drawn as {}",
                segment.start(),
                segment.end(),
                mode
            );
            Stroke {
                mode,
                style: mode.style_with_width(line_width),
                start: segment.start(),
                points: segment.coordinates(),
            }
        })
        .collect();

    Ok(Figure { strokes })
}

fn resolve_modes(segments: &[Segment<'_>]) -> Result<Vec<Mode>, RenderError> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            segment
                .mode()
                .parse::<Mode>()
                .map_err(|err| RenderError::UnknownMode {
                    mode: err.0,
                    segment: index,
                    start: segment.start(),
                })
        })
        .collect()
}
