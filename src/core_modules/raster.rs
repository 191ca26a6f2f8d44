// THEORY:
// The `raster` module is the bridge from a resolution-free `Figure` to pixels.
// It paints every stroke into a flat RGB8 buffer through `plotters`' bitmap
// backend, which the image helper can then encode to disk.
//
// The data extent is padded and degenerate extents are widened, so a figure
// that is empty, a single dot, or a perfectly straight line still maps onto a
// usable chart area.

use crate::core_modules::renderer::{Bounds, Figure, Stroke};
use plotters::prelude::*;
use std::ops::Range;

pub const CHANNELS: usize = 3;
/// Fraction of the data extent added on each side of the chart.
const PADDING_RATIO: f64 = 0.05;
/// Span used for an axis along which all points coincide.
const DEGENERATE_SPAN: f64 = 1.0;

/// Output canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the chart area, in pixels.
    pub margin: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("canvas of {width}x{height} pixels cannot hold a {margin}px margin")]
    CanvasTooSmall { width: u32, height: u32, margin: u32 },
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Paints `figure` on a white canvas and returns the RGB8 pixel buffer.
pub fn rasterize(figure: &Figure, config: &RasterConfig) -> Result<Vec<u8>, RasterError> {
    if config.width <= config.margin * 2 || config.height <= config.margin * 2 {
        return Err(RasterError::CanvasTooSmall {
            width: config.width,
            height: config.height,
            margin: config.margin,
        });
    }

    let mut buffer = vec![0u8; config.width as usize * config.height as usize * CHANNELS];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let (x_range, y_range) = chart_ranges(figure.bounds());
        let mut chart = ChartBuilder::on(&root)
            .margin(config.margin)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_error)?;

        for stroke in figure.strokes() {
            let [r, g, b] = stroke.style.color;
            let shape = ShapeStyle::from(&RGBColor(r, g, b)).stroke_width(stroke.style.width);

            match stroke.points.as_slice() {
                [] => {}
                [single] => {
                    chart
                        .draw_series(std::iter::once(Circle::new(
                            *single,
                            stroke.style.width,
                            shape.filled(),
                        )))
                        .map_err(draw_error)?;
                }
                _ => {
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            stroke.points.clone(),
                            shape,
                        )))
                        .map_err(draw_error)?;
                }
            }
            log_stroke(stroke);
        }

        root.present().map_err(draw_error)?;
    }

    Ok(buffer)
}

fn log_stroke(stroke: &Stroke) {
    log::trace!(
        "painted {} stroke of {} points from sample {}",
        stroke.mode,
        stroke.points.len(),
        stroke.start
    );
}

fn chart_ranges(bounds: Option<Bounds>) -> (Range<f64>, Range<f64>) {
    match bounds {
        Some(b) => (
            padded_range(b.min_x, b.max_x),
            padded_range(b.min_y, b.max_y),
        ),
        None => (0.0..DEGENERATE_SPAN, 0.0..DEGENERATE_SPAN),
    }
}

fn padded_range(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON {
        let half = DEGENERATE_SPAN / 2.0;
        return (min - half)..(max + half);
    }
    let pad = span * PADDING_RATIO;
    (min - pad)..(max + pad)
}

fn draw_error<E: std::fmt::Display>(err: E) -> RasterError {
    RasterError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::point::point::TrajectoryPoint;
    use crate::core_modules::renderer::render_segments_with_width;
    use crate::core_modules::segment::segment::group_segments;

    const SMALL: RasterConfig = RasterConfig {
        width: 120,
        height: 80,
        margin: 10,
    };

    fn pixel(buffer: &[u8], config: &RasterConfig, x: u32, y: u32) -> [u8; 3] {
        let offset = (y as usize * config.width as usize + x as usize) * CHANNELS;
        [buffer[offset], buffer[offset + 1], buffer[offset + 2]]
    }

    /// True when some pixel in the column around the vertical centre is close to `color`.
    fn column_contains(buffer: &[u8], config: &RasterConfig, x: u32, color: [u8; 3]) -> bool {
        let centre = config.height / 2;
        (centre - 4..=centre + 4).any(|y| {
            let found = pixel(buffer, config, x, y);
            found
                .iter()
                .zip(color.iter())
                .all(|(a, b)| (*a as i16 - *b as i16).abs() < 60)
        })
    }

    #[test]
    fn empty_figure_is_a_blank_canvas() {
        let buffer = rasterize(&Figure::default(), &SMALL).expect("blank render");

        assert_eq!(buffer.len(), 120 * 80 * CHANNELS);
        assert!(buffer.iter().all(|&byte| byte == 255));
    }

    #[test]
    fn horizontal_segments_paint_in_their_colors() {
        let points: Vec<TrajectoryPoint> = (0..=10)
            .map(|i| {
                let mode = if i <= 5 { "waggle" } else { "turn_right" };
                TrajectoryPoint::new(i as f64, 0.0, mode)
            })
            .collect();
        let figure = render_segments_with_width(&group_segments(&points), 4).expect("known modes");

        let buffer = rasterize(&figure, &SMALL).expect("render");

        // Left quarter is waggle, right quarter is turn_right.
        assert!(column_contains(&buffer, &SMALL, 35, [255, 0, 0]));
        assert!(column_contains(&buffer, &SMALL, 95, [0, 0, 255]));
        // Margins stay untouched.
        assert_eq!(pixel(&buffer, &SMALL, 2, 2), [255, 255, 255]);
    }

    #[test]
    fn single_point_is_drawn_as_a_dot() {
        let points = vec![TrajectoryPoint::new(3.0, 3.0, "turn_left")];
        let figure = render_segments_with_width(&group_segments(&points), 4).expect("known modes");

        let buffer = rasterize(&figure, &SMALL).expect("render");

        assert!(column_contains(&buffer, &SMALL, SMALL.width / 2, [0, 128, 0]));
    }

    #[test]
    fn margin_larger_than_canvas_is_rejected() {
        let config = RasterConfig {
            width: 30,
            height: 30,
            margin: 15,
        };
        assert!(matches!(
            rasterize(&Figure::default(), &config),
            Err(RasterError::CanvasTooSmall { .. })
        ));
    }

    #[test]
    fn degenerate_extent_is_widened() {
        let range = padded_range(2.0, 2.0);
        assert_eq!(range, 1.5..2.5);

        let range = padded_range(0.0, 10.0);
        assert_eq!(range, -0.5..10.5);
    }
}
