use std::io::Cursor;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::chart::domain::chart_renderer::ChartRenderer;
use crate::shared::constants::ACCENT_COLOR;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 400;
const MARGIN: u32 = 40;

const BACKGROUND: Rgb<u8> = Rgb([24, 24, 28]);
const GRID: Rgb<u8> = Rgb([58, 58, 64]);
const FILL: Rgb<u8> = Rgb([82, 59, 44]);

/// Rasterizes the face-count timeline as a line-plus-fill chart, PNG-encoded.
pub struct TimelineChart;

impl TimelineChart {
    pub fn new() -> Self {
        Self
    }

    /// Maps a face count onto a pixel row inside the plot area. Row 0 is the
    /// top of the image, so larger counts map to smaller rows.
    fn y_for(count: usize, max_count: usize) -> f32 {
        let plot_height = (CHART_HEIGHT - 2 * MARGIN) as f32;
        let ratio = count as f32 / max_count as f32;
        (CHART_HEIGHT - MARGIN) as f32 - ratio * plot_height
    }

    fn x_for(position: usize, len: usize) -> f32 {
        let plot_width = (CHART_WIDTH - 2 * MARGIN) as f32;
        if len <= 1 {
            return MARGIN as f32 + plot_width / 2.0;
        }
        MARGIN as f32 + position as f32 / (len - 1) as f32 * plot_width
    }
}

impl Default for TimelineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for TimelineChart {
    fn render(&self, timeline: &[usize]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        if timeline.is_empty() {
            return Err("Cannot render a chart from an empty timeline".into());
        }

        let mut canvas = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
        let max_count = timeline.iter().copied().max().unwrap_or(0).max(1);
        let baseline = (CHART_HEIGHT - MARGIN) as f32;

        // Horizontal grid lines, one per face-count level (capped so dense
        // ranges do not turn into a solid block).
        let grid_step = (max_count / 10).max(1);
        for level in (0..=max_count).step_by(grid_step) {
            let y = Self::y_for(level, max_count);
            draw_line_segment_mut(
                &mut canvas,
                (MARGIN as f32, y),
                ((CHART_WIDTH - MARGIN) as f32, y),
                GRID,
            );
        }

        let accent = Rgb(ACCENT_COLOR);

        if timeline.len() == 1 {
            // A single sample has no line to draw; show it as one column.
            let x = Self::x_for(0, 1) as i32;
            let y = Self::y_for(timeline[0], max_count) as i32;
            let height = (baseline as i32 - y).max(1);
            draw_filled_rect_mut(
                &mut canvas,
                Rect::at(x - 4, y).of_size(8, height as u32),
                accent,
            );
        } else {
            // Fill under the line first, then the line itself on top.
            let mut polygon: Vec<Point<i32>> = timeline
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    Point::new(
                        Self::x_for(i, timeline.len()) as i32,
                        Self::y_for(count, max_count) as i32,
                    )
                })
                .collect();
            polygon.push(Point::new(
                Self::x_for(timeline.len() - 1, timeline.len()) as i32,
                baseline as i32,
            ));
            polygon.push(Point::new(Self::x_for(0, timeline.len()) as i32, baseline as i32));
            // an all-zero timeline collapses onto the baseline; the fill
            // polygon must not start and end on the same point
            if polygon.last() == polygon.first() {
                polygon.pop();
            }
            if polygon.len() >= 3 {
                draw_polygon_mut(&mut canvas, &polygon, FILL);
            }

            for (i, pair) in timeline.windows(2).enumerate() {
                let from = (Self::x_for(i, timeline.len()), Self::y_for(pair[0], max_count));
                let to = (
                    Self::x_for(i + 1, timeline.len()),
                    Self::y_for(pair[1], max_count),
                );
                draw_line_segment_mut(&mut canvas, from, to, accent);
            }
        }

        // Axes drawn last so the fill never bleeds over them.
        draw_line_segment_mut(
            &mut canvas,
            (MARGIN as f32, MARGIN as f32),
            (MARGIN as f32, baseline),
            GRID,
        );
        draw_line_segment_mut(
            &mut canvas,
            (MARGIN as f32, baseline),
            ((CHART_WIDTH - MARGIN) as f32, baseline),
            GRID,
        );

        let mut bytes = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_timeline_fails() {
        let result = TimelineChart::new().render(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_produces_png_bytes() {
        let bytes = TimelineChart::new().render(&[0, 1, 3, 2, 0]).unwrap();
        // PNG signature
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_render_single_sample() {
        let bytes = TimelineChart::new().render(&[2]).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), CHART_WIDTH);
        assert_eq!(decoded.height(), CHART_HEIGHT);
    }

    #[test]
    fn test_render_all_zero_counts() {
        // max count of zero must not divide by zero
        let result = TimelineChart::new().render(&[0, 0, 0]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_peak_maps_to_plot_top() {
        assert_eq!(TimelineChart::y_for(4, 4), MARGIN as f32);
        assert_eq!(TimelineChart::y_for(0, 4), (CHART_HEIGHT - MARGIN) as f32);
    }
}
