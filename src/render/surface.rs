//! The 2D drawing target the pipeline writes into.

use crate::math::Vec2;

use super::rasterizer;

/// A pixel surface.
///
/// Only [`draw_pixel`](Surface::draw_pixel) is required; spans, lines and
/// triangles have default implementations built on it. Implementations must
/// ignore out-of-bounds coordinates.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn draw_pixel(&mut self, x: i32, y: i32, color: u32);

    /// Fills pixels `x_start..=x_end` on row `y`.
    fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        for x in x_start..=x_end {
            self.draw_pixel(x, y, color);
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// An error term tracks the distance between the ideal line and the
    /// current pixel; whenever it crosses a threshold the walk also steps
    /// along the minor axis.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.draw_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// Outline of a triangle.
    fn draw_triangle(&mut self, points: [Vec2; 3], color: u32) {
        for i in 0..3 {
            let (a, b) = (points[i], points[(i + 1) % 3]);
            self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
        }
    }

    /// Solid triangle, filled scanline by scanline.
    fn fill_triangle(&mut self, points: [Vec2; 3], color: u32) {
        rasterizer::fill_solid(self, points, color);
    }
}
