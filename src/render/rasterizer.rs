//! Scanline triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** at the middle vertex into an upper half (apex to middle) and
//!    a lower half (middle to base). Both halves share the long edge from
//!    the top vertex to the bottom one.
//! 3. **Walk scanlines**: for each pixel row, find where the long edge and
//!    the current short edge cross it, order the two crossings left to right
//!    and fill between them.
//!
//! ```text
//!        v0
//!        /\
//!       /  \        upper half
//!      /----v1
//!     /    /        lower half
//!    /  /
//!   v2
//! ```
//!
//! Rows are sampled at integer `y` and cover `[ceil(top), ceil(bottom))`, so
//! triangles sharing an edge never both draw it and zero-height halves emit
//! nothing. Columns follow the same half-open rule. Edges lying on the last
//! row or column of the surface are the exception: nothing can share them,
//! so they are filled inclusively.
//!
//! # Perspective-Correct Texturing
//!
//! After projection each vertex carries `(u/w, v/w, 1/w)`. Those three values
//! are linear in screen space, so they are interpolated along the edges and
//! across each span, and the texel is looked up at `(u/w) / (1/w)`,
//! `(v/w) / (1/w)`.

use crate::math::{lerp, Vec2, Vec3};
use crate::texture::Texture;
use crate::triangle::Vertex;

use super::surface::Surface;

/// One horizontal run of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub y: i32,
    pub x_left: f32,
    pub x_right: f32,
    pub tex_left: Vec3,
    pub tex_right: Vec3,
}

impl Span {
    /// First and last pixel column covered, inclusive. Empty when
    /// `first > last`. A span reaching `last_column` includes it.
    pub fn columns(&self, last_column: i32) -> (i32, i32) {
        let first = self.x_left.ceil() as i32;
        if self.x_right >= last_column as f32 {
            return (first, last_column);
        }
        (first, (self.x_right.ceil() as i32).saturating_sub(1))
    }

    /// Texture coordinates `(u/w, v/w, 1/w)` at pixel column `x`.
    #[inline]
    pub fn tex_at(&self, x: i32) -> Vec3 {
        let width = self.x_right - self.x_left;
        if width <= 0.0 {
            return self.tex_left;
        }
        let t = (x as f32 - self.x_left) / width;
        self.tex_left.lerp(self.tex_right, t)
    }
}

/// Screen-space edge from `a` to `b` with `a.y <= b.y`.
#[derive(Clone, Copy)]
struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    fn new(a: Vertex, b: Vertex) -> Self {
        Self { a, b }
    }

    fn height(&self) -> f32 {
        self.b.position.y - self.a.position.y
    }

    /// `(x, tex)` where row `y` crosses the edge. Callers keep `y` inside the
    /// edge's vertical extent and never call this on a flat edge.
    fn at(&self, y: f32) -> (f32, Vec3) {
        let t = (y - self.a.position.y) / self.height();
        (lerp(self.a.position.x, self.b.position.x, t), self.a.tex.lerp(self.b.tex, t))
    }
}

/// Calls `emit` for every scanline of the triangle, top to bottom.
///
/// Vertex order does not matter. Degenerate triangles (all corners on one
/// row) emit nothing. A triangle whose bottom reaches `last_row` emits that
/// row too.
pub fn for_each_span(vertices: [Vertex; 3], last_row: i32, mut emit: impl FnMut(Span)) {
    let mut v = vertices;
    v.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
    let [top, mid, bottom] = v;

    let long = Edge::new(top, bottom);
    if long.height() <= 0.0 {
        return;
    }

    for short in [Edge::new(top, mid), Edge::new(mid, bottom)] {
        if short.height() <= 0.0 {
            continue;
        }
        let y_start = short.a.position.y.ceil() as i32;
        let mut y_end = short.b.position.y.ceil() as i32;
        if short.b.position.y >= bottom.position.y && bottom.position.y >= last_row as f32 {
            y_end = y_end.max(last_row.saturating_add(1));
        }
        for y in y_start..y_end {
            let row = y as f32;
            let (x_long, tex_long) = long.at(row);
            let (x_short, tex_short) = short.at(row);
            let span = if x_long <= x_short {
                Span { y, x_left: x_long, x_right: x_short, tex_left: tex_long, tex_right: tex_short }
            } else {
                Span { y, x_left: x_short, x_right: x_long, tex_left: tex_short, tex_right: tex_long }
            };
            emit(span);
        }
    }
}

fn last_pixel<S: Surface + ?Sized>(surface: &S) -> (i32, i32) {
    (surface.width() as i32 - 1, surface.height() as i32 - 1)
}

/// Fills a triangle with one color using [`Surface::fill_span`].
pub fn fill_solid<S: Surface + ?Sized>(surface: &mut S, points: [Vec2; 3], color: u32) {
    let vertices = points.map(|p| Vertex::new(Vec3::new(p.x, p.y, 0.0), Vec3::ZERO));
    let (last_column, last_row) = last_pixel(surface);
    for_each_span(vertices, last_row, |span| {
        let (first, last) = span.columns(last_column);
        if first <= last {
            surface.fill_span(span.y, first, last, color);
        }
    });
}

/// Fills a projected triangle with perspective-correct texels, one
/// [`Surface::draw_pixel`] call per covered pixel.
pub fn fill_textured<S: Surface + ?Sized>(surface: &mut S, vertices: [Vertex; 3], texture: &Texture) {
    let (last_column, last_row) = last_pixel(surface);
    for_each_span(vertices, last_row, |span| {
        let (first, last) = span.columns(last_column);
        for x in first..=last {
            let tex = span.tex_at(x);
            if tex.z == 0.0 {
                continue;
            }
            let color = texture.sample(tex.x / tex.z, tex.y / tex.z);
            surface.draw_pixel(x, span.y, color);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::recording::RecordingSurface;
    use crate::render::FrameBuffer;

    fn screen_vertex(x: f32, y: f32, tex: Vec3) -> Vertex {
        Vertex::new(Vec3::new(x, y, 0.5), tex)
    }

    #[test]
    fn spans_run_top_to_bottom_inside_edges() {
        let vertices = [
            screen_vertex(0.0, 0.0, Vec3::ZERO),
            screen_vertex(0.0, 10.0, Vec3::ZERO),
            screen_vertex(10.0, 0.0, Vec3::ZERO),
        ];
        let mut rows = Vec::new();
        for_each_span(vertices, i32::MAX, |span| rows.push(span));

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].y, 0);
        assert_eq!(rows[9].y, 9);
        for span in rows {
            assert!(span.x_left <= span.x_right);
            assert!((span.x_right - (10.0 - span.y as f32)).abs() < 1e-5);
        }
    }

    #[test]
    fn flat_triangle_emits_nothing() {
        let vertices = [
            screen_vertex(0.0, 4.0, Vec3::ZERO),
            screen_vertex(5.0, 4.0, Vec3::ZERO),
            screen_vertex(9.0, 4.0, Vec3::ZERO),
        ];
        let mut count = 0;
        for_each_span(vertices, i32::MAX, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn solid_fill_covers_interior_only() {
        let mut fb = FrameBuffer::new(16, 16, 0);
        fill_solid(&mut fb, [Vec2::new(0.0, 0.0), Vec2::new(12.0, 0.0), Vec2::new(0.0, 12.0)], 5);
        assert_eq!(fb.pixel(1, 1), Some(5));
        assert_eq!(fb.pixel(5, 5), Some(5));
        assert_eq!(fb.pixel(10, 10), Some(0));
        assert_eq!(fb.pixel(0, 13), Some(0));
    }

    #[test]
    fn shared_edge_is_drawn_once() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(8.0, 0.0);
        let c = Vec2::new(8.0, 8.0);
        let d = Vec2::new(0.0, 8.0);
        let mut surface = RecordingSurface::new(16, 16);
        fill_solid(&mut surface, [a, b, c], 1);
        fill_solid(&mut surface, [a, c, d], 2);

        let mut seen = std::collections::HashSet::new();
        for (x, y, _) in surface.pixels() {
            assert!(seen.insert((x, y)), "pixel ({}, {}) drawn twice", x, y);
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn quad_touching_every_border_leaves_no_gap() {
        let (w, h) = (20u32, 12u32);
        let right = (w - 1) as f32;
        let bottom = (h - 1) as f32;
        let mut fb = FrameBuffer::new(w, h, 0);
        fill_solid(&mut fb, [Vec2::new(0.0, 0.0), Vec2::new(right, 0.0), Vec2::new(right, bottom)], 7);
        fill_solid(&mut fb, [Vec2::new(0.0, 0.0), Vec2::new(right, bottom), Vec2::new(0.0, bottom)], 7);
        assert!(fb.pixels().iter().all(|&p| p == 7));
    }

    #[test]
    fn last_column_is_inclusive_only_at_surface_edge() {
        let span = Span {
            y: 0,
            x_left: 2.0,
            x_right: 9.0,
            tex_left: Vec3::ZERO,
            tex_right: Vec3::ZERO,
        };
        assert_eq!(span.columns(15), (2, 8));
        assert_eq!(span.columns(9), (2, 9));
    }

    #[test]
    fn infinite_span_end_does_not_overflow() {
        let span = Span {
            y: 0,
            x_left: f32::NEG_INFINITY,
            x_right: f32::NEG_INFINITY,
            tex_left: Vec3::ZERO,
            tex_right: Vec3::ZERO,
        };
        let (first, last) = span.columns(15);
        assert_eq!(first, i32::MIN);
        assert_eq!(last, i32::MIN);

        let mut fb = FrameBuffer::new(4, 4, 0);
        fill_solid(&mut fb, [Vec2::new(f32::NEG_INFINITY, 0.0), Vec2::new(f32::NEG_INFINITY, 2.0), Vec2::new(1.0, 2.0)], 3);
    }

    #[test]
    fn textured_fill_samples_texture() {
        let texture = Texture::from_pixels(1, 1, vec![0xFFABCDEF]).unwrap();
        let vertices = [
            screen_vertex(0.0, 0.0, Vec3::new(0.0, 0.0, 1.0)),
            screen_vertex(8.0, 0.0, Vec3::new(1.0, 0.0, 1.0)),
            screen_vertex(0.0, 8.0, Vec3::new(0.0, 1.0, 1.0)),
        ];
        let mut surface = RecordingSurface::new(16, 16);
        fill_textured(&mut surface, vertices, &texture);
        let pixels: Vec<_> = surface.pixels().collect();
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|&(_, _, c)| c == 0xFFABCDEF));
    }

    #[test]
    fn texture_lookup_divides_by_interpolated_inverse_depth() {
        // Left end at w = 1, right end at w = 4. Halfway across the span the
        // perspective-correct u is 0.2, not the affine 0.5.
        let span = Span {
            y: 0,
            x_left: 0.0,
            x_right: 10.0,
            tex_left: Vec3::new(0.0, 0.0, 1.0),
            tex_right: Vec3::new(1.0 / 4.0, 0.0, 1.0 / 4.0),
        };
        let tex = span.tex_at(5);
        assert!((tex.x / tex.z - 0.2).abs() < 1e-6);
    }
}
