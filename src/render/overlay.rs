//! Debug overlay: edge numbers drawn next to each triangle edge.

use crate::math::Vec2;

use super::surface::Surface;

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;

/// 3x5 digit bitmaps, one row per byte, most significant of the low three
/// bits is the leftmost column.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// How far a label moves from the edge midpoint toward the centroid, as a
/// fraction of that distance.
const INWARD: f32 = 0.25;

/// Draws digit `digit % 10` with its top-left corner at `(x, y)`, each font
/// pixel `scale` screen pixels wide.
pub fn draw_digit<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, digit: u8, scale: i32, color: u32) {
    let glyph = DIGITS[(digit % 10) as usize];
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0b100 >> col) == 0 {
                continue;
            }
            let px = x + col * scale;
            let py = y + row as i32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    surface.draw_pixel(px + dx, py + dy, color);
                }
            }
        }
    }
}

/// Where label `edge` goes: the midpoint of edge `edge -> edge + 1`, nudged
/// toward the centroid so labels of neighbouring triangles do not collide.
pub fn label_anchor(points: [Vec2; 3], edge: usize) -> Vec2 {
    let a = points[edge % 3];
    let b = points[(edge + 1) % 3];
    let mid = a.lerp(b, 0.5);
    let centroid = (points[0] + points[1] + points[2]) * (1.0 / 3.0);
    mid.lerp(centroid, INWARD)
}

/// Labels edges `0`, `1` and `2` of a screen-space triangle.
pub fn draw_edge_labels<S: Surface + ?Sized>(surface: &mut S, points: [Vec2; 3], color: u32) {
    for edge in 0..3 {
        let anchor = label_anchor(points, edge);
        let x = anchor.x as i32 - GLYPH_WIDTH / 2;
        let y = anchor.y as i32 - GLYPH_HEIGHT / 2;
        draw_digit(surface, x, y, edge as u8, 1, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameBuffer;

    #[test]
    fn digit_one_has_expected_shape() {
        let mut fb = FrameBuffer::new(8, 8, 0);
        draw_digit(&mut fb, 0, 0, 1, 1, 9);
        let lit: usize = fb.pixels().iter().filter(|&&p| p == 9).count();
        assert_eq!(lit, 1 + 2 + 1 + 1 + 3);
        assert_eq!(fb.pixel(1, 0), Some(9));
        assert_eq!(fb.pixel(0, 0), Some(0));
    }

    #[test]
    fn scaled_digit_covers_more_pixels() {
        let mut fb = FrameBuffer::new(16, 16, 0);
        draw_digit(&mut fb, 0, 0, 8, 2, 9);
        let lit = fb.pixels().iter().filter(|&&p| p == 9).count();
        assert_eq!(lit, 13 * 4);
    }

    #[test]
    fn anchor_sits_between_midpoint_and_centroid() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), Vec2::new(0.0, 30.0)];
        let anchor = label_anchor(points, 0);
        // Midpoint (15, 0), centroid (10, 10).
        assert!((anchor.x - 13.75).abs() < 1e-4);
        assert!((anchor.y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn labels_draw_three_digits() {
        let mut fb = FrameBuffer::new(64, 64, 0);
        let points = [Vec2::new(5.0, 5.0), Vec2::new(60.0, 5.0), Vec2::new(5.0, 60.0)];
        draw_edge_labels(&mut fb, points, 3);
        // 0 has 12 lit cells, 1 has 8, 2 has 11.
        let lit = fb.pixels().iter().filter(|&&p| p == 3).count();
        assert_eq!(lit, 12 + 8 + 11);
    }
}
