//! Owned ARGB8888 color buffer.

use super::surface::Surface;

/// Row-major pixel buffer, top row first.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, clear_color: u32) -> Self {
        Self {
            color_buffer: vec![clear_color; (width * height) as usize],
            width,
            height,
        }
    }

    /// Reallocates for the new size. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32, clear_color: u32) {
        self.color_buffer = vec![clear_color; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.color_buffer[i])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The buffer as raw bytes in native endianness, ready for an ARGB8888
    /// streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the same allocation and borrows self.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.color_buffer[i] = color;
        }
    }

    fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let first = x_start.max(0);
        let last = x_end.min(self.width as i32 - 1);
        if first > last {
            return;
        }
        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + first as usize..=row + last as usize].fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(4, 3, 0);
        fb.draw_pixel(-1, 0, 9);
        fb.draw_pixel(4, 0, 9);
        fb.draw_pixel(0, 3, 9);
        assert!(fb.pixels().iter().all(|&p| p == 0));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn span_is_clipped_to_row() {
        let mut fb = FrameBuffer::new(4, 2, 0);
        fb.fill_span(1, -3, 10, 7);
        assert_eq!(fb.pixels(), &[0, 0, 0, 0, 7, 7, 7, 7]);
        fb.fill_span(5, 0, 3, 8);
        assert!(!fb.pixels().contains(&8));
    }

    #[test]
    fn as_bytes_matches_pixel_count() {
        let mut fb = FrameBuffer::new(3, 2, 0);
        fb.draw_pixel(0, 0, 0x01020304);
        assert_eq!(fb.as_bytes().len(), 24);
        assert_eq!(&fb.as_bytes()[..4], &0x01020304u32.to_ne_bytes());
    }

    #[test]
    fn resize_reallocates() {
        let mut fb = FrameBuffer::new(2, 2, 1);
        fb.resize(5, 4, 2);
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.pixels().len(), 20);
        assert_eq!(fb.pixel(4, 3), Some(2));
    }
}
