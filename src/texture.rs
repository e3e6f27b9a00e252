use std::path::Path;

use log::debug;

use crate::error::{RenderError, RenderResult};

/// Index of a texture in a [`Scene`](crate::scene::Scene)'s texture table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Represents a 2D texture for texture mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        debug!("loaded texture {} ({}x{})", path.display(), width, height);
        Self::from_pixels(width, height, data)
    }

    /// Wraps an ARGB pixel buffer laid out row by row, top row first.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTexture(format!(
                "texture must not be empty, got {}x{}",
                width, height
            )));
        }
        if data.len() != (width * height) as usize {
            return Err(RenderError::InvalidTexture(format!(
                "expected {} pixels for {}x{}, got {}",
                width * height,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Square checkerboard made of `cells x cells` tiles.
    pub fn checkerboard(size: u32, cells: u32, a: u32, b: u32) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let data = (0..size * size)
            .map(|i| {
                let (x, y) = (i % size, i / size);
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    a
                } else {
                    b
                }
            })
            .collect();
        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// - UV coordinates are in [0,1] range, (0,0) = bottom-left as in OBJ files
    /// - Textures are stored top-left origin, so V is flipped
    /// - Coordinates outside [0,1] are clamped to the border texel
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let u = u.clamp(0.0, 1.0);
        let v = (1.0 - v).clamp(0.0, 1.0);

        // Convert normalized [0,1] UV to pixel coordinates [0, width-1]
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
