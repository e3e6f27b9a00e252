//! ARGB8888 color helpers and the palette used by the renderer.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const YELLOW: u32 = 0xFFFFFF00;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const BLACK: u32 = 0xFF000000;

/// Packs 0..=255 channel values into an opaque ARGB pixel.
///
/// Values outside the channel range are clamped, so callers can scale a base
/// color by an intensity without checking for overflow.
#[inline]
pub fn rgb(r: f32, g: f32, b: f32) -> u32 {
    let channel = |c: f32| c.clamp(0.0, 255.0) as u32;
    0xFF00_0000 | (channel(r) << 16) | (channel(g) << 8) | channel(b)
}

/// Splits an ARGB pixel into its (r, g, b) channels.
#[inline]
pub fn channels(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
