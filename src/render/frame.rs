//! Per-frame working state.

use crate::texture::TextureId;
use crate::triangle::{Triangle, WorkingTriangle};

/// A world-space triangle handed to the pipeline for this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submitted {
    pub triangle: Triangle,
    pub texture: Option<TextureId>,
}

/// Every list the pipeline stages read and write during one frame.
///
/// The caller owns it and passes it to [`Pipeline::render`](super::Pipeline::render),
/// which resets it first. Lists keep their capacity between frames.
#[derive(Debug, Default)]
pub struct RenderFrame {
    /// Output of geometry submission.
    pub submitted: Vec<Submitted>,
    /// Camera-facing, shaded triangles, still in world space.
    pub visible: Vec<WorkingTriangle>,
    /// Near-clipped triangles in screen space, sorted back to front after the
    /// depth sort.
    pub drawn: Vec<WorkingTriangle>,
    /// Final triangles, all inside the screen, in painter order.
    pub on_screen: Vec<WorkingTriangle>,
    /// Scene indices of entities with their own draw hook.
    pub special: Vec<usize>,
    pub(crate) clip_queue: Vec<WorkingTriangle>,
    pub(crate) clip_next: Vec<WorkingTriangle>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every list.
    pub fn reset(&mut self) {
        self.submitted.clear();
        self.visible.clear();
        self.drawn.clear();
        self.on_screen.clear();
        self.special.clear();
        self.clip_queue.clear();
        self.clip_next.clear();
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            submitted: self.submitted.len(),
            visible: self.visible.len(),
            drawn: self.drawn.len(),
            on_screen: self.on_screen.len(),
            special: self.special.len(),
        }
    }
}

/// Triangle counts after each stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub submitted: usize,
    pub visible: usize,
    pub drawn: usize,
    pub on_screen: usize,
    pub special: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn reset_clears_all_lists() {
        let tri = Triangle::untextured([Vec3::ZERO, Vec3::UP, Vec3::RIGHT]);
        let mut frame = RenderFrame::new();
        frame.submitted.push(Submitted { triangle: tri, texture: None });
        frame.visible.push(tri.working(0, None));
        frame.clip_queue.push(tri.working(0, None));
        frame.special.push(3);

        frame.reset();
        assert_eq!(frame.stats(), FrameStats::default());
        assert!(frame.clip_queue.is_empty());
    }
}
