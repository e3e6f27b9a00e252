//! Frame rendering: the stage functions, the pipeline that runs them and the
//! surfaces they draw into.

pub mod frame;
pub mod framebuffer;
pub mod overlay;
pub mod pipeline;
pub mod project;
pub mod rasterizer;
pub mod screen_clip;
pub mod sort;
pub mod submit;
pub mod surface;
pub mod visibility;

pub use frame::{FrameStats, RenderFrame, Submitted};
pub use framebuffer::FrameBuffer;
pub use pipeline::Pipeline;
pub use surface::Surface;
