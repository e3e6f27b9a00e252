//! SDL2 window that presents the frame buffer and collects input.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{RenderError, RenderResult};

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Input for one frame. Axes are `-1`, `0` or `1`; toggles are true on the
/// frame the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// W / S
    pub forward: f32,
    /// D / A
    pub strafe: f32,
    /// Space / left shift
    pub vertical: f32,
    /// Right / left arrow
    pub turn: f32,
    /// F1
    pub toggle_wireframe: bool,
    /// F2
    pub toggle_edge_labels: bool,
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    input: InputState,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> RenderResult<Self> {
        let sdl_context = sdl2::init().map_err(RenderError::Window)?;
        let video_subsystem = sdl_context.video().map_err(RenderError::Window)?;
        let timer_subsystem = sdl_context.timer().map_err(RenderError::Window)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(RenderError::Window)?;
        let texture = Self::streaming_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            input: InputState::default(),
            width,
            height,
        })
    }

    fn streaming_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> RenderResult<sdl2::render::Texture<'static>> {
        // SAFETY: the creator is boxed, never moved out of the Window, and
        // outlives the texture because of field order.
        let creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| RenderError::Window(e.to_string()))
    }

    /// Drains pending events and refreshes [`input`](Self::input).
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        let mut toggle_wireframe = false;
        let mut toggle_edge_labels = false;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::F1),
                    repeat: false,
                    ..
                } => toggle_wireframe = true,
                Event::KeyDown {
                    keycode: Some(Keycode::F2),
                    repeat: false,
                    ..
                } => toggle_edge_labels = true,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w as u32, h as u32),
                _ => {}
            }
        }

        let keys = self.event_pump.keyboard_state();
        let down = |code| keys.is_scancode_pressed(code);
        self.input = InputState {
            forward: axis(down(Scancode::W), down(Scancode::S)),
            strafe: axis(down(Scancode::D), down(Scancode::A)),
            vertical: axis(down(Scancode::Space), down(Scancode::LShift)),
            turn: axis(down(Scancode::Right), down(Scancode::Left)),
            toggle_wireframe,
            toggle_edge_labels,
        };
        result
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn present(&mut self, buffer: &[u8]) -> RenderResult<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| RenderError::Window(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(RenderError::Window)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.texture = Self::streaming_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        assert_eq!(axis(true, true), 0.0);
        assert_eq!(axis(true, false), 1.0);
        assert_eq!(axis(false, true), -1.0);
        assert_eq!(axis(false, false), 0.0);
    }
}
