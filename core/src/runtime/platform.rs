//! Presentation resources and the platform trait that creates them.
//!
//! A [`Display`] is acquired in four stages (offscreen surface, window,
//! renderer, streaming texture). Each stage owns its resource and releases
//! it on drop, so a failure part-way through unwinds exactly the stages
//! already built, in reverse order, and a complete display releases
//! everything when it goes out of scope.

use std::time::Duration;

use crate::input::InputFrame;
use crate::video::{Framebuffer, Palette};

/// Acquisition stage, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Surface,
    Window,
    Renderer,
    Texture,
    Present,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Surface => "surface",
            Self::Window => "window",
            Self::Renderer => "renderer",
            Self::Texture => "texture",
            Self::Present => "frame",
        };
        f.write_str(name)
    }
}

/// A platform call that failed, with the platform's own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub stage: Stage,
    pub message: String,
}

impl PlatformError {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stage {
            Stage::Present => write!(f, "couldn't present frame: {}", self.message),
            stage => write!(f, "couldn't create {stage}: {}", self.message),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Window and renderer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSettings {
    pub title: String,
    /// Window size; the frame is scaled to fit.
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Vertical-sync hint for the renderer.
    pub vsync: bool,
    /// Render driver hint.
    pub renderer: String,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            title: "Super Methane Bros SDL2".to_string(),
            width: 640,
            height: 480,
            fullscreen: true,
            vsync: true,
            renderer: "compositing".to_string(),
        }
    }
}

/// Windowing, input and presentation services.
///
/// Resource types release themselves on drop.
pub trait Platform {
    /// Offscreen ARGB8888 surface the palette blit writes into.
    type Surface;
    type Window;
    type Renderer;
    /// Streaming texture the surface is uploaded to every frame.
    type Texture;

    fn create_surface(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<Self::Surface, PlatformError>;

    fn create_window(&mut self, settings: &VideoSettings) -> Result<Self::Window, PlatformError>;

    /// Apply the driver and vsync hints, then create the renderer.
    fn create_renderer(
        &mut self,
        window: &Self::Window,
        settings: &VideoSettings,
    ) -> Result<Self::Renderer, PlatformError>;

    fn create_texture(
        &mut self,
        renderer: &Self::Renderer,
        width: usize,
        height: usize,
    ) -> Result<Self::Texture, PlatformError>;

    /// Called once after every stage succeeded.
    fn on_display_ready(&mut self) {}

    /// Blit `framebuffer` through `palette` into the surface, upload it to
    /// the texture and show it.
    fn present(
        &mut self,
        display: &mut Display<Self>,
        framebuffer: &Framebuffer,
        palette: &Palette,
    ) -> Result<(), PlatformError>;

    /// Snapshot the keyboard and drain the event queue without blocking.
    fn poll_input(&mut self) -> InputFrame;

    /// Block the calling thread for `duration`.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The acquired presentation resources.
///
/// Fields drop in declaration order, which is the reverse of acquisition.
pub struct Display<P: Platform + ?Sized> {
    pub texture: P::Texture,
    pub renderer: P::Renderer,
    pub window: P::Window,
    pub surface: P::Surface,
}

impl<P: Platform + ?Sized> Display<P> {
    /// Create all four resources for a `width` x `height` frame.
    ///
    /// On error, whatever was already created is dropped before returning.
    pub fn acquire(
        platform: &mut P,
        settings: &VideoSettings,
        width: usize,
        height: usize,
    ) -> Result<Self, PlatformError> {
        let surface = platform.create_surface(width, height)?;
        let window = platform.create_window(settings)?;
        let renderer = platform.create_renderer(&window, settings)?;
        let texture = platform.create_texture(&renderer, width, height)?;

        Ok(Self {
            texture,
            renderer,
            window,
            surface,
        })
    }
}
