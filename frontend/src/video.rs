//! SDL2 presentation resources: the ARGB8888 offscreen surface, the window,
//! the accelerated renderer and the streaming texture the surface is
//! uploaded to each frame.

use std::mem::ManuallyDrop;

use methane_core::runtime::{PlatformError, Stage, VideoSettings};
use methane_core::video::{Framebuffer, Palette, blit_bytes};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture};
use sdl2::surface::Surface;
use sdl2::video::Window;

pub fn create_surface(width: usize, height: usize) -> Result<Surface<'static>, PlatformError> {
    Surface::new(width as u32, height as u32, PixelFormatEnum::ARGB8888)
        .map_err(|e| PlatformError::new(Stage::Surface, e))
}

pub fn create_window(
    video: &sdl2::VideoSubsystem,
    settings: &VideoSettings,
) -> Result<Window, PlatformError> {
    let mut builder = video.window(&settings.title, settings.width, settings.height);
    if settings.fullscreen {
        builder.fullscreen();
    }
    builder
        .build()
        .map_err(|e| PlatformError::new(Stage::Window, e.to_string()))
}

/// Apply the render-driver and vsync hints, then build an accelerated
/// renderer on `window`.
pub fn create_renderer(
    window: &Window,
    settings: &VideoSettings,
) -> Result<Canvas<Window>, PlatformError> {
    sdl2::hint::set("SDL_RENDER_DRIVER", &settings.renderer);
    sdl2::hint::set("SDL_RENDER_VSYNC", if settings.vsync { "1" } else { "0" });

    window
        .clone()
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| PlatformError::new(Stage::Renderer, e.to_string()))
}

/// Streaming texture owned by a renderer.
///
/// The texture is destroyed on drop. It must be dropped before the
/// renderer that created it.
pub struct StreamingTexture {
    texture: ManuallyDrop<Texture>,
}

impl StreamingTexture {
    pub fn create(
        renderer: &Canvas<Window>,
        width: usize,
        height: usize,
    ) -> Result<Self, PlatformError> {
        let texture = renderer
            .texture_creator()
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width as u32, height as u32)
            .map_err(|e| PlatformError::new(Stage::Texture, e.to_string()))?;
        Ok(Self {
            texture: ManuallyDrop::new(texture),
        })
    }
}

impl Drop for StreamingTexture {
    fn drop(&mut self) {
        // SAFETY: taken exactly once, here; the owning renderer is still
        // alive because `Display` drops its texture field first.
        unsafe { ManuallyDrop::take(&mut self.texture).destroy() }
    }
}

/// Blit the frame into the surface, upload it and show it.
pub fn present(
    surface: &mut Surface<'static>,
    texture: &mut StreamingTexture,
    renderer: &mut Canvas<Window>,
    framebuffer: &Framebuffer,
    palette: &Palette,
) -> Result<(), PlatformError> {
    let pitch = surface.pitch() as usize;
    surface.with_lock_mut(|pixels| blit_bytes(framebuffer, palette, pixels, pitch));

    let texture = &mut *texture.texture;
    surface
        .with_lock(|pixels| texture.update(None, pixels, pitch))
        .map_err(|e| PlatformError::new(Stage::Present, e.to_string()))?;

    renderer
        .copy(texture, None, None)
        .map_err(|e| PlatformError::new(Stage::Present, e))?;
    renderer.present();
    Ok(())
}
