use methane_core::input::{InputFrame, KeyboardState};
use methane_core::runtime::{Display, Platform, PlatformError, VideoSettings};
use methane_core::video::{Framebuffer, Palette};
use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::surface::Surface;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::input::scancode_for;
use crate::video::{self, StreamingTexture};

/// The SDL2 implementation of the platform contract.
pub struct SdlPlatform {
    sdl: Sdl,
    video: VideoSubsystem,
    event_pump: EventPump,
}

impl SdlPlatform {
    pub fn new(sdl: Sdl, video: VideoSubsystem) -> Result<Self, String> {
        let event_pump = sdl.event_pump()?;
        Ok(Self {
            sdl,
            video,
            event_pump,
        })
    }
}

impl Platform for SdlPlatform {
    type Surface = Surface<'static>;
    type Window = Window;
    type Renderer = Canvas<Window>;
    type Texture = StreamingTexture;

    fn create_surface(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<Surface<'static>, PlatformError> {
        video::create_surface(width, height)
    }

    fn create_window(&mut self, settings: &VideoSettings) -> Result<Window, PlatformError> {
        video::create_window(&self.video, settings)
    }

    fn create_renderer(
        &mut self,
        window: &Window,
        settings: &VideoSettings,
    ) -> Result<Canvas<Window>, PlatformError> {
        video::create_renderer(window, settings)
    }

    fn create_texture(
        &mut self,
        renderer: &Canvas<Window>,
        width: usize,
        height: usize,
    ) -> Result<StreamingTexture, PlatformError> {
        StreamingTexture::create(renderer, width, height)
    }

    fn on_display_ready(&mut self) {
        self.sdl.mouse().show_cursor(false);
        print_info();
    }

    fn present(
        &mut self,
        display: &mut Display<Self>,
        framebuffer: &Framebuffer,
        palette: &Palette,
    ) -> Result<(), PlatformError> {
        video::present(
            &mut display.surface,
            &mut display.texture,
            &mut display.renderer,
            framebuffer,
            palette,
        )
    }

    fn poll_input(&mut self) -> InputFrame {
        self.event_pump.pump_events();
        let keys = {
            let state = self.event_pump.keyboard_state();
            KeyboardState::from_fn(|key| state.is_scancode_pressed(scancode_for(key)))
        };

        // Drain the whole queue; only the quit event matters.
        let mut quit_event = false;
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                quit_event = true;
            }
        }

        InputFrame { keys, quit_event }
    }
}

fn print_info() {
    println!("The GNU General Public License V2 applies to this game.");
    println!("See: http://methane.sourceforge.net");
    println!();
    println!("Instructions:");
    println!("  Player 1: cursor keys move, right CTRL fires gas.");
    println!("  Player 2: W A S D move, left CTRL fires gas.");
    println!("  Hold fire to suck a trapped baddie into the gun, release to throw it.");
    println!("  Throw baddies at the wall to destroy them.");
    println!("  TAB changes the player graphic.");
    println!("  ESC quits and saves the high scores.");
}
