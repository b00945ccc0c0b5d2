//! One run of the game: acquire the display, loop frames until asked to
//! stop, then persist scores and release everything.
//!
//! ```text
//! Idle ──acquire ok──> Running ──quit──> Stopped
//!   └──acquire failed─────────────────────^
//! ```
//!
//! Each frame is strictly ordered: sample input, step the simulation,
//! blit and present, update audio, then optionally sleep off the rest of
//! the frame budget. A quit request is only acted on at the top of the
//! next iteration.

use std::time::Instant;

use tracing::{error, info, warn};

use super::pacing::FramePacer;
use super::platform::{Display, Platform, PlatformError, VideoSettings};
use crate::audio::AudioDriver;
use crate::game::Game;
use crate::hiscore::HighScoreStore;
use crate::input::InputMapper;

/// Loop options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverSettings {
    pub video: VideoSettings,
    /// Sleep off the remainder of each 20 ms frame.
    pub pacing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The loop ran until the player quit.
    Completed { frames: u64 },
    /// The display could not be set up; the loop never ran.
    DisplayUnavailable(PlatformError),
}

impl Outcome {
    /// Process exit code. Both outcomes went through a normal shutdown.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

pub struct MainLoopDriver<'a, P: Platform, G: Game> {
    platform: &'a mut P,
    game: &'a mut G,
    audio: &'a mut dyn AudioDriver,
    store: HighScoreStore,
    settings: DriverSettings,
    input: InputMapper,
    state: RunState,
}

impl<'a, P: Platform, G: Game> MainLoopDriver<'a, P, G> {
    pub fn new(
        platform: &'a mut P,
        game: &'a mut G,
        audio: &'a mut dyn AudioDriver,
        store: HighScoreStore,
        settings: DriverSettings,
    ) -> Self {
        Self {
            platform,
            game,
            audio,
            store,
            settings,
            input: InputMapper::new(),
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Drive the whole lifecycle. Consumes the `Idle` state; calling it again
    /// after it returns does nothing but report zero frames.
    pub fn run(&mut self) -> Outcome {
        if self.state != RunState::Idle {
            return Outcome::Completed { frames: 0 };
        }

        // Loaded before the display exists so the save on every shutdown
        // path writes back what was read.
        self.store.load(&mut *self.game);

        let (width, height) = {
            let fb = self.game.framebuffer();
            (fb.width(), fb.height())
        };

        let video = &self.settings.video;
        info!(
            fullscreen = video.fullscreen,
            vsync = video.vsync,
            renderer = %video.renderer,
            "acquiring display"
        );

        let mut display = match Display::acquire(&mut *self.platform, video, width, height) {
            Ok(display) => display,
            Err(e) => {
                error!("{e}");
                self.shutdown();
                return Outcome::DisplayUnavailable(e);
            }
        };

        self.platform.on_display_ready();
        self.audio.init();
        self.game.init_game(&mut *self.audio);
        self.game.start_game();

        let frames = self.run_frames(&mut display);

        self.audio.remove();
        self.shutdown();
        drop(display);
        Outcome::Completed { frames }
    }

    fn run_frames(&mut self, display: &mut Display<P>) -> u64 {
        self.state = RunState::Running;
        let mut pacer = FramePacer::new(Instant::now());
        let mut frames = 0;

        while self.state == RunState::Running {
            let frame = self.platform.poll_input();
            let sample = self.input.sample(&frame);
            if sample.toggle_puff_blow {
                self.game.toggle_puff_blow();
            }

            self.game.main_loop(
                self.input.joy1(),
                self.input.joy2(),
                false,
                &mut *self.audio,
            );

            if let Err(e) =
                self.platform
                    .present(display, self.game.framebuffer(), self.game.palette())
            {
                warn!("{e}");
            }
            self.audio.update();

            if self.settings.pacing {
                let platform = &mut *self.platform;
                pacer.pace(|wait| platform.delay(wait));
            }

            frames += 1;
            if !sample.running {
                self.state = RunState::Stopped;
            }
        }

        info!(frames, "main loop finished");
        frames
    }

    fn shutdown(&mut self) {
        self.state = RunState::Stopped;
        self.store.save(&*self.game);
    }
}
