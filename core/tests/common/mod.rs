#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use methane_core::audio::AudioDriver;
use methane_core::game::Game;
use methane_core::hiscore::{HighScoreEntry, HighScoreStore, HighScoreTable, MAX_HISCORES, NAME_LEN, ScoreBoard};
use methane_core::input::{InputFrame, Joystick};
use methane_core::runtime::{Display, Platform, PlatformError, Stage, VideoSettings};
use methane_core::video::{Framebuffer, Palette, PresentationBuffer, Rgb, blit};

pub type Log = Rc<RefCell<Vec<String>>>;

/// A resource that records its own release.
pub struct Tracked {
    name: &'static str,
    log: Log,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("release {}", self.name));
    }
}

pub struct FakeSurface {
    pub buffer: PresentationBuffer,
    _tracked: Tracked,
}

/// Scripted platform: fails at a chosen stage, replays queued input and
/// sends a quit event once the queue runs dry.
pub struct FakePlatform {
    pub log: Log,
    pub fail_at: Option<Stage>,
    pub inputs: VecDeque<InputFrame>,
    pub pitch: usize,
    pub frames: Vec<Vec<u32>>,
    pub delays: Vec<Duration>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail_at: None,
            inputs: VecDeque::new(),
            pitch: 0,
            frames: Vec::new(),
            delays: Vec::new(),
        }
    }

    pub fn failing_at(stage: Stage) -> Self {
        Self {
            fail_at: Some(stage),
            ..Self::new()
        }
    }

    pub fn push_input(&mut self, frame: InputFrame) {
        self.inputs.push_back(frame);
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.log.borrow().iter().filter(|e| *e == entry).count()
    }

    fn stage(&mut self, stage: Stage, name: &'static str) -> Result<Tracked, PlatformError> {
        if self.fail_at == Some(stage) {
            self.log.borrow_mut().push(format!("fail {name}"));
            return Err(PlatformError::new(stage, "scripted failure"));
        }
        self.log.borrow_mut().push(format!("create {name}"));
        Ok(Tracked {
            name,
            log: Rc::clone(&self.log),
        })
    }
}

impl Platform for FakePlatform {
    type Surface = FakeSurface;
    type Window = Tracked;
    type Renderer = Tracked;
    type Texture = Tracked;

    fn create_surface(&mut self, width: usize, height: usize) -> Result<FakeSurface, PlatformError> {
        let tracked = self.stage(Stage::Surface, "surface")?;
        Ok(FakeSurface {
            buffer: PresentationBuffer::with_pitch(width, height, self.pitch),
            _tracked: tracked,
        })
    }

    fn create_window(&mut self, _settings: &VideoSettings) -> Result<Tracked, PlatformError> {
        self.stage(Stage::Window, "window")
    }

    fn create_renderer(
        &mut self,
        _window: &Tracked,
        _settings: &VideoSettings,
    ) -> Result<Tracked, PlatformError> {
        self.stage(Stage::Renderer, "renderer")
    }

    fn create_texture(
        &mut self,
        _renderer: &Tracked,
        _width: usize,
        _height: usize,
    ) -> Result<Tracked, PlatformError> {
        self.stage(Stage::Texture, "texture")
    }

    fn on_display_ready(&mut self) {
        self.log.borrow_mut().push("ready".to_string());
    }

    fn present(
        &mut self,
        display: &mut Display<Self>,
        framebuffer: &Framebuffer,
        palette: &Palette,
    ) -> Result<(), PlatformError> {
        blit(framebuffer, palette, &mut display.surface.buffer);
        self.frames.push(display.surface.buffer.pixels().to_vec());
        self.log.borrow_mut().push("present".to_string());
        Ok(())
    }

    fn poll_input(&mut self) -> InputFrame {
        self.inputs.pop_front().unwrap_or(InputFrame {
            quit_event: true,
            ..InputFrame::default()
        })
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}

/// Audio backend that records every call.
#[derive(Default)]
pub struct RecordingAudio {
    pub calls: Vec<String>,
}

impl AudioDriver for RecordingAudio {
    fn init(&mut self) {
        self.calls.push("init".to_string());
    }

    fn remove(&mut self) {
        self.calls.push("remove".to_string());
    }

    fn play_sample(&mut self, id: i32, pos: i32, rate: i32) {
        self.calls.push(format!("sample {id} {pos} {rate}"));
    }

    fn play_module(&mut self, id: i32) {
        self.calls.push(format!("module {id}"));
    }

    fn stop_module(&mut self) {
        self.calls.push("stop".to_string());
    }

    fn update_module(&mut self, id: i32) {
        self.calls.push(format!("update module {id}"));
    }

    fn update(&mut self) {
        self.calls.push("update".to_string());
    }
}

/// Minimal simulation: writes the frame number into pixel (0, 0), colours
/// index 1 from the frame number, and remembers what it was given.
pub struct TestGame {
    pub board: ScoreBoard,
    pub framebuffer: Framebuffer,
    pub palette: Palette,
    pub seen: Vec<(Joystick, Joystick, bool)>,
    pub toggles: usize,
    pub initialised: bool,
    pub started: bool,
}

impl TestGame {
    pub fn new() -> Self {
        Self {
            board: ScoreBoard::new(),
            framebuffer: Framebuffer::with_size(8, 4),
            palette: Palette::new(),
            seen: Vec::new(),
            toggles: 0,
            initialised: false,
            started: false,
        }
    }
}

impl HighScoreTable for TestGame {
    fn insert_hi_score(&mut self, score: i32, name: [u8; NAME_LEN]) {
        self.board.insert(score, name);
    }

    fn hi_scores(&self) -> &[HighScoreEntry; MAX_HISCORES] {
        self.board.entries()
    }
}

impl Game for TestGame {
    fn init_game(&mut self, _audio: &mut dyn AudioDriver) {
        self.initialised = true;
    }

    fn start_game(&mut self) {
        self.started = true;
    }

    fn main_loop(
        &mut self,
        joy1: &Joystick,
        joy2: &Joystick,
        next_level: bool,
        audio: &mut dyn AudioDriver,
    ) {
        self.seen.push((*joy1, *joy2, next_level));
        let frame = self.seen.len() as u8;
        self.framebuffer.put(0, 0, 1);
        self.palette.set(1, Rgb::new(frame, 0, 0));
        if joy1.fire {
            audio.play_sample(3, 128, 22050);
        }
    }

    fn toggle_puff_blow(&mut self) {
        self.toggles += 1;
    }

    fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// A fresh, empty scratch directory under the system temp dir, removed
/// again when dropped.
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("methane_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    ScratchDir(dir)
}

/// The score file inside `dir`.
pub fn store_in(dir: &ScratchDir) -> HighScoreStore {
    HighScoreStore::new(dir.join("Methane.HiScores"))
}
