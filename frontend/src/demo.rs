//! Stand-in simulation so the port runs on its own.
//!
//! Two coloured blocks, one per player, over a palette-cycled backdrop.
//! Holding fire charges a score; releasing it offers the charge to the
//! leaderboard. Enough to exercise every path the real game drives.

use methane_core::audio::AudioDriver;
use methane_core::game::Game;
use methane_core::hiscore::{HighScoreEntry, HighScoreTable, MAX_HISCORES, NAME_LEN, ScoreBoard};
use methane_core::input::Joystick;
use methane_core::video::{Framebuffer, Palette, Rgb};

/// Palette entries 0..CYCLE_COLOURS are rotated every frame.
const CYCLE_COLOURS: usize = 240;
const PUFF_COLOUR: u8 = 250;
const BLOW_COLOUR: u8 = 251;
const PLAYER2_COLOUR: u8 = 252;

const BLOCK_SIZE: i32 = 12;
const SPEED: i32 = 2;

const SND_CHARGE: i32 = 1;
const SND_BANKED: i32 = 2;
const SMOD_TUNE: i32 = 0;

struct Player {
    x: i32,
    y: i32,
    charge: i32,
    name: [u8; NAME_LEN],
}

impl Player {
    fn new(x: i32, y: i32, name: &[u8; NAME_LEN]) -> Self {
        Self {
            x,
            y,
            charge: 0,
            name: *name,
        }
    }
}

pub struct DemoGame {
    board: ScoreBoard,
    framebuffer: Framebuffer,
    palette: Palette,
    players: [Player; 2],
    frame: usize,
    puff: bool,
}

impl DemoGame {
    pub fn new() -> Self {
        let framebuffer = Framebuffer::new();
        let (w, h) = (framebuffer.width() as i32, framebuffer.height() as i32);
        Self {
            board: ScoreBoard::new(),
            framebuffer,
            palette: Palette::new(),
            players: [
                Player::new(w / 3, h / 2, b"P1  "),
                Player::new(2 * w / 3, h / 2, b"P2  "),
            ],
            frame: 0,
            puff: true,
        }
    }

    fn step_player(&mut self, index: usize, joy: &Joystick, audio: &mut dyn AudioDriver) {
        let max_x = self.framebuffer.width() as i32 - BLOCK_SIZE;
        let max_y = self.framebuffer.height() as i32 - BLOCK_SIZE;
        let player = &mut self.players[index];

        player.x = (player.x + SPEED * (joy.right as i32 - joy.left as i32)).clamp(0, max_x);
        player.y = (player.y + SPEED * (joy.down as i32 - joy.up as i32)).clamp(0, max_y);

        let pan = player.x * 255 / max_x.max(1);
        if joy.fire {
            if player.charge % 25 == 0 {
                audio.play_sample(SND_CHARGE, pan, 22050 + player.charge * 40);
            }
            player.charge += 1;
        } else if player.charge > 0 {
            let (score, name) = (player.charge, player.name);
            player.charge = 0;
            if self.board.insert(score, name).is_some() {
                audio.play_sample(SND_BANKED, pan, 22050);
            }
        }
    }

    fn cycle_palette(&mut self) {
        for i in 0..CYCLE_COLOURS {
            let phase = (i + self.frame) % CYCLE_COLOURS;
            self.palette.set(i as u8, ramp(phase));
        }
    }

    fn draw(&mut self) {
        let (w, h) = (self.framebuffer.width(), self.framebuffer.height());
        for y in 0..h {
            let index = (y * CYCLE_COLOURS / h) as u8;
            for x in 0..w {
                self.framebuffer.put(x, y, index);
            }
        }

        let p1_colour = if self.puff { PUFF_COLOUR } else { BLOW_COLOUR };
        for (player, colour) in self.players.iter().zip([p1_colour, PLAYER2_COLOUR]) {
            for dy in 0..BLOCK_SIZE {
                for dx in 0..BLOCK_SIZE {
                    self.framebuffer
                        .put((player.x + dx) as usize, (player.y + dy) as usize, colour);
                }
            }
        }
    }
}

impl Default for DemoGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Smooth colour wheel over `CYCLE_COLOURS` steps.
fn ramp(phase: usize) -> Rgb {
    let channel = |offset: usize| {
        let p = (phase + offset) % CYCLE_COLOURS;
        let half = CYCLE_COLOURS / 2;
        let tri = if p < half { p } else { CYCLE_COLOURS - p };
        (tri * 255 / half) as u8
    };
    Rgb::new(channel(0), channel(80), channel(160))
}

impl HighScoreTable for DemoGame {
    fn insert_hi_score(&mut self, score: i32, name: [u8; NAME_LEN]) {
        self.board.insert(score, name);
    }

    fn hi_scores(&self) -> &[HighScoreEntry; MAX_HISCORES] {
        self.board.entries()
    }
}

impl Game for DemoGame {
    fn init_game(&mut self, audio: &mut dyn AudioDriver) {
        self.palette.set(PUFF_COLOUR, Rgb::new(255, 255, 255));
        self.palette.set(BLOW_COLOUR, Rgb::new(255, 220, 0));
        self.palette.set(PLAYER2_COLOUR, Rgb::new(0, 200, 255));
        audio.stop_module();
    }

    fn start_game(&mut self) {
        self.frame = 0;
        for player in &mut self.players {
            player.charge = 0;
        }
    }

    fn main_loop(
        &mut self,
        joy1: &Joystick,
        joy2: &Joystick,
        _next_level: bool,
        audio: &mut dyn AudioDriver,
    ) {
        self.frame = self.frame.wrapping_add(1);
        audio.update_module(SMOD_TUNE);
        self.step_player(0, joy1, audio);
        self.step_player(1, joy2, audio);
        self.cycle_palette();
        self.draw();
    }

    fn toggle_puff_blow(&mut self) {
        self.puff = !self.puff;
    }

    fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }
}
