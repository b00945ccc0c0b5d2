pub mod audio;
pub mod game;
pub mod hiscore;
pub mod input;
pub mod runtime;
pub mod video;

pub mod prelude {
    pub use crate::audio::{AudioDriver, NullAudio};
    pub use crate::game::Game;
    pub use crate::hiscore::{HighScoreEntry, HighScoreStore, HighScoreTable, MAX_HISCORES};
    pub use crate::input::{InputFrame, Joystick, Key, KeyboardState};
    pub use crate::runtime::{DriverSettings, MainLoopDriver, Platform, PlatformError};
    pub use crate::video::{Framebuffer, Palette, Rgb};
}
