use crate::audio::AudioDriver;
use crate::hiscore::HighScoreTable;
use crate::input::Joystick;
use crate::video::{Framebuffer, Palette};

/// The game simulation as seen by the platform layer.
///
/// The port never looks inside: it feeds joysticks in, reads the
/// framebuffer and palette out, and hands the leaderboard to the score
/// store. Implementors draw into their own [`Framebuffer`] and may rewrite
/// their [`Palette`] on any frame.
pub trait Game: HighScoreTable {
    /// One-time setup after the display exists.
    fn init_game(&mut self, audio: &mut dyn AudioDriver);

    /// Enter the title/attract sequence.
    fn start_game(&mut self);

    /// Advance one frame. `next_level` is the level-skip cheat; the port
    /// always passes `false`.
    fn main_loop(
        &mut self,
        joy1: &Joystick,
        joy2: &Joystick,
        next_level: bool,
        audio: &mut dyn AudioDriver,
    );

    /// Swap the player graphic (bound to Tab).
    fn toggle_puff_blow(&mut self) {}

    fn framebuffer(&self) -> &Framebuffer;

    fn palette(&self) -> &Palette;
}
