/// Key code reported on every joystick every frame.
///
/// The high-score name-entry screen waits for a key code to confirm a
/// name; the port has no text entry, so it always reports Enter.
pub const KEY_ENTER: i32 = 13;

/// Per-player input state consumed by the simulation.
///
/// Fields reflect only the most recent sample; nothing latches between
/// frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Joystick {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub key: i32,
}
