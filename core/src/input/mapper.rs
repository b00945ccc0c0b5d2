use super::joystick::{Joystick, KEY_ENTER};
use super::keyboard::{Key, KeyboardState};

/// The keys driving one abstract joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySet {
    pub right: Key,
    pub left: Key,
    pub up: Key,
    pub down: Key,
    pub fire: Key,
}

/// Player 1: cursor keys, right Ctrl fires.
pub const PLAYER1_KEYS: KeySet = KeySet {
    right: Key::Right,
    left: Key::Left,
    up: Key::Up,
    down: Key::Down,
    fire: Key::RCtrl,
};

/// Player 2: WASD, left Ctrl fires.
pub const PLAYER2_KEYS: KeySet = KeySet {
    right: Key::D,
    left: Key::A,
    up: Key::W,
    down: Key::S,
    fire: Key::LCtrl,
};

/// Everything the platform reports for one frame: the key snapshot and
/// whether a window-close/quit event was found in the event queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub keys: KeyboardState,
    pub quit_event: bool,
}

/// Outcome of one sample, beyond the joystick updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResult {
    /// False once Escape is held or a quit event arrived.
    pub running: bool,
    /// Tab went down this frame; the simulation should swap the player graphic.
    pub toggle_puff_blow: bool,
}

/// Owns both players' joysticks and refreshes them from each frame's input.
pub struct InputMapper {
    joy1: Joystick,
    joy2: Joystick,
    keys1: KeySet,
    keys2: KeySet,
    tab_was_held: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::with_keys(PLAYER1_KEYS, PLAYER2_KEYS)
    }

    pub fn with_keys(keys1: KeySet, keys2: KeySet) -> Self {
        Self {
            joy1: Joystick::default(),
            joy2: Joystick::default(),
            keys1,
            keys2,
            tab_was_held: false,
        }
    }

    /// Map one frame of input onto the joysticks.
    ///
    /// Both joysticks are overwritten in full, and both report
    /// [`KEY_ENTER`] as their key code.
    pub fn sample(&mut self, frame: &InputFrame) -> SampleResult {
        let keys = &frame.keys;

        apply(&mut self.joy1, &self.keys1, keys);
        apply(&mut self.joy2, &self.keys2, keys);

        let tab = keys.is_pressed(Key::Tab);
        let toggle_puff_blow = tab && !self.tab_was_held;
        self.tab_was_held = tab;

        let quit = keys.is_pressed(Key::Escape) || frame.quit_event;

        SampleResult {
            running: !quit,
            toggle_puff_blow,
        }
    }

    pub fn joy1(&self) -> &Joystick {
        &self.joy1
    }

    pub fn joy2(&self) -> &Joystick {
        &self.joy2
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(joy: &mut Joystick, set: &KeySet, keys: &KeyboardState) {
    *joy = Joystick {
        right: keys.is_pressed(set.right),
        left: keys.is_pressed(set.left),
        up: keys.is_pressed(set.up),
        down: keys.is_pressed(set.down),
        fire: keys.is_pressed(set.fire),
        key: KEY_ENTER,
    };
}
