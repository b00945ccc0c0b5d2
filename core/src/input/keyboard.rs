/// Keys the port reads. Anything else on the physical keyboard is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    LCtrl,
    RCtrl,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::Escape,
        Key::Tab,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::LCtrl,
        Key::RCtrl,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Snapshot of which [`Key`]s are held right now.
///
/// This is level state, not an event queue: a key pressed and released
/// between two snapshots is never seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: u16,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a platform query, asking once per known key.
    pub fn from_fn(mut is_pressed: impl FnMut(Key) -> bool) -> Self {
        let mut state = Self::new();
        for key in Key::ALL {
            state.set(key, is_pressed(key));
        }
        state
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.held |= key.bit();
        } else {
            self.held &= !key.bit();
        }
    }

    /// Builder-style press, handy when scripting input.
    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }
}
