use methane_core::input::Key;
use sdl2::keyboard::Scancode;

/// Physical key behind each abstract [`Key`].
pub fn scancode_for(key: Key) -> Scancode {
    match key {
        Key::Escape => Scancode::Escape,
        Key::Tab => Scancode::Tab,
        Key::Left => Scancode::Left,
        Key::Right => Scancode::Right,
        Key::Up => Scancode::Up,
        Key::Down => Scancode::Down,
        Key::LCtrl => Scancode::LCtrl,
        Key::RCtrl => Scancode::RCtrl,
        Key::W => Scancode::W,
        Key::A => Scancode::A,
        Key::S => Scancode::S,
        Key::D => Scancode::D,
    }
}
