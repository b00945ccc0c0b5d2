//! Keyboard snapshot to abstract joystick mapping.
//!
//! The frontend samples the platform's current key state once per frame
//! into a [`KeyboardState`]; [`InputMapper::sample`] turns it into the two
//! per-player [`Joystick`] structures the simulation reads, plus the
//! run/quit decision.

pub mod joystick;
pub mod keyboard;
pub mod mapper;

pub use joystick::{Joystick, KEY_ENTER};
pub use keyboard::{Key, KeyboardState};
pub use mapper::{InputFrame, InputMapper, KeySet, PLAYER1_KEYS, PLAYER2_KEYS, SampleResult};
