//! Sound playback capability offered to the simulation.
//!
//! The simulation calls these entry points by numeric id; the backend
//! behind them is chosen once at start-up. [`NullAudio`] accepts every call
//! and does nothing, so callers never need to know whether sound exists.

/// A sound backend driven by the simulation and the frame loop.
pub trait AudioDriver {
    /// Bring the backend up. Called once before the game is initialised.
    fn init(&mut self) {}

    /// Shut the backend down. Called once at shutdown.
    fn remove(&mut self) {}

    /// Trigger sample `id`. `pos` is the stereo position (0 = left,
    /// 255 = right); `rate` is the playback rate in Hz.
    fn play_sample(&mut self, id: i32, pos: i32, rate: i32);

    /// Start music module `id`.
    fn play_module(&mut self, id: i32);

    fn stop_module(&mut self);

    /// Restart module `id` if it is not the one currently playing.
    fn update_module(&mut self, id: i32);

    /// Per-frame housekeeping, called after each presented frame.
    fn update(&mut self) {}
}

/// The "no audio backend" variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioDriver for NullAudio {
    fn play_sample(&mut self, _id: i32, _pos: i32, _rate: i32) {}

    fn play_module(&mut self, _id: i32) {}

    fn stop_module(&mut self) {}

    fn update_module(&mut self, _id: i32) {}
}
