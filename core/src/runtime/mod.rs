//! The frame loop and the platform contract it runs on.

pub mod driver;
pub mod pacing;
pub mod platform;

pub use driver::{DriverSettings, MainLoopDriver, Outcome, RunState};
pub use pacing::{FRAME_BUDGET, FramePacer, frame_delay};
pub use platform::{Display, Platform, PlatformError, Stage, VideoSettings};
