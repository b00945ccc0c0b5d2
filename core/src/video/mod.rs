//! Indexed-colour video: the simulation's byte-per-pixel framebuffer, its
//! 256-entry palette, and the blitter that turns both into ARGB8888 pixels
//! for the presentation surface.

pub mod blitter;
pub mod framebuffer;
pub mod palette;

pub use blitter::{PresentationBuffer, blit, blit_bytes};
pub use framebuffer::{Framebuffer, SCR_HEIGHT, SCR_WIDTH};
pub use palette::{PALETTE_SIZE, Palette, Rgb};
