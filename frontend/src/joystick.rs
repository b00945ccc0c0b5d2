use sdl2::JoystickSubsystem;
use sdl2::joystick::Joystick;
use tracing::{info, warn};

/// Physical controllers opened at start-up. Kept open for the whole run
/// and closed when dropped.
const MAX_JOYSTICKS: u32 = 2;

/// Open the first two attached joysticks, logging what was found.
/// Failures are logged and skipped.
pub fn open_joysticks(subsystem: &JoystickSubsystem) -> Vec<Joystick> {
    let count = subsystem.num_joysticks().unwrap_or_else(|e| {
        warn!("cannot count joysticks: {e}");
        0
    });
    info!("found {count} joysticks");

    (0..count.min(MAX_JOYSTICKS))
        .filter_map(|index| match subsystem.open(index) {
            Ok(joy) => {
                info!(
                    "opened joystick {index} ({}) ({} axes, {} buttons)",
                    joy.name(),
                    joy.num_axes(),
                    joy.num_buttons()
                );
                Some(joy)
            }
            Err(e) => {
                warn!("failed to open joystick {index}: {e}");
                None
            }
        })
        .collect()
}
