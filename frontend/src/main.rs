use std::process::ExitCode;

use methane_core::hiscore::HighScoreStore;
use methane_core::runtime::MainLoopDriver;

mod args;
mod audio;
mod config;
mod demo;
mod input;
mod joystick;
mod logging;
mod platform;
mod video;

fn main() -> ExitCode {
    logging::init();

    let args = args::Args::from_env();
    let mut config = config::Config::load_or_default();
    config.apply(args.overrides());

    let sdl = match start_sdl() {
        Ok(sdl) => sdl,
        Err(e) => {
            eprintln!("Can't init SDL : {e:#}");
            return ExitCode::from(1);
        }
    };

    let joysticks = joystick::open_joysticks(&sdl.joystick);
    let mut audio = audio::select(&sdl.context, config.audio.enabled);

    let mut platform = match platform::SdlPlatform::new(sdl.context, sdl.video) {
        Ok(platform) => platform,
        Err(e) => {
            eprintln!("Can't init SDL : {e}");
            return ExitCode::from(1);
        }
    };

    let mut game = demo::DemoGame::new();
    let outcome = MainLoopDriver::new(
        &mut platform,
        &mut game,
        audio.as_mut(),
        HighScoreStore::new(&config.scores.path),
        config.driver_settings(),
    )
    .run();

    drop(joysticks);
    ExitCode::from(outcome.exit_code())
}

/// The SDL pieces the port needs before anything else can run.
struct SdlStartup {
    context: sdl2::Sdl,
    video: sdl2::VideoSubsystem,
    joystick: sdl2::JoystickSubsystem,
}

fn start_sdl() -> anyhow::Result<SdlStartup> {
    let context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video = context.video().map_err(anyhow::Error::msg)?;
    let joystick = context.joystick().map_err(anyhow::Error::msg)?;
    Ok(SdlStartup {
        context,
        video,
        joystick,
    })
}
