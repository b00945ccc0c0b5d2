//! Settings file, layered under the command line.
//!
//! `$CONFIG_DIR/methane/config.toml`, every key optional:
//!
//! ```toml
//! [video]
//! fullscreen = true
//! vsync = true
//! renderer = "compositing"
//! width = 640
//! height = 480
//!
//! [timing]
//! sleep = false
//!
//! [scores]
//! path = "Methane.HiScores"
//!
//! [audio]
//! enabled = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use methane_core::hiscore::HIGH_SCORE_FILE;
use methane_core::runtime::{DriverSettings, VideoSettings};
use serde::Deserialize;
use tracing::{info, warn};

use crate::args::Overrides;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub video: VideoConfig,
    pub timing: TimingConfig,
    pub scores: ScoresConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    pub fullscreen: bool,
    pub vsync: bool,
    pub renderer: String,
    pub width: u32,
    pub height: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        let v = VideoSettings::default();
        Self {
            title: v.title,
            fullscreen: v.fullscreen,
            vsync: v.vsync,
            renderer: v.renderer,
            width: v.width,
            height: v.height,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub sleep: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoresConfig {
    pub path: PathBuf,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(HIGH_SCORE_FILE),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl Config {
    /// Where the settings file lives, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("methane").join("config.toml"))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    /// Read `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text)
                .with_context(|| format!("reading {}", path.display()))
                .map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    /// The settings file if there is a usable one, defaults otherwise.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("{e:#}; using defaults");
                Self::default()
            }
        }
    }

    /// Fold the command-line switches in. They can only turn things off
    /// (vsync, fullscreen) or on (sleep), never back.
    pub fn apply(&mut self, overrides: Overrides) {
        if overrides.no_vsync {
            self.video.vsync = false;
        }
        if overrides.windowed {
            self.video.fullscreen = false;
        }
        if overrides.sleep {
            self.timing.sleep = true;
        }
    }

    pub fn driver_settings(&self) -> DriverSettings {
        DriverSettings {
            video: VideoSettings {
                title: self.video.title.clone(),
                width: self.video.width,
                height: self.video.height,
                fullscreen: self.video.fullscreen,
                vsync: self.video.vsync,
                renderer: self.video.renderer.clone(),
            },
            pacing: self.timing.sleep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let c = Config::default();
        assert!(c.video.fullscreen && c.video.vsync);
        assert_eq!(c.video.renderer, "compositing");
        assert_eq!((c.video.width, c.video.height), (640, 480));
        assert!(!c.timing.sleep);
        assert_eq!(c.scores.path, PathBuf::from("Methane.HiScores"));
        assert!(!c.audio.enabled);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = Config::from_toml("[video]\nvsync = false\n[audio]\nenabled = true\n").unwrap();
        assert!(!c.video.vsync);
        assert!(c.video.fullscreen);
        assert!(c.audio.enabled);
        assert_eq!(c.scores, ScoresConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::from_toml("[video\nvsync = 3").is_err());
        assert!(Config::from_toml("[video]\nvsync = \"yes\"").is_err());
    }

    #[test]
    fn command_line_wins() {
        let mut c = Config::default();
        c.apply(Overrides {
            no_vsync: true,
            windowed: true,
            sleep: true,
        });
        let s = c.driver_settings();
        assert!(!s.video.vsync);
        assert!(!s.video.fullscreen);
        assert!(s.pacing);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = std::env::temp_dir().join("methane_config_missing");
        let _ = std::fs::remove_dir_all(&dir);
        assert!(Config::load_from(&dir.join("config.toml")).unwrap().is_none());
    }

    #[test]
    fn load_reads_file() {
        let dir = std::env::temp_dir().join("methane_config_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[timing]\nsleep = true\n[scores]\npath = \"x.hs\"\n").unwrap();

        let c = Config::load_from(&path).unwrap().unwrap();
        assert!(c.timing.sleep);
        assert_eq!(c.scores.path, PathBuf::from("x.hs"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
