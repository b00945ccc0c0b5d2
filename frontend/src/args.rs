use clap::Parser;
use tracing::debug;

/// Command line: bare words in any order. `nosync` turns off the vsync
/// hint, `window` runs windowed, `sleep` enables 20 ms frame pacing.
/// Anything else is ignored.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "methane", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Switches the command line can flip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub no_vsync: bool,
    pub windowed: bool,
    pub sleep: bool,
}

impl Args {
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_else(|_| Self {
            tokens: std::env::args().skip(1).collect(),
        })
    }

    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides::default();
        for token in &self.tokens {
            match token.as_str() {
                "nosync" => overrides.no_vsync = true,
                "window" => overrides.windowed = true,
                "sleep" => overrides.sleep = true,
                other => debug!("ignoring argument {other:?}"),
            }
        }
        overrides
    }
}
