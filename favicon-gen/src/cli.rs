//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "favicon-gen",
    about = "Generate site favicons from the brand logo",
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Render the brand text instead of cropping the circle logo.
    #[arg(long)]
    pub text: bool,

    /// Logo image to crop (overrides FAVICON_SOURCE).
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory receiving the favicons (overrides FAVICON_OUTPUT_DIR).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Unrecognized arguments; accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Which favicon set to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    CircleLogo,
    Text,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.text { Mode::Text } else { Mode::CircleLogo }
    }

    /// Apply path overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
    }
}
