//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::utils::Config;

#[derive(Parser, Debug)]
#[command(name = "medallions")]
#[command(about = "Audio-reactive medallion pattern", long_about = None)]
pub struct Args {
    /// WAV file to play and analyze
    #[arg(long, value_name = "WAV")]
    pub track: Option<PathBuf>,

    /// Seed for a reproducible layout
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Run in an 800x600 window instead of fullscreen
    #[arg(short, long)]
    pub windowed: bool,

    /// Read settings from this file instead of ~/.medallions.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Compose one silent 800x600 frame, print a summary and exit
    #[arg(long)]
    pub dump_frame: bool,
}

/// Settings after command-line values have overridden the config file
pub struct Settings {
    pub config: Config,
    pub track: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        let config = match &self.config {
            Some(path) => Config::load_or_default(path),
            None => Config::load(),
        };
        self.merge(config)
    }

    fn merge(&self, config: Config) -> Settings {
        Settings {
            track: self.track.clone().or_else(|| config.track.clone()),
            seed: self.seed.or(config.seed),
            config,
        }
    }
}
