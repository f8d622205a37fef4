// Mon Oct 19 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dump-layout-converter")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Converts member offset dumps into padded C++ class declarations", long_about = None)]
pub struct Args {
    /// Offset dump to read
    pub input: PathBuf,

    /// Header to write
    pub output: PathBuf,

    /// JSON config with extra type aliases
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of everything that was dropped or guessed
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Fail instead of dropping classes with unresolved parents
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!("Input file does not exist: {:?}", self.input));
        }
        if self.input == self.output {
            return Err("Input and output must be different files".to_string());
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {:?}", config));
            }
        }
        Ok(())
    }
}
