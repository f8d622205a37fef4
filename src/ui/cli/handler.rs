// Mon Oct 19 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::converter::Converter;
use crate::error::ConvertError;
use anyhow::Context;
use colored::Colorize;
use std::fs;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }
        self.setup_logging(&args);
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if args.strict {
            config.strict = true;
        }

        let text = fs::read_to_string(&args.input).map_err(|e| ConvertError::io(&args.input, e))?;
        log::debug!("read {} bytes from {:?}", text.len(), args.input);

        let conversion = Converter::new(config).convert(&text)?;

        fs::write(&args.output, &conversion.header).map_err(|e| ConvertError::io(&args.output, e))?;

        if let Some(report_path) = &args.report {
            let json = conversion.report.to_json().context("serializing conversion report")?;
            fs::write(report_path, json).map_err(|e| ConvertError::io(report_path, e))?;
            log::info!("report written to {:?}", report_path);
        }

        if !args.quiet {
            println!("{} Converted header saved to {}", "[+]".green(), args.output.display());
        }

        Ok(())
    }

    fn setup_logging(&self, args: &Args) {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .ok();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
