use crate::config::Config;
use crate::core::cli::CliOptions;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: Option<&Path>, logs_dir: PathBuf) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load_or_default("config.json")?,
        };
        Ok(Self::with_config(config, logs_dir))
    }

    pub fn with_config(config: Config, logs_dir: PathBuf) -> Self {
        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());
        Self {
            config,
            logger,
            logs_dir,
        }
    }

    /// Load settings and apply every `--set` override from the command line.
    pub fn from_options(opts: &CliOptions) -> Result<Self> {
        let mut ctx = Self::new_with_paths(opts.config_path.as_deref(), opts.logs_dir.clone())?;
        let mut changes = Vec::with_capacity(opts.overrides.len());
        for (key, value) in &opts.overrides {
            let (old, new) = ctx.config.set(key, value)?;
            changes.push(format!("Config override {key}: {old} -> {new}"));
        }
        ctx.logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled());
        for change in changes {
            ctx.logger.info(change, LogTarget::FileOnly);
        }
        Ok(ctx)
    }
}
