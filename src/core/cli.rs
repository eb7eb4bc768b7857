use crate::core::types::{Date, DateSet};
use crate::errors::{Error, Result, require_parse};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: vacaplan --roster <file.json> [options]

Options:
  --config <file>          Settings file (default: config.json if present)
  --logs <dir>             Directory for run logs (default: logs)
  --start <YYYY-MM-DD>     Run-wide search start (default: config, then today)
  --blocked <dates>        Extra blocked dates, e.g. 2025-12-24:2025-12-31,2026-01-02
  --force <NAME=DATE>      Pin an employee's search start (repeatable)
  --area <name>            Only print assignments of this area
  --output <file.json>     Write the assignments as JSON
  --set <KEY=VALUE>        Override a configuration key for this run (repeatable)
  -h, --help               Show this message";

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub help: bool,
    pub roster_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub logs_dir: PathBuf,
    pub start_date: Option<NaiveDate>,
    pub blocked: DateSet,
    pub forced: Vec<(String, NaiveDate)>,
    pub area_filter: Option<String>,
    pub output_path: Option<PathBuf>,
    pub overrides: Vec<(String, String)>,
}

impl CliOptions {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut roster = None;
        let mut opts = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => opts.help = true,
                "--roster" => roster = Some(PathBuf::from(Self::next_value(&mut args, "--roster")?)),
                "--config" => {
                    opts.config_path = Some(PathBuf::from(Self::next_value(&mut args, "--config")?))
                }
                "--logs" => opts.logs_dir = PathBuf::from(Self::next_value(&mut args, "--logs")?),
                "--start" => {
                    let raw = Self::next_value(&mut args, "--start")?;
                    opts.start_date = Some(Date::try_from_str(&raw)?.0);
                }
                "--blocked" => {
                    let raw = Self::next_value(&mut args, "--blocked")?;
                    opts.blocked.extend(&DateSet::try_from_str(&raw)?);
                }
                "--force" => {
                    let raw = Self::next_value(&mut args, "--force")?;
                    let (name, date) = Self::split_pair(&raw, "--force")?;
                    opts.forced.push((name, Date::try_from_str(&date)?.0));
                }
                "--area" => opts.area_filter = Some(Self::next_value(&mut args, "--area")?),
                "--output" => {
                    opts.output_path = Some(PathBuf::from(Self::next_value(&mut args, "--output")?))
                }
                "--set" => {
                    let raw = Self::next_value(&mut args, "--set")?;
                    opts.overrides.push(Self::split_pair(&raw, "--set")?);
                }
                _ => return Err(Error::parse(format!("Unknown argument: {arg}"))),
            }
        }

        if !opts.help {
            opts.roster_path = require_parse(roster, "Missing required argument --roster")?;
        }
        Ok(opts)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = String>,
    {
        require_parse(args.next(), format!("Missing value for {flag}"))
    }

    fn split_pair(raw: &str, flag: &str) -> Result<(String, String)> {
        let (key, value) = require_parse(
            raw.split_once('='),
            format!("Expected KEY=VALUE for {flag}, got '{raw}'"),
        )?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::parse(format!("Empty name in {flag} '{raw}'")));
        }
        Ok((key.to_string(), value.trim().to_string()))
    }

    fn defaults() -> Self {
        Self {
            help: false,
            roster_path: PathBuf::new(),
            config_path: None,
            logs_dir: PathBuf::from("logs"),
            start_date: None,
            blocked: DateSet::new(),
            forced: Vec::new(),
            area_filter: None,
            output_path: None,
            overrides: Vec::new(),
        }
    }
}
