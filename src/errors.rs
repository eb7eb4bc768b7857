use chrono::NaiveDate;
use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised before an allocation run starts.
///
/// Running out of attempts while placing an employee is not an error; see
/// `Placement::Unassigned`.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input validation ---------------------------------------------------
    /// Malformed dates, tokens, or command line values.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Blocked-date range whose end falls before its start.
    #[error("Invalid date range: end {end} is before start {start}.")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Two roster entries share a name.
    #[error("Duplicate employee name in roster: '{0}'")]
    DuplicateEmployee(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config, roster, and result files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
