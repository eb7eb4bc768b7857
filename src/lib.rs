pub mod calendar;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod scheduler;
pub mod ui;
