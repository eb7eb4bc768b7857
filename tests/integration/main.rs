mod common;
mod config;
mod persist;
mod run;
