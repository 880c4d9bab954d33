//! Terminal harness: feeds raw post text to the engine and prints the result.
pub mod cli;
pub mod logging;

mod app;
mod config;
mod effects;
mod render;

pub use app::run_app;
