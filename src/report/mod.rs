//! Report rendering and persistence.

pub mod generator;

pub use generator::{render_console, save_report, SinkError};
