//! Initialization of logging shared by the binaries of this workspace.
//!
//! Standard output is reserved for the results a binary prints, so every log
//! event is written to standard error.
pub mod config;
pub mod tracing;

pub use config::Config;
