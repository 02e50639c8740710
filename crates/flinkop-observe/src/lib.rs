//! Logging setup shared by flinkop binaries.
mod logger;
pub use logger::*;
