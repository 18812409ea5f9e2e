//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_parser;
pub mod environment;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_parser::FileConfigParser;
pub use environment::{DOTENV_FILE, capture_environment};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
