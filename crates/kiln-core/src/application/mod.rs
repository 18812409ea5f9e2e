//! Application layer for kiln.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigStore, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. Coercion and validation live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ConfigStore, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigParser, Filesystem, ParsedConfig};

pub use error::ApplicationError;
