//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve settings" or "generate a module".

pub mod config_store;
pub mod scaffold_service;

pub use config_store::ConfigStore;
pub use scaffold_service::ScaffoldService;
