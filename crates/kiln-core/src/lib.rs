//! Kiln Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Kiln
//! project tool: a layered settings store and an idempotent module
//! scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            kiln-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ConfigStore, ScaffoldService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, ConfigParser)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kiln-adapters (Infrastructure)      │
//! │ (LocalFilesystem, FileConfigParser ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Settings, Environment, UnitTemplate)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiln_core::{
//!     application::{ConfigStore, ScaffoldService},
//!     domain::{Archetype, Environment, ModuleLayout, ScaffoldRequest},
//! };
//!
//! // 1. Resolve settings from the environment
//! let store = ConfigStore::resolve(Environment::empty(), filesystem, parser).unwrap();
//!
//! // 2. Generate a module
//! let layout = ModuleLayout::new("src/app", "tests").unwrap();
//! let service = ScaffoldService::new(filesystem, layout);
//! let request = ScaffoldRequest::new(Archetype::Service, "billing").unwrap();
//! service.generate(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigStore, ScaffoldService,
        ports::{ConfigParser, Filesystem, ParsedConfig},
    };
    pub use crate::domain::{
        Archetype, ConfigError, ConfigFormat, Environment, GenerationReport, LogLevel,
        ModuleLayout, ScaffoldRequest, SettingValue, Settings, WriteOutcome,
    };
    pub use crate::error::{KilnError, KilnResult};
}
