// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kiln.
//!
//! This module contains pure logic: the settings snapshot and its field
//! registry, the layered environment, archetype templates and the module
//! layout. All I/O is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process-environment calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: Settings change only through the field registry
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    environment::Environment,
    scaffold::{
        ArtifactKind, GeneratedArtifact, GenerationReport, ModuleLayout, PACKAGE_MARKER,
        ScaffoldRequest,
    },
    settings::{FIELDS, FieldSpec, Settings, field},
    template::{RenderedUnit, UnitTemplate, capitalize},
};

pub use error::{ConfigError, DomainError, ErrorCategory};

pub use value_objects::{Archetype, ConfigFormat, LogLevel, SettingValue, WriteOutcome};

pub use validation::DomainValidator;
