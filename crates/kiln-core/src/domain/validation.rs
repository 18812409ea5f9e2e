use crate::domain::{
    entities::{ModuleLayout, ScaffoldRequest, Settings},
    error::{ConfigError, DomainError},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
        settings.validate()
    }

    /// Reject requests whose module directory would land on top of the tests
    /// root (e.g. `--package-root tests` with a module named after it).
    pub fn validate_request(
        request: &ScaffoldRequest,
        layout: &ModuleLayout,
    ) -> Result<(), DomainError> {
        if layout.module_dir(request.name()) == layout.tests_root() {
            return Err(DomainError::InvalidName {
                name: request.name().to_string(),
                reason: format!(
                    "module directory would coincide with the tests root {}",
                    layout.tests_root().display()
                ),
            });
        }
        Ok(())
    }
}
