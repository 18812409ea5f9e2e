use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Archetype, WriteOutcome},
};

/// File name of the package marker created in every module directory.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Extension of generated implementation and test units.
pub const SOURCE_EXTENSION: &str = "py";

/// What the user asked to generate. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    archetype: Archetype,
    name: String,
}

impl ScaffoldRequest {
    /// Build a request.
    ///
    /// The name becomes a directory, so it must be non-empty and free of path
    /// separators. Nothing else is checked: an invalid Python identifier
    /// is written as-is.
    pub fn new(archetype: Archetype, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot contain path separators".into(),
            });
        }
        if name == "." || name == ".." {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot be a relative path component".into(),
            });
        }
        Ok(Self { archetype, name })
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Where generated units land.
///
/// ```text
/// <package_root>/<name>/__init__.py
/// <package_root>/<name>/<name>.py
/// <tests_root>/test_<name>.py
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    package_root: PathBuf,
    tests_root: PathBuf,
    package_name: String,
}

impl ModuleLayout {
    /// The package import name is the last component of `package_root`.
    pub fn new(
        package_root: impl Into<PathBuf>,
        tests_root: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let package_root = package_root.into();
        let package_name = package_root
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::InvalidLayout {
                path: package_root.clone(),
                reason: "cannot derive a package name from this path".into(),
            })?
            .to_string();

        Ok(Self {
            package_root,
            tests_root: tests_root.into(),
            package_name,
        })
    }

    pub fn tests_root(&self) -> &Path {
        &self.tests_root
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.package_root.join(name)
    }

    pub fn marker_path(&self, name: &str) -> PathBuf {
        self.module_dir(name).join(PACKAGE_MARKER)
    }

    pub fn implementation_path(&self, name: &str) -> PathBuf {
        self.module_dir(name)
            .join(format!("{name}.{SOURCE_EXTENSION}"))
    }

    pub fn test_path(&self, name: &str) -> PathBuf {
        self.tests_root
            .join(format!("test_{name}.{SOURCE_EXTENSION}"))
    }
}

/// Role of a generated file inside its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Marker,
    Implementation,
    Test,
}

/// A path offered to the filesystem and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Result of one generation: the completion signal handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub archetype: Archetype,
    pub name: String,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationReport {
    pub fn created(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter().filter(|a| a.outcome.is_created())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter().filter(|a| !a.outcome.is_created())
    }

    /// `true` when every file already existed.
    pub fn is_noop(&self) -> bool {
        self.created().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_empty_and_path_like_names() {
        assert!(ScaffoldRequest::new(Archetype::Module, "").is_err());
        assert!(ScaffoldRequest::new(Archetype::Module, "a/b").is_err());
        assert!(ScaffoldRequest::new(Archetype::Module, "a\\b").is_err());
        assert!(ScaffoldRequest::new(Archetype::Module, "..").is_err());
    }

    #[test]
    fn request_keeps_non_identifier_names() {
        let req = ScaffoldRequest::new(Archetype::Util, "my-tool").unwrap();
        assert_eq!(req.name(), "my-tool");
        assert_eq!(req.archetype(), Archetype::Util);
    }

    #[test]
    fn layout_derives_package_name() {
        let layout = ModuleLayout::new("src/shop", "tests").unwrap();
        assert_eq!(layout.package_name(), "shop");
    }

    #[test]
    fn layout_rejects_root_without_name() {
        assert!(matches!(
            ModuleLayout::new("/", "tests"),
            Err(DomainError::InvalidLayout { .. })
        ));
        assert!(ModuleLayout::new("", "tests").is_err());
    }

    #[test]
    fn layout_paths() {
        let layout = ModuleLayout::new("src/shop", "tests").unwrap();
        assert_eq!(
            layout.marker_path("widget"),
            PathBuf::from("src/shop/widget/__init__.py")
        );
        assert_eq!(
            layout.implementation_path("widget"),
            PathBuf::from("src/shop/widget/widget.py")
        );
        assert_eq!(
            layout.test_path("widget"),
            PathBuf::from("tests/test_widget.py")
        );
    }

    #[test]
    fn report_partitions_outcomes() {
        let report = GenerationReport {
            archetype: Archetype::Module,
            name: "x".into(),
            artifacts: vec![
                GeneratedArtifact {
                    kind: ArtifactKind::Marker,
                    path: "a".into(),
                    outcome: WriteOutcome::Skipped,
                },
                GeneratedArtifact {
                    kind: ArtifactKind::Test,
                    path: "b".into(),
                    outcome: WriteOutcome::Created,
                },
            ],
        };
        assert_eq!(report.created().count(), 1);
        assert_eq!(report.skipped().count(), 1);
        assert!(!report.is_noop());
    }
}
