//! Scaffold Service - module generation orchestrator.
//!
//! This service coordinates one generation:
//! 1. Bind the archetype template to the requested name
//! 2. Render implementation and test sources
//! 3. Offer the package marker, implementation and test files to the
//!    filesystem through [`ScaffoldService::create_file`]
//!
//! Writes are append-only: a path that already exists is never touched, so
//! re-running a generation never destroys prior edits.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        ArtifactKind, DomainValidator as validator, GeneratedArtifact, GenerationReport,
        ModuleLayout, ScaffoldRequest, UnitTemplate, WriteOutcome,
    },
    error::{KilnError, KilnResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: ModuleLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service writing into `layout`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     layout,     // ModuleLayout
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, layout: ModuleLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Write `content` to `path` unless something already lives there.
    ///
    /// Missing parent directories are created first. An existing path is a
    /// silent success ([`WriteOutcome::Skipped`]); its content is not read.
    pub fn create_file(&self, path: &Path, content: &str) -> KilnResult<WriteOutcome> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "File exists, not overwriting");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;

        debug!(path = %path.display(), bytes = content.len(), "File created");
        Ok(WriteOutcome::Created)
    }

    /// Generate the three-file unit for `request`.
    #[instrument(
        skip_all,
        fields(archetype = %request.archetype(), name = %request.name())
    )]
    pub fn generate(&self, request: &ScaffoldRequest) -> KilnResult<GenerationReport> {
        validator::validate_request(request, &self.layout).map_err(KilnError::Domain)?;

        let name = request.name();
        let unit = UnitTemplate::bind(request, self.layout.package_name()).render();

        let files = [
            (
                ArtifactKind::Marker,
                self.layout.marker_path(name),
                format!("\"\"\"Module {name}.\"\"\"\n"),
            ),
            (
                ArtifactKind::Implementation,
                self.layout.implementation_path(name),
                unit.implementation,
            ),
            (
                ArtifactKind::Test,
                self.layout.test_path(name),
                unit.test,
            ),
        ];

        let mut artifacts = Vec::with_capacity(files.len());
        for (kind, path, content) in files {
            let outcome = self.create_file(&path, &content)?;
            artifacts.push(GeneratedArtifact {
                kind,
                path,
                outcome,
            });
        }

        let report = GenerationReport {
            archetype: request.archetype(),
            name: name.to_string(),
            artifacts,
        };

        info!(
            created = report.created().count(),
            skipped = report.skipped().count(),
            "Module generated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::predicate::eq;

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::Archetype;

    fn layout() -> ModuleLayout {
        ModuleLayout::new("src/app", "tests").unwrap()
    }

    #[test]
    fn create_file_skips_existing_path_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_read_to_string().never();

        let service = ScaffoldService::new(Box::new(fs), layout());
        let outcome = service
            .create_file(Path::new("src/app/x.py"), "new content")
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
    }

    #[test]
    fn create_file_creates_parent_then_writes() {
        let mut seq = mockall::Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("a/b")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("a/b/c.py") && c == "body")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), layout());
        let outcome = service.create_file(Path::new("a/b/c.py"), "body").unwrap();
        assert_eq!(outcome, WriteOutcome::Created);
    }

    #[test]
    fn filesystem_errors_propagate() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), layout());
        let request = ScaffoldRequest::new(Archetype::Module, "widget").unwrap();
        let err = service.generate(&request).unwrap_err();
        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn generate_offers_marker_implementation_and_test() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("src/app/widget/__init__.py") && c == "\"\"\"Module widget.\"\"\"\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("src/app/widget/widget.py") && c.contains("class WidgetService:")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("tests/test_widget.py")
                    && c.contains("from app.widget.widget import WidgetService")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), layout());
        let request = ScaffoldRequest::new(Archetype::Service, "widget").unwrap();
        let report = service.generate(&request).unwrap();

        let kinds: Vec<_> = report.artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            [ArtifactKind::Marker, ArtifactKind::Implementation, ArtifactKind::Test]
        );
        assert_eq!(report.created().count(), 3);
    }

    #[test]
    fn generate_rejects_module_over_tests_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        let layout = ModuleLayout::new("pkg", "pkg/tests").unwrap();
        let service = ScaffoldService::new(Box::new(fs), layout);
        let request = ScaffoldRequest::new(Archetype::Util, "tests").unwrap();
        assert!(matches!(
            service.generate(&request),
            Err(KilnError::Domain(_))
        ));
    }
}
