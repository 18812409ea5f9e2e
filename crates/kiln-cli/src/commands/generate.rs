//! `kiln generate` — create a module, service, model or utility with its test.

use kiln_adapters::LocalFilesystem;
use kiln_core::{
    application::ScaffoldService,
    domain::{GenerationReport, ModuleLayout, ScaffoldRequest, WriteOutcome},
    error::KilnError,
};

use crate::{cli::GenerateArgs, error::CliResult, output::OutputManager};

pub fn execute(args: GenerateArgs, output: &OutputManager) -> CliResult<()> {
    let layout =
        ModuleLayout::new(args.package_root, args.tests_root).map_err(KilnError::Domain)?;
    let request =
        ScaffoldRequest::new(args.archetype, args.name).map_err(KilnError::Domain)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), layout);
    let report = service.generate(&request)?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        render(&report, output)?;
    }
    Ok(())
}

fn render(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for artifact in &report.artifacts {
        match artifact.outcome {
            WriteOutcome::Created => {
                output.success(&format!("File created: {}", artifact.path.display()))?
            }
            WriteOutcome::Skipped => output.warning(&format!(
                "File already exists and will not be overwritten: {}",
                artifact.path.display()
            ))?,
        }
    }

    let message = format!("{} {} generated successfully", report.archetype, report.name);
    if report.is_noop() {
        output.info(&format!("{message} (nothing to do)"))?;
    } else {
        output.success(&message)?;
    }
    Ok(())
}
