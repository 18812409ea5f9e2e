pub mod environment;
pub mod scaffold;
pub mod settings;
pub mod template;

pub use environment::Environment;
pub use scaffold::{GenerationReport, ModuleLayout, ScaffoldRequest};
pub use settings::Settings;
pub use template::{RenderedUnit, UnitTemplate};
