//! Archetype templates.
//!
//! Each archetype is a structured value with named fields and a `render`
//! function, instead of free-form string interpolation at the call site.
//!
//! ```text
//! ScaffoldRequest ──bind──▶ UnitTemplate ──render──▶ RenderedUnit
//!                             ├── Module  { name }
//!                             ├── Service { name, class_name, import_path }
//!                             ├── Model   { name, class_name, import_path }
//!                             └── Util    { name, import_path }
//! ```
//!
//! Names are bound verbatim. If `name` is not a valid Python identifier the
//! generated code fails later, at import time; that is an accepted limitation.

use super::scaffold::ScaffoldRequest;
use crate::domain::value_objects::Archetype;

/// Implementation and test sources for one generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    pub implementation: String,
    pub test: String,
}

/// A template bound to a concrete name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitTemplate {
    /// Free `main()` printing a greeting.
    Module { name: String },
    /// `<Name>Service` class exposing `run()`.
    Service {
        name: String,
        class_name: String,
        import_path: String,
    },
    /// Pydantic model `<Name>` with a validated `name: str` field.
    Model {
        name: String,
        class_name: String,
        import_path: String,
    },
    /// Free function literally named `<name>` returning `True`.
    Util { name: String, import_path: String },
}

impl UnitTemplate {
    /// Bind a request to its archetype's template.
    ///
    /// `package` is the import name of the package root, used by tests to
    /// import the generated unit (`from <package>.<name>.<name> import ...`).
    pub fn bind(request: &ScaffoldRequest, package: &str) -> Self {
        let name = request.name().to_string();
        let import_path = format!("{package}.{name}.{name}");

        match request.archetype() {
            Archetype::Module => Self::Module { name },
            Archetype::Service => Self::Service {
                class_name: format!("{}Service", capitalize(&name)),
                name,
                import_path,
            },
            Archetype::Model => Self::Model {
                class_name: capitalize(&name),
                name,
                import_path,
            },
            Archetype::Util => Self::Util { name, import_path },
        }
    }

    pub fn render(&self) -> RenderedUnit {
        match self {
            Self::Module { name } => RenderedUnit {
                implementation: format!(
                    "def main():\n    print(\"Hello from module {name}!\")\n"
                ),
                test: format!("def test_{name}_basic():\n    assert True\n"),
            },

            Self::Service {
                name,
                class_name,
                import_path,
            } => RenderedUnit {
                implementation: format!(
                    "class {class_name}:\n    \
                     \"\"\"Service {name}: add business logic here.\"\"\"\n\n    \
                     def run(self):\n        \
                     print(\"Running service {name}...\")\n"
                ),
                test: format!(
                    "def test_{name}_service():\n    \
                     from {import_path} import {class_name}\n    \
                     svc = {class_name}()\n    \
                     assert hasattr(svc, \"run\")\n"
                ),
            },

            Self::Model {
                name,
                class_name,
                import_path,
            } => RenderedUnit {
                implementation: format!(
                    "from pydantic import BaseModel\n\n\n\
                     class {class_name}(BaseModel):\n    \
                     \"\"\"Model {name}. Add fields here.\"\"\"\n\n    \
                     name: str\n"
                ),
                test: format!(
                    "def test_{name}_model():\n    \
                     from {import_path} import {class_name}\n    \
                     m = {class_name}(name=\"test\")\n    \
                     assert m.name == \"test\"\n"
                ),
            },

            Self::Util { name, import_path } => RenderedUnit {
                implementation: format!(
                    "def {name}():\n    \
                     \"\"\"Utility function {name}.\"\"\"\n    \
                     return True\n"
                ),
                test: format!(
                    "def test_{name}_util():\n    \
                     from {import_path} import {name}\n    \
                     assert {name}() is True\n"
                ),
            },
        }
    }
}

/// Upper-case the first character only; the rest is left as-is
/// (`user_profile` → `User_profile`, `httpClient` → `HttpClient`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
