use crate::errors::{ComponentError, Result};
use crate::markup::{escape, Markup};
use crate::registry::ComponentKind;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid"));

/// File extension of component templates
pub const TEMPLATE_EXTENSION: &str = "html";

/// Component templates stored on disk as `<root>/<kind>/<name>.html`.
///
/// Templates use `{{ key }}` placeholders which are replaced with the
/// escaped value of the matching local. Unknown keys render empty.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of template `name` for `kind`.
    ///
    /// Names are a single path segment; empty names, separators and `..`
    /// are rejected.
    pub fn template_path(&self, kind: ComponentKind, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(ComponentError::constraint(
                "template",
                Some(name.to_string()),
                format!("Invalid template name: {}. Must be a single file name", name),
            ));
        }

        Ok(self
            .root
            .join(kind.as_str())
            .join(format!("{}.{}", name, TEMPLATE_EXTENSION)))
    }

    /// Read and fill the template `name` for `kind`
    pub fn render(&self, kind: ComponentKind, name: &str, locals: &IndexMap<String, String>) -> Result<Markup> {
        let path = self.template_path(kind, name)?;
        let source = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ComponentError::TemplateNotFound {
                path: path.display().to_string(),
            },
            _ => ComponentError::Io(e),
        })?;

        tracing::debug!(path = %path.display(), "Loaded component template");
        Ok(Markup::new(fill(&source, locals)))
    }
}

fn fill(source: &str, locals: &IndexMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(source, |caps: &Captures| {
            locals.get(&caps[1]).map(|value| escape(value)).unwrap_or_default()
        })
        .into_owned()
}
