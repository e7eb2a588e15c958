// Document Validation
// Lint pass over a host document before the tab controller is attached

use std::fmt;

use super::document::HostDocument;
use super::markup::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Check the tab structure of a document.
///
/// Missing structure is an error (the widget cannot work); inconsistent
/// initial state is a warning (the widget works but starts oddly).
pub fn validate(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(tab_list) = doc.tab_list() else {
        diagnostics.push(Diagnostic::error("document has no element with role=\"tablist\""));
        return diagnostics;
    };

    let tabs = doc.tabs(tab_list);
    if tabs.is_empty() {
        diagnostics.push(Diagnostic::error("tab-list contains no element with role=\"tab\""));
        return diagnostics;
    }

    for &tab in &tabs {
        let name = doc
            .attribute(tab, "id")
            .map(|id| format!("tab '{}'", id))
            .unwrap_or_else(|| format!("<{}> tab #{}", doc.tag(tab).unwrap_or("?"), tab.index()));

        if doc.attribute(tab, "id").is_none() {
            diagnostics.push(Diagnostic::warning(format!("{} has no id", name)));
        }

        match doc.attribute(tab, "aria-controls") {
            None => diagnostics.push(Diagnostic::error(format!("{} has no aria-controls", name))),
            Some(target) if doc.panel_for(tab).is_none() => diagnostics.push(Diagnostic::error(
                format!("{} controls '{}' which does not exist", name, target),
            )),
            Some(_) => {}
        }

        if let Some(image) = doc.attribute(tab, "data-image") {
            if doc.image_for(tab).is_none() {
                diagnostics.push(Diagnostic::warning(format!(
                    "{} references image '{}' which does not exist",
                    name, image
                )));
            }
        }
    }

    let selected = tabs
        .iter()
        .filter(|&&t| doc.attribute(t, "aria-selected") == Some("true"))
        .count();
    if selected != 1 {
        diagnostics.push(Diagnostic::warning(format!(
            "expected exactly one tab with aria-selected=\"true\", found {}",
            selected
        )));
    }

    let visible = doc
        .panels(tabs[0])
        .into_iter()
        .filter(|&p| !doc.is_hidden(p))
        .count();
    if visible != 1 {
        diagnostics.push(Diagnostic::warning(format!(
            "expected exactly one visible panel, found {}",
            visible
        )));
    }

    for diagnostic in &diagnostics {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!("{}", diagnostic.message),
            Severity::Error => tracing::error!("{}", diagnostic.message),
        }
    }

    diagnostics
}

/// Whether any diagnostic is an error
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}
