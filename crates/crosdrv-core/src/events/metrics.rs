//! Usage events.

use serde::Serialize;

/// Exhaustive list of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Triggered by an explicit user action, such as a command invocation.
    Interactive,
    /// Triggered implicitly in the background, such as lint computation.
    Background,
    Error,
}

/// Exhaustive list of feature groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureGroup {
    #[serde(rename = "chromium.outputDirectories")]
    ChromiumOutputDirectories,
    #[serde(rename = "codesearch")]
    CodeSearch,
    #[serde(rename = "coverage")]
    Coverage,
    #[serde(rename = "cppxrefs")]
    CppXrefs,
    #[serde(rename = "debugging")]
    Debugging,
    #[serde(rename = "device")]
    Device,
    #[serde(rename = "format")]
    Format,
    #[serde(rename = "gerrit")]
    Gerrit,
    #[serde(rename = "idestatus")]
    IdeStatus,
    #[serde(rename = "lint")]
    Lint,
    #[serde(rename = "misc")]
    Misc,
    #[serde(rename = "owners")]
    Owners,
    #[serde(rename = "package")]
    Package,
    #[serde(rename = "spellchecker")]
    SpellChecker,
    #[serde(rename = "tast")]
    Tast,
    /// Interaction with a virtual document (Gerrit comments, spellchecker, ...).
    #[serde(rename = "virtualdocument")]
    VirtualDocument,
}

/// A single usage event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsEvent {
    pub category: Category,
    pub group: FeatureGroup,
    /// Event name for collectors that key on names rather than descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the driver has just done. An optional `prefix:` groups related
    /// actions, e.g. `"device: connect to device via VNC"`.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl MetricsEvent {
    pub fn new(category: Category, group: FeatureGroup, description: impl Into<String>) -> Self {
        Self {
            category,
            group,
            name: None,
            description: description.into(),
            label: None,
            value: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}
