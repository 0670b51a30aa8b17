//! Template export to HTML, JSON, YAML and component source.
//!
//! [`TemplateExporter`] renders the current element list in one of the
//! [`ExportFormat`]s and can write the result to the format's conventional
//! file name.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use builder_core::{Element, DEFAULT_LANGUAGE};

use crate::component::to_component;
use crate::error::ExportResult;
use crate::html::to_html;
use crate::json::to_json;
use crate::yaml::to_yaml;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Standalone HTML document.
    Html,
    /// JSON array of template records.
    Json,
    /// YAML template layout.
    Yaml,
    /// JSX function component source.
    Component,
}

impl ExportFormat {
    /// Every format.
    pub const ALL: [Self; 4] = [Self::Html, Self::Json, Self::Yaml, Self::Component];

    /// Conventional download file name.
    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Html => "template.html",
            Self::Json => "template.json",
            Self::Yaml => "template.yml",
            Self::Component => "TemplateComponent.jsx",
        }
    }

    /// MIME type of the output.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Json => "application/json",
            Self::Yaml => "text/yaml",
            Self::Component => "text/javascript",
        }
    }

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "component" | "react" | "jsx" => Ok(Self::Component),
            other => Err(format!("Unknown export format: {other}")),
        }
    }
}

/// Configuration for template export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Display language for HTML and component text (default: `en`).
    pub language: String,
    /// HTML document title (default: `Template`).
    pub title: String,
    /// Component function name (default: `GeneratedTemplate`).
    pub component_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            title: "Template".to_string(),
            component_name: "GeneratedTemplate".to_string(),
        }
    }
}

/// Exports an element list to template formats.
pub struct TemplateExporter {
    config: ExportConfig,
}

impl TemplateExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Create an exporter rendering text in `language`.
    #[must_use]
    pub fn for_language(language: impl Into<String>) -> Self {
        Self::new(ExportConfig {
            language: language.into(),
            ..ExportConfig::default()
        })
    }

    /// The exporter's configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export the element list in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn export(&self, elements: &[Element], format: ExportFormat) -> ExportResult<String> {
        let config = &self.config;
        Ok(match format {
            ExportFormat::Html => to_html(elements, &config.language, &config.title),
            ExportFormat::Json => to_json(elements)?,
            ExportFormat::Yaml => to_yaml(elements),
            ExportFormat::Component => {
                to_component(elements, &config.language, &config.component_name)
            }
        })
    }

    /// Export and write to `dir/<format filename>`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn write_to_dir(
        &self,
        dir: &Path,
        elements: &[Element],
        format: ExportFormat,
    ) -> ExportResult<PathBuf> {
        let contents = self.export(elements, format)?;
        let path = dir.join(format.filename());
        std::fs::write(&path, contents)?;
        tracing::info!("Exported {} elements to {}", elements.len(), path.display());
        Ok(path)
    }
}
