//! TOML bundle of template construction inputs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::resolver::TemplateError;
use super::types::{EmodelProperties, TemplateFormat};

/// Construction inputs for a [`TemplateResolver`], loadable from TOML
///
/// ```toml
/// template = "templates/cADpyr_L2TPC.hoc"
/// morphology = "morphologies/rr110330_C3_idA.asc"
/// format = "v6"
///
/// [emodel_properties]
/// threshold_current = 0.184
/// holding_current = -0.062
/// ```
///
/// [`TemplateResolver`]: super::TemplateResolver
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Path to the hoc template file
    pub template: PathBuf,
    /// Path to the companion morphology file
    pub morphology: PathBuf,
    /// Structural convention the template follows
    pub format: TemplateFormat,
    /// Emodel parameters, needed only by v6 templates that declare
    /// needed attributes
    #[serde(default)]
    pub emodel_properties: Option<EmodelProperties>,
}

impl TemplateConfig {
    /// Load a config from a TOML file
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(content)?)
    }
}
