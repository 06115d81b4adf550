//! Template resolution - turns a hoc template plus morphology into live cells

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::interpreter::{HocCell, HocInterpreter};

use super::config::TemplateConfig;
use super::types::{EmodelProperties, TemplateFormat};

/// Marker embedded in display names to identify cells produced here
const RESOLVER_MARKER: &str = "cell_template";

/// Source of per-resolver identity tokens, unique for the process lifetime
static NEXT_RESOLVER_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Errors that can occur during template resolution
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file not found on disk
    #[error("template file not found: {path}")]
    TemplateFileNotFound { path: PathBuf },

    /// Morphology file not found on disk
    #[error("morphology file not found: {path}")]
    MorphologyFileNotFound { path: PathBuf },

    /// Template declares needed attributes but no properties were supplied
    #[error("EmodelProperties must be provided for template format {format} when the template specifies needed attributes")]
    MissingEmodelProperties { format: TemplateFormat },

    /// Failure raised by the hoc interpreter, forwarded verbatim
    #[error("{0}")]
    Interpreter(Box<dyn std::error::Error + Send + Sync>),

    /// Unknown template format tag
    #[error("unknown template format: {value}")]
    UnknownFormat { value: String },

    /// Error reading a template config file
    #[error("error reading template config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Error parsing template config TOML
    #[error("error parsing template config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Resolves a hoc cell template into instantiated cell objects
///
/// Construction validates that both source files exist; everything else is
/// deferred to [`get_cell`]. Each resolver draws a process-unique identity
/// token that is embedded in the display name of every cell it produces, so
/// repeated loads of the same template never collide.
///
/// ```ignore
/// let resolver = TemplateResolver::new(
///     NeuronInterpreter::shared(),
///     PathBuf::from("templates/cADpyr_L2TPC.hoc"),
///     PathBuf::from("morphologies/rr110330_C3_idA.asc"),
///     TemplateFormat::V6,
///     Some(EmodelProperties::new(0.184, -0.062)),
/// )?;
/// let cell = resolver.get_cell(Some(5))?;
/// assert_eq!(public_hoc_cell(&cell)?.gid(), 5.0);
/// ```
///
/// [`get_cell`]: TemplateResolver::get_cell
#[derive(Debug)]
pub struct TemplateResolver<I> {
    interpreter: I,
    template_filepath: PathBuf,
    morphology_path: PathBuf,
    template_format: TemplateFormat,
    emodel_properties: Option<EmodelProperties>,
    token: u64,
}

impl<I: HocInterpreter> TemplateResolver<I> {
    /// Create a resolver after checking that both source files exist
    ///
    /// The template file is checked first, then the morphology. No
    /// interpreter work happens until [`get_cell`](TemplateResolver::get_cell).
    pub fn new(
        interpreter: I,
        template_filepath: PathBuf,
        morphology_path: PathBuf,
        template_format: TemplateFormat,
        emodel_properties: Option<EmodelProperties>,
    ) -> Result<Self, TemplateError> {
        if !template_filepath.exists() {
            return Err(TemplateError::TemplateFileNotFound {
                path: template_filepath,
            });
        }
        if !morphology_path.exists() {
            return Err(TemplateError::MorphologyFileNotFound {
                path: morphology_path,
            });
        }

        Ok(Self {
            interpreter,
            template_filepath,
            morphology_path,
            template_format,
            emodel_properties,
            token: NEXT_RESOLVER_TOKEN.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// Create a resolver from a loaded config bundle
    pub fn from_config(interpreter: I, config: TemplateConfig) -> Result<Self, TemplateError> {
        Self::new(
            interpreter,
            config.template,
            config.morphology,
            config.format,
            config.emodel_properties,
        )
    }

    /// Path of the hoc template file
    pub fn template_filepath(&self) -> &Path {
        &self.template_filepath
    }

    /// Path of the companion morphology file
    pub fn morphology_path(&self) -> &Path {
        &self.morphology_path
    }

    /// Structural convention this resolver loads
    pub fn template_format(&self) -> TemplateFormat {
        self.template_format
    }

    /// Process-unique token embedded in the display names of produced cells
    pub fn identity_token(&self) -> u64 {
        self.token
    }

    /// Instantiate the template, returning a fully configured cell object
    ///
    /// Runs the interpreter against the template/morphology pair, injects
    /// emodel properties when the template declares needed attributes,
    /// assigns a collision-free display name, and sets the gid when one is
    /// supplied. The naming index falls back to `0` when `gid` is `None`.
    /// Ownership of the cell transfers to the caller; the resolver keeps no
    /// reference to it.
    pub fn get_cell(&self, gid: Option<u32>) -> Result<I::Cell, TemplateError> {
        let mut cell = self
            .interpreter
            .instantiate(&self.template_filepath, &self.morphology_path)
            .map_err(|e| TemplateError::Interpreter(Box::new(e)))?;

        if self.template_format.supports_needed_attributes() && cell.declares_needed_attributes() {
            let properties =
                self.emodel_properties
                    .as_ref()
                    .ok_or(TemplateError::MissingEmodelProperties {
                        format: self.template_format,
                    })?;

            // Writes land one by one; a failing assignment leaves the
            // earlier ones applied on the cell.
            for (property, value) in properties.named_values() {
                cell.assign(property, value)
                    .map_err(|e| TemplateError::Interpreter(Box::new(e)))?;
            }
        } else if self.emodel_properties.is_some()
            && !self.template_format.supports_needed_attributes()
        {
            log::warn!(
                "emodel properties supplied but {} templates cannot use them; ignoring",
                self.template_format
            );
        }

        let display_name = format!(
            "{}_{}_{:#x}[{}]",
            cell.class_name(),
            RESOLVER_MARKER,
            self.token,
            gid.unwrap_or(0)
        );
        cell.set_display_name(&display_name);

        log::debug!(
            "instantiated {} from {}",
            display_name,
            self.template_filepath.display()
        );

        if let Some(gid) = gid {
            cell.set_gid(f64::from(gid));
        }

        Ok(cell)
    }
}
