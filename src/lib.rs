//! Cell Template - hoc cell template resolution for simulator bindings
//!
//! This library resolves the two hoc template conventions in circulation
//! ("bluepyopt" and "v6") into uniformly accessible cell objects. It checks
//! the template and morphology files, drives an external hoc interpreter to
//! instantiate them, injects emodel properties where a template declares
//! needed attributes, names every instance collision-free, and normalizes how
//! public state is read back regardless of which internal shape the template
//! produced.
//!
//! The interpreter itself stays behind the traits in [`interpreter`]; the
//! crate never parses hoc.
//!
//! # Example
//!
//! ```rust
//! use cell_template::{TemplateConfig, TemplateFormat};
//!
//! let config = TemplateConfig::from_toml_str(r#"
//!     template = "templates/cADpyr_L2TPC.hoc"
//!     morphology = "morphologies/rr110330_C3_idA.asc"
//!     format = "v6"
//!
//!     [emodel_properties]
//!     threshold_current = 0.184
//!     holding_current = -0.062
//! "#).unwrap();
//!
//! assert_eq!(config.format, TemplateFormat::V6);
//! assert_eq!(config.emodel_properties.unwrap().soma_scaler, 1.0);
//! ```

pub mod cell;
pub mod interpreter;
pub mod template;

pub use cell::{public_hoc_cell, CellAccessError};
pub use interpreter::{HocCell, HocInterpreter, PublicCell};
pub use template::{
    EmodelProperties, TemplateConfig, TemplateError, TemplateFormat, TemplateResolver,
};
