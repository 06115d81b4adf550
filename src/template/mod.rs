//! Cell template resolution
//!
//! Hoc templates come in two structural conventions ("bluepyopt" and "v6")
//! that differ in what they require at instantiation time and in how their
//! instances expose public state. This module turns a template/morphology
//! pair into live cell objects through an external interpreter: it validates
//! the source files up front, enforces the v6 needed-attributes contract,
//! injects emodel properties in the order templates expect, and gives every
//! instance a collision-free display name.

mod config;
mod resolver;
mod types;

pub use config::TemplateConfig;
pub use resolver::{TemplateError, TemplateResolver};
pub use types::{EmodelProperties, TemplateFormat};
