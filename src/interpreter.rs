//! Interpreter seam for the external hoc engine
//!
//! This crate never parses hoc itself. Everything language-level is delegated
//! to an interpreter behind these traits: [`HocInterpreter`] turns a template
//! file plus a morphology into a live cell object, [`HocCell`] is the
//! capability surface of that object, and [`PublicCell`] is the normalized
//! read-only view of its public fields. Simulator bindings implement the
//! first two; the crate's resolver and access helpers work against them.

use std::path::Path;

/// External interpreter capable of instantiating cell templates
pub trait HocInterpreter {
    /// The instantiated cell object this interpreter produces
    type Cell: HocCell;
    /// Interpreter-level failure type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute the template against a morphology, producing a live cell object
    fn instantiate(
        &self,
        template: &Path,
        morphology: &Path,
    ) -> Result<Self::Cell, Self::Error>;
}

/// Capability surface of an instantiated cell object
///
/// hoc objects are dynamically shaped; this trait captures the subset of
/// their surface the resolver and access helpers rely on.
pub trait HocCell {
    /// Failure type for property assignment
    type Error: std::error::Error + Send + Sync + 'static;

    /// Class name the template declares (its `begintemplate` name)
    fn class_name(&self) -> &str;

    /// Whether the template declares `NeededAttributes`, i.e. expects emodel
    /// properties to be injected after instantiation
    fn declares_needed_attributes(&self) -> bool;

    /// Write a named numeric property onto the object
    fn assign(&mut self, property: &str, value: f64) -> Result<(), Self::Error>;

    /// Override the object's display name (its `hname`)
    fn set_display_name(&mut self, name: &str);

    /// The object's current display name
    fn display_name(&self) -> &str;

    /// Set the simulation gid on the object; hoc numbers are doubles
    fn set_gid(&mut self, gid: f64);

    /// Public fields exposed directly on the cell, present when the template
    /// follows the `getCell` convention
    fn direct_accessor(&self) -> Option<&dyn PublicCell>;

    /// Public fields held by a secondary reference object, present when the
    /// template follows the `CellRef` convention
    fn indirect_reference(&self) -> Option<&dyn PublicCell>;
}

/// Normalized read-only view of a cell's public fields
pub trait PublicCell {
    /// The cell's gid
    fn gid(&self) -> f64;
}
