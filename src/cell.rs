//! Normalized access to an instantiated cell's public state
//!
//! Templates have grown two conventions for exposing public fields: newer
//! ones hand them out straight from the cell object, older ones stash them on
//! a secondary reference object. [`public_hoc_cell`] collapses both into a
//! single read-only view so callers never branch on template vintage.

use thiserror::Error;

use crate::interpreter::{HocCell, PublicCell};

/// Neither public-state convention is present on the cell object
#[derive(Debug, Error)]
#[error("Public cell properties cannot be accessed")]
pub struct CellAccessError;

/// Resolve the public view of a cell, whichever convention it follows
///
/// Probes the direct accessor first, then the indirect reference; the direct
/// accessor wins when a template exposes both. Fails when the object exposes
/// neither, rather than handing back a degraded view.
pub fn public_hoc_cell<C: HocCell>(cell: &C) -> Result<&dyn PublicCell, CellAccessError> {
    if let Some(view) = cell.direct_accessor() {
        return Ok(view);
    }
    if let Some(view) = cell.indirect_reference() {
        return Ok(view);
    }
    Err(CellAccessError)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct View(f64);

    impl PublicCell for View {
        fn gid(&self) -> f64 {
            self.0
        }
    }

    struct FakeCell {
        name: String,
        direct: Option<View>,
        indirect: Option<View>,
    }

    impl FakeCell {
        fn with_views(direct: Option<View>, indirect: Option<View>) -> Self {
            Self {
                name: "FakeCell[0]".to_string(),
                direct,
                indirect,
            }
        }
    }

    impl HocCell for FakeCell {
        type Error = Infallible;

        fn class_name(&self) -> &str {
            "FakeCell"
        }

        fn declares_needed_attributes(&self) -> bool {
            false
        }

        fn assign(&mut self, _property: &str, _value: f64) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_display_name(&mut self, name: &str) {
            self.name = name.to_string();
        }

        fn display_name(&self) -> &str {
            &self.name
        }

        fn set_gid(&mut self, gid: f64) {
            if let Some(view) = self.direct.as_mut() {
                view.0 = gid;
            }
            if let Some(view) = self.indirect.as_mut() {
                view.0 = gid;
            }
        }

        fn direct_accessor(&self) -> Option<&dyn PublicCell> {
            self.direct.as_ref().map(|v| v as &dyn PublicCell)
        }

        fn indirect_reference(&self) -> Option<&dyn PublicCell> {
            self.indirect.as_ref().map(|v| v as &dyn PublicCell)
        }
    }

    #[test]
    fn test_direct_accessor_wins() {
        let cell = FakeCell::with_views(Some(View(3.0)), Some(View(7.0)));
        let view = public_hoc_cell(&cell).expect("Should resolve");
        assert_eq!(view.gid(), 3.0);
    }

    #[test]
    fn test_indirect_reference_fallback() {
        let cell = FakeCell::with_views(None, Some(View(7.0)));
        let view = public_hoc_cell(&cell).expect("Should resolve");
        assert_eq!(view.gid(), 7.0);
    }

    #[test]
    fn test_no_public_state_error() {
        let cell = FakeCell::with_views(None, None);
        let err = public_hoc_cell(&cell).err().expect("Should fail");
        assert_eq!(err.to_string(), "Public cell properties cannot be accessed");
    }
}
