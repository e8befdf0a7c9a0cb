//! Braille side of selection mirroring.
//!
//! - [`reconciler`] decides which text range the display should show.
//! - [`region`] wraps a base region renderer and performs the two-pass render
//!   that yields both a highlighted selection and a scroll anchor.
//! - [`cells`] turns text into 8-dot cells for the base renderer.

pub mod cells;
pub mod reconciler;
pub mod region;

pub use reconciler::{
  ReconcilerState,
  Resolved,
  resolve_display_range,
};
pub use region::{
  RegionRenderer,
  Rendered,
  ReviewRegion,
  TextRegion,
};
