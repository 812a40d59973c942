//! Control surface for the galaxy parameters.
//!
//! [`CONTROLS`] declares one labeled control per [`GalaxyParams`] field with
//! its bounds and regeneration trigger. [`TweakPanel`] owns the authoritative
//! parameter set and turns control interactions into [`ControlEvent`]s:
//! sliders only ask for regeneration when an interaction is committed,
//! color pickers ask on every change.
//!
//! [`GalaxyParams`]: crate::schema::GalaxyParams

mod panel;
mod types;


pub use panel::*;
pub use types::*;
