//! Frame rendering: the galaxy is drawn into an offscreen target sized by
//! the capped pixel ratio, then scaled onto the window surface.

mod frame;
mod helpers;
mod state;
mod target;

pub use helpers::render_size;
pub use state::RenderState;
