//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both keyboard and
//! gamepad controllers. The simulation only ever sees a [`FrameInput`].
//!
//! Native: Uses gilrs crate for gamepad input
//! WASM: keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use state::*;
