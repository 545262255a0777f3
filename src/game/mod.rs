//! Game Simulation
//!
//! Everything that runs once per frame between reading input and drawing:
//! player physics, collision against the level's tiles, and the follow
//! camera. None of it touches the window, so it can be tested headless.

pub mod camera;
pub mod collision;
pub mod pacing;
pub mod player;
pub mod runtime;

pub use camera::FollowCamera;
pub use pacing::FrameLimiter;
pub use player::Player;
pub use runtime::{FrameRequests, GameState};
