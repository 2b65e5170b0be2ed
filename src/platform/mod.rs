//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game loop:
//! - Input: key events folded into a left/right intent record
//! - Time: fixed-timestep accumulator driving `sim::tick`

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::InputIntent;
