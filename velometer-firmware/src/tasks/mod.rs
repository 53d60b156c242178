//! Embassy async tasks and the rotation loop
//!
//! The rotation loop blocks in thread mode. The button and display tasks
//! run on the interrupt executor and communicate via `channels`.

pub mod button;
pub mod display;
pub mod rotation;

pub use button::button_task;
pub use display::display_task;
pub use rotation::rotation_loop;
