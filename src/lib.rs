//! Hardware-independent core of the ledcycle firmware.
//!
//! A button press (edge interrupt) advances the LED through
//! `Off → On → SlowBlink → FastBlink → Reset → Off`; the render loop maps
//! the current state onto the LED pin.
//!
//! Everything here is generic over `embedded-hal` traits so it runs on the
//! host under `cargo test`. The embedded binary (`main.rs`, feature
//! `embedded`) wires it to nRF52840 peripherals.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod debug;
pub mod error;
pub mod render;
pub mod shared;
pub mod state;

pub use debug::DebugSink;
pub use error::Error;
pub use render::RenderLoop;
pub use shared::SharedState;
pub use state::DisplayState;
