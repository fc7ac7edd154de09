//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments and timing parameters live here so they can be
//! tuned in one place. Nothing here is configurable at runtime.

// Render loop hold durations

/// Hold after the `Off` pulse (ms).
pub const OFF_HOLD_MS: u32 = 10;

/// Hold while `On` (ms).
pub const ON_HOLD_MS: u32 = 10;

/// Half period of the slow blink (ms).
pub const SLOW_BLINK_HOLD_MS: u32 = 2000;

/// Half period of the fast blink (ms).
pub const FAST_BLINK_HOLD_MS: u32 = 100;

/// Hold after forcing the LED low in `Reset` (ms).
pub const RESET_HOLD_MS: u32 = 100;

/// Hold after the debug override drives the LED high (ms).
pub const DEBUG_OVERRIDE_HOLD_MS: u32 = 100;

// Diagnostics

/// Force the LED high after every render pass. Manual bench hook.
pub const DEBUG_OVERRIDE: bool = false;

/// Append `Total Presses: <n>` to each transition line.
pub const REPORT_PRESSES: bool = false;

/// Startup banner on the debug UART.
pub const STARTUP_BANNER: &str = "Debug Start\n";

/// Debug UART baud rate.
pub const UART_BAUD: u32 = 115_200;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   LED            → P0.03 (external LED, active high)
//   Button         → P0.11 (BUTTON1, pull-up; the rising edge is the release)
//   Debug UART TX  → P0.06 (VCOM)
