//! Display states of the LED and the button-driven cycle between them.
//!
//! The cycle is closed: every press moves exactly one step along
//! `Off → On → SlowBlink → FastBlink → Reset → Off`.

use crate::config;

/// What the LED is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayState {
    /// LED dark.
    #[default]
    Off = 0,
    /// LED steadily lit.
    On = 1,
    /// LED toggles every 2 s.
    SlowBlink = 2,
    /// LED toggles every 100 ms.
    FastBlink = 3,
    /// Transient: LED forced low, falls back to `Off` on the same pass.
    Reset = 4,
}

impl DisplayState {
    /// Number of states in the cycle.
    pub const COUNT: usize = 5;

    /// All states in cycle order.
    pub const ALL: [DisplayState; Self::COUNT] = [
        DisplayState::Off,
        DisplayState::On,
        DisplayState::SlowBlink,
        DisplayState::FastBlink,
        DisplayState::Reset,
    ];

    /// Successor in the cycle, wrapping `Reset` back to `Off`.
    pub const fn next(self) -> Self {
        match self {
            DisplayState::Off => DisplayState::On,
            DisplayState::On => DisplayState::SlowBlink,
            DisplayState::SlowBlink => DisplayState::FastBlink,
            DisplayState::FastBlink => DisplayState::Reset,
            DisplayState::Reset => DisplayState::Off,
        }
    }

    /// Decode a raw cell value. Anything outside the cycle is `None`.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(DisplayState::Off),
            1 => Some(DisplayState::On),
            2 => Some(DisplayState::SlowBlink),
            3 => Some(DisplayState::FastBlink),
            4 => Some(DisplayState::Reset),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// How long the render loop blocks after handling this state.
    pub const fn hold_ms(self) -> u32 {
        match self {
            DisplayState::Off => config::OFF_HOLD_MS,
            DisplayState::On => config::ON_HOLD_MS,
            DisplayState::SlowBlink => config::SLOW_BLINK_HOLD_MS,
            DisplayState::FastBlink => config::FAST_BLINK_HOLD_MS,
            DisplayState::Reset => config::RESET_HOLD_MS,
        }
    }

    /// Transition log line written to the debug channel.
    pub const fn message(self) -> &'static str {
        match self {
            DisplayState::Off => "State: OFF\n",
            DisplayState::On => "State: ON\n",
            DisplayState::SlowBlink => "State: SLOW BLINK\n",
            DisplayState::FastBlink => "State: FAST BLINK\n",
            DisplayState::Reset => "State: RESET → OFF\n",
        }
    }
}
