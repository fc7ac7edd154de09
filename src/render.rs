//! Render loop - maps the current display state onto the LED pin.
//!
//! Each pass reads the shared state once, drives the pin, then blocks for
//! the state's hold time with a busy-wait delay. The button interrupt may
//! fire at any point; its effect is picked up on the next pass.
//!
//! | State     | Pin action           | Hold    |
//! |-----------|----------------------|---------|
//! | Off       | pulse high, then low | 10 ms   |
//! | On        | high                 | 10 ms   |
//! | SlowBlink | toggle               | 2000 ms |
//! | FastBlink | toggle               | 100 ms  |
//! | Reset     | low, state → Off     | 100 ms  |
//!
//! Every pass ends by clearing the debounce lock.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::config;
use crate::debug::{self, DebugSink};
use crate::error::Error;
use crate::shared::SharedState;
use crate::state::DisplayState;

/// Foreground state machine driver.
pub struct RenderLoop<'a, P, D, S> {
    shared: &'a SharedState,
    led: P,
    delay: D,
    sink: S,
    debug_override: bool,
    press_report: bool,
}

impl<'a, P, D, S> RenderLoop<'a, P, D, S>
where
    P: StatefulOutputPin,
    D: DelayNs,
    S: DebugSink,
{
    /// Create a render loop with the compile-time diagnostic defaults.
    pub fn new(shared: &'a SharedState, led: P, delay: D, sink: S) -> Self {
        Self {
            shared,
            led,
            delay,
            sink,
            debug_override: config::DEBUG_OVERRIDE,
            press_report: config::REPORT_PRESSES,
        }
    }

    /// Force the LED high for an extra hold after every pass.
    pub fn with_debug_override(mut self, enabled: bool) -> Self {
        self.debug_override = enabled;
        self
    }

    /// Follow each transition line with the accepted press count.
    pub fn with_press_report(mut self, enabled: bool) -> Self {
        self.press_report = enabled;
        self
    }

    /// Run one pass and return the state it handled.
    ///
    /// The pass always completes (hold elapsed, lock cleared) before an
    /// error is reported, so a failing pin or sink never wedges the
    /// debounce lock.
    pub fn step(&mut self) -> Result<DisplayState, Error> {
        let state = self.shared.state();

        // The lock is only set on the first pass after an accepted press.
        let announced = if self.shared.is_locked() {
            self.announce(state)
        } else {
            Ok(())
        };

        let driven = self.drive(state);
        if state == DisplayState::Reset {
            self.shared.finish_reset();
        }
        self.delay.delay_ms(state.hold_ms());
        self.shared.release();

        let overridden = if self.debug_override {
            let result = self.led.set_high().map_err(|_| Error::Pin);
            self.delay.delay_ms(config::DEBUG_OVERRIDE_HOLD_MS);
            self.shared.release();
            result
        } else {
            Ok(())
        };

        driven?;
        overridden?;
        announced?;
        Ok(state)
    }

    /// Run passes until one fails.
    pub fn run(&mut self) -> Result<Infallible, Error> {
        loop {
            self.step()?;
        }
    }

    pub fn led(&self) -> &P {
        &self.led
    }

    pub fn led_mut(&mut self) -> &mut P {
        &mut self.led
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn drive(&mut self, state: DisplayState) -> Result<(), Error> {
        match state {
            DisplayState::Off => {
                // Inert pulse, kept from the reference firmware.
                self.led.set_high().map_err(|_| Error::Pin)?;
                self.led.set_low().map_err(|_| Error::Pin)
            }
            DisplayState::On => self.led.set_high().map_err(|_| Error::Pin),
            DisplayState::SlowBlink | DisplayState::FastBlink => {
                self.led.toggle().map_err(|_| Error::Pin)
            }
            DisplayState::Reset => self.led.set_low().map_err(|_| Error::Pin),
        }
    }

    fn announce(&mut self, state: DisplayState) -> Result<(), Error> {
        self.sink
            .write_str(state.message())
            .map_err(|_| Error::DebugOutput)?;
        if self.press_report {
            debug::write_press_report(&mut self.sink, self.shared.press_count())
                .map_err(|_| Error::DebugOutput)?;
        }
        Ok(())
    }
}
