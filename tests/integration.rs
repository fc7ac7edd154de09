//! Integration tests for the ledcycle host-testable logic.
//!
//! Drives `SharedState` the way the button interrupt does and
//! `RenderLoop` the way the firmware main loop does.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use ledcycle::{DebugSink, DisplayState, RenderLoop, SharedState};

#[derive(Default)]
struct Led {
    high: bool,
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }
}

impl StatefulOutputPin for Led {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

/// Accumulates simulated time instead of sleeping.
#[derive(Default)]
struct Clock {
    last_ms: u32,
    total_ms: u64,
}

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.last_ms = ms;
        self.total_ms += u64::from(ms);
    }
}

#[derive(Default)]
struct Log(String);

impl DebugSink for Log {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

#[test]
fn press_sequence_walks_the_cycle() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default());

    assert_eq!(render.step(), Ok(DisplayState::Off));
    assert!(!render.led().high);

    // First press: steady on.
    assert!(shared.on_press());
    assert_eq!(render.step(), Ok(DisplayState::On));
    assert!(render.led().high);
    assert_eq!(render.step(), Ok(DisplayState::On));
    assert!(render.led().high);

    // Second press: slow blink, toggling every 2000 ms.
    assert!(shared.on_press());
    let mut levels = Vec::new();
    for _ in 0..4 {
        assert_eq!(render.step(), Ok(DisplayState::SlowBlink));
        assert_eq!(render.delay().last_ms, 2000);
        levels.push(render.led().high);
    }
    assert_eq!(levels, [false, true, false, true]);

    // Third press: fast blink at 100 ms.
    assert!(shared.on_press());
    assert_eq!(render.step(), Ok(DisplayState::FastBlink));
    assert_eq!(render.delay().last_ms, 100);
    assert!(!render.led().high);

    // Fourth press: Reset, LED forced low, back to Off on the same pass.
    assert!(shared.on_press());
    render.led_mut().high = true;
    assert_eq!(render.step(), Ok(DisplayState::Reset));
    assert!(!render.led().high);
    assert_eq!(shared.state(), DisplayState::Off);
    assert_eq!(render.step(), Ok(DisplayState::Off));

    assert_eq!(shared.press_count(), 4);
    assert_eq!(
        render.sink().0,
        "State: ON\nState: SLOW BLINK\nState: FAST BLINK\nState: RESET → OFF\n"
    );
}

#[test]
fn reset_auto_transition_restarts_cycle() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default());

    let mut seen = Vec::new();
    for _ in 0..5 {
        assert!(shared.on_press());
        seen.push(render.step().unwrap());
    }

    // Reset falls back to Off on its own pass, so the fifth press
    // starts the cycle over at On.
    assert_eq!(
        seen,
        [
            DisplayState::On,
            DisplayState::SlowBlink,
            DisplayState::FastBlink,
            DisplayState::Reset,
            DisplayState::On,
        ]
    );
}

#[test]
fn n_presses_without_rendering_land_on_n_mod_5() {
    for n in 0..=27u32 {
        let shared = SharedState::new();
        for _ in 0..n {
            assert!(shared.on_press());
            shared.release();
        }
        assert_eq!(u32::from(shared.state().as_raw()), n % 5, "after {n} presses");
    }
}

#[test]
fn bounce_is_swallowed_until_render_pass() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default());

    assert!(shared.on_press());
    assert!(!shared.on_press());
    assert_eq!(shared.state(), DisplayState::On);
    assert_eq!(shared.press_count(), 1);

    render.step().unwrap();
    assert!(shared.on_press());
    assert_eq!(shared.state(), DisplayState::SlowBlink);
}

#[test]
fn transition_line_only_after_accepted_press() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default());

    for _ in 0..3 {
        render.step().unwrap();
    }
    assert!(render.sink().0.is_empty());

    assert!(shared.on_press());
    for _ in 0..3 {
        render.step().unwrap();
    }
    assert_eq!(render.sink().0, "State: ON\n");
}

#[test]
fn press_report_uses_counter() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default())
        .with_press_report(true);

    assert!(shared.on_press());
    render.step().unwrap();
    assert_eq!(render.sink().0, "State: ON\nTotal Presses: 1\n");
}

#[test]
fn off_and_on_hold_for_10ms() {
    let shared = SharedState::new();
    let mut render = RenderLoop::new(&shared, Led::default(), Clock::default(), Log::default());

    render.step().unwrap();
    assert_eq!(render.delay().last_ms, 10);
    assert!(shared.on_press());
    render.step().unwrap();
    assert_eq!(render.delay().last_ms, 10);
    assert_eq!(render.delay().total_ms, 20);
}
