//! Button edge handling.
//!
//! One tactile switch on the button pin (internal pull-up). The task
//! sleeps until GPIOTE reports a rising edge, then hands the press to the
//! shared state. It runs on the interrupt-mode executor, so it preempts
//! the render loop's busy-wait and must stay short: no I/O, no waiting
//! beyond the next edge.

use embassy_nrf::gpio::Input;
use ledcycle::SharedState;

/// Feed every rising edge on `button` into `shared`.
#[embassy_executor::task]
pub async fn press_task(mut button: Input<'static>, shared: &'static SharedState) -> ! {
    loop {
        button.wait_for_rising_edge().await;
        // Rejected presses (lock still set) are the debounce.
        shared.on_press();
    }
}
