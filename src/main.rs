//! ledcycle firmware - nRF52840.
//!
//! A button on P0.11 cycles an LED on P0.03 through off / on / slow blink /
//! fast blink / reset. Transition lines go out on the VCOM UART,
//! structured logs over RTT.
//!
//! Two execution contexts:
//!   - Thread mode: the render loop, blocking on busy-wait delays.
//!   - EGU1_SWI1 interrupt: an executor running the button task, so a
//!     press preempts the render loop like a bare ISR.

#![no_std]
#![no_main]

mod button;
mod uart;

use cortex_m_rt::entry;
use defmt::{info, unwrap, warn};
use embassy_executor::InterruptExecutor;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::uarte::UarteTx;
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use embassy_time::Delay;
use ledcycle::{config, DebugSink, DisplayState, RenderLoop, SharedState};
use {defmt_rtt as _, panic_probe as _};

// Shared between the button interrupt and the render loop.
static SHARED: SharedState = SharedState::new();

static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

bind_interrupts!(struct Irqs {
    UARTE0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

#[interrupt]
unsafe fn EGU1_SWI1() {
    BUTTON_EXECUTOR.on_interrupt()
}

#[entry]
fn main() -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("ledcycle starting");

    // Debug channel first so the banner precedes everything else.
    let tx = UarteTx::new(p.UARTE0, Irqs, p.P0_06, uart::uart_config());
    let mut debug = uart::UartDebug::new(tx);
    if let Err(e) = debug.write_str(config::STARTUP_BANNER) {
        warn!("debug banner failed: {}", e);
    }

    let led = Output::new(p.P0_03, Level::Low, OutputDrive::Standard);
    let button = Input::new(p.P0_11, Pull::Up);

    // Above thread mode, below the GPIOTE and time driver interrupts.
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let spawner = BUTTON_EXECUTOR.start(interrupt::EGU1_SWI1);
    unwrap!(spawner.spawn(button::press_task(button, &SHARED)));

    let mut render = RenderLoop::new(&SHARED, led, Delay, debug)
        .with_debug_override(config::DEBUG_OVERRIDE)
        .with_press_report(config::REPORT_PRESSES);

    info!("render loop running");
    let mut last: Option<DisplayState> = None;
    loop {
        match render.step() {
            Ok(state) => {
                if last != Some(state) {
                    info!("state: {} (presses: {})", state, SHARED.press_count());
                    last = Some(state);
                }
            }
            Err(e) => warn!("render pass failed: {}", e),
        }
    }
}
