//! Debug text channel over UARTE0 (TX only).

use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::{self, Baudrate, Parity, UarteTx};
use ledcycle::{config, DebugSink};

/// UARTE settings for the debug channel: 8N1 at [`config::UART_BAUD`].
pub fn uart_config() -> uarte::Config {
    let mut cfg = uarte::Config::default();
    cfg.parity = Parity::EXCLUDED;
    cfg.baudrate = baudrate(config::UART_BAUD);
    cfg
}

fn baudrate(baud: u32) -> Baudrate {
    match baud {
        9_600 => Baudrate::BAUD9600,
        19_200 => Baudrate::BAUD19200,
        38_400 => Baudrate::BAUD38400,
        57_600 => Baudrate::BAUD57600,
        230_400 => Baudrate::BAUD230400,
        460_800 => Baudrate::BAUD460800,
        921_600 => Baudrate::BAUD921600,
        _ => Baudrate::BAUD115200,
    }
}

/// Blocking text writer. Strings in flash are copied to RAM by the
/// driver before DMA.
pub struct UartDebug {
    tx: UarteTx<'static, UARTE0>,
}

impl UartDebug {
    pub fn new(tx: UarteTx<'static, UARTE0>) -> Self {
        Self { tx }
    }
}

impl DebugSink for UartDebug {
    type Error = uarte::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.tx.blocking_write(s.as_bytes())
    }
}
