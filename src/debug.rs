//! One-way debug text channel.
//!
//! The render loop only hands complete strings to a [`DebugSink`]; the
//! sink owns formatting and transmission (UART on target, a buffer in
//! tests).

use core::fmt::Write;

use heapless::String;

/// Widest decimal `u32` ("4294967295").
pub const COUNT_DIGITS: usize = 10;

/// A serial-like text output.
pub trait DebugSink {
    type Error;

    /// Transmit `s` in full.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

impl<T: DebugSink + ?Sized> DebugSink for &mut T {
    type Error = T::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

/// Decimal rendering of a press count.
pub fn int_to_string(number: u32) -> String<COUNT_DIGITS> {
    let mut out = String::new();
    // Ten digits always fit.
    let _ = write!(out, "{}", number);
    out
}

/// Write `Total Presses: <n>\n` to `sink`.
pub fn write_press_report<S: DebugSink>(sink: &mut S, presses: u32) -> Result<(), S::Error> {
    sink.write_str("Total Presses: ")?;
    sink.write_str(&int_to_string(presses))?;
    sink.write_str("\n")
}
