//! The blink loop.

use std::io::{self, Write};
use std::time::Duration;

use embedded_hal::digital::OutputPin;
use log::{debug, info};

use crate::shutdown::Shutdown;

/// Time spent in each level; a full on/off cycle is twice this.
pub const HALF_PERIOD: Duration = Duration::from_secs(1);

/// First line printed at startup.
pub const STARTUP_MESSAGE: &str = "something should be happening";

/// Print the startup banner: the fixed message, then the pin number.
pub fn announce<W: Write>(out: &mut W, pin: u8) -> io::Result<()> {
    writeln!(out, "{STARTUP_MESSAGE}")?;
    writeln!(out, "{pin}")?;
    out.flush()
}

/// Square wave with a 50% duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinker {
    half_period: Duration,
}

impl Default for Blinker {
    fn default() -> Self {
        Blinker::new()
    }
}

impl Blinker {
    pub fn new() -> Self {
        Blinker::with_half_period(HALF_PERIOD)
    }

    pub fn with_half_period(half_period: Duration) -> Self {
        Blinker { half_period }
    }

    pub fn half_period(&self) -> Duration {
        self.half_period
    }

    /// Drive `pin` high, wait, low, wait, until `shutdown` is triggered.
    ///
    /// Returns the number of writes made. A failed write is returned as is
    /// and nothing is written after it. The delays do not compensate for the
    /// time spent writing, so a cycle is never shorter than two half periods.
    pub fn run<P: OutputPin>(&self, pin: &mut P, shutdown: &Shutdown) -> Result<u64, P::Error> {
        info!("blinking every {:?}", self.half_period);
        let mut writes = 0;

        while !shutdown.is_triggered() {
            pin.set_high()?;
            writes += 1;
            if shutdown.wait(self.half_period) {
                break;
            }

            pin.set_low()?;
            writes += 1;
            if shutdown.wait(self.half_period) {
                break;
            }
        }

        debug!("blink loop stopped after {writes} writes");
        Ok(writes)
    }
}
