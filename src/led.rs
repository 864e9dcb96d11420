//! The LED pin: claiming it, driving it and giving it back.

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::{debug, warn};
use rppal::gpio::{self, Gpio};

use crate::error::Result;
use crate::numbering::Mode;

/// Output lines addressed by BCM number.
///
/// Implemented for [`Gpio`]; anything else can stand in for the board.
pub trait Lines {
    type Output: OutputPin;

    /// Whether `bcm` is currently configured as an output.
    fn is_output(&self, bcm: u8) -> Result<bool>;

    /// Configure `bcm` as an output, driven low.
    fn claim_output(&mut self, bcm: u8) -> Result<Self::Output>;
}

impl Lines for Gpio {
    type Output = Led;

    fn is_output(&self, bcm: u8) -> Result<bool> {
        Ok(self.get(bcm)?.mode() == gpio::Mode::Output)
    }

    fn claim_output(&mut self, bcm: u8) -> Result<Led> {
        let mut line = self.get(bcm)?.into_output_low();
        line.set_reset_on_drop(true);
        Ok(Led { line })
    }
}

/// GPIO subsystem settings applied when a pin is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    pub mode: Mode,
    /// Warn when the line is already an output, e.g. left over from an
    /// earlier run that did not clean up.
    pub warnings: bool,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            mode: Mode::Board,
            warnings: true,
        }
    }
}

impl Setup {
    pub fn numbering(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn warnings(mut self, enabled: bool) -> Self {
        self.warnings = enabled;
        self
    }

    /// Claim `pin` on the board's GPIO as a digital output, initially low.
    ///
    /// The numbering is checked before the GPIO subsystem is opened, so a bad
    /// pin fails the same way on any host.
    pub fn output(&self, pin: u8) -> Result<Led> {
        let bcm = self.mode.resolve(pin)?;
        self.claim_line(&mut Gpio::new()?, pin, bcm)
    }

    /// Claim `pin` from `lines` as a digital output, initially low.
    pub fn claim<L: Lines>(&self, lines: &mut L, pin: u8) -> Result<L::Output> {
        let bcm = self.mode.resolve(pin)?;
        self.claim_line(lines, pin, bcm)
    }

    fn claim_line<L: Lines>(&self, lines: &mut L, pin: u8, bcm: u8) -> Result<L::Output> {
        if self.warnings && lines.is_output(bcm)? {
            warn!("GPIO {bcm} is already configured as an output, continuing anyway");
        }

        let line = lines.claim_output(bcm)?;
        debug!("pin {pin} ({:?}) claimed as output on GPIO {bcm}", self.mode);
        Ok(line)
    }
}

/// An LED on a claimed output line.
///
/// Dropping it drives the line low and restores the mode it had before it
/// was claimed.
#[derive(Debug)]
pub struct Led {
    line: gpio::OutputPin,
}

impl Led {
    /// BCM line number.
    pub fn line(&self) -> u8 {
        self.line.pin()
    }
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> std::result::Result<(), Self::Error> {
        self.line.set_low();
        debug!("LED off");
        Ok(())
    }

    fn set_high(&mut self) -> std::result::Result<(), Self::Error> {
        self.line.set_high();
        debug!("LED on");
        Ok(())
    }
}

impl Drop for Led {
    fn drop(&mut self) {
        self.line.set_low();
        debug!("released GPIO {}", self.line.pin());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_setup() {
        let setup = Setup::default();
        assert_eq!(setup.mode, Mode::Board);
        assert!(setup.warnings);
    }

    #[test]
    fn builder() {
        let setup = Setup::default().numbering(Mode::Bcm).warnings(false);
        assert_eq!(
            setup,
            Setup {
                mode: Mode::Bcm,
                warnings: false
            }
        );
    }

    #[test]
    fn ground_pin_fails_before_touching_hardware() {
        let err = Setup::default().output(6).unwrap_err();
        assert!(matches!(err, Error::NotGpio { pin: 6 }));
    }

    #[test]
    fn bad_bcm_line_fails_before_touching_hardware() {
        let err = Setup::default().numbering(Mode::Bcm).output(40).unwrap_err();
        assert!(matches!(err, Error::InvalidPin { mode: Mode::Bcm, pin: 40 }));
    }
}
