//! Pin numbering conventions.
//!
//! `rppal` always addresses lines by their Broadcom (BCM) number. The LED is
//! wired by physical header position, so header positions are translated here
//! before the pin is claimed.

use crate::error::{Error, Result};

/// How a pin identifier is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Physical position on the 40-pin header (1..=40).
    #[default]
    Board,
    /// Broadcom SoC line number.
    Bcm,
}

/// Broadcom line for each header position, `None` for power and ground.
#[rustfmt::skip]
const HEADER: [Option<u8>; 40] = [
    None,     None,         // 1: 3V3, 2: 5V
    Some(2),  None,         // 3, 4: 5V
    Some(3),  None,         // 5, 6: GND
    Some(4),  Some(14),     // 7, 8
    None,     Some(15),     // 9: GND, 10
    Some(17), Some(18),     // 11, 12
    Some(27), None,         // 13, 14: GND
    Some(22), Some(23),     // 15, 16
    None,     Some(24),     // 17: 3V3, 18
    Some(10), None,         // 19, 20: GND
    Some(9),  Some(25),     // 21, 22
    Some(11), Some(8),      // 23, 24
    None,     Some(7),      // 25: GND, 26
    Some(0),  Some(1),      // 27, 28: ID EEPROM
    Some(5),  None,         // 29, 30: GND
    Some(6),  Some(12),     // 31, 32
    Some(13), None,         // 33, 34: GND
    Some(19), Some(16),     // 35, 36
    Some(26), Some(20),     // 37, 38
    None,     Some(21),     // 39: GND, 40
];

/// Highest BCM line broken out on the header.
const MAX_BCM: u8 = 27;

impl Mode {
    /// Translate `pin` into the BCM line number `rppal` expects.
    pub fn resolve(self, pin: u8) -> Result<u8> {
        match self {
            Mode::Bcm if pin <= MAX_BCM => Ok(pin),
            Mode::Bcm => Err(Error::InvalidPin { mode: self, pin }),
            Mode::Board => match pin.checked_sub(1).and_then(|i| HEADER.get(usize::from(i))) {
                Some(Some(bcm)) => Ok(*bcm),
                Some(None) => Err(Error::NotGpio { pin }),
                None => Err(Error::InvalidPin { mode: self, pin }),
            },
        }
    }
}
