//! Blink an LED on a Raspberry Pi header pin.

pub mod blink;
pub mod error;
pub mod led;
pub mod numbering;
pub mod shutdown;

pub use blink::{Blinker, HALF_PERIOD, STARTUP_MESSAGE, announce};
pub use error::{Error, Result};
pub use led::{Led, Lines, Setup};
pub use numbering::Mode;
pub use shutdown::Shutdown;
