use crate::numbering::Mode;

/// Errors raised while setting up or driving the LED.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("pin {pin} does not exist in {mode:?} numbering")]
    InvalidPin { mode: Mode, pin: u8 },

    #[error("header pin {pin} is a power or ground pin")]
    NotGpio { pin: u8 },

    #[error("could not install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
