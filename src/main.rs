use board_blink::{Blinker, Led, Setup, Shutdown, announce};
use env_logger::Env;
use log::info;
use std::error::Error;
use std::io;

// Physical header pin, BCM GPIO 6.
const LED_PIN: u8 = 31;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut led = initialize_gpio()?;
    let shutdown = Shutdown::on_ctrlc()?;

    announce(&mut io::stdout().lock(), LED_PIN)?;

    let writes = Blinker::new().run(&mut led, &shutdown)?;

    cleanup(led, writes);
    Ok(())
}

fn initialize_gpio() -> Result<Led, Box<dyn Error>> {
    let led = Setup::default().warnings(false).output(LED_PIN)?;
    Ok(led)
}

fn cleanup(led: Led, writes: u64) {
    info!("LED on GPIO {} toggled {writes} times, releasing", led.line());
}
