//! Red LED example
//!
//! Creates the GPIO pin wired to the red LED, configures it as an output and
//! switches the LED off. Runs against the host register model; set `RUST_LOG`
//! (for example `RUST_LOG=trace`) to watch the register accesses.
//!
//! Build with `--features dynamic-mem` to take pin instances from the heap
//! instead of the static pool.

use std::process::ExitCode;

use gpio::{GpioError, GpioManager, Level};
use hal_host::HostGpio;
use thiserror::Error;

/// Port number of the red LED.
const LED_RED_PORT: u8 = 1;
/// Pin number of the red LED.
const LED_RED_BIT: u8 = 7;

#[derive(Error, Debug)]
enum AppError {
    #[error("red LED setup failed: {0}")]
    Gpio(#[from] GpioError),
}

fn run() -> Result<(), AppError> {
    log::info!("red-led on gpio {}", gpio::VERSION);
    let mut gpio: GpioManager<HostGpio> = GpioManager::new(HostGpio::new());

    let mut red_led = gpio.create(LED_RED_PORT, LED_RED_BIT)?;
    gpio.set_output(&mut red_led, true)?;
    gpio.set_state(&red_led, Level::Low)?;

    let regs = gpio.hal().registers(LED_RED_PORT);
    log::info!(
        "red LED P{}.{} off (dir={:#010x} out={:#010x})",
        LED_RED_PORT,
        LED_RED_BIT,
        regs.dir,
        regs.out
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
