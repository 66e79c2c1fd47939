//! Host HAL implementation
//!
//! Hardware abstraction layer implementation that runs on the build host.
//!
//! Instead of touching real registers, [`HostGpio`] keeps one simulated
//! register bank per port (direction, output and input words) and logs every
//! access at `trace` level, so applications written against the `hal` traits
//! can run and be inspected on a workstation.
//!
//! ## Example
//! ```
//! use hal::{Direction, GpioHal, Level};
//! use hal_host::HostGpio;
//!
//! let mut gpio: HostGpio = HostGpio::new();
//! gpio.set_direction(1, 7, Direction::Output);
//! gpio.set_output_level(1, 7, Level::High);
//! assert_eq!(gpio.read_input_level(1, 7), Level::High);
//! ```

#![no_std]

pub mod gpio;

// Re-export commonly used types
pub use gpio::{HostGpio, PortRegisters, DEFAULT_PORTS};
