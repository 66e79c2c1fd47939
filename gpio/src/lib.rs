#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

//! # GPIO
//!
//! Instance manager for individual GPIO pins. A pin is created from a
//! `(port, bit)` pair, configured as input or output, and driven or read
//! through a [`hal::GpioHal`] implementation.
//!
//! Backing storage for pin instances comes from an [`InstanceAllocator`]:
//!
//! - [`PoolAllocator`]: fixed array of [`GPIO_MAX_INSTANCES`] slots, first-fit,
//!   no heap use. The default strategy.
//! - [`HeapAllocator`]: one heap block per pin, unbounded. Requires the `alloc`
//!   feature; the `dynamic-mem` feature makes it the default.
//! - [`SharedPool`]: a pool that can live in a `static` and be shared by
//!   several managers, guarded by a critical section.
//!
//! ```
//! use gpio::{GpioManager, Level, PoolAllocator};
//! use hal_host::HostGpio;
//!
//! let mut gpio: GpioManager<HostGpio, PoolAllocator> = GpioManager::new(HostGpio::new());
//! let mut led = gpio.create(1, 7)?;
//! gpio.set_output(&mut led, true)?;
//! gpio.set_state(&led, Level::Low)?;
//! # Ok::<(), gpio::GpioError>(())
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod allocator;
pub mod error;
#[cfg(feature = "alloc")]
pub mod heap;
pub mod instance;
pub mod manager;
pub mod pool;
pub mod shared;

pub use allocator::{DefaultAllocator, InstanceAllocator};
pub use error::{GpioError, GpioResult};
#[cfg(feature = "alloc")]
pub use heap::{HeapAllocator, HeapPin};
pub use instance::GpioInstance;
pub use manager::GpioManager;
pub use pool::{PoolAllocator, PoolPin, PoolStats};
pub use shared::SharedPool;

pub use hal::{Direction, GpioHal, Level};

#[cfg(test)]
mod tests;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of slots in a pool allocator unless a different capacity is chosen.
pub const GPIO_MAX_INSTANCES: usize = 10;
