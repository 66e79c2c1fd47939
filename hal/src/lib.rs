//! Hardware Abstraction Layer (HAL) for GPIO pins
//!
//! This crate defines the register-level contract a GPIO instance manager
//! drives: program a pin's direction, drive its output level, and read its
//! logical level. Vendor crates (see `hal-host`) provide the implementations.

#![no_std]

#[cfg(feature = "mock")]
extern crate alloc;

pub mod gpio;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export commonly used types
pub use gpio::{Direction, GpioHal, Level};
