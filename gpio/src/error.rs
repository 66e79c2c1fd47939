//! Error type for GPIO instance management

use core::fmt;

/// Result type used throughout the crate
pub type GpioResult<T> = Result<T, GpioError>;

/// Errors reported by GPIO instance management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Every slot of the instance pool is occupied
    Exhausted,
    /// The heap could not provide storage for another instance
    OutOfMemory,
    /// The handle does not refer to a live instance of this allocator
    InvalidHandle,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::Exhausted => write!(f, "GPIO instance pool exhausted"),
            GpioError::OutOfMemory => write!(f, "Out of memory for GPIO instance"),
            GpioError::InvalidHandle => write!(f, "Invalid GPIO handle"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GpioError {}

#[cfg(feature = "defmt")]
impl defmt::Format for GpioError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GpioError::Exhausted => defmt::write!(fmt, "Exhausted"),
            GpioError::OutOfMemory => defmt::write!(fmt, "OutOfMemory"),
            GpioError::InvalidHandle => defmt::write!(fmt, "InvalidHandle"),
        }
    }
}
