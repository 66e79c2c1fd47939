//! The GPIO instance record

use hal::Direction;

/// One GPIO pin: its hardware address and configured direction.
///
/// `port` and `bit` are fixed at construction. The direction starts as
/// [`Direction::Input`] and only changes by replacing the record through
/// [`GpioInstance::with_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioInstance {
    port: u8,
    bit: u8,
    direction: Direction,
}

impl GpioInstance {
    /// Pin at `port`/`bit`, configured as input.
    pub const fn new(port: u8, bit: u8) -> Self {
        Self {
            port,
            bit,
            direction: Direction::Input,
        }
    }

    /// Hardware port (bank) of the pin.
    pub const fn port(&self) -> u8 {
        self.port
    }

    /// Pin number within the port.
    pub const fn bit(&self) -> u8 {
        self.bit
    }

    /// Configured direction.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the pin is configured as output.
    pub const fn is_output(&self) -> bool {
        self.direction.is_output()
    }

    /// Same pin with a new direction.
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GpioInstance {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "GpioInstance{{ port: {}, bit: {}, direction: {} }}",
            self.port,
            self.bit,
            self.direction
        );
    }
}
