//! GPIO (General Purpose Input/Output) abstraction

/// GPIO pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Input (the state every pin starts in)
    #[default]
    Input,
    /// Output
    Output,
}

impl Direction {
    /// Returns `true` for [`Direction::Output`].
    pub const fn is_output(self) -> bool {
        matches!(self, Direction::Output)
    }
}

impl From<bool> for Direction {
    /// `true` selects output, `false` selects input.
    fn from(is_output: bool) -> Self {
        if is_output {
            Direction::Output
        } else {
            Direction::Input
        }
    }
}

/// GPIO pin levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Low level (0V)
    #[default]
    Low,
    /// High level (VCC)
    High,
}

impl Level {
    /// Returns `true` for [`Level::High`].
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Direction::Input => defmt::write!(fmt, "Input"),
            Direction::Output => defmt::write!(fmt, "Output"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}

/// Register-level GPIO access, addressed by port and bit.
///
/// Implementations are platform specific. None of the operations can fail:
/// a bad port or bit is passed straight to the hardware.
pub trait GpioHal {
    /// Program the physical direction of a pin.
    fn set_direction(&mut self, port: u8, bit: u8, direction: Direction);

    /// Drive the output level of a pin.
    fn set_output_level(&mut self, port: u8, bit: u8, level: Level);

    /// Read the current logical level of a pin.
    fn read_input_level(&mut self, port: u8, bit: u8) -> Level;
}

impl<H: GpioHal + ?Sized> GpioHal for &mut H {
    fn set_direction(&mut self, port: u8, bit: u8, direction: Direction) {
        (**self).set_direction(port, bit, direction)
    }

    fn set_output_level(&mut self, port: u8, bit: u8, level: Level) {
        (**self).set_output_level(port, bit, level)
    }

    fn read_input_level(&mut self, port: u8, bit: u8) -> Level {
        (**self).read_input_level(port, bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_bool() {
        assert_eq!(Direction::from(true), Direction::Output);
        assert_eq!(Direction::from(false), Direction::Input);
        assert_eq!(Direction::default(), Direction::Input);
        assert!(Direction::Output.is_output());
        assert!(!Direction::Input.is_output());
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }
}
