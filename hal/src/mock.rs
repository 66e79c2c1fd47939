//! Call-recording HAL for tests.
//!
//! [`RecordingHal`] never touches hardware. It keeps an ordered log of every
//! call it receives and answers reads from levels scripted with
//! [`RecordingHal::set_input`].

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::gpio::{Direction, GpioHal, Level};

/// One call made into the HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalCall {
    SetDirection { port: u8, bit: u8, direction: Direction },
    SetOutputLevel { port: u8, bit: u8, level: Level },
    ReadInputLevel { port: u8, bit: u8 },
}

/// HAL that records calls instead of touching hardware.
#[derive(Debug, Default)]
pub struct RecordingHal {
    calls: Vec<HalCall>,
    inputs: BTreeMap<(u8, u8), Level>,
}

impl RecordingHal {
    /// Creates a HAL with an empty call log and every pin reading low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the level returned by reads of `(port, bit)`. Unscripted pins read low.
    pub fn set_input(&mut self, port: u8, bit: u8, level: Level) {
        self.inputs.insert((port, bit), level);
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> &[HalCall] {
        &self.calls
    }

    /// Forgets the recorded calls. Scripted inputs are kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of `set_output_level` calls received.
    pub fn output_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HalCall::SetOutputLevel { .. }))
            .count()
    }

    /// Number of `read_input_level` calls received.
    pub fn input_reads(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HalCall::ReadInputLevel { .. }))
            .count()
    }
}

impl GpioHal for RecordingHal {
    fn set_direction(&mut self, port: u8, bit: u8, direction: Direction) {
        self.calls.push(HalCall::SetDirection {
            port,
            bit,
            direction,
        });
    }

    fn set_output_level(&mut self, port: u8, bit: u8, level: Level) {
        self.calls.push(HalCall::SetOutputLevel { port, bit, level });
    }

    fn read_input_level(&mut self, port: u8, bit: u8) -> Level {
        self.calls.push(HalCall::ReadInputLevel { port, bit });
        self.inputs.get(&(port, bit)).copied().unwrap_or_default()
    }
}
