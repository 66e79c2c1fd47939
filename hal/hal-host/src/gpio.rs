//! Simulated GPIO register banks

use hal::gpio::{Direction, GpioHal, Level};
use heapless::LinearMap;

/// Number of distinct ports a [`HostGpio`] tracks unless told otherwise.
pub const DEFAULT_PORTS: usize = 8;

/// Register words of one simulated port. Bit `n` of each word belongs to pin `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortRegisters {
    /// Direction register, 1 = output.
    pub dir: u32,
    /// Output latch.
    pub out: u32,
    /// Externally applied input levels.
    pub input: u32,
}

impl PortRegisters {
    fn write_bit(word: &mut u32, bit: u8, set: bool) {
        if set {
            *word |= mask(bit);
        } else {
            *word &= !mask(bit);
        }
    }
}

// Shift amounts wrap at the word width, bits >= 32 alias lower pins.
fn mask(bit: u8) -> u32 {
    1u32.wrapping_shl(u32::from(bit))
}

/// Host GPIO with up to `PORTS` lazily created register banks.
///
/// Accesses to a port that would need a bank beyond `PORTS` are dropped with
/// a warning and read back as [`Level::Low`].
#[derive(Debug, Default)]
pub struct HostGpio<const PORTS: usize = DEFAULT_PORTS> {
    banks: LinearMap<u8, PortRegisters, PORTS>,
}

impl<const PORTS: usize> HostGpio<PORTS> {
    /// Creates a host GPIO with no register banks yet.
    pub const fn new() -> Self {
        Self {
            banks: LinearMap::new(),
        }
    }

    /// Snapshot of the register bank for `port` (all zero if never accessed).
    pub fn registers(&self, port: u8) -> PortRegisters {
        self.banks.get(&port).copied().unwrap_or_default()
    }

    /// Simulate an external signal on an input pin.
    pub fn drive_input(&mut self, port: u8, bit: u8, level: Level) {
        if let Some(bank) = self.bank_mut(port) {
            PortRegisters::write_bit(&mut bank.input, bit, level.is_high());
        }
    }

    fn bank_mut(&mut self, port: u8) -> Option<&mut PortRegisters> {
        if !self.banks.contains_key(&port)
            && self.banks.insert(port, PortRegisters::default()).is_err()
        {
            log::warn!("no register bank left for port {}, access dropped", port);
            return None;
        }
        self.banks.get_mut(&port)
    }
}

impl<const PORTS: usize> GpioHal for HostGpio<PORTS> {
    fn set_direction(&mut self, port: u8, bit: u8, direction: Direction) {
        log::trace!("P{}.{} dir <- {:?}", port, bit, direction);
        if let Some(bank) = self.bank_mut(port) {
            PortRegisters::write_bit(&mut bank.dir, bit, direction.is_output());
        }
    }

    fn set_output_level(&mut self, port: u8, bit: u8, level: Level) {
        log::trace!("P{}.{} out <- {:?}", port, bit, level);
        if let Some(bank) = self.bank_mut(port) {
            PortRegisters::write_bit(&mut bank.out, bit, level.is_high());
        }
    }

    fn read_input_level(&mut self, port: u8, bit: u8) -> Level {
        let regs = self.registers(port);
        // Output pins read back their latch, input pins the applied signal.
        let word = if regs.dir & mask(bit) != 0 {
            regs.out
        } else {
            regs.input
        };
        let level = Level::from(word & mask(bit) != 0);
        log::trace!("P{}.{} in -> {:?}", port, bit, level);
        level
    }
}
