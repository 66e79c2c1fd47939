//! GPIO instance manager: create, configure, drive and read pins.

use hal::{Direction, GpioHal, Level};

use crate::{DefaultAllocator, GpioInstance, GpioResult, InstanceAllocator};

/// Drives GPIO pins through a HAL, with pin storage from an allocator.
///
/// A pin's life is `create` → any number of `set_output` / `set_state` /
/// `get_state` calls → optionally `release`. Creating and releasing pins never
/// touches the hardware.
pub struct GpioManager<H, A = DefaultAllocator> {
    hal: H,
    allocator: A,
}

impl<H: GpioHal, A: InstanceAllocator + Default> GpioManager<H, A> {
    /// Creates a manager with an empty allocator.
    pub fn new(hal: H) -> Self {
        Self::with_allocator(hal, A::default())
    }
}

impl<H: GpioHal, A: InstanceAllocator> GpioManager<H, A> {
    /// Creates a manager that takes pin storage from `allocator`.
    pub fn with_allocator(hal: H, allocator: A) -> Self {
        Self { hal, allocator }
    }

    /// Creates a pin at `port`/`bit`, configured as input.
    ///
    /// Fails with [`GpioError::Exhausted`](crate::GpioError::Exhausted) when a
    /// pool has no free slot, or
    /// [`GpioError::OutOfMemory`](crate::GpioError::OutOfMemory) when the heap
    /// cannot hold another instance.
    pub fn create(&mut self, port: u8, bit: u8) -> GpioResult<A::Handle> {
        match self.allocator.allocate(GpioInstance::new(port, bit)) {
            Ok(handle) => {
                log::debug!("created GPIO P{}.{}", port, bit);
                Ok(handle)
            }
            Err(err) => {
                log::warn!("cannot create GPIO P{}.{}: {}", port, bit, err);
                Err(err)
            }
        }
    }

    /// Configures the pin as output (`true`) or input (`false`).
    ///
    /// The hardware direction is reprogrammed on every call.
    pub fn set_output(&mut self, pin: &mut A::Handle, output: bool) -> GpioResult<()> {
        let instance = self
            .allocator
            .set_direction(pin, Direction::from(output))?;
        self.hal
            .set_direction(instance.port(), instance.bit(), instance.direction());
        Ok(())
    }

    /// Drives the pin to `level`. Does nothing if the pin is an input.
    pub fn set_state(&mut self, pin: &A::Handle, level: Level) -> GpioResult<()> {
        let instance = self.allocator.get(pin)?;
        if instance.is_output() {
            self.hal
                .set_output_level(instance.port(), instance.bit(), level);
        }
        Ok(())
    }

    /// Reads the pin's current level from the hardware, whatever its direction.
    pub fn get_state(&mut self, pin: &A::Handle) -> GpioResult<Level> {
        let instance = self.allocator.get(pin)?;
        Ok(self.hal.read_input_level(instance.port(), instance.bit()))
    }

    /// Gives the pin's storage back to the allocator.
    pub fn release(&mut self, pin: A::Handle) -> GpioResult<()> {
        let instance = self.allocator.get(&pin)?;
        self.allocator.release(pin)?;
        log::debug!("released GPIO P{}.{}", instance.port(), instance.bit());
        Ok(())
    }

    /// Snapshot of the instance behind `pin`.
    pub fn instance(&self, pin: &A::Handle) -> GpioResult<GpioInstance> {
        self.allocator.get(pin)
    }

    /// The HAL pins are driven through.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Mutable access to the HAL.
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// The allocator holding pin instances.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Splits the manager back into its HAL and allocator.
    pub fn into_parts(self) -> (H, A) {
        (self.hal, self.allocator)
    }
}
