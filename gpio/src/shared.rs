//! Pool shared between managers or threads.
//!
//! [`SharedPool`] wraps a [`PoolAllocator`] in a critical-section mutex so it
//! can be placed in a `static`. The slot scan-and-claim of an allocation runs
//! as one critical section, which keeps two concurrent `create` calls from
//! claiming the same slot.
//!
//! ```
//! use gpio::{GpioManager, SharedPool};
//! use hal::mock::RecordingHal;
//!
//! static PINS: SharedPool = SharedPool::new();
//!
//! let mut gpio = GpioManager::with_allocator(RecordingHal::new(), &PINS);
//! let led = gpio.create(1, 7)?;
//! assert_eq!(led.index(), 0);
//! assert_eq!(PINS.stats().in_use, 1);
//! # Ok::<(), gpio::GpioError>(())
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use hal::Direction;

use crate::{GpioInstance, GpioResult, InstanceAllocator, PoolAllocator, PoolPin, PoolStats};
use crate::GPIO_MAX_INSTANCES;

/// [`PoolAllocator`] behind a critical-section mutex, shareable through `&SharedPool`.
pub struct SharedPool<const N: usize = GPIO_MAX_INSTANCES> {
    pool: Mutex<RefCell<PoolAllocator<N>>>,
}

impl<const N: usize> SharedPool<N> {
    /// Creates a pool with every slot free. Usable in a `static` initializer.
    pub const fn new() -> Self {
        Self {
            pool: Mutex::new(RefCell::new(PoolAllocator::new())),
        }
    }

    /// Current occupancy of the pool.
    pub fn stats(&self) -> PoolStats {
        critical_section::with(|cs| self.pool.borrow_ref(cs).stats())
    }

    /// Whether slot `index` is currently claimed.
    pub fn is_occupied(&self, index: usize) -> bool {
        critical_section::with(|cs| self.pool.borrow_ref(cs).is_occupied(index))
    }
}

impl<const N: usize> Default for SharedPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p, const N: usize> InstanceAllocator for &'p SharedPool<N> {
    type Handle = PoolPin;

    fn allocate(&mut self, instance: GpioInstance) -> GpioResult<PoolPin> {
        critical_section::with(|cs| self.pool.borrow_ref_mut(cs).allocate(instance))
    }

    fn get(&self, handle: &PoolPin) -> GpioResult<GpioInstance> {
        critical_section::with(|cs| self.pool.borrow_ref(cs).get(handle))
    }

    fn set_direction(
        &mut self,
        handle: &mut PoolPin,
        direction: Direction,
    ) -> GpioResult<GpioInstance> {
        critical_section::with(|cs| {
            self.pool
                .borrow_ref_mut(cs)
                .set_direction(handle, direction)
        })
    }

    fn release(&mut self, handle: PoolPin) -> GpioResult<()> {
        critical_section::with(|cs| self.pool.borrow_ref_mut(cs).release(handle))
    }
}
