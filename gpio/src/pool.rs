//! Static pool allocation strategy.
//!
//! The pool is an arena of `N` slots with an occupancy flag each. Allocation
//! scans the slots in ascending index order and claims the first free one,
//! so the slot a pin lands in is fully determined by the allocation history.
//!
//! Every pool that has handed out a pin carries a process-unique id, and each
//! [`PoolPin`] records the id of the pool that issued it. A handle presented
//! to any other pool is rejected even when the same slot index is occupied
//! there.

use core::cell::Cell;

use critical_section::Mutex;
use hal::Direction;

use crate::{GpioError, GpioInstance, GpioResult, InstanceAllocator, GPIO_MAX_INSTANCES};

// Ids start at 1; 0 marks a pool that has not issued a handle yet.
static NEXT_POOL_ID: Mutex<Cell<usize>> = Mutex::new(Cell::new(1));

fn next_pool_id() -> usize {
    critical_section::with(|cs| {
        let cell = NEXT_POOL_ID.borrow(cs);
        let id = cell.get();
        cell.set(id + 1);
        id
    })
}

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PoolStats {
    /// Number of slots in the pool.
    pub capacity: usize,
    /// Slots claimed right now.
    pub in_use: usize,
    /// Largest `in_use` seen since the pool was created.
    pub peak: usize,
}

impl PoolStats {
    /// Slots still available to `create`.
    pub const fn free(&self) -> usize {
        self.capacity - self.in_use
    }

    /// The next allocation would fail with [`GpioError::Exhausted`].
    pub const fn is_full(&self) -> bool {
        self.in_use == self.capacity
    }

    /// No slot is claimed.
    pub const fn is_empty(&self) -> bool {
        self.in_use == 0
    }
}

/// Handle to a pool slot.
#[derive(Debug, PartialEq, Eq)]
pub struct PoolPin {
    pool: usize,
    index: usize,
}

impl PoolPin {
    /// Slot index this handle refers to.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    instance: GpioInstance,
    in_use: bool,
}

impl Slot {
    const FREE: Slot = Slot {
        instance: GpioInstance::new(0, 0),
        in_use: false,
    };
}

/// Fixed-capacity pool of `N` instance slots.
#[derive(Debug)]
pub struct PoolAllocator<const N: usize = GPIO_MAX_INSTANCES> {
    id: usize,
    slots: [Slot; N],
    peak: usize,
}

impl<const N: usize> PoolAllocator<N> {
    /// Creates a pool with every slot free.
    pub const fn new() -> Self {
        Self {
            id: 0,
            slots: [Slot::FREE; N],
            peak: 0,
        }
    }

    /// Number of slots, `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current occupancy, counted from the slot flags.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: N,
            in_use: self.in_use(),
            peak: self.peak,
        }
    }

    /// Whether slot `index` is currently claimed.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.in_use)
    }

    fn in_use(&self) -> usize {
        self.slots.iter().filter(|slot| slot.in_use).count()
    }

    fn slot(&self, handle: &PoolPin) -> GpioResult<&Slot> {
        if self.id == 0 || handle.pool != self.id {
            return Err(GpioError::InvalidHandle);
        }
        self.slots
            .get(handle.index)
            .filter(|slot| slot.in_use)
            .ok_or(GpioError::InvalidHandle)
    }

    fn slot_mut(&mut self, handle: &PoolPin) -> GpioResult<&mut Slot> {
        self.slot(handle)?;
        self.slots
            .get_mut(handle.index)
            .ok_or(GpioError::InvalidHandle)
    }
}

impl<const N: usize> Default for PoolAllocator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> InstanceAllocator for PoolAllocator<N> {
    type Handle = PoolPin;

    fn allocate(&mut self, instance: GpioInstance) -> GpioResult<PoolPin> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| !slot.in_use)
            .ok_or(GpioError::Exhausted)?;

        *slot = Slot {
            instance,
            in_use: true,
        };
        if self.id == 0 {
            self.id = next_pool_id();
        }
        self.peak = self.peak.max(self.in_use());
        Ok(PoolPin {
            pool: self.id,
            index,
        })
    }

    fn get(&self, handle: &PoolPin) -> GpioResult<GpioInstance> {
        self.slot(handle).map(|slot| slot.instance)
    }

    fn set_direction(
        &mut self,
        handle: &mut PoolPin,
        direction: Direction,
    ) -> GpioResult<GpioInstance> {
        let slot = self.slot_mut(handle)?;
        slot.instance = slot.instance.with_direction(direction);
        Ok(slot.instance)
    }

    fn release(&mut self, handle: PoolPin) -> GpioResult<()> {
        self.slot_mut(&handle)?.in_use = false;
        Ok(())
    }
}
