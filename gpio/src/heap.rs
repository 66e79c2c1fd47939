//! Heap allocation strategy: one block per instance, no fixed upper bound.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hal::Direction;

use crate::{GpioError, GpioInstance, GpioResult, InstanceAllocator};

/// Handle owning a heap-allocated instance.
// A one-element slice rather than `Box<GpioInstance>` so the block can come
// from `Vec::try_reserve_exact`; it always holds exactly one instance.
#[derive(Debug)]
pub struct HeapPin(Box<[GpioInstance]>);

impl HeapPin {
    fn instance(&self) -> &GpioInstance {
        &self.0[0]
    }

    fn instance_mut(&mut self) -> &mut GpioInstance {
        &mut self.0[0]
    }
}

/// Allocates every instance in its own heap block.
#[derive(Debug, Default)]
pub struct HeapAllocator {
    live: usize,
}

impl HeapAllocator {
    /// Creates an allocator with no live instances.
    pub const fn new() -> Self {
        Self { live: 0 }
    }

    /// Number of instances allocated and not yet released.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl InstanceAllocator for HeapAllocator {
    type Handle = HeapPin;

    fn allocate(&mut self, instance: GpioInstance) -> GpioResult<HeapPin> {
        // Reserve through a Vec so exhaustion is reported instead of aborting.
        let mut block = Vec::new();
        block
            .try_reserve_exact(1)
            .map_err(|_| GpioError::OutOfMemory)?;
        block.push(instance);

        self.live += 1;
        Ok(HeapPin(block.into_boxed_slice()))
    }

    fn get(&self, handle: &HeapPin) -> GpioResult<GpioInstance> {
        Ok(*handle.instance())
    }

    fn set_direction(
        &mut self,
        handle: &mut HeapPin,
        direction: Direction,
    ) -> GpioResult<GpioInstance> {
        let slot = handle.instance_mut();
        *slot = slot.with_direction(direction);
        Ok(*slot)
    }

    fn release(&mut self, handle: HeapPin) -> GpioResult<()> {
        drop(handle);
        self.live = self.live.saturating_sub(1);
        Ok(())
    }
}
