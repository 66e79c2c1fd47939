//! Storage strategy for GPIO instances

use hal::Direction;

use crate::{GpioInstance, GpioResult};

/// Owns the backing storage of GPIO instances and hands out handles to them.
///
/// Handles are move-only: giving one back through [`release`] ends its life.
/// An allocator must not touch hardware; that is the manager's job.
///
/// [`release`]: InstanceAllocator::release
pub trait InstanceAllocator {
    /// Opaque reference to one stored instance
    type Handle;

    /// Store `instance` and return a handle to it.
    fn allocate(&mut self, instance: GpioInstance) -> GpioResult<Self::Handle>;

    /// Copy of the instance behind `handle`.
    fn get(&self, handle: &Self::Handle) -> GpioResult<GpioInstance>;

    /// Update the stored direction and return the updated instance.
    fn set_direction(
        &mut self,
        handle: &mut Self::Handle,
        direction: Direction,
    ) -> GpioResult<GpioInstance>;

    /// Return the storage behind `handle` to the allocator.
    fn release(&mut self, handle: Self::Handle) -> GpioResult<()>;
}

/// Allocation strategy selected at build time by the `dynamic-mem` feature.
#[cfg(feature = "dynamic-mem")]
pub type DefaultAllocator = crate::heap::HeapAllocator;

/// Allocation strategy selected at build time by the `dynamic-mem` feature.
#[cfg(not(feature = "dynamic-mem"))]
pub type DefaultAllocator = crate::pool::PoolAllocator;
