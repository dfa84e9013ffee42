use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes. Freed slots are recycled through a free
/// list, so handles stay small and dense across split/merge churn.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live elements. Test observability only.
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        match self.free.pop() {
            // Recycle a retired slot under its old handle.
            Some(handle) => {
                self.slots[handle.to_index()] = Some(element);
                handle
            }
            None => {
                let index = self.slots.len();
                assert!(index <= Handle::MAX, "node arena is full");
                self.slots.push(Some(element));
                Handle::from_index(index)
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("stale node handle")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("stale node handle")
    }

    /// Moves the element out and retires its handle.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("stale node handle");
        self.free.push(handle);
        element
    }

    /// Drops the element in place and retires its handle.
    pub(crate) fn free(&mut self, handle: Handle) {
        let slot = &mut self.slots[handle.to_index()];
        assert!(slot.take().is_some(), "stale node handle");
        self.free.push(handle);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
