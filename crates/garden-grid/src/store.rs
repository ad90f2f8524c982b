//! The mutex both gardeners go through.

use std::sync::{Mutex, MutexGuard, PoisonError};

use garden_core::GridDims;

use crate::garden::Garden;

/// Shared handle to the run's one garden, guarded by its one lock.
///
/// Dimensions are cached outside the mutex: they are fixed for the life of
/// the run, and the path policies consult them on every step without
/// needing (or wanting) the lock.
#[derive(Debug)]
pub struct GardenStore {
    dims:  GridDims,
    inner: Mutex<Garden>,
}

impl GardenStore {
    pub fn new(garden: Garden) -> Self {
        GardenStore {
            dims:  garden.dims(),
            inner: Mutex::new(garden),
        }
    }

    /// Grid dimensions, readable without taking the lock.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Take the garden lock, blocking until the other gardener releases it.
    ///
    /// A poisoned mutex is recovered rather than propagated: every write to
    /// the garden is a single enum store, so a holder that panicked mid-step
    /// still left the grid in a consistent state, and the surviving gardener
    /// should finish its walk over it.
    pub fn lock(&self) -> MutexGuard<'_, Garden> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reclaim the garden once every thread holding a handle has finished.
    pub fn into_inner(self) -> Garden {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
