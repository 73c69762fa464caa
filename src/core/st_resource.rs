use std::{
    rc::Rc,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` wraps a value in `Rc<RwLock<T>>`. The chunk manager stores every chunk
/// behind one of these so that a chunk can be write-locked for an edit while the
/// neighbouring chunks stay readable for boundary face culling.
///
/// # Examples
///
/// ```
/// use voxel_world::core::StResource;
///
/// let resource = StResource::new(vec![1, 2, 3]);
/// let clone = resource.clone();
///
/// // Both handles share the same underlying data
/// clone.get_mut().push(4);
/// assert_eq!(resource.get().len(), 4);
/// ```
///
/// # Panics
/// - Panics if the lock is poisoned
/// - Locking the same resource for writing twice on one thread deadlocks or panics; the world grid
///   never re-enters the chunk it is editing
pub struct StResource<T> {
    /// The shared, lockable value.
    pub resource: Rc<RwLock<T>>,
}

impl<T> StResource<T> {
    /// Wraps `resource` in a fresh handle.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Rc::new(RwLock::new(resource)),
        }
    }

    /// Read lock. Any number may be held at once.
    ///
    /// # Panics
    /// Panics if a writer panicked while holding the lock.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap()
    }

    /// Write lock.
    ///
    /// # Panics
    /// Panics if a writer panicked while holding the lock.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap()
    }

    /// Whether both handles refer to the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.resource, &other.resource)
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: Rc::clone(&self.resource),
        }
    }
}
