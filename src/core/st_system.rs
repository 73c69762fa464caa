use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

/// Shared, single-threaded ownership of a boxed collaborator, usually a trait object.
///
/// The chunk manager keeps its `dyn MeshSink` in one of these so every rebuild can reach
/// the sink through `&self`, while the code that created the world keeps its own handle.
///
/// # Examples
///
/// ```rust
/// use voxel_world::core::StSystem;
///
/// let log: StSystem<Vec<&str>> = StSystem::new(Box::new(Vec::new()));
/// let writer = log.clone();
/// writer.get_mut().push("chunk (0, 0) uploaded");
/// assert_eq!(log.get().len(), 1);
/// ```
///
/// # Panics
/// Borrowing follows `RefCell` rules: `get_mut` while any other borrow is live panics, as
/// does `get` while `get_mut` is live.
pub struct StSystem<T: ?Sized> {
    /// The boxed collaborator.
    pub system: Rc<RefCell<Box<T>>>,
}

impl<T: ?Sized> StSystem<T> {
    /// Takes ownership of `system`.
    pub fn new(system: Box<T>) -> Self {
        Self {
            system: Rc::new(RefCell::new(system)),
        }
    }

    /// Shared borrow of the collaborator.
    pub fn get(&self) -> Ref<'_, Box<T>> {
        self.system.borrow()
    }

    /// Exclusive borrow of the collaborator.
    pub fn get_mut(&self) -> RefMut<'_, Box<T>> {
        self.system.borrow_mut()
    }
}

impl<T: ?Sized> Clone for StSystem<T> {
    fn clone(&self) -> Self {
        Self {
            system: Rc::clone(&self.system),
        }
    }
}
