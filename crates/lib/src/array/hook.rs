//! The post-mutation hook.
//!
//! Every mutating method of [`ArrayObject`](crate::ArrayObject) finishes by
//! passing through one private gate, which calls
//! [`MutationHook::on_after_update`] exactly once. Reads never reach it.

/// Observer called after each mutating operation.
///
/// The default implementation does nothing. Implement it to invalidate caches
/// or count changes:
///
/// ```
/// use array_object::{ArrayObject, MutationHook};
///
/// #[derive(Default)]
/// struct Dirty(bool);
///
/// impl MutationHook for Dirty {
///     fn on_after_update(&mut self) {
///         self.0 = true;
///     }
/// }
///
/// let mut array: ArrayObject<i64, Dirty> = ArrayObject::default();
/// assert!(!array.hook().0);
/// array.append(1);
/// assert!(array.hook().0);
/// ```
pub trait MutationHook {
    /// Called once after the contents changed
    fn on_after_update(&mut self) {}
}

/// A hook that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHook;

impl MutationHook for NoopHook {}

/// A hook that counts how many times it fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounter {
    count: usize,
}

impl UpdateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutating calls seen so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }
}

impl MutationHook for UpdateCounter {
    fn on_after_update(&mut self) {
        self.count += 1;
    }
}

impl<H: MutationHook + ?Sized> MutationHook for Box<H> {
    fn on_after_update(&mut self) {
        (**self).on_after_update();
    }
}
