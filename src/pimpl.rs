/*!

# Pointer to Implementation

[`Pimpl<T>`] is an owning indirection to a value whose type the owner does not want to
expose. It is the reusable half of the "pointer to implementation" idiom: the public type
holds a `Pimpl<SomePrivateType>` as its only field, and the private type is free to grow,
shrink, or be rearranged without the public type's layout or signature changing.

The C++ formulation of the idiom has to spell out five special member functions by hand (copy
constructor, copy assignment, move constructor, move assignment, destructor), because the
compiler cannot generate them for an incomplete type. In Rust most of that falls out of the
ownership model:

| C++                       | `Pimpl<T>`                                              |
| ------------------------- | ------------------------------------------------------- |
| `Widget(const Widget&)`   | [`Clone::clone`], a deep copy into a fresh `Box<T>`     |
| `operator=(const Widget&)`| [`Clone::clone_from`], the copy is built before release |
| `Widget(Widget&&)`        | a plain Rust move, or [`Pimpl::take`]                   |
| `operator=(Widget&&)`     | plain assignment, or [`Pimpl::move_from`]               |
| `~Widget()`               | [`Drop`]                                                |

A plain Rust move makes the source statically unusable, so there is no moved-from state to
observe. C++ code, however, routinely moves out of a place it keeps using (a struct field, a
slot in a container) and later reassigns it. [`Pimpl::take`] and [`Pimpl::move_from`] model
exactly that: they transfer the box in constant time and leave the source _empty_. An empty
`Pimpl` may be dropped, reassigned, or moved again. Reading through it is a precondition
violation: [`Pimpl::get`] panics, while [`Pimpl::try_get`] reports [`PimplError::MovedFrom`].

Because the box is non-null, `Option<Box<T>>` has the same size as a single pointer, so the
empty state costs nothing.

*/

use std::any::type_name;

use tracing::trace;

use crate::error::PimplError;

/// An exclusively owned, heap-allocated implementation that is either live or moved-from.
#[derive(PartialEq, Eq)]
pub struct Pimpl<T> {
    inner: Option<Box<T>>,
}

impl<T> Pimpl<T> {
    /// Allocates `value` on the heap and takes ownership of it.
    pub fn new(value: T) -> Self {
        trace!("constructing {}", type_name::<T>());
        Self {
            inner: Some(Box::new(value)),
        }
    }

    /// Moves the implementation out into a new `Pimpl`, leaving `self` empty. Never allocates,
    /// and taking from an empty `Pimpl` yields another empty one.
    #[must_use]
    pub fn take(&mut self) -> Self {
        trace!(live = self.inner.is_some(), "moving out of {}", type_name::<T>());
        Self {
            inner: self.inner.take(),
        }
    }

    /// Move assignment. Releases the implementation `self` currently owns, then takes ownership
    /// of `other`'s, leaving `other` empty.
    pub fn move_from(&mut self, other: &mut Self) {
        trace!(
            released = self.inner.is_some(),
            received = other.inner.is_some(),
            "move-assigning {}",
            type_name::<T>()
        );
        self.inner = other.inner.take();
    }

    /// Releases the implementation now rather than at end of scope. A no-op on an empty `Pimpl`.
    pub fn reset(&mut self) {
        if let Some(released) = self.inner.take() {
            trace!("releasing {}", type_name::<T>());
            drop(released);
        }
    }

    /// `true` once the implementation has been moved out or released.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// `true` while the implementation is live.
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Borrows the implementation.
    ///
    /// # Panics
    ///
    /// Panics if `self` has been moved from.
    pub fn get(&self) -> &T {
        self.try_get().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutably borrows the implementation.
    ///
    /// # Panics
    ///
    /// Panics if `self` has been moved from.
    pub fn get_mut(&mut self) -> &mut T {
        self.try_get_mut().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_get(&self) -> Result<&T, PimplError> {
        self.inner.as_deref().ok_or_else(Self::moved_from)
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T, PimplError> {
        self.inner.as_deref_mut().ok_or_else(Self::moved_from)
    }

    fn moved_from() -> PimplError {
        PimplError::MovedFrom {
            type_name: type_name::<T>(),
        }
    }
}

impl<T: Default> Default for Pimpl<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Clone for Pimpl<T> {
    /// Deep copy. An empty `Pimpl` clones to an empty `Pimpl`.
    fn clone(&self) -> Self {
        trace!(live = self.inner.is_some(), "copying {}", type_name::<T>());
        Self {
            inner: self.inner.clone(),
        }
    }

    /// Copy assignment. The copy is fully built before the old implementation is released, so a
    /// panicking `T::clone` leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        trace!(live = source.inner.is_some(), "copy-assigning {}", type_name::<T>());
        let copy = source.inner.clone();
        self.inner = copy;
    }
}

impl<T> Drop for Pimpl<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
