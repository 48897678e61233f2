//! Values that are either present or absent.
//!
//! Presence is a structural property of the container, never of the
//! contained value: `Some(0)`, `Some(false)` and `Some(String::new())` are
//! all present. The only absent sentinels are `None` and the two empty
//! variants of [`Tristate`].

use crate::tristate::Tristate;

/// A value that is either present (holding a `Value`) or absent.
///
/// Every combinator in this crate is generic over this trait, so owned
/// options, borrowed options and [`Tristate`] fields can be mixed freely
/// with the same functions.
pub trait Indeterminate: Sized {
    /// The type held when present.
    type Value;

    /// Returns true if this is one of the absent sentinels.
    fn is_absent(&self) -> bool;

    /// Runs `f` against the held value without consuming `self`.
    ///
    /// Returns `None` (and never calls `f`) when absent.
    fn with_present<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Value) -> R;

    /// Collapses this value into a plain `Option`.
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Indeterminate for Option<T> {
    type Value = T;

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn with_present<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.as_ref().map(f)
    }

    fn into_present(self) -> Option<T> {
        self
    }
}

impl<'a, T> Indeterminate for &'a Option<T> {
    type Value = &'a T;

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn with_present<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&&'a T) -> R,
    {
        let present: Option<&'a T> = (*self).as_ref();
        present.map(|value| f(&value))
    }

    fn into_present(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<T> Indeterminate for Tristate<T> {
    type Value = T;

    fn is_absent(&self) -> bool {
        !self.is_present()
    }

    fn with_present<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        match self {
            Tristate::Present(value) => Some(f(value)),
            Tristate::Missing | Tristate::Null => None,
        }
    }

    fn into_present(self) -> Option<T> {
        self.into_option()
    }
}

impl<'a, T> Indeterminate for &'a Tristate<T> {
    type Value = &'a T;

    fn is_absent(&self) -> bool {
        !self.is_present()
    }

    fn with_present<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&&'a T) -> R,
    {
        let present: Option<&'a T> = (*self).as_ref().into_option();
        present.map(|value| f(&value))
    }

    fn into_present(self) -> Option<&'a T> {
        self.as_ref().into_option()
    }
}
