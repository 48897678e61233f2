//! Defaults for absent values.
//!
//! `or_else` takes a ready value. `or_else_supply` and the
//! `or_else_throw` family take factories that only run when the value is
//! absent; use them when the fallback is costly to build.

use crate::error::AbsentValueError;
use crate::indeterminate::Indeterminate;

/// Returns the held value, or `fallback` as given.
pub fn or_else<V: Indeterminate>(value: V, fallback: V::Value) -> V::Value {
    value.into_present().unwrap_or(fallback)
}

/// Normalizes every absent sentinel to `None`.
pub fn or_else_null<V: Indeterminate>(value: V) -> Option<V::Value> {
    value.into_present()
}

/// Returns the held value, or calls `factory` once and returns its result.
pub fn or_else_supply<V, F>(value: V, factory: F) -> V::Value
where
    V: Indeterminate,
    F: FnOnce() -> V::Value,
{
    value.into_present().unwrap_or_else(factory)
}

/// Returns the held value, or [`AbsentValueError::Absent`].
pub fn or_else_throw<V: Indeterminate>(value: V) -> Result<V::Value, AbsentValueError> {
    or_else_throw_with(value, || {
        tracing::trace!("absent value passed");
        AbsentValueError::Absent
    })
}

/// Returns the held value, or the error built by `factory`.
///
/// The factory's error is returned as is.
pub fn or_else_throw_with<V, E, F>(value: V, factory: F) -> Result<V::Value, E>
where
    V: Indeterminate,
    F: FnOnce() -> E,
{
    value.into_present().ok_or_else(factory)
}
