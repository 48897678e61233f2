//! Presence predicates and branching callbacks.
//!
//! The callback forms hand the value back unchanged, so they can be
//! dropped into the middle of an expression for their side effect alone.

use crate::indeterminate::Indeterminate;

/// Returns true if `value` is an absent sentinel.
pub fn is_absent<V: Indeterminate>(value: &V) -> bool {
    value.is_absent()
}

/// Returns true if `value` holds something, however falsy.
pub fn is_present<V: Indeterminate>(value: &V) -> bool {
    !is_absent(value)
}

/// Calls `consumer` with the held value if present.
///
/// Returns `value` unmodified either way.
pub fn if_present<V, F>(value: V, consumer: F) -> V
where
    V: Indeterminate,
    F: FnOnce(&V::Value),
{
    value.with_present(consumer);
    value
}

/// Calls `action` if `value` is absent.
///
/// Returns `value` unmodified either way.
pub fn if_absent<V, F>(value: V, action: F) -> V
where
    V: Indeterminate,
    F: FnOnce(),
{
    if is_absent(&value) {
        action();
    }
    value
}

/// Calls exactly one of `on_present` or `on_absent`.
///
/// Returns `value` unmodified.
pub fn inspect<V, P, A>(value: V, on_present: P, on_absent: A) -> V
where
    V: Indeterminate,
    P: FnOnce(&V::Value),
    A: FnOnce(),
{
    if value.with_present(on_present).is_none() {
        on_absent();
    }
    value
}

/// Applies `transformer` to the held value, or returns `None` without
/// calling it when absent.
pub fn map<V, F, U>(value: V, transformer: F) -> Option<U>
where
    V: Indeterminate,
    F: FnOnce(V::Value) -> U,
{
    value.into_present().map(transformer)
}
