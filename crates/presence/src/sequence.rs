//! Scans over ordered lists of candidates.
//!
//! Each function takes anything iterable, so a fixed list is written as
//! an array: `first([cli, env, file])`. An empty list behaves like a list
//! of absent values.

use crate::error::AbsentValueError;
use crate::fallback::or_else_throw_with;
use crate::indeterminate::Indeterminate;

/// Returns the leftmost present value, or `None`.
///
/// Stops pulling from `values` as soon as one is found.
pub fn first<I>(values: I) -> Option<<I::Item as Indeterminate>::Value>
where
    I: IntoIterator,
    I::Item: Indeterminate,
{
    values.into_iter().find_map(Indeterminate::into_present)
}

/// Returns the rightmost present value, or `None`.
pub fn last<I>(values: I) -> Option<<I::Item as Indeterminate>::Value>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: Indeterminate,
{
    first(values.into_iter().rev())
}

/// Keeps the present values, in their original order.
pub fn filter<I>(values: I) -> Vec<<I::Item as Indeterminate>::Value>
where
    I: IntoIterator,
    I::Item: Indeterminate,
{
    values
        .into_iter()
        .filter_map(Indeterminate::into_present)
        .collect()
}

/// Returns the leftmost present value, or fails with
/// [`AbsentValueError::Unresolved`].
///
/// Handy for layered settings:
///
/// ```
/// let cli: Option<u16> = None;
/// let env: Option<u16> = Some(8080);
/// let file: Option<u16> = Some(80);
///
/// assert_eq!(presence::resolve([cli, env, file]), Ok(8080));
/// ```
pub fn resolve<I>(values: I) -> Result<<I::Item as Indeterminate>::Value, AbsentValueError>
where
    I: IntoIterator,
    I::Item: Indeterminate,
{
    let mut examined = 0usize;
    let found = first(values.into_iter().inspect(|_| examined += 1));
    or_else_throw_with(found, || {
        tracing::debug!(examined, "no present value among candidates");
        AbsentValueError::Unresolved { examined }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tristate::Tristate;

    #[test]
    fn first_and_last_pick_outermost() {
        let values = [None, Some(1), None, Some(2), None];
        assert_eq!(first(values), Some(1));
        assert_eq!(last(values), Some(2));
    }

    #[test]
    fn empty_lists() {
        let empty: [Option<u8>; 0] = [];
        assert_eq!(first(empty), None);
        assert_eq!(last(empty), None);
        assert!(filter(empty).is_empty());
        assert_eq!(
            resolve(empty),
            Err(AbsentValueError::Unresolved { examined: 0 })
        );
    }

    #[test]
    fn first_stops_at_first_present() {
        let mut pulled = 0;
        let found = first((0..10).map(|i| {
            pulled += 1;
            (i >= 2).then_some(i)
        }));
        assert_eq!(found, Some(2));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn filter_borrowed_slice() {
        let values = vec![
            Tristate::Present("a"),
            Tristate::Missing,
            Tristate::Null,
            Tristate::Present("b"),
        ];
        assert_eq!(filter(&values), vec![&"a", &"b"]);
    }

    #[test]
    fn resolve_counts_candidates() {
        let err = resolve([Tristate::<u8>::Missing, Tristate::Null]).unwrap_err();
        assert_eq!(err.examined(), Some(2));
        assert_eq!(resolve([None, None, Some("config-value")]), Ok("config-value"));
    }
}
