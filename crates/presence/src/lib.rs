//! # Presence
//!
//! Combinators for values that may be absent.
//!
//! Two sentinels mean "no value": a missing value and an explicit null.
//! Rust's `None` is the first; [`Tristate`] carries both side by side.
//! Every function here treats them as one and the same absence, and never
//! confuses absence with a falsy value: `Some(0)`, `Some(false)` and
//! `Some("")` are all present.
//!
//! ## Architecture
//!
//! ```text
//! Indeterminate        ← Present(Value) | Absent, implemented for
//!     │                   Option, &Option, Tristate, &Tristate
//!     ├── branch       ← is_present, if_present, inspect, map, …
//!     ├── fallback     ← or_else, or_else_supply, or_else_throw, …
//!     └── sequence     ← first, last, filter, resolve
//! ```
//!
//! ```
//! use presence::{Tristate, filter, or_else_supply, resolve};
//!
//! assert_eq!(filter([Some(0), None, Some(2)]), vec![0, 2]);
//! assert_eq!(or_else_supply(Tristate::Null, || 7), 7);
//! assert!(resolve([None::<u8>, None]).is_err());
//! ```

pub mod branch;
pub mod error;
pub mod fallback;
pub mod indeterminate;
pub mod sequence;
pub mod tristate;

pub use branch::{if_absent, if_present, inspect, is_absent, is_present, map};
pub use error::AbsentValueError;
pub use fallback::{or_else, or_else_null, or_else_supply, or_else_throw, or_else_throw_with};
pub use indeterminate::Indeterminate;
pub use sequence::{filter, first, last, resolve};
pub use tristate::Tristate;
