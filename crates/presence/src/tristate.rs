//! A field that distinguishes "never given" from "given as null".
//!
//! Wire formats such as JSON have two ways to say "no value": leave the
//! key out, or send `null`. `Tristate` keeps them apart in storage so a
//! caller can tell a partial update from an explicit clear, while every
//! presence combinator still treats both as the same absence.
//!
//! ```text
//! {}              → Tristate::Missing   (with #[serde(default)])
//! {"x": null}     → Tristate::Null
//! {"x": 0}        → Tristate::Present(0)
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is present, explicitly null, or missing altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tristate<T> {
    /// Never supplied.
    #[default]
    Missing,
    /// Supplied as an explicit "no value".
    Null,
    /// Supplied with a value.
    Present(T),
}

impl<T> Tristate<T> {
    /// True if the value was never supplied.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// True if the value was supplied as an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True if a value is held, whatever it is.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the held value, keeping the sentinel distinction.
    pub fn as_ref(&self) -> Tristate<&T> {
        match self {
            Self::Missing => Tristate::Missing,
            Self::Null => Tristate::Null,
            Self::Present(value) => Tristate::Present(value),
        }
    }

    /// Collapses both sentinels into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }
}

/// `None` is an explicit null, not a missing field.
impl<T> From<Option<T>> for Tristate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

impl<T> From<Tristate<T>> for Option<T> {
    fn from(value: Tristate<T>) -> Self {
        value.into_option()
    }
}

/// Both sentinels are written as `null`.
///
/// Reading is keyed on `null` alone, so a `Present(v)` whose `v` itself
/// serializes as `null` (`serde_json::Value::Null`, a nested `None`, `()`)
/// reads back as `Tristate::Null`.
impl<T: Serialize> Serialize for Tristate<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

/// `null` reads as `Null`, anything else as `Present`. `Missing` only
/// comes from a `#[serde(default)]` field left out of the input.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tristate<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Tristate::is_missing")]
        limit: Tristate<u32>,
    }

    #[test]
    fn deserialize_distinguishes_sentinels() {
        let missing: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({ "limit": null })).unwrap();
        let zero: Patch = serde_json::from_value(json!({ "limit": 0 })).unwrap();

        assert!(missing.limit.is_missing());
        assert!(null.limit.is_null());
        assert_eq!(zero.limit, Tristate::Present(0));
    }

    #[test]
    fn serialize_omits_missing_and_writes_null() {
        let missing = Patch::default();
        let null = Patch {
            limit: Tristate::Null,
        };
        let present = Patch {
            limit: Tristate::Present(5),
        };

        assert_eq!(serde_json::to_value(&missing).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "limit": null }));
        assert_eq!(serde_json::to_value(&present).unwrap(), json!({ "limit": 5 }));
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Tristate::from(None::<u8>), Tristate::Null);
        assert_eq!(Tristate::from(Some(1u8)), Tristate::Present(1));
        assert_eq!(Option::<u8>::from(Tristate::<u8>::Missing), None);
        assert_eq!(Option::<u8>::from(Tristate::Present(4u8)), Some(4));
        assert_eq!(Tristate::Present(2u8).as_ref(), Tristate::Present(&2));
    }

    #[test]
    fn null_serializing_present_value_reads_back_as_null() {
        let value = serde_json::to_value(Tristate::Present(serde_json::Value::Null)).unwrap();
        assert_eq!(value, json!(null));
        let back: Tristate<serde_json::Value> = serde_json::from_value(value).unwrap();
        assert_eq!(back, Tristate::Null);

        let nested = serde_json::to_value(Tristate::<Option<u8>>::Present(None)).unwrap();
        let back: Tristate<Option<u8>> = serde_json::from_value(nested).unwrap();
        assert_eq!(back, Tristate::Null);

        let kept = serde_json::to_value(Tristate::<Option<u8>>::Present(Some(1))).unwrap();
        let back: Tristate<Option<u8>> = serde_json::from_value(kept).unwrap();
        assert_eq!(back, Tristate::Present(Some(1)));
    }
}
