// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The relayout payload itself.

use alloc::borrow::Cow;
use core::fmt;

use smallvec::SmallVec;

use crate::value::{LatLon, PropValue};

/// Inline capacity for payload entries.
///
/// Real relayout payloads carry a handful of keys (a pinch gesture reports
/// zoom and center together; corrective commands carry exactly one key), so
/// entries live inline and almost never spill to the heap.
const INLINE_PROPS: usize = 4;

/// A relayout payload: an ordered mapping from property key to new value.
///
/// `RelayoutData` is used in both directions across the widget boundary — as
/// the event payload the widget emits on every view change, and as the
/// partial-update command sent back to it. Keys are unique within one
/// payload ([`set`](Self::set) replaces) and iteration preserves insertion
/// order.
#[derive(Clone, Default, PartialEq)]
pub struct RelayoutData {
    entries: SmallVec<[(Cow<'static, str>, PropValue); INLINE_PROPS]>,
}

impl RelayoutData {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload carrying a single property.
    ///
    /// This is the shape of every corrective command.
    #[must_use]
    pub fn single(key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        Self::new().with(key, value)
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property, replacing any existing entry for the same key.
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value for `key`, if the payload carries it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k.as_ref() == key).then_some(v))
    }

    /// Returns the numeric value for `key`.
    ///
    /// `None` both when the key is absent and when its value is not a
    /// number; numeric consumers treat the two cases identically.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_number)
    }

    /// Returns the geographic center for `key`.
    #[must_use]
    pub fn lat_lon(&self, key: &str) -> Option<LatLon> {
        self.get(key).and_then(PropValue::as_lat_lon)
    }

    /// Returns `true` if the payload carries `key` (with any value shape).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of properties in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the payload carries no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RelayoutData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RelayoutData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RelayoutData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use alloc::string::String;

        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = RelayoutData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from relayout property keys to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut data = RelayoutData::new();
                while let Some((key, value)) = access.next_entry::<String, PropValue>()? {
                    data.set(key, value);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
