//! Heir counts supplied to a calculation
//!
//! This is the normalisation layer in front of the engine: counts are
//! clamped to `[0, 1]` for singular categories and `[0, 99]` for plural ones
//! on the way in, so the engine only has to ask "present or not".

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::error::Result;
use crate::heirs::catalog::HeirId;

/// Ordered mapping of heir category to count
///
/// Insertion order is preserved and decides the order of the calculation
/// results. Absent categories read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeirQuantities {
    entries: Vec<(HeirId, u32)>,
}

impl HeirQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog category present with a count of 0, in catalog order
    pub fn all_zero() -> Self {
        Self {
            entries: HeirId::ALL.iter().map(|&id| (id, 0)).collect(),
        }
    }

    /// Builder form of [`HeirQuantities::set`]
    pub fn with(mut self, id: HeirId, count: i64) -> Self {
        self.set(id, count);
        self
    }

    /// Parse `(id, count)` pairs, rejecting ids outside the catalog
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut quantities = Self::new();
        for (key, count) in pairs {
            quantities.set(key.parse()?, count);
        }
        Ok(quantities)
    }

    /// Set a count, clamped to the range the category allows
    ///
    /// Returns the stored value.
    pub fn set(&mut self, id: HeirId, count: i64) -> u32 {
        let clamped = count.clamp(0, id.max_count() as i64) as u32;
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = clamped,
            None => self.entries.push((id, clamped)),
        }
        clamped
    }

    /// Count for a category, 0 when absent
    pub fn get(&self, id: HeirId) -> u32 {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn is_present(&self, id: HeirId) -> bool {
        self.get(id) > 0
    }

    /// Sum of counts over several categories
    pub fn total(&self, ids: &[HeirId]) -> u32 {
        ids.iter().map(|&id| self.get(id)).sum()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (HeirId, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for HeirQuantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, count) in &self.entries {
            map.serialize_entry(id.as_str(), count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeirQuantities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(QuantitiesVisitor)
    }
}

struct QuantitiesVisitor;

impl<'de> Visitor<'de> for QuantitiesVisitor {
    type Value = HeirQuantities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of heir category id to count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut quantities = HeirQuantities::new();
        while let Some((key, count)) = access.next_entry::<String, i64>()? {
            let id: HeirId = key.parse().map_err(de::Error::custom)?;
            quantities.set(id, count);
        }
        Ok(quantities)
    }
}
