//! Purpose: Presence-gated marshalling of records and unions onto a serde serializer.
//! Exports: `MarshallFields`, `MarshallUnion`, `marshall_record`, `marshall_union`,
//! `MarshallValue`, `marshall_field`, `marshall_member`, `to_vec`.
//! Role: Encoding half of the record codec; `shape!`/`union_shape!` expand onto these helpers.
//! Invariants: Absent fields are never written, not even as null.
//! Invariants: Fields are written in declaration order; inputs are never mutated.
//! Invariants: A non-finite double fails the write instead of degrading to null.

use super::timestamp::Timestamp;
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Per-record field writer generated by `shape!`.
pub trait MarshallFields {
    fn present_field_count(&self) -> usize;

    fn marshall_fields<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap;
}

/// Per-union member writer generated by `union_shape!`.
pub trait MarshallUnion {
    fn marshall_variant<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap;
}

pub fn marshall_record<T, S>(record: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: MarshallFields + ?Sized,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(record.present_field_count()))?;
    record.marshall_fields(&mut map)?;
    map.end()
}

pub fn marshall_union<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: MarshallUnion + ?Sized,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    value.marshall_variant(&mut map)?;
    map.end()
}

/// A value the record codec can put on the wire.
///
/// serde_json writes NaN and the infinities as `null`, which would turn a set field into an
/// absent one. `representable` lets the codec refuse those values up front.
pub trait MarshallValue: Serialize {
    fn representable(&self) -> bool {
        true
    }
}

macro_rules! plain_marshall_value {
    ($($t:ty,)*) => {$(
        impl MarshallValue for $t {}
    )*};
}

plain_marshall_value!(String, bool, i32, i64, Timestamp,);

impl MarshallValue for f64 {
    fn representable(&self) -> bool {
        self.is_finite()
    }
}

impl<T: MarshallValue> MarshallValue for Vec<T> {
    fn representable(&self) -> bool {
        self.iter().all(MarshallValue::representable)
    }
}

impl<T: MarshallValue> MarshallValue for BTreeMap<String, T> {
    fn representable(&self) -> bool {
        self.values().all(MarshallValue::representable)
    }
}

pub fn marshall_field<M, T>(
    map: &mut M,
    name: &'static str,
    value: Option<&T>,
) -> Result<(), M::Error>
where
    M: SerializeMap,
    T: MarshallValue,
{
    match value {
        Some(value) => marshall_member(map, name, value),
        None => Ok(()),
    }
}

/// Writes one present entry, refusing values JSON cannot carry.
pub fn marshall_member<M, T>(map: &mut M, name: &'static str, value: &T) -> Result<(), M::Error>
where
    M: SerializeMap,
    T: MarshallValue,
{
    if !value.representable() {
        return Err(M::Error::custom(format_args!(
            "field {name} holds a non-finite number"
        )));
    }
    map.serialize_entry(name, value)
}

/// Serializes into a fresh buffer.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::new(&mut buffer);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
