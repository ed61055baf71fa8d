//! Purpose: Field-dispatch unmarshalling over a serde token stream.
//! Exports: `Unmarshall`, `UnmarshallFields`, `UnmarshallUnion`, `FieldSeed`, `VariantRead`,
//! `unmarshall_record`, `unmarshall_union`.
//! Role: Decoding half of the record codec; `shape!`/`union_shape!` expand onto these helpers.
//! Invariants: A non-object where a record is expected yields `None` after draining the value.
//! Invariants: Unknown keys are skipped, never rejected; JSON null always means absent.
//! Invariants: Malformed input and primitive type mismatches surface as deserializer errors.

use super::timestamp::Timestamp;
use serde::de::{
    self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor,
};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A value that can be read from a JSON token stream, where `None` means absent.
pub trait Unmarshall: Sized {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>;
}

/// Per-record dispatch table generated by `shape!`.
pub trait UnmarshallFields: Default {
    const SHAPE: &'static str;

    /// Decodes the value for `name` into its field. Returns `false` when `name` is not a
    /// field of this record; the value has not been consumed in that case.
    fn unmarshall_field<'de, A>(&mut self, name: &str, map: &mut A) -> Result<bool, A::Error>
    where
        A: MapAccess<'de>;
}

pub enum VariantRead<T> {
    Unknown,
    Absent,
    Present(T),
}

/// Per-union dispatch table generated by `union_shape!`.
pub trait UnmarshallUnion: Sized {
    const SHAPE: &'static str;

    fn variant_name(&self) -> &'static str;

    fn unmarshall_variant<'de, A>(name: &str, map: &mut A) -> Result<VariantRead<Self>, A::Error>
    where
        A: MapAccess<'de>;
}

/// Seed that decodes a single field value with `T`'s unmarshaller.
pub struct FieldSeed<T>(PhantomData<T>);

impl<T> FieldSeed<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FieldSeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T: Unmarshall> DeserializeSeed<'de> for FieldSeed<T> {
    type Value = Option<T>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::unmarshall(deserializer)
    }
}

pub fn unmarshall_record<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: UnmarshallFields,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(RecordVisitor::<T>(PhantomData))
}

pub fn unmarshall_union<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: UnmarshallUnion,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UnionVisitor::<T>(PhantomData))
}

fn drain_seq<'de, A>(mut seq: A) -> Result<(), A::Error>
where
    A: SeqAccess<'de>,
{
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

/// Non-object values are consumed and reported as absent.
macro_rules! skip_non_objects {
    ($de:lifetime) => {
        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<$de>,
        {
            drain_seq(seq)?;
            Ok(None)
        }
    };
}

struct RecordVisitor<T>(PhantomData<T>);

impl<'de, T: UnmarshallFields> Visitor<'de> for RecordVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} object", T::SHAPE)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = T::default();
        while let Some(name) = map.next_key::<String>()? {
            if !record.unmarshall_field(&name, &mut map)? {
                tracing::trace!(shape = T::SHAPE, field = %name, "skipping unknown field");
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(Some(record))
    }

    skip_non_objects!('de);
}

struct UnionVisitor<T>(PhantomData<T>);

impl<'de, T: UnmarshallUnion> Visitor<'de> for UnionVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} object", T::SHAPE)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut chosen: Option<T> = None;
        while let Some(name) = map.next_key::<String>()? {
            match T::unmarshall_variant(&name, &mut map)? {
                VariantRead::Present(value) => {
                    if let Some(previous) = &chosen {
                        return Err(de::Error::custom(format!(
                            "{} sets more than one member ({} and {})",
                            T::SHAPE,
                            previous.variant_name(),
                            value.variant_name()
                        )));
                    }
                    chosen = Some(value);
                }
                VariantRead::Absent => {}
                VariantRead::Unknown => {
                    tracing::trace!(shape = T::SHAPE, field = %name, "skipping unknown member");
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(chosen)
    }

    skip_non_objects!('de);
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Shortest round-trip form, so `1.0` stays `1.0`.
        Ok(Some(match serde_json::Number::from_f64(v) {
            Some(number) => number.to_string(),
            None => v.to_string(),
        }))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl Unmarshall for String {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringVisitor)
    }
}

struct IntegerVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IntegerVisitor<T>
where
    T: TryFrom<i64> + TryFrom<u64> + FromStr,
{
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer that fits {}", std::any::type_name::<T>())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        <T as TryFrom<i64>>::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        <T as TryFrom<u64>>::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

macro_rules! integer_unmarshall {
    ($($t:ty,)*) => {$(
        impl Unmarshall for $t {
            fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(IntegerVisitor::<$t>(PhantomData))
            }
        }
    )*};
}

integer_unmarshall!(i32, i64,);

struct DoubleVisitor;

impl<'de> Visitor<'de> for DoubleVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a finite number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() {
            Ok(Some(v))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl Unmarshall for f64 {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DoubleVisitor)
    }
}

struct BooleanVisitor;

impl<'de> Visitor<'de> for BooleanVisitor {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl Unmarshall for bool {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BooleanVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Option<Timestamp>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Timestamp::from_epoch_seconds(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl Unmarshall for Timestamp {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Unmarshall> Visitor<'de> for ListVisitor<T> {
    type Value = Option<Vec<T>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(FieldSeed::<T>::new())? {
            if let Some(item) = item {
                items.push(item);
            }
        }
        Ok(Some(items))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl<T: Unmarshall> Unmarshall for Vec<T> {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ListVisitor::<T>(PhantomData))
    }
}

struct MapVisitor<T>(PhantomData<T>);

impl<'de, T: Unmarshall> Visitor<'de> for MapVisitor<T> {
    type Value = Option<BTreeMap<String, T>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some(key) = map.next_key::<String>()? {
            if let Some(value) = map.next_value_seed(FieldSeed::<T>::new())? {
                entries.insert(key, value);
            }
        }
        Ok(Some(entries))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl<T: Unmarshall> Unmarshall for BTreeMap<String, T> {
    fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MapVisitor::<T>(PhantomData))
    }
}
