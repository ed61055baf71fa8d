//! Purpose: Declarative schema macros that instantiate the record codec per type.
//! Exports: `shape!` (records) and `union_shape!` (one-of-many members), crate-internal.
//! Role: The single place wire names are bound to Rust fields.
//! Invariants: Wire names are unique within a declaration; a duplicate fails const evaluation.
//! Invariants: Every generated record field is `Option<T>`; absence is the only "unset" state.

/// Declares a record: `"WireName" => field_name: Type` per field, in marshalling order.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        const _: () = $crate::core::shape::assert_unique_wire_names(&[$($wire),*]);

        impl $crate::core::marshal::MarshallFields for $name {
            fn present_field_count(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))*
            }

            #[allow(unused_variables)]
            fn marshall_fields<M>(&self, map: &mut M) -> Result<(), M::Error>
            where
                M: ::serde::ser::SerializeMap,
            {
                $(
                    $crate::core::marshal::marshall_field(map, $wire, self.$field.as_ref())?;
                )*
                Ok(())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::core::marshal::marshall_record(self, serializer)
            }
        }

        impl $crate::core::marshal::MarshallValue for $name {}

        impl $crate::core::unmarshal::UnmarshallFields for $name {
            const SHAPE: &'static str = stringify!($name);

            #[allow(unused_variables)]
            fn unmarshall_field<'de, A>(&mut self, name: &str, map: &mut A) -> Result<bool, A::Error>
            where
                A: ::serde::de::MapAccess<'de>,
            {
                match name {
                    $(
                        $wire => {
                            self.$field = map.next_value_seed(
                                $crate::core::unmarshal::FieldSeed::<$ty>::new(),
                            )?;
                            Ok(true)
                        }
                    )*
                    _ => Ok(false),
                }
            }
        }

        impl $crate::core::unmarshal::Unmarshall for $name {
            fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::core::unmarshal::unmarshall_record(deserializer)
            }
        }
    };
}

/// Declares a union: `"WireName" => Variant(Type)` per member.
macro_rules! union_shape {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $wire:literal => $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        const _: () = $crate::core::shape::assert_unique_wire_names(&[$($wire),+]);

        impl $crate::core::marshal::MarshallUnion for $name {
            fn marshall_variant<M>(&self, map: &mut M) -> Result<(), M::Error>
            where
                M: ::serde::ser::SerializeMap,
            {
                match self {
                    $(
                        Self::$variant(value) => {
                            $crate::core::marshal::marshall_member(map, $wire, value)
                        }
                    )+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::core::marshal::marshall_union(self, serializer)
            }
        }

        impl $crate::core::marshal::MarshallValue for $name {}

        impl $crate::core::unmarshal::UnmarshallUnion for $name {
            const SHAPE: &'static str = stringify!($name);

            fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $wire, )+
                }
            }

            fn unmarshall_variant<'de, A>(
                name: &str,
                map: &mut A,
            ) -> Result<$crate::core::unmarshal::VariantRead<Self>, A::Error>
            where
                A: ::serde::de::MapAccess<'de>,
            {
                use $crate::core::unmarshal::VariantRead;
                match name {
                    $(
                        $wire => {
                            let value = map.next_value_seed(
                                $crate::core::unmarshal::FieldSeed::<$ty>::new(),
                            )?;
                            Ok(match value {
                                Some(value) => VariantRead::Present(Self::$variant(value)),
                                None => VariantRead::Absent,
                            })
                        }
                    )+
                    _ => Ok(VariantRead::Unknown),
                }
            }
        }

        impl $crate::core::unmarshal::Unmarshall for $name {
            fn unmarshall<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::core::unmarshal::unmarshall_union(deserializer)
            }
        }
    };
}

const fn same_name(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}

/// Evaluated in a `const _` item by both macros.
pub(crate) const fn assert_unique_wire_names(names: &[&str]) {
    let mut outer = 0;
    while outer < names.len() {
        let mut inner = outer + 1;
        while inner < names.len() {
            if same_name(names[outer], names[inner]) {
                panic!("duplicate wire name in shape declaration");
            }
            inner += 1;
        }
        outer += 1;
    }
}

pub(crate) use shape;
pub(crate) use union_shape;
