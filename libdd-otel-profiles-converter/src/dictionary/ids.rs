// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::collections::identifiable::{small_index, Id, Item};
use crate::Table;
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::v1development::{AttributeUnit, Function, Link, Location, Mapping};

macro_rules! dictionary_index {
    ($(#[$meta:meta])* $name:ident => $item:ty, $table:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(i32);

        impl Id for $name {
            fn from_offset(offset: usize) -> Option<Self> {
                small_index(offset).map(Self)
            }
        }

        impl Item for $item {
            type Id = $name;
            const TABLE: Table = $table;
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

dictionary_index!(
    /// Position in the dictionary's string table.
    StringIndex => String, Table::Strings
);
dictionary_index!(FunctionIndex => Function, Table::Functions);
dictionary_index!(MappingIndex => Mapping, Table::Mappings);
dictionary_index!(LocationIndex => Location, Table::Locations);
dictionary_index!(
    /// Position in the dictionary's attribute table. Attributes are compared by key and by the
    /// full value, so `{"k": 1}` and `{"k": "1"}` are distinct entries.
    AttributeIndex => KeyValue, Table::Attributes
);
dictionary_index!(AttributeUnitIndex => AttributeUnit, Table::AttributeUnits);
dictionary_index!(LinkIndex => Link, Table::Links);
