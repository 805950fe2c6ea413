// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The interning store behind the shared [`ProfilesDictionary`].
//!
//! Every table is an insertion-ordered set, so an entry's index is the position where it was
//! first seen and never changes afterwards. Converting the same batch twice gives the same
//! dictionary.

mod ids;

pub use ids::*;

use crate::collections::identifiable::{dedup_ref, Dedup, FxHashMap, FxIndexSet, Id};
use crate::{ConvertError, Table};
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::v1development::{
    AttributeUnit, Function, Link, Location, Mapping, ProfilesDictionary,
};
use std::fmt::{Display, Formatter};

/// The part of a mapping that the loose resolver compares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AddressRange {
    pub memory_start: u64,
    pub memory_limit: u64,
    pub file_offset: u64,
}

impl From<&Mapping> for AddressRange {
    fn from(mapping: &Mapping) -> Self {
        Self {
            memory_start: mapping.memory_start,
            memory_limit: mapping.memory_limit,
            file_offset: mapping.file_offset,
        }
    }
}

#[derive(Default)]
pub struct ProfilesDictionaryBuilder {
    strings: FxIndexSet<String>,
    functions: FxIndexSet<Function>,
    mappings: FxIndexSet<Mapping>,
    locations: FxIndexSet<Location>,
    attributes: FxIndexSet<KeyValue>,
    attribute_units: FxIndexSet<AttributeUnit>,
    links: FxIndexSet<Link>,

    // First entry interned for each key. Later entries sharing a key don't replace it.
    mappings_by_range: FxHashMap<AddressRange, MappingIndex>,
    locations_by_address: FxHashMap<u64, LocationIndex>,
}

impl ProfilesDictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `s` without allocating when it is already present.
    pub fn intern_string(&mut self, s: &str) -> Result<StringIndex, ConvertError> {
        match self.strings.get_index_of(s) {
            Some(offset) => StringIndex::from_offset(offset).ok_or(ConvertError::StorageFull {
                table: Table::Strings,
            }),
            None => self.strings.checked_dedup(s.to_owned()),
        }
    }

    pub fn intern_function(&mut self, function: Function) -> Result<FunctionIndex, ConvertError> {
        self.functions.checked_dedup(function)
    }

    pub fn intern_mapping(&mut self, mapping: Mapping) -> Result<MappingIndex, ConvertError> {
        let range = AddressRange::from(&mapping);
        let (id, inserted) = self.mappings.checked_dedup_full(mapping)?;
        if inserted {
            self.mappings_by_range.entry(range).or_insert(id);
        }
        Ok(id)
    }

    pub fn intern_location(&mut self, location: Location) -> Result<LocationIndex, ConvertError> {
        let address = location.address;
        let (id, inserted) = self.locations.checked_dedup_full(location)?;
        if inserted {
            self.locations_by_address.entry(address).or_insert(id);
        }
        Ok(id)
    }

    pub fn intern_attribute(&mut self, attribute: &KeyValue) -> Result<AttributeIndex, ConvertError> {
        dedup_ref(&mut self.attributes, attribute)
    }

    pub fn intern_attribute_unit(
        &mut self,
        unit: AttributeUnit,
    ) -> Result<AttributeUnitIndex, ConvertError> {
        self.attribute_units.checked_dedup(unit)
    }

    pub fn intern_link(&mut self, link: Link) -> Result<LinkIndex, ConvertError> {
        self.links.checked_dedup(link)
    }

    pub fn find_string(&self, s: &str) -> Option<StringIndex> {
        self.strings
            .get_index_of(s)
            .and_then(StringIndex::from_offset)
    }

    pub fn find_function(&self, function: &Function) -> Option<FunctionIndex> {
        self.functions.find(function)
    }

    pub fn find_mapping(&self, mapping: &Mapping) -> Option<MappingIndex> {
        self.mappings.find(mapping)
    }

    /// The first mapping interned with this memory range and file offset.
    pub fn find_mapping_by_range(&self, range: &AddressRange) -> Option<MappingIndex> {
        self.mappings_by_range.get(range).copied()
    }

    /// The first location interned at this address.
    pub fn find_location_by_address(&self, address: u64) -> Option<LocationIndex> {
        self.locations_by_address.get(&address).copied()
    }

    pub fn sizes(&self) -> TableSizes {
        TableSizes {
            strings: self.strings.len(),
            functions: self.functions.len(),
            mappings: self.mappings.len(),
            locations: self.locations.len(),
            attributes: self.attributes.len(),
            attribute_units: self.attribute_units.len(),
            links: self.links.len(),
        }
    }

    /// Emits the tables in interning order.
    pub fn build(self) -> ProfilesDictionary {
        ProfilesDictionary {
            mapping_table: self.mappings.into_iter().collect(),
            location_table: self.locations.into_iter().collect(),
            function_table: self.functions.into_iter().collect(),
            link_table: self.links.into_iter().collect(),
            string_table: self.strings.into_iter().collect(),
            attribute_table: self.attributes.into_iter().collect(),
            attribute_units: self.attribute_units.into_iter().collect(),
        }
    }
}

/// Entry counts of the dictionary tables.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TableSizes {
    pub strings: usize,
    pub functions: usize,
    pub mappings: usize,
    pub locations: usize,
    pub attributes: usize,
    pub attribute_units: usize,
    pub links: usize,
}

impl From<&ProfilesDictionary> for TableSizes {
    fn from(dictionary: &ProfilesDictionary) -> Self {
        Self {
            strings: dictionary.string_table.len(),
            functions: dictionary.function_table.len(),
            mappings: dictionary.mapping_table.len(),
            locations: dictionary.location_table.len(),
            attributes: dictionary.attribute_table.len(),
            attribute_units: dictionary.attribute_units.len(),
            links: dictionary.link_table.len(),
        }
    }
}

impl Display for TableSizes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} strings, {} functions, {} mappings, {} locations, {} attributes, {} attribute units, {} links",
            self.strings,
            self.functions,
            self.mappings,
            self.locations,
            self.attributes,
            self.attribute_units,
            self.links
        )
    }
}
