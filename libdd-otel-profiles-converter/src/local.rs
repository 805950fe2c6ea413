// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Checked access to the tables a `v1experimental` profile carries for itself.

use crate::report::ProfileSite;
use crate::{ConvertError, Table};
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::v1experimental::{Function, Link, Location, Mapping, Profile};

#[derive(Copy, Clone)]
pub struct LocalTables<'a> {
    site: ProfileSite,
    profile: &'a Profile,
}

impl<'a> LocalTables<'a> {
    pub fn new(site: ProfileSite, profile: &'a Profile) -> Self {
        Self { site, profile }
    }

    pub fn site(&self) -> ProfileSite {
        self.site
    }

    pub fn profile(&self) -> &'a Profile {
        self.profile
    }

    /// Position 0 is the empty string, even when the table itself is empty.
    pub fn string(&self, index: i64) -> Result<&'a str, ConvertError> {
        let index = u64::try_from(index).map_err(|_| ConvertError::NegativeIndex {
            site: self.site,
            table: Table::Strings,
            index,
        })?;
        if index == 0 && self.profile.string_table.is_empty() {
            return Ok("");
        }
        self.get(Table::Strings, &self.profile.string_table, index)
            .map(String::as_str)
    }

    pub fn function(&self, index: u64) -> Result<&'a Function, ConvertError> {
        self.get(Table::Functions, &self.profile.function, index)
    }

    pub fn attribute(&self, index: u64) -> Result<&'a KeyValue, ConvertError> {
        self.get(Table::Attributes, &self.profile.attribute_table, index)
    }

    /// Mappings, locations and links may be referenced out of range; the caller degrades those.
    pub fn mapping(&self, index: u64) -> Option<&'a Mapping> {
        lookup(&self.profile.mapping, index)
    }

    pub fn location(&self, index: u64) -> Option<&'a Location> {
        lookup(&self.profile.location, index)
    }

    pub fn link(&self, index: u64) -> Option<&'a Link> {
        lookup(&self.profile.link_table, index)
    }

    fn get<T>(&self, table: Table, items: &'a [T], index: u64) -> Result<&'a T, ConvertError> {
        lookup(items, index).ok_or(ConvertError::LocalIndexOutOfBounds {
            site: self.site,
            table,
            index,
            len: items.len(),
        })
    }
}

fn lookup<T>(items: &[T], index: u64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}
