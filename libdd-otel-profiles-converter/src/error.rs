// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::report::ProfileSite;
use std::fmt::{Display, Formatter};

/// Names a table, either a profile-local one in the source schema or its shared counterpart in
/// the dictionary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Table {
    Strings,
    Functions,
    Mappings,
    Locations,
    Attributes,
    AttributeUnits,
    Links,
}

impl Table {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Table::Strings => "string",
            Table::Functions => "function",
            Table::Mappings => "mapping",
            Table::Locations => "location",
            Table::Attributes => "attribute",
            Table::AttributeUnits => "attribute unit",
            Table::Links => "link",
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Errors from converting a batch.
///
/// References that cannot be resolved are not errors: they degrade to an absent or zero index
/// and are listed in the [`crate::ConversionReport`]. These variants cover input that refers to
/// positions its own tables don't have, where the target schema has no way to say "absent".
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A profile refers to a position past the end of one of its own tables.
    #[error("{site}: {table} table position {index} is out of bounds (table has {len} entries)")]
    LocalIndexOutOfBounds {
        site: ProfileSite,
        table: Table,
        index: u64,
        len: usize,
    },
    /// A profile refers to a negative position. The string references of the source schema are
    /// signed.
    #[error("{site}: {table} table position {index} is negative")]
    NegativeIndex {
        site: ProfileSite,
        table: Table,
        index: i64,
    },
    /// A profile container arrived without its profile.
    #[error("{site}: profile container has no profile")]
    MissingProfile { site: ProfileSite },
    /// The dictionary table grew past what an `int32` index can address.
    #[error("dictionary {table} table is full")]
    StorageFull { table: Table },
}
