// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Finding the dictionary entry that stands for a profile-local entity.
//!
//! Resolvers never insert. A `None` means the dictionary has no matching entry, and the caller
//! decides how to degrade.

use crate::dictionary::{AddressRange, FunctionIndex, LocationIndex, MappingIndex};
use crate::dictionary::{ProfilesDictionaryBuilder, StringIndex};
use crate::local::LocalTables;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::v1development;
use libdd_otel_profiles_protobuf::v1experimental::{Function, Location, Mapping};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How mapping and location references are matched against the dictionary.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ResolverPolicy {
    /// Mappings match on memory range and file offset, locations on address alone. The first
    /// entry interned for a key wins, even if it came from another profile and differs in the
    /// other fields.
    #[default]
    Loose,
    /// Mappings match on every field, and a sample's location is the entry interned for the
    /// very location it points at.
    Strict,
}

impl ResolverPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResolverPolicy::Loose => "loose",
            ResolverPolicy::Strict => "strict",
        }
    }
}

impl Display for ResolverPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resolver policy `{0}`, expected `loose` or `strict`")]
pub struct UnknownResolverPolicy(String);

impl FromStr for ResolverPolicy {
    type Err = UnknownResolverPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loose" => Ok(ResolverPolicy::Loose),
            "strict" => Ok(ResolverPolicy::Strict),
            _ => Err(UnknownResolverPolicy(s.to_string())),
        }
    }
}

fn find_string(
    dictionary: &ProfilesDictionaryBuilder,
    local: &LocalTables,
    index: i64,
) -> Result<Option<StringIndex>, ConvertError> {
    Ok(dictionary.find_string(local.string(index)?))
}

pub fn resolve_mapping(
    dictionary: &ProfilesDictionaryBuilder,
    local: &LocalTables,
    mapping: &Mapping,
    policy: ResolverPolicy,
) -> Result<Option<MappingIndex>, ConvertError> {
    let range = AddressRange {
        memory_start: mapping.memory_start,
        memory_limit: mapping.memory_limit,
        file_offset: mapping.file_offset,
    };
    match policy {
        ResolverPolicy::Loose => Ok(dictionary.find_mapping_by_range(&range)),
        ResolverPolicy::Strict => {
            let Some(filename) = find_string(dictionary, local, mapping.filename)? else {
                return Ok(None);
            };
            let key = v1development::Mapping {
                memory_start: range.memory_start,
                memory_limit: range.memory_limit,
                file_offset: range.file_offset,
                filename_strindex: filename.into(),
                has_functions: mapping.has_functions,
                has_filenames: mapping.has_filenames,
                has_line_numbers: mapping.has_line_numbers,
                has_inline_frames: mapping.has_inline_frames,
            };
            Ok(dictionary.find_mapping(&key))
        }
    }
}

/// Functions match on the text of their name, system name and filename plus the start line,
/// under either policy.
pub fn resolve_function(
    dictionary: &ProfilesDictionaryBuilder,
    local: &LocalTables,
    function: &Function,
) -> Result<Option<FunctionIndex>, ConvertError> {
    let name = find_string(dictionary, local, function.name)?;
    let system_name = find_string(dictionary, local, function.system_name)?;
    let filename = find_string(dictionary, local, function.filename)?;
    let (Some(name), Some(system_name), Some(filename)) = (name, system_name, filename) else {
        return Ok(None);
    };
    Ok(dictionary.find_function(&v1development::Function {
        name_strindex: name.into(),
        system_name_strindex: system_name.into(),
        filename_strindex: filename.into(),
        start_line: function.start_line,
    }))
}

/// `interned` is the entry produced for `location` itself, when the profile's locations have
/// already been interned.
pub fn resolve_location(
    dictionary: &ProfilesDictionaryBuilder,
    location: &Location,
    interned: Option<LocationIndex>,
    policy: ResolverPolicy,
) -> Option<LocationIndex> {
    match policy {
        ResolverPolicy::Loose => dictionary.find_location_by_address(location.address),
        ResolverPolicy::Strict => interned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ProfileSite;
    use libdd_otel_profiles_protobuf::v1experimental::Profile;

    fn profile() -> Profile {
        Profile {
            string_table: vec![
                String::new(),
                "libc.so".to_string(),
                "main".to_string(),
                "main.c".to_string(),
            ],
            mapping: vec![Mapping {
                memory_start: 0x1000,
                memory_limit: 0x2000,
                filename: 1,
                has_functions: true,
                ..Default::default()
            }],
            function: vec![Function {
                name: 2,
                system_name: 2,
                filename: 3,
                start_line: 10,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(ResolverPolicy::Loose, "loose".parse().unwrap());
        assert_eq!(ResolverPolicy::Strict, "STRICT".parse().unwrap());
        assert!("exact".parse::<ResolverPolicy>().is_err());
        assert_eq!("strict", ResolverPolicy::Strict.to_string());
    }

    #[test]
    fn loose_mapping_ignores_filename() {
        let profile = profile();
        let local = LocalTables::new(ProfileSite::default(), &profile);
        let mut dictionary = ProfilesDictionaryBuilder::new();
        let other_file = dictionary.intern_string("other.so").unwrap();
        let interned = dictionary
            .intern_mapping(v1development::Mapping {
                memory_start: 0x1000,
                memory_limit: 0x2000,
                filename_strindex: other_file.into(),
                ..Default::default()
            })
            .unwrap();

        let mapping = &profile.mapping[0];
        assert_eq!(
            Some(interned),
            resolve_mapping(&dictionary, &local, mapping, ResolverPolicy::Loose).unwrap()
        );
        assert_eq!(
            None,
            resolve_mapping(&dictionary, &local, mapping, ResolverPolicy::Strict).unwrap()
        );
    }

    #[test]
    fn strict_mapping_matches_every_field() {
        let profile = profile();
        let local = LocalTables::new(ProfileSite::default(), &profile);
        let mut dictionary = ProfilesDictionaryBuilder::new();
        let filename = dictionary.intern_string("libc.so").unwrap();
        let interned = dictionary
            .intern_mapping(v1development::Mapping {
                memory_start: 0x1000,
                memory_limit: 0x2000,
                filename_strindex: filename.into(),
                has_functions: true,
                ..Default::default()
            })
            .unwrap();

        let resolved =
            resolve_mapping(&dictionary, &local, &profile.mapping[0], ResolverPolicy::Strict);
        assert_eq!(Some(interned), resolved.unwrap());
    }

    #[test]
    fn function_matches_by_text() {
        let profile = profile();
        let local = LocalTables::new(ProfileSite::default(), &profile);
        let mut dictionary = ProfilesDictionaryBuilder::new();
        let function = &profile.function[0];
        assert_eq!(None, resolve_function(&dictionary, &local, function).unwrap());

        // The dictionary positions differ from the local ones.
        let filename = dictionary.intern_string("main.c").unwrap();
        let name = dictionary.intern_string("main").unwrap();
        let interned = dictionary
            .intern_function(v1development::Function {
                name_strindex: name.into(),
                system_name_strindex: name.into(),
                filename_strindex: filename.into(),
                start_line: 10,
            })
            .unwrap();
        assert_eq!(
            Some(interned),
            resolve_function(&dictionary, &local, function).unwrap()
        );

        let moved = Function {
            start_line: 11,
            ..*function
        };
        assert_eq!(None, resolve_function(&dictionary, &local, &moved).unwrap());

        let broken = Function {
            name: 99,
            ..*function
        };
        assert!(resolve_function(&dictionary, &local, &broken).is_err());
    }

    #[test]
    fn location_policies() {
        let mut dictionary = ProfilesDictionaryBuilder::new();
        let first = dictionary
            .intern_location(v1development::Location {
                address: 0x10,
                ..Default::default()
            })
            .unwrap();
        let second = dictionary
            .intern_location(v1development::Location {
                address: 0x10,
                is_folded: true,
                ..Default::default()
            })
            .unwrap();

        let location = Location {
            address: 0x10,
            is_folded: true,
            ..Default::default()
        };
        assert_eq!(
            Some(first),
            resolve_location(&dictionary, &location, Some(second), ResolverPolicy::Loose)
        );
        assert_eq!(
            Some(second),
            resolve_location(&dictionary, &location, Some(second), ResolverPolicy::Strict)
        );

        let elsewhere = Location {
            address: 0x20,
            ..Default::default()
        };
        assert_eq!(
            None,
            resolve_location(&dictionary, &elsewhere, None, ResolverPolicy::Loose)
        );
    }
}
