// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use libdd_otel_profiles_converter::{convert, Converter, ConverterConfig, ResolverPolicy};
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::v1development::{self, ProfilesDictionary};
use libdd_otel_profiles_protobuf::v1experimental::{
    AttributeUnit, Function, Line, Link, Location, Mapping, Profile, ProfileContainer,
    ProfilesData, ResourceProfiles, Sample, ScopeProfiles,
};
use libdd_otel_profiles_protobuf::Message;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

type RawLocation = (u8, u8, Vec<(u8, u8)>, bool, Vec<u8>);
type RawSample = (u8, u8, Vec<i64>, Vec<u8>, u8);

/// Table contents and references as small numbers, folded into range when the profile is built.
/// Small address and value spaces make collisions across profiles likely.
#[derive(Clone, Debug)]
struct RawProfile {
    words: Vec<String>,
    functions: Vec<(u8, u8, u8, u8)>,
    mappings: Vec<(u8, u8, u8, bool)>,
    locations: Vec<RawLocation>,
    attributes: Vec<(u8, u8)>,
    attribute_units: Vec<(u8, u8)>,
    links: Vec<u8>,
    samples: Vec<RawSample>,
}

fn raw_profile() -> impl Strategy<Value = RawProfile> {
    (
        vec("[a-c]{1,2}", 0..5),
        vec(any::<(u8, u8, u8, u8)>(), 0..4),
        vec(any::<(u8, u8, u8, bool)>(), 0..3),
        vec(
            (
                any::<u8>(),
                any::<u8>(),
                vec(any::<(u8, u8)>(), 0..3),
                any::<bool>(),
                vec(any::<u8>(), 0..2),
            ),
            0..5,
        ),
        vec(any::<(u8, u8)>(), 0..3),
        vec(any::<(u8, u8)>(), 0..3),
        vec(any::<u8>(), 0..2),
        vec(
            (
                any::<u8>(),
                any::<u8>(),
                vec(-5i64..5, 0..3),
                vec(any::<u8>(), 0..2),
                any::<u8>(),
            ),
            0..4,
        ),
    )
        .prop_map(
            |(words, functions, mappings, locations, attributes, attribute_units, links, samples)| {
                RawProfile {
                    words,
                    functions,
                    mappings,
                    locations,
                    attributes,
                    attribute_units,
                    links,
                    samples,
                }
            },
        )
}

fn fold(value: u8, len: usize) -> u64 {
    u64::from(value) % len.max(1) as u64
}

fn build(raw: RawProfile) -> Profile {
    let mut string_table = vec![String::new()];
    string_table.extend(raw.words);
    let strings = string_table.len();
    let string = |value: u8| fold(value, strings) as i64;

    let attribute_table: Vec<_> = raw
        .attributes
        .iter()
        .map(|&(key, value)| KeyValue::int(format!("k{}", key % 3), i64::from(value % 3)))
        .collect();
    let attribute_positions = |positions: &[u8]| -> Vec<u64> {
        if attribute_table.is_empty() {
            return Vec::new();
        }
        positions
            .iter()
            .map(|&p| fold(p, attribute_table.len()))
            .collect()
    };

    let attribute_units = raw
        .attribute_units
        .iter()
        .map(|&(key, unit)| AttributeUnit {
            attribute_key: string(key),
            unit: string(unit),
        })
        .collect();

    let function: Vec<_> = raw
        .functions
        .iter()
        .map(|&(name, system_name, filename, start_line)| Function {
            name: string(name),
            system_name: string(system_name),
            filename: string(filename),
            start_line: i64::from(start_line % 2),
            ..Default::default()
        })
        .collect();
    let mapping: Vec<_> = raw
        .mappings
        .iter()
        .map(|&(start, filename, flags, has_functions)| Mapping {
            memory_start: u64::from(start % 2) * 0x1000,
            memory_limit: u64::from(start % 2) * 0x1000 + 0x1000,
            filename: string(filename),
            has_filenames: flags % 2 == 0,
            has_functions,
            ..Default::default()
        })
        .collect();
    let location: Vec<_> = raw
        .locations
        .iter()
        .map(|(mapping_index, address, lines, is_folded, attributes)| Location {
            mapping_index: fold(*mapping_index, mapping.len()),
            address: u64::from(address % 4),
            line: if function.is_empty() {
                Vec::new()
            } else {
                lines
                    .iter()
                    .map(|&(function_index, line)| Line {
                        function_index: fold(function_index, function.len()),
                        line: i64::from(line % 3),
                        column: 0,
                    })
                    .collect()
            },
            is_folded: *is_folded,
            attributes: attribute_positions(attributes.as_slice()),
            ..Default::default()
        })
        .collect();
    let link_table: Vec<_> = raw
        .links
        .iter()
        .map(|&id| Link {
            trace_id: vec![id % 2; 16],
            span_id: vec![id % 2; 8],
        })
        .collect();
    let sample = raw
        .samples
        .iter()
        .map(|(start, length, value, attributes, link)| Sample {
            locations_start_index: fold(*start, location.len()),
            locations_length: if location.is_empty() {
                0
            } else {
                u64::from(*length % 3)
            },
            value: value.clone(),
            attributes: attribute_positions(attributes.as_slice()),
            link: fold(*link, link_table.len()),
            ..Default::default()
        })
        .collect();

    Profile {
        function,
        mapping,
        location,
        attribute_table,
        attribute_units,
        link_table,
        sample,
        string_table,
        ..Default::default()
    }
}

fn batch(profiles: Vec<Profile>) -> ProfilesData {
    ProfilesData {
        resource_profiles: vec![ResourceProfiles {
            scope_profiles: vec![ScopeProfiles {
                profiles: profiles
                    .into_iter()
                    .map(|profile| ProfileContainer {
                        profile: Some(profile),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

fn batch_strategy() -> impl Strategy<Value = Vec<Profile>> {
    vec(raw_profile().prop_map(build), 1..4)
}

fn all_distinct<T: Eq + Hash>(items: &[T]) -> bool {
    items.iter().collect::<HashSet<_>>().len() == items.len()
}

fn in_bounds(index: i32, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < len)
}

fn check_dictionary(dictionary: &ProfilesDictionary) -> Result<(), TestCaseError> {
    prop_assert!(all_distinct(&dictionary.string_table));
    prop_assert!(all_distinct(&dictionary.function_table));
    prop_assert!(all_distinct(&dictionary.mapping_table));
    prop_assert!(all_distinct(&dictionary.location_table));
    prop_assert!(all_distinct(&dictionary.attribute_table));
    prop_assert!(all_distinct(&dictionary.link_table));
    prop_assert!(all_distinct(&dictionary.attribute_units));

    let strings = dictionary.string_table.len();
    for function in &dictionary.function_table {
        prop_assert!(in_bounds(function.name_strindex, strings));
        prop_assert!(in_bounds(function.system_name_strindex, strings));
        prop_assert!(in_bounds(function.filename_strindex, strings));
    }
    for mapping in &dictionary.mapping_table {
        prop_assert!(in_bounds(mapping.filename_strindex, strings));
    }
    for location in &dictionary.location_table {
        if let Some(mapping_index) = location.mapping_index {
            prop_assert!(in_bounds(mapping_index, dictionary.mapping_table.len()));
        }
        for line in &location.line {
            prop_assert!(in_bounds(line.function_index, dictionary.function_table.len()));
        }
        for &attribute in &location.attribute_indices {
            prop_assert!(in_bounds(attribute, dictionary.attribute_table.len()));
        }
    }
    Ok(())
}

fn check_profile(
    dictionary: &ProfilesDictionary,
    profile: &v1development::Profile,
) -> Result<(), TestCaseError> {
    let locations = dictionary.location_table.len();
    for &index in &profile.location_indices {
        prop_assert!(in_bounds(index, locations));
    }
    prop_assert!(in_bounds(
        profile.default_sample_type_index,
        dictionary.string_table.len()
    ));
    for sample in &profile.sample {
        if sample.locations_length > 0 {
            prop_assert!(in_bounds(sample.locations_start_index, locations));
        }
        if let Some(link) = sample.link_index {
            prop_assert!(in_bounds(link, dictionary.link_table.len()));
        }
        for &attribute in &sample.attribute_indices {
            prop_assert!(in_bounds(attribute, dictionary.attribute_table.len()));
        }
    }
    Ok(())
}

/// Every converted line names the same function text as its source line.
fn check_function_text(
    dictionary: &ProfilesDictionary,
    source: &Profile,
    converted: &v1development::Profile,
) -> Result<(), TestCaseError> {
    let local_text = |index: i64| source.string_table[index as usize].as_str();
    let shared_text = |index: i32| dictionary.string_table[index as usize].as_str();

    prop_assert_eq!(source.location.len(), converted.location_indices.len());
    for (location, &index) in source.location.iter().zip(&converted.location_indices) {
        let shared = &dictionary.location_table[index as usize];
        prop_assert_eq!(location.address, shared.address);
        prop_assert_eq!(location.line.len(), shared.line.len());
        for (line, shared_line) in location.line.iter().zip(&shared.line) {
            let function = &source.function[line.function_index as usize];
            let shared_function = &dictionary.function_table[shared_line.function_index as usize];
            prop_assert_eq!(
                local_text(function.name),
                shared_text(shared_function.name_strindex)
            );
            prop_assert_eq!(
                local_text(function.filename),
                shared_text(shared_function.filename_strindex)
            );
            prop_assert_eq!(function.start_line, shared_function.start_line);
            prop_assert_eq!(line.line, shared_line.line);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: if cfg!(miri) { 8 } else { 64 },
        ..ProptestConfig::default()
    })]

    #[test]
    fn dictionary_is_deduplicated_and_indices_are_valid(
        profiles in batch_strategy(),
        strict in any::<bool>(),
    ) {
        let config = ConverterConfig {
            resolver_policy: if strict { ResolverPolicy::Strict } else { ResolverPolicy::Loose },
        };
        let conversion = Converter::new(config).convert(batch(profiles.clone())).unwrap();
        let dictionary = conversion.data.dictionary.as_ref().unwrap();
        check_dictionary(dictionary)?;

        let converted = &conversion.data.resource_profiles[0].scope_profiles[0].profiles;
        prop_assert_eq!(profiles.len(), converted.len());
        prop_assert_eq!(profiles.len(), conversion.report.profiles);
        for (source, converted) in profiles.iter().zip(converted) {
            check_profile(dictionary, converted)?;
            check_function_text(dictionary, source, converted)?;

            prop_assert_eq!(source.sample.len(), converted.sample.len());
            for (sample, converted) in source.sample.iter().zip(&converted.sample) {
                prop_assert_eq!(&sample.value, &converted.value);
                prop_assert_eq!(sample.locations_length as i32, converted.locations_length);
            }
        }
    }

    #[test]
    fn strict_samples_start_at_their_own_location(profiles in batch_strategy()) {
        let config = ConverterConfig { resolver_policy: ResolverPolicy::Strict };
        let conversion = Converter::new(config).convert(batch(profiles.clone())).unwrap();
        let converted = &conversion.data.resource_profiles[0].scope_profiles[0].profiles;
        for (source, converted) in profiles.iter().zip(converted) {
            for (sample, converted_sample) in source.sample.iter().zip(&converted.sample) {
                if sample.locations_length > 0 {
                    let own = converted.location_indices[sample.locations_start_index as usize];
                    prop_assert_eq!(own, converted_sample.locations_start_index);
                }
            }
        }
        prop_assert!(conversion.report.is_lossless());
    }

    #[test]
    fn conversion_is_deterministic(profiles in batch_strategy()) {
        let first = convert(batch(profiles.clone())).unwrap();
        let second = convert(batch(profiles)).unwrap();
        prop_assert_eq!(first.data.encode_to_vec(), second.data.encode_to_vec());
        prop_assert_eq!(first.report, second.report);
    }
}
