// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

mod attribute;
mod function;
mod location;
mod mapping;
mod profile;
mod sample;
mod string;

use crate::dictionary::{ProfilesDictionaryBuilder, TableSizes};
use crate::report::{ConversionReport, ProfileSite};
use crate::resolve::ResolverPolicy;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};
use profile::{ContainerFields, ProfileConverter};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ConverterConfig {
    pub resolver_policy: ResolverPolicy,
}

/// The converted batch and what was lost on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub data: v1development::ProfilesData,
    pub report: ConversionReport,
}

/// Converts a batch with the default configuration.
pub fn convert(input: v1experimental::ProfilesData) -> Result<Conversion, ConvertError> {
    Converter::new(ConverterConfig::default()).convert(input)
}

/// Walks a batch resource by resource, scope by scope, profile by profile, and builds the shared
/// dictionary as it goes.
pub struct Converter {
    config: ConverterConfig,
    dictionary: ProfilesDictionaryBuilder,
    report: ConversionReport,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            dictionary: ProfilesDictionaryBuilder::new(),
            report: ConversionReport::default(),
        }
    }

    pub fn convert(
        mut self,
        input: v1experimental::ProfilesData,
    ) -> Result<Conversion, ConvertError> {
        let mut resource_profiles = Vec::with_capacity(input.resource_profiles.len());
        for (resource, source) in input.resource_profiles.into_iter().enumerate() {
            let mut scope_profiles = Vec::with_capacity(source.scope_profiles.len());
            for (scope, source) in source.scope_profiles.into_iter().enumerate() {
                let mut profiles = Vec::with_capacity(source.profiles.len());
                for (profile, container) in source.profiles.into_iter().enumerate() {
                    let site = ProfileSite {
                        resource,
                        scope,
                        profile,
                    };
                    profiles.push(self.convert_container(site, container)?);
                }
                scope_profiles.push(v1development::ScopeProfiles {
                    scope: source.scope,
                    profiles,
                    schema_url: source.schema_url,
                });
            }
            resource_profiles.push(v1development::ResourceProfiles {
                resource: source.resource,
                scope_profiles,
                schema_url: source.schema_url,
            });
        }

        let dictionary = self.dictionary.build();
        self.report.dictionary = TableSizes::from(&dictionary);
        if !self.report.is_lossless() {
            tracing::warn!(
                unresolved = self.report.unresolved.len(),
                policy = %self.config.resolver_policy,
                "Some references could not be resolved and were written as absent or zero"
            );
        }
        tracing::debug!(
            profiles = self.report.profiles,
            dictionary = %self.report.dictionary,
            "Converted batch"
        );

        Ok(Conversion {
            data: v1development::ProfilesData {
                resource_profiles,
                dictionary: Some(dictionary),
            },
            report: self.report,
        })
    }

    fn convert_container(
        &mut self,
        site: ProfileSite,
        container: v1experimental::ProfileContainer,
    ) -> Result<v1development::Profile, ConvertError> {
        let v1experimental::ProfileContainer {
            profile_id,
            start_time_unix_nano,
            end_time_unix_nano,
            attributes,
            dropped_attributes_count,
            original_payload_format,
            original_payload,
            profile,
        } = container;
        let profile = profile.ok_or(ConvertError::MissingProfile { site })?;

        let converted = ProfileConverter::new(
            &mut self.dictionary,
            &mut self.report,
            self.config.resolver_policy,
            site,
            &profile,
        )
        .convert(ContainerFields {
            profile_id,
            start_time_unix_nano,
            end_time_unix_nano,
            attributes,
            dropped_attributes_count,
            original_payload_format,
            original_payload,
        })?;
        self.report.profiles += 1;
        Ok(converted)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::report::ReferenceKind;
    use libdd_otel_profiles_protobuf::common::{InstrumentationScope, KeyValue};
    use libdd_otel_profiles_protobuf::resource::Resource;
    use libdd_otel_profiles_protobuf::v1development::ProfilesDictionary;

    pub(crate) fn batch(profiles: Vec<v1experimental::Profile>) -> v1experimental::ProfilesData {
        v1experimental::ProfilesData {
            resource_profiles: vec![v1experimental::ResourceProfiles {
                scope_profiles: vec![v1experimental::ScopeProfiles {
                    profiles: profiles
                        .into_iter()
                        .map(|profile| v1experimental::ProfileContainer {
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

    pub(crate) fn try_convert_one(
        profile: v1experimental::Profile,
    ) -> Result<(v1development::Profile, ProfilesDictionary, ConversionReport), ConvertError> {
        let mut conversion = convert(batch(vec![profile]))?;
        let converted = conversion.data.resource_profiles[0].scope_profiles[0]
            .profiles
            .remove(0);
        let dictionary = conversion.data.dictionary.take().unwrap_or_default();
        Ok((converted, dictionary, conversion.report))
    }

    #[track_caller]
    pub(crate) fn convert_one_report(
        profile: v1experimental::Profile,
    ) -> (v1development::Profile, ProfilesDictionary, ConversionReport) {
        try_convert_one(profile).unwrap()
    }

    #[track_caller]
    pub(crate) fn convert_one(
        profile: v1experimental::Profile,
    ) -> (v1development::Profile, ProfilesDictionary) {
        let (converted, dictionary, _) = convert_one_report(profile);
        (converted, dictionary)
    }

    #[test]
    fn empty_batch_has_an_empty_dictionary() {
        let conversion = convert(v1experimental::ProfilesData::default()).unwrap();
        assert!(conversion.data.resource_profiles.is_empty());
        assert_eq!(
            Some(ProfilesDictionary::default()),
            conversion.data.dictionary
        );
        assert_eq!(0, conversion.report.profiles);
    }

    #[test]
    fn metadata_is_copied() {
        let input = v1experimental::ProfilesData {
            resource_profiles: vec![v1experimental::ResourceProfiles {
                resource: Some(Resource {
                    attributes: vec![KeyValue::string("service.name", "checkout")],
                    dropped_attributes_count: 1,
                }),
                schema_url: "https://opentelemetry.io/schemas/1.26.0".to_string(),
                scope_profiles: vec![v1experimental::ScopeProfiles {
                    scope: Some(InstrumentationScope {
                        name: "ebpf-profiler".to_string(),
                        version: "0.1".to_string(),
                        ..Default::default()
                    }),
                    schema_url: "scope-schema".to_string(),
                    profiles: vec![v1experimental::ProfileContainer {
                        profile_id: vec![7; 16],
                        start_time_unix_nano: 1_000,
                        end_time_unix_nano: 3_500,
                        attributes: vec![KeyValue::string("host.arch", "amd64")],
                        dropped_attributes_count: 2,
                        original_payload_format: "pprofext".to_string(),
                        original_payload: vec![1, 2, 3],
                        profile: Some(v1experimental::Profile::default()),
                    }],
                }],
            }],
        };

        let conversion = convert(input).unwrap();
        let resource = &conversion.data.resource_profiles[0];
        assert_eq!(
            vec![KeyValue::string("service.name", "checkout")],
            resource.resource.as_ref().unwrap().attributes
        );
        assert_eq!("https://opentelemetry.io/schemas/1.26.0", resource.schema_url);

        let scope = &resource.scope_profiles[0];
        assert_eq!("ebpf-profiler", scope.scope.as_ref().unwrap().name);
        assert_eq!("scope-schema", scope.schema_url);

        let profile = &scope.profiles[0];
        assert_eq!(vec![7; 16], profile.profile_id);
        assert_eq!(1_000, profile.time_nanos);
        assert_eq!(2_500, profile.duration_nanos);
        assert_eq!(2, profile.dropped_attributes_count);
        assert_eq!("pprofext", profile.original_payload_format);
        assert_eq!(vec![1, 2, 3], profile.original_payload);
        assert_eq!(vec![0], profile.attribute_indices);
        assert_eq!(1, conversion.report.profiles);
    }

    #[test]
    fn end_before_start_wraps() {
        let mut input = batch(vec![v1experimental::Profile::default()]);
        let container = &mut input.resource_profiles[0].scope_profiles[0].profiles[0];
        container.start_time_unix_nano = 150;
        container.end_time_unix_nano = 100;

        let conversion = convert(input).unwrap();
        let profile = &conversion.data.resource_profiles[0].scope_profiles[0].profiles[0];
        assert_eq!(150, profile.time_nanos);
        assert_eq!(-50, profile.duration_nanos);
    }

    #[test]
    fn missing_profile_is_an_error() {
        let mut input = batch(vec![v1experimental::Profile::default(); 2]);
        input.resource_profiles[0].scope_profiles[0].profiles[1].profile = None;

        match convert(input) {
            Err(ConvertError::MissingProfile { site }) => assert_eq!(
                ProfileSite {
                    resource: 0,
                    scope: 0,
                    profile: 1
                },
                site
            ),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn report_names_the_profile() {
        let profiles = vec![
            v1experimental::Profile::default(),
            v1experimental::Profile {
                sample: vec![v1experimental::Sample {
                    link: 2,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ];

        let conversion = convert(batch(profiles)).unwrap();
        assert_eq!(2, conversion.report.profiles);
        assert_eq!(1, conversion.report.unresolved_count(ReferenceKind::Link));
        assert_eq!(1, conversion.report.unresolved[0].site.profile);
        assert_eq!(
            TableSizes::from(conversion.data.dictionary.as_ref().unwrap()),
            conversion.report.dictionary
        );
    }
}
