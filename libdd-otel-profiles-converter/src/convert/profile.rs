// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::dictionary::ProfilesDictionaryBuilder;
use crate::local::LocalTables;
use crate::report::{ConversionReport, ProfileSite, ReferenceKind};
use crate::resolve::ResolverPolicy;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

/// Converts one source profile, interning everything it references into the shared dictionary.
pub(crate) struct ProfileConverter<'a> {
    pub(super) dictionary: &'a mut ProfilesDictionaryBuilder,
    pub(super) report: &'a mut ConversionReport,
    pub(super) policy: ResolverPolicy,
    pub(super) local: LocalTables<'a>,
}

/// The container-level metadata that travels next to the profile.
pub(crate) struct ContainerFields {
    pub profile_id: Vec<u8>,
    pub start_time_unix_nano: u64,
    pub end_time_unix_nano: u64,
    pub attributes: Vec<KeyValue>,
    pub dropped_attributes_count: u32,
    pub original_payload_format: String,
    pub original_payload: Vec<u8>,
}

impl<'a> ProfileConverter<'a> {
    pub fn new(
        dictionary: &'a mut ProfilesDictionaryBuilder,
        report: &'a mut ConversionReport,
        policy: ResolverPolicy,
        site: ProfileSite,
        profile: &'a v1experimental::Profile,
    ) -> Self {
        Self {
            dictionary,
            report,
            policy,
            local: LocalTables::new(site, profile),
        }
    }

    pub(super) fn unresolved(&mut self, kind: ReferenceKind, local_index: u64) {
        self.report.record(self.local.site(), kind, local_index);
    }

    /// The tables are interned in a fixed order so that dictionary positions only depend on the
    /// input.
    pub fn convert(
        mut self,
        container: ContainerFields,
    ) -> Result<v1development::Profile, ConvertError> {
        let profile = self.local.profile();

        self.intern_links()?;
        self.intern_strings()?;
        self.intern_attributes()?;
        self.intern_attribute_units()?;
        self.intern_mappings()?;
        self.intern_functions()?;
        let locations = self.convert_locations()?;
        let sample = self.convert_samples(&locations)?;

        let sample_type = profile
            .sample_type
            .iter()
            .map(|value_type| self.convert_value_type(value_type))
            .collect::<Result<_, _>>()?;
        let period_type = profile
            .period_type
            .as_ref()
            .map(|value_type| self.convert_value_type(value_type))
            .transpose()?;
        let comment_strindices = profile
            .comment
            .iter()
            .map(|&comment| self.convert_string(comment).map(i32::from))
            .collect::<Result<_, _>>()?;
        let default_sample_type_index = self.convert_string(profile.default_sample_type)?.into();
        let attribute_indices = self.convert_key_values(&container.attributes)?;

        let start = container.start_time_unix_nano as i64;
        let end = container.end_time_unix_nano as i64;

        tracing::debug!(
            site = %self.local.site(),
            samples = profile.sample.len(),
            locations = locations.len(),
            "Converted profile"
        );

        Ok(v1development::Profile {
            sample_type,
            sample,
            location_indices: locations.into_iter().map(i32::from).collect(),
            time_nanos: start,
            duration_nanos: end.wrapping_sub(start),
            period_type,
            period: profile.period,
            comment_strindices,
            default_sample_type_index,
            profile_id: container.profile_id,
            dropped_attributes_count: container.dropped_attributes_count,
            original_payload_format: container.original_payload_format,
            original_payload: container.original_payload,
            attribute_indices,
        })
    }
}
