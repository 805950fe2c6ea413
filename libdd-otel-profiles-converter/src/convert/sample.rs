// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::dictionary::LocationIndex;
use crate::resolve::resolve_location;
use crate::{ConvertError, ReferenceKind};
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

impl ProfileConverter<'_> {
    /// `locations` holds the dictionary index of every local location, in local order.
    pub(super) fn convert_samples(
        &mut self,
        locations: &[LocationIndex],
    ) -> Result<Vec<v1development::Sample>, ConvertError> {
        self.local
            .profile()
            .sample
            .iter()
            .map(|sample| self.convert_sample(sample, locations))
            .collect()
    }

    fn convert_sample(
        &mut self,
        sample: &v1experimental::Sample,
        locations: &[LocationIndex],
    ) -> Result<v1development::Sample, ConvertError> {
        let locations_start_index = self.sample_start(sample, locations);
        let link_index = self.convert_link(sample.link)?;
        let attribute_indices = self.convert_sample_attributes(&sample.attributes)?;

        Ok(v1development::Sample {
            locations_start_index,
            // Truncates like the int32 field it lands in.
            locations_length: sample.locations_length as i32,
            value: sample.value.clone(),
            attribute_indices,
            link_index: link_index.map(i32::from),
            timestamps_unix_nano: sample.timestamps_unix_nano.clone(),
        })
    }

    /// Degrades to 0 when the start location can't be resolved. Only samples with a stack are
    /// reported, since an empty stack never reads its start.
    fn sample_start(&mut self, sample: &v1experimental::Sample, locations: &[LocationIndex]) -> i32 {
        let position = sample.locations_start_index;
        let interned = usize::try_from(position)
            .ok()
            .and_then(|offset| locations.get(offset))
            .copied();
        let dictionary = &*self.dictionary;
        let resolved = self
            .local
            .location(position)
            .and_then(|location| resolve_location(dictionary, location, interned, self.policy));
        match resolved {
            Some(id) => id.into(),
            None => {
                if sample.locations_length > 0 {
                    self.unresolved(ReferenceKind::Location, position);
                }
                0
            }
        }
    }
}
