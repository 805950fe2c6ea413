// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::dictionary::LinkIndex;
use crate::{ConvertError, ReferenceKind};
use libdd_otel_profiles_protobuf::common::KeyValue;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

fn shared_link(link: &v1experimental::Link) -> v1development::Link {
    v1development::Link {
        trace_id: link.trace_id.clone(),
        span_id: link.span_id.clone(),
    }
}

impl ProfileConverter<'_> {
    pub(super) fn intern_links(&mut self) -> Result<(), ConvertError> {
        for link in &self.local.profile().link_table {
            self.dictionary.intern_link(shared_link(link))?;
        }
        Ok(())
    }

    pub(super) fn intern_attributes(&mut self) -> Result<(), ConvertError> {
        let profile = self.local.profile();
        self.convert_key_values(&profile.attribute_table)?;
        Ok(())
    }

    pub(super) fn intern_attribute_units(&mut self) -> Result<(), ConvertError> {
        for unit in &self.local.profile().attribute_units {
            let unit = v1development::AttributeUnit {
                attribute_key_strindex: self.convert_string(unit.attribute_key)?.into(),
                unit_strindex: self.convert_string(unit.unit)?.into(),
            };
            self.dictionary.intern_attribute_unit(unit)?;
        }
        Ok(())
    }

    pub(super) fn convert_key_values(
        &mut self,
        attributes: &[KeyValue],
    ) -> Result<Vec<i32>, ConvertError> {
        attributes
            .iter()
            .map(|kv| self.dictionary.intern_attribute(kv).map(i32::from))
            .collect()
    }

    /// Interns the attributes at the given positions of the local attribute table.
    pub(super) fn convert_attribute_positions(
        &mut self,
        positions: &[u64],
    ) -> Result<Vec<i32>, ConvertError> {
        positions
            .iter()
            .map(|&position| {
                let kv = self.local.attribute(position)?;
                self.dictionary.intern_attribute(kv).map(i32::from)
            })
            .collect()
    }

    /// Unlike [`Self::convert_attribute_positions`], an out-of-range position is dropped from
    /// the sample and reported.
    pub(super) fn convert_sample_attributes(
        &mut self,
        positions: &[u64],
    ) -> Result<Vec<i32>, ConvertError> {
        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            match self.local.attribute(position).ok() {
                Some(kv) => indices.push(self.dictionary.intern_attribute(kv)?.into()),
                None => self.unresolved(ReferenceKind::SampleAttribute, position),
            }
        }
        Ok(indices)
    }

    /// Position 0 of an empty link table is the usual "no link" and is not reported.
    pub(super) fn convert_link(&mut self, position: u64) -> Result<Option<LinkIndex>, ConvertError> {
        match self.local.link(position) {
            Some(link) => self.dictionary.intern_link(shared_link(link)).map(Some),
            None => {
                if position != 0 {
                    self.unresolved(ReferenceKind::Link, position);
                }
                Ok(None)
            }
        }
    }
}
