// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::dictionary::{LocationIndex, MappingIndex};
use crate::resolve::{resolve_function, resolve_mapping};
use crate::{ConvertError, ReferenceKind};
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

impl ProfileConverter<'_> {
    /// Interns every local location and returns their dictionary indices in local order.
    pub(super) fn convert_locations(&mut self) -> Result<Vec<LocationIndex>, ConvertError> {
        let locations = &self.local.profile().location;
        let mut indices = Vec::with_capacity(locations.len());
        for location in locations {
            let location = self.convert_location(location)?;
            indices.push(self.dictionary.intern_location(location)?);
        }
        Ok(indices)
    }

    fn convert_location(
        &mut self,
        location: &v1experimental::Location,
    ) -> Result<v1development::Location, ConvertError> {
        let mapping_index = self.location_mapping(location.mapping_index)?;
        let line = location
            .line
            .iter()
            .map(|line| self.convert_line(line))
            .collect::<Result<_, _>>()?;
        let attribute_indices = self.convert_attribute_positions(&location.attributes)?;

        Ok(v1development::Location {
            mapping_index: mapping_index.map(i32::from),
            address: location.address,
            line,
            is_folded: location.is_folded,
            attribute_indices,
        })
    }

    /// Position 0 of an empty mapping table is the usual "no mapping" and is not reported.
    fn location_mapping(&mut self, position: u64) -> Result<Option<MappingIndex>, ConvertError> {
        let Some(mapping) = self.local.mapping(position) else {
            if position != 0 {
                self.unresolved(ReferenceKind::Mapping, position);
            }
            return Ok(None);
        };
        let resolved = resolve_mapping(self.dictionary, &self.local, mapping, self.policy)?;
        if resolved.is_none() {
            self.unresolved(ReferenceKind::Mapping, position);
        }
        Ok(resolved)
    }

    fn convert_line(
        &mut self,
        line: &v1experimental::Line,
    ) -> Result<v1development::Line, ConvertError> {
        let function = self.local.function(line.function_index)?;
        let function_index = match resolve_function(self.dictionary, &self.local, function)? {
            Some(id) => id.into(),
            None => {
                self.unresolved(ReferenceKind::Function, line.function_index);
                0
            }
        };
        Ok(v1development::Line {
            function_index,
            line: line.line,
            column: line.column,
        })
    }
}
