// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::dictionary::StringIndex;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

impl ProfileConverter<'_> {
    /// Interns the whole local string table, in order, including entries nothing refers to.
    pub(super) fn intern_strings(&mut self) -> Result<(), ConvertError> {
        for s in &self.local.profile().string_table {
            self.dictionary.intern_string(s)?;
        }
        Ok(())
    }

    /// Maps a local string position to the dictionary position of the same text.
    pub(super) fn convert_string(&mut self, position: i64) -> Result<StringIndex, ConvertError> {
        let text = self.local.string(position)?;
        self.dictionary.intern_string(text)
    }

    pub(super) fn convert_value_type(
        &mut self,
        value_type: &v1experimental::ValueType,
    ) -> Result<v1development::ValueType, ConvertError> {
        Ok(v1development::ValueType {
            type_strindex: self.convert_string(value_type.r#type)?.into(),
            unit_strindex: self.convert_string(value_type.unit)?.into(),
            aggregation_temporality: value_type.aggregation_temporality,
        })
    }
}
