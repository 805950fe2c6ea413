// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

impl ProfileConverter<'_> {
    pub(super) fn intern_functions(&mut self) -> Result<(), ConvertError> {
        for function in &self.local.profile().function {
            let function = self.convert_function(function)?;
            self.dictionary.intern_function(function)?;
        }
        Ok(())
    }

    fn convert_function(
        &mut self,
        function: &v1experimental::Function,
    ) -> Result<v1development::Function, ConvertError> {
        Ok(v1development::Function {
            name_strindex: self.convert_string(function.name)?.into(),
            system_name_strindex: self.convert_string(function.system_name)?.into(),
            filename_strindex: self.convert_string(function.filename)?.into(),
            start_line: function.start_line,
        })
    }
}
