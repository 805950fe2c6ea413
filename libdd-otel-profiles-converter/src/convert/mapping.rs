// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::ProfileConverter;
use crate::ConvertError;
use libdd_otel_profiles_protobuf::{v1development, v1experimental};

impl ProfileConverter<'_> {
    /// The dictionary mapping has no attributes of its own, but the ones the source mapping
    /// refers to still end up in the attribute table.
    pub(super) fn intern_mappings(&mut self) -> Result<(), ConvertError> {
        for mapping in &self.local.profile().mapping {
            let converted = self.convert_mapping(mapping)?;
            self.convert_attribute_positions(&mapping.attributes)?;
            self.dictionary.intern_mapping(converted)?;
        }
        Ok(())
    }

    fn convert_mapping(
        &mut self,
        mapping: &v1experimental::Mapping,
    ) -> Result<v1development::Mapping, ConvertError> {
        Ok(v1development::Mapping {
            memory_start: mapping.memory_start,
            memory_limit: mapping.memory_limit,
            file_offset: mapping.file_offset,
            filename_strindex: self.convert_string(mapping.filename)?.into(),
            has_functions: mapping.has_functions,
            has_filenames: mapping.has_filenames,
            has_line_numbers: mapping.has_line_numbers,
            has_inline_frames: mapping.has_inline_frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::tests::{convert_one, try_convert_one};
    use crate::{ConvertError, Table};
    use libdd_otel_profiles_protobuf::common::KeyValue;
    use libdd_otel_profiles_protobuf::v1experimental::{Mapping, Profile};

    fn profile() -> Profile {
        Profile {
            string_table: vec![String::new(), "/usr/lib/libc.so.6".to_string()],
            attribute_table: vec![KeyValue::string("process.executable.build_id.gnu", "ab12")],
            mapping: vec![Mapping {
                id: 1,
                memory_start: 0x7f00_0000,
                memory_limit: 0x7f10_0000,
                file_offset: 0x1000,
                filename: 1,
                attributes: vec![0],
                has_functions: true,
                has_filenames: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn fields_are_carried() {
        let (_, dictionary) = convert_one(profile());
        let mapping = &dictionary.mapping_table[0];
        assert_eq!(0x7f00_0000, mapping.memory_start);
        assert_eq!(0x7f10_0000, mapping.memory_limit);
        assert_eq!(0x1000, mapping.file_offset);
        assert_eq!("/usr/lib/libc.so.6", dictionary.string_table[mapping.filename_strindex as usize]);
        assert!(mapping.has_functions);
        assert!(mapping.has_filenames);
        assert!(!mapping.has_line_numbers);
        assert!(!mapping.has_inline_frames);
        assert_eq!(1, dictionary.attribute_table.len());
    }

    #[test]
    fn unknown_attribute_position_is_an_error() {
        let mut profile = profile();
        profile.mapping[0].attributes = vec![5];
        let result = try_convert_one(profile);
        assert!(matches!(
            result,
            Err(ConvertError::LocalIndexOutOfBounds {
                table: Table::Attributes,
                index: 5,
                len: 1,
                ..
            })
        ));
    }
}
