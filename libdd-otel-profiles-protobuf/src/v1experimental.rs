// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `opentelemetry.proto.profiles.v1experimental`: the self-contained schema, where every
//! [`Profile`] owns its tables and refers into them by position.

use crate::common::{InstrumentationScope, KeyValue};
use crate::protojson;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

pub use crate::v1development::AggregationTemporality;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfilesData {
    #[prost(message, repeated, tag = "1")]
    #[serde(
        alias = "resource_profiles",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub resource_profiles: Vec<ResourceProfiles>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ResourceProfiles {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[prost(message, repeated, tag = "2")]
    #[serde(
        alias = "scope_profiles",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub scope_profiles: Vec<ScopeProfiles>,
    #[prost(string, tag = "3")]
    #[serde(
        alias = "schema_url",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub schema_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScopeProfiles {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<InstrumentationScope>,
    #[prost(message, repeated, tag = "2")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub profiles: Vec<ProfileContainer>,
    #[prost(string, tag = "3")]
    #[serde(
        alias = "schema_url",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub schema_url: String,
}

/// Envelope around a [`Profile`] carrying the OpenTelemetry-level metadata.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfileContainer {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(alias = "profile_id", with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub profile_id: Vec<u8>,
    #[prost(fixed64, tag = "2")]
    #[serde(
        alias = "start_time_unix_nano",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub start_time_unix_nano: u64,
    #[prost(fixed64, tag = "3")]
    #[serde(
        alias = "end_time_unix_nano",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub end_time_unix_nano: u64,
    #[prost(message, repeated, tag = "4")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub attributes: Vec<KeyValue>,
    #[prost(uint32, tag = "5")]
    #[serde(
        alias = "dropped_attributes_count",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub dropped_attributes_count: u32,
    #[prost(string, tag = "6")]
    #[serde(
        alias = "original_payload_format",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub original_payload_format: String,
    #[prost(bytes = "vec", tag = "7")]
    #[serde(
        alias = "original_payload",
        with = "protojson::bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub original_payload: Vec<u8>,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// A pprof-style profile with its own tables. Every `int64` reference to a string is a position
/// in [`Profile::string_table`]; every other reference is a position in the matching table.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Profile {
    #[prost(message, repeated, tag = "1")]
    #[serde(
        alias = "sample_type",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub sample_type: Vec<ValueType>,
    #[prost(message, repeated, tag = "2")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub sample: Vec<Sample>,
    #[prost(message, repeated, tag = "3")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub mapping: Vec<Mapping>,
    #[prost(message, repeated, tag = "4")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub location: Vec<Location>,
    #[prost(int64, repeated, tag = "15")]
    #[serde(
        alias = "location_indices",
        with = "protojson::int64_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub location_indices: Vec<i64>,
    #[prost(message, repeated, tag = "5")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub function: Vec<Function>,
    #[prost(message, repeated, tag = "16")]
    #[serde(
        alias = "attribute_table",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub attribute_table: Vec<KeyValue>,
    #[prost(message, repeated, tag = "17")]
    #[serde(
        alias = "attribute_units",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub attribute_units: Vec<AttributeUnit>,
    #[prost(message, repeated, tag = "18")]
    #[serde(
        alias = "link_table",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub link_table: Vec<Link>,
    #[prost(string, repeated, tag = "6")]
    #[serde(
        alias = "string_table",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub string_table: Vec<String>,
    #[prost(int64, tag = "7")]
    #[serde(
        alias = "drop_frames",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub drop_frames: i64,
    #[prost(int64, tag = "8")]
    #[serde(
        alias = "keep_frames",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub keep_frames: i64,
    #[prost(int64, tag = "9")]
    #[serde(
        alias = "time_nanos",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub time_nanos: i64,
    #[prost(int64, tag = "10")]
    #[serde(
        alias = "duration_nanos",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub duration_nanos: i64,
    #[prost(message, optional, tag = "11")]
    #[serde(alias = "period_type", skip_serializing_if = "Option::is_none")]
    pub period_type: Option<ValueType>,
    #[prost(int64, tag = "12")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub period: i64,
    #[prost(int64, repeated, tag = "13")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<i64>,
    #[prost(int64, tag = "14")]
    #[serde(
        alias = "default_sample_type",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub default_sample_type: i64,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AttributeUnit {
    #[prost(int64, tag = "1")]
    #[serde(
        alias = "attribute_key",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub attribute_key: i64, // Index into string table
    #[prost(int64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub unit: i64, // Index into string table
}

/// A pointer from a sample to the trace span active when it was taken.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Link {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(alias = "trace_id", with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub trace_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(alias = "span_id", with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub span_id: Vec<u8>,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValueType {
    #[prost(int64, tag = "1")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub r#type: i64, // Index into string table
    #[prost(int64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub unit: i64, // Index into string table
    #[prost(enumeration = "AggregationTemporality", tag = "3")]
    #[serde(
        alias = "aggregation_temporality",
        with = "crate::v1development::aggregation_temporality",
        skip_serializing_if = "protojson::is_default"
    )]
    pub aggregation_temporality: i32,
}

/// `locations_start_index` and `locations_length` give the sample's stack as a run of the
/// profile's locations. `location_index` is the older per-sample list and is not used by newer
/// producers.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Sample {
    #[prost(uint64, repeated, tag = "1")]
    #[serde(
        alias = "location_index",
        with = "protojson::int64_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub location_index: Vec<u64>,
    #[prost(uint64, tag = "7")]
    #[serde(
        alias = "locations_start_index",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub locations_start_index: u64,
    #[prost(uint64, tag = "8")]
    #[serde(
        alias = "locations_length",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub locations_length: u64,
    #[prost(uint32, tag = "9")]
    #[serde(
        alias = "stacktrace_id_index",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub stacktrace_id_index: u32,
    #[prost(int64, repeated, tag = "2")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<i64>,
    #[prost(uint64, repeated, tag = "10")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<u64>,
    #[prost(uint64, tag = "12")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub link: u64,
    #[prost(uint64, repeated, tag = "13")]
    #[serde(
        alias = "timestamps_unix_nano",
        with = "protojson::int64_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub timestamps_unix_nano: Vec<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BuildIdKind {
    BuildIdLinker = 0,
    BuildIdBinaryHash = 1,
}

impl protojson::ProtoEnum for BuildIdKind {
    fn as_str_name(&self) -> &'static str {
        match self {
            BuildIdKind::BuildIdLinker => "BUILD_ID_LINKER",
            BuildIdKind::BuildIdBinaryHash => "BUILD_ID_BINARY_HASH",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BUILD_ID_LINKER" => Some(Self::BuildIdLinker),
            "BUILD_ID_BINARY_HASH" => Some(Self::BuildIdBinaryHash),
            _ => None,
        }
    }
}

mod build_id_kind {
    use super::BuildIdKind;
    use crate::protojson::enumeration;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        enumeration::serialize::<BuildIdKind, S>(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        enumeration::deserialize::<BuildIdKind, D>(deserializer)
    }
}

#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Mapping {
    #[prost(uint64, tag = "1")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    #[serde(
        alias = "memory_start",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub memory_start: u64,
    #[prost(uint64, tag = "3")]
    #[serde(
        alias = "memory_limit",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub memory_limit: u64,
    #[prost(uint64, tag = "4")]
    #[serde(
        alias = "file_offset",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub file_offset: u64,
    #[prost(int64, tag = "5")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub filename: i64, // Index into string table
    #[prost(int64, tag = "6")]
    #[serde(
        alias = "build_id",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub build_id: i64, // Index into string table
    #[prost(enumeration = "BuildIdKind", tag = "11")]
    #[serde(
        alias = "build_id_kind",
        with = "build_id_kind",
        skip_serializing_if = "protojson::is_default"
    )]
    pub build_id_kind: i32,
    #[prost(uint64, repeated, tag = "12")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<u64>,
    #[prost(bool, tag = "7")]
    #[serde(
        alias = "has_functions",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub has_functions: bool,
    #[prost(bool, tag = "8")]
    #[serde(
        alias = "has_filenames",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub has_filenames: bool,
    #[prost(bool, tag = "9")]
    #[serde(
        alias = "has_line_numbers",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub has_line_numbers: bool,
    #[prost(bool, tag = "10")]
    #[serde(
        alias = "has_inline_frames",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub has_inline_frames: bool,
}

#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Location {
    #[prost(uint64, tag = "1")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    #[serde(
        alias = "mapping_index",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub mapping_index: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub address: u64,
    #[prost(message, repeated, tag = "4")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub line: Vec<Line>,
    #[prost(bool, tag = "5")]
    #[serde(
        alias = "is_folded",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub is_folded: bool,
    #[prost(uint32, tag = "6")]
    #[serde(
        alias = "type_index",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub type_index: u32,
    #[prost(uint64, repeated, tag = "7")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<u64>,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Line {
    #[prost(uint64, tag = "1")]
    #[serde(
        alias = "function_index",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub function_index: u64,
    #[prost(int64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub line: i64,
    #[prost(int64, tag = "3")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub column: i64,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Function {
    #[prost(uint64, tag = "1")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub id: u64,
    #[prost(int64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub name: i64, // Index into string table
    #[prost(int64, tag = "3")]
    #[serde(
        alias = "system_name",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub system_name: i64, // Index into string table
    #[prost(int64, tag = "4")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub filename: i64, // Index into string table
    #[prost(int64, tag = "5")]
    #[serde(
        alias = "start_line",
        with = "protojson::int64",
        skip_serializing_if = "protojson::is_default"
    )]
    pub start_line: i64,
}
