// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `opentelemetry.proto.profiles.v1development`: the dictionary schema. Strings, functions,
//! mappings, locations, attributes and links are stored once per batch in
//! [`ProfilesDictionary`], and every [`Profile`] refers to them by `int32` index.
//!
//! The dictionary entries derive `Eq` and `Hash` so they can be interned as-is.

use crate::common::{InstrumentationScope, KeyValue};
use crate::protojson;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilesData {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_profiles: Vec<ResourceProfiles>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<ProfilesDictionary>,
}

/// The tables shared by all profiles of a [`ProfilesData`].
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilesDictionary {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapping_table: Vec<Mapping>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_table: Vec<Location>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub function_table: Vec<Function>,
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub link_table: Vec<Link>,
    #[prost(string, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub string_table: Vec<String>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_table: Vec<KeyValue>,
    #[prost(message, repeated, tag = "7")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_units: Vec<AttributeUnit>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceProfiles {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope_profiles: Vec<ScopeProfiles>,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeProfiles {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<InstrumentationScope>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample_type: Vec<ValueType>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample: Vec<Sample>,
    /// Index into [`ProfilesDictionary::location_table`] for every location of the profile.
    #[prost(int32, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_indices: Vec<i32>,
    #[prost(int64, tag = "4")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub time_nanos: i64,
    #[prost(int64, tag = "5")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub duration_nanos: i64,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<ValueType>,
    #[prost(int64, tag = "7")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub period: i64,
    #[prost(int32, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment_strindices: Vec<i32>,
    #[prost(int32, tag = "9")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub default_sample_type_index: i32,
    #[prost(bytes = "vec", tag = "10")]
    #[serde(with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub profile_id: Vec<u8>,
    #[prost(uint32, tag = "11")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub dropped_attributes_count: u32,
    #[prost(string, tag = "12")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_payload_format: String,
    #[prost(bytes = "vec", tag = "13")]
    #[serde(with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub original_payload: Vec<u8>,
    #[prost(int32, repeated, tag = "14")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_indices: Vec<i32>,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeUnit {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub attribute_key_strindex: i32,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub unit_strindex: i32,
}

#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub trace_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "protojson::bytes", skip_serializing_if = "Vec::is_empty")]
    pub span_id: Vec<u8>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AggregationTemporality {
    Unspecified = 0,
    Delta = 1,
    Cumulative = 2,
}

impl protojson::ProtoEnum for AggregationTemporality {
    fn as_str_name(&self) -> &'static str {
        match self {
            AggregationTemporality::Unspecified => "AGGREGATION_TEMPORALITY_UNSPECIFIED",
            AggregationTemporality::Delta => "AGGREGATION_TEMPORALITY_DELTA",
            AggregationTemporality::Cumulative => "AGGREGATION_TEMPORALITY_CUMULATIVE",
        }
    }

    fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "AGGREGATION_TEMPORALITY_UNSPECIFIED" => Some(Self::Unspecified),
            "AGGREGATION_TEMPORALITY_DELTA" => Some(Self::Delta),
            "AGGREGATION_TEMPORALITY_CUMULATIVE" => Some(Self::Cumulative),
            _ => None,
        }
    }
}

/// serde adapter for `aggregation_temporality` fields, shared with [`crate::v1experimental`].
pub mod aggregation_temporality {
    use super::AggregationTemporality;
    use crate::protojson::enumeration;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        enumeration::serialize::<AggregationTemporality, S>(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        enumeration::deserialize::<AggregationTemporality, D>(deserializer)
    }
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueType {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub type_strindex: i32,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub unit_strindex: i32,
    #[prost(enumeration = "AggregationTemporality", tag = "3")]
    #[serde(
        with = "aggregation_temporality",
        skip_serializing_if = "protojson::is_default"
    )]
    pub aggregation_temporality: i32,
}

/// A sample's stack is `location_table[locations_start_index..][..locations_length]`.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sample {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub locations_start_index: i32,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub locations_length: i32,
    #[prost(int64, repeated, tag = "3")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<i64>,
    #[prost(int32, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_indices: Vec<i32>,
    #[prost(int32, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_index: Option<i32>,
    #[prost(uint64, repeated, tag = "6")]
    #[serde(with = "protojson::int64_seq", skip_serializing_if = "Vec::is_empty")]
    pub timestamps_unix_nano: Vec<u64>,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mapping {
    #[prost(uint64, tag = "1")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub memory_start: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub memory_limit: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub file_offset: u64,
    #[prost(int32, tag = "4")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub filename_strindex: i32,
    #[prost(bool, tag = "6")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub has_functions: bool,
    #[prost(bool, tag = "7")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub has_filenames: bool,
    #[prost(bool, tag = "8")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub has_line_numbers: bool,
    #[prost(bool, tag = "9")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub has_inline_frames: bool,
}

#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// Unset when the mapping is unknown or could not be resolved.
    #[prost(int32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_index: Option<i32>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub address: u64,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
    #[prost(bool, tag = "4")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub is_folded: bool,
    #[prost(int32, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_indices: Vec<i32>,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Line {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub function_index: i32,
    #[prost(int64, tag = "2")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub line: i64,
    #[prost(int64, tag = "3")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub column: i64,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Function {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub name_strindex: i32,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub system_name_strindex: i32,
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "protojson::is_default")]
    pub filename_strindex: i32,
    #[prost(int64, tag = "4")]
    #[serde(with = "protojson::int64", skip_serializing_if = "protojson::is_default")]
    pub start_line: i64,
}
