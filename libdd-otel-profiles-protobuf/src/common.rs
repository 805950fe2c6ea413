// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `opentelemetry.proto.common.v1`, shared by both profile schema generations.

use crate::protojson;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A value of an attribute. An empty `value` means the attribute is present but unset.
///
/// Equality and hashing are implemented by hand for [`any_value::Value`] so that attributes can
/// be interned: doubles compare numerically, except that every NaN equals every other NaN.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyValue {
    #[prost(oneof = "any_value::Value", tags = "1, 2, 3, 4, 5, 6, 7")]
    #[serde(flatten)]
    pub value: Option<any_value::Value>,
}

pub mod any_value {
    use super::*;
    use std::hash::{Hash, Hasher};

    #[derive(Clone, ::prost::Oneof, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Value {
        #[prost(string, tag = "1")]
        StringValue(String),
        #[prost(bool, tag = "2")]
        BoolValue(bool),
        #[prost(int64, tag = "3")]
        #[serde(with = "protojson::int64")]
        IntValue(i64),
        #[prost(double, tag = "4")]
        DoubleValue(f64),
        #[prost(message, tag = "5")]
        ArrayValue(super::ArrayValue),
        #[prost(message, tag = "6")]
        KvlistValue(super::KeyValueList),
        #[prost(bytes, tag = "7")]
        #[serde(with = "protojson::bytes")]
        BytesValue(Vec<u8>),
    }

    /// `-0.0` hashes like `0.0` and every NaN like [`f64::NAN`], matching [`PartialEq`].
    fn canonical_bits(value: f64) -> u64 {
        if value.is_nan() {
            f64::NAN.to_bits()
        } else if value == 0.0 {
            0
        } else {
            value.to_bits()
        }
    }

    impl PartialEq for Value {
        fn eq(&self, other: &Self) -> bool {
            match (self, other) {
                (Value::StringValue(a), Value::StringValue(b)) => a == b,
                (Value::BoolValue(a), Value::BoolValue(b)) => a == b,
                (Value::IntValue(a), Value::IntValue(b)) => a == b,
                (Value::DoubleValue(a), Value::DoubleValue(b)) => {
                    a == b || (a.is_nan() && b.is_nan())
                }
                (Value::ArrayValue(a), Value::ArrayValue(b)) => a == b,
                (Value::KvlistValue(a), Value::KvlistValue(b)) => a == b,
                (Value::BytesValue(a), Value::BytesValue(b)) => a == b,
                _ => false,
            }
        }
    }

    impl Eq for Value {}

    impl Hash for Value {
        fn hash<H: Hasher>(&self, state: &mut H) {
            std::mem::discriminant(self).hash(state);
            match self {
                Value::StringValue(v) => v.hash(state),
                Value::BoolValue(v) => v.hash(state),
                Value::IntValue(v) => v.hash(state),
                Value::DoubleValue(v) => canonical_bits(*v).hash(state),
                Value::ArrayValue(v) => v.hash(state),
                Value::KvlistValue(v) => v.hash(state),
                Value::BytesValue(v) => v.hash(state),
            }
        }
    }
}

/// A JSON scalar written either as a number or as a string.
struct Scalar<T>(T);

impl<'de, T> Deserialize<'de> for Scalar<T>
where
    T: Default + FromStr + Deserialize<'de>,
    T::Err: Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        protojson::int64::deserialize(deserializer).map(Scalar)
    }
}

struct Base64(Vec<u8>);

impl<'de> Deserialize<'de> for Base64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        protojson::bytes::deserialize(deserializer).map(Base64)
    }
}

/// The `value` oneof as plain optional fields, so that unknown members are rejected.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct AnyValueFields {
    #[serde(alias = "string_value")]
    string_value: Option<String>,
    #[serde(alias = "bool_value")]
    bool_value: Option<bool>,
    #[serde(alias = "int_value")]
    int_value: Option<Scalar<i64>>,
    #[serde(alias = "double_value")]
    double_value: Option<Scalar<f64>>,
    #[serde(alias = "array_value")]
    array_value: Option<ArrayValue>,
    #[serde(alias = "kvlist_value")]
    kvlist_value: Option<KeyValueList>,
    #[serde(alias = "bytes_value")]
    bytes_value: Option<Base64>,
}

impl<'de> Deserialize<'de> for AnyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use any_value::Value;

        let AnyValueFields {
            string_value,
            bool_value,
            int_value,
            double_value,
            array_value,
            kvlist_value,
            bytes_value,
        } = AnyValueFields::deserialize(deserializer)?;
        let mut members = [
            string_value.map(Value::StringValue),
            bool_value.map(Value::BoolValue),
            int_value.map(|Scalar(v)| Value::IntValue(v)),
            double_value.map(|Scalar(v)| Value::DoubleValue(v)),
            array_value.map(Value::ArrayValue),
            kvlist_value.map(Value::KvlistValue),
            bytes_value.map(|Base64(v)| Value::BytesValue(v)),
        ]
        .into_iter()
        .flatten();

        let value = members.next();
        if members.next().is_some() {
            return Err(de::Error::custom("AnyValue sets more than one value"));
        }
        Ok(AnyValue { value })
    }
}

#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ArrayValue {
    #[prost(message, repeated, tag = "1")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub values: Vec<AnyValue>,
}

/// A list of key/value pairs. Unlike a map, duplicate keys are representable and order is kept.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyValueList {
    #[prost(message, repeated, tag = "1")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub values: Vec<KeyValue>,
}

/// A key/value pair, used as an attribute. The dictionary schema interns these whole.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyValue {
    #[prost(string, tag = "1")]
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AnyValue>,
}

impl KeyValue {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(AnyValue {
                value: Some(any_value::Value::StringValue(value.into())),
            }),
        }
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value: Some(AnyValue {
                value: Some(any_value::Value::IntValue(value)),
            }),
        }
    }
}

/// The instrumentation scope that produced a set of profiles.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InstrumentationScope {
    #[prost(string, tag = "1")]
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub name: String,
    #[prost(string, tag = "2")]
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub version: String,
    #[prost(message, repeated, tag = "3")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub attributes: Vec<KeyValue>,
    #[prost(uint32, tag = "4")]
    #[serde(
        alias = "dropped_attributes_count",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub dropped_attributes_count: u32,
}
