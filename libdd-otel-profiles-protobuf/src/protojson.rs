// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! serde helpers implementing the parts of the proto3 JSON mapping that differ from serde's
//! defaults:
//!
//! - 64-bit integers are written as decimal strings, and accepted as strings or numbers.
//! - `bytes` are written as standard, padded base64.
//! - enums are written by name, and accepted by name or number.
//! - `null` reads as the field's default value.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Display;
use std::str::FromStr;

pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    t == &T::default()
}

pub fn deserialize_null_into_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber<T> {
    String(String),
    Number(T),
}

impl<T> StringOrNumber<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_value<E: serde::de::Error>(self) -> Result<T, E> {
        match self {
            StringOrNumber::String(s) => s.trim().parse().map_err(E::custom),
            StringOrNumber::Number(n) => Ok(n),
        }
    }
}

/// `int64`, `uint64`, `fixed64` and friends.
pub mod int64 {
    use super::*;

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Default + FromStr + Deserialize<'de>,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Option::<StringOrNumber<T>>::deserialize(deserializer)? {
            Some(value) => value.into_value(),
            None => Ok(T::default()),
        }
    }
}

/// `repeated int64`, `repeated uint64`, and friends.
pub mod int64_seq {
    use super::*;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<T: Display, S: Serializer>(
        values: &Vec<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(ToString::to_string))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        Option::<Vec<StringOrNumber<T>>>::deserialize(deserializer)?
            .unwrap_or_default()
            .into_iter()
            .map(StringOrNumber::into_value)
            .collect()
    }
}

pub mod bytes {
    use super::*;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded: String = deserialize_null_into_default(deserializer)?;
        BASE64_STANDARD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}

/// Implemented by the protobuf enums so their `i32` fields can be written by name.
pub trait ProtoEnum: Copy + TryFrom<i32> + Into<i32> {
    fn as_str_name(&self) -> &'static str;
    fn from_str_name(value: &str) -> Option<Self>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameOrNumber {
    Name(String),
    Number(i32),
}

/// Generic halves of the per-enum serde modules. Unknown numbers are kept as numbers, which
/// proto3 allows for open enums.
pub mod enumeration {
    use super::*;

    pub fn serialize<E: ProtoEnum, S: Serializer>(
        value: &i32,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match E::try_from(*value) {
            Ok(known) => serializer.serialize_str(known.as_str_name()),
            Err(_) => serializer.serialize_i32(*value),
        }
    }

    pub fn deserialize<'de, E: ProtoEnum, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<i32, D::Error> {
        match Option::<NameOrNumber>::deserialize(deserializer)? {
            None => Ok(0),
            Some(NameOrNumber::Number(n)) => Ok(n),
            Some(NameOrNumber::Name(name)) => E::from_str_name(&name)
                .map(Into::into)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown enum value `{name}`"))),
        }
    }
}
