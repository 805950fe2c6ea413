// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Reading source batches and writing converted ones, as protobuf or as protobuf JSON.

use crate::convert::{Converter, ConverterConfig};
use crate::{ConversionReport, ConvertError};
use libdd_otel_profiles_protobuf::{v1development, v1experimental};
use prost::Message;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WireFormat {
    /// The proto3 JSON mapping: camelCase names, 64-bit integers as strings, bytes as base64.
    #[default]
    Json,
    Protobuf,
}

impl WireFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WireFormat::Json => "json",
            WireFormat::Protobuf => "protobuf",
        }
    }
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown wire format `{0}`, expected `json` or `protobuf`")]
pub struct UnknownWireFormat(String);

impl FromStr for WireFormat {
    type Err = UnknownWireFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "protobuf" | "proto" | "pb" => Ok(WireFormat::Protobuf),
            _ => Err(UnknownWireFormat(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to decode protobuf payload: {0}")]
    DecodeProtobuf(#[from] prost::DecodeError),
    #[error("failed to encode protobuf payload: {0}")]
    EncodeProtobuf(#[from] prost::EncodeError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode_source(
    bytes: &[u8],
    format: WireFormat,
) -> Result<v1experimental::ProfilesData, CodecError> {
    Ok(match format {
        WireFormat::Json => serde_json::from_slice(bytes)?,
        WireFormat::Protobuf => v1experimental::ProfilesData::decode(bytes)?,
    })
}

pub fn encode_target(
    data: &v1development::ProfilesData,
    format: WireFormat,
) -> Result<Vec<u8>, CodecError> {
    Ok(match format {
        WireFormat::Json => serde_json::to_vec(data)?,
        WireFormat::Protobuf => {
            let mut buffer = Vec::with_capacity(data.encoded_len());
            data.encode(&mut buffer)?;
            buffer
        }
    })
}

#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

#[derive(Clone, Debug)]
pub struct Migration {
    /// The encoded `v1development` batch.
    pub output: Vec<u8>,
    pub report: ConversionReport,
}

/// Decodes a `v1experimental` batch, converts it and encodes the result.
pub fn migrate(
    input: &[u8],
    input_format: WireFormat,
    output_format: WireFormat,
    config: ConverterConfig,
) -> Result<Migration, MigrateError> {
    let source = decode_source(input, input_format)?;
    let conversion = Converter::new(config).convert(source)?;
    let output = encode_target(&conversion.data, output_format)?;
    Ok(Migration {
        output,
        report: conversion.report,
    })
}
