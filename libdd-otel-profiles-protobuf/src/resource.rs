// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `opentelemetry.proto.resource.v1`.

use crate::common::KeyValue;
use crate::protojson;
use serde::{Deserialize, Serialize};

/// The entity producing telemetry, described by its attributes.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Resource {
    #[prost(message, repeated, tag = "1")]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub attributes: Vec<KeyValue>,
    #[prost(uint32, tag = "2")]
    #[serde(
        alias = "dropped_attributes_count",
        skip_serializing_if = "protojson::is_default",
        deserialize_with = "protojson::deserialize_null_into_default"
    )]
    pub dropped_attributes_count: u32,
}
