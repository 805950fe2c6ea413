// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! OpenTelemetry profiles messages for two schema generations:
//!
//! - [`v1experimental`]: every profile carries its own string, function, mapping, location,
//!   attribute and link tables.
//! - [`v1development`]: those tables live in a single [`v1development::ProfilesDictionary`]
//!   shared by every profile of a batch.
//!
//! The messages are hand-written [`prost::Message`] structs, so they encode and decode the
//! protobuf wire format directly. They also implement serde's `Serialize`/`Deserialize` using the
//! proto3 JSON mapping (see [`protojson`]), which is what the OpenTelemetry tooling exchanges in
//! text form.

pub mod common;
pub mod protojson;
pub mod resource;
pub mod v1development;
pub mod v1experimental;

/// Re-export of [`prost::Message`] for encoding/decoding the messages.
pub use prost::Message;
