// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Converts OpenTelemetry profiles from the self-contained `v1experimental` schema, where every
//! profile owns its string/function/mapping/location/attribute/link tables, into the
//! `v1development` schema, where one deduplicated [`ProfilesDictionary`] is shared by the whole
//! batch.
//!
//! ```
//! use libdd_otel_profiles_converter::{convert, ConversionReport};
//! use libdd_otel_profiles_protobuf::v1experimental;
//!
//! let conversion = convert(v1experimental::ProfilesData::default()).unwrap();
//! assert!(conversion.data.resource_profiles.is_empty());
//! assert_eq!(conversion.report, ConversionReport::default());
//! ```
//!
//! [`ProfilesDictionary`]: libdd_otel_profiles_protobuf::v1development::ProfilesDictionary

pub mod codec;
pub mod collections;
pub mod convert;
pub mod dictionary;
mod error;
pub mod local;
pub mod report;
pub mod resolve;

pub use codec::{migrate, CodecError, MigrateError, Migration, WireFormat};
pub use convert::{convert, Conversion, Converter, ConverterConfig};
pub use error::*;
pub use report::{ConversionReport, ProfileSite, ReferenceKind, UnresolvedReference};
pub use resolve::ResolverPolicy;
