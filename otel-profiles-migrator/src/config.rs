// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use clap::{command, Arg, ArgMatches, Command};
use libdd_otel_profiles_converter::{ConverterConfig, ResolverPolicy, WireFormat};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// A file, or stdin/stdout when given as `-`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Endpoint {
    Stdio,
    Path(PathBuf),
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        match value {
            "-" => Endpoint::Stdio,
            path => Endpoint::Path(PathBuf::from(path)),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub input: Endpoint,
    pub output: Endpoint,
    pub input_format: WireFormat,
    pub output_format: WireFormat,
    pub converter: ConverterConfig,
    pub log_level: String,
}

pub fn cli() -> Command {
    command!()
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("the v1experimental batch to read, - for stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("where to write the v1development batch, - for stdout")
                .default_value("-"),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .help("json or protobuf")
                .value_parser(WireFormat::from_str)
                .default_value("json"),
        )
        .arg(
            Arg::new("output-format")
                .long("output-format")
                .help("json or protobuf")
                .value_parser(WireFormat::from_str)
                .default_value("json"),
        )
        .arg(
            Arg::new("resolver-policy")
                .long("resolver-policy")
                .help("how mappings and locations are matched: loose or strict")
                .value_parser(ResolverPolicy::from_str)
                .default_value("loose"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("log filter, overrides DD_LOG_LEVEL"),
        )
}

impl Config {
    /// `env_log_level` is the value of `DD_LOG_LEVEL`, if set.
    pub fn from_matches(matches: &ArgMatches, env_log_level: Option<String>) -> Self {
        let endpoint = |id: &str| {
            matches
                .get_one::<String>(id)
                .map_or(Endpoint::Stdio, |value| Endpoint::from(value.as_str()))
        };
        let log_level = matches
            .get_one::<String>("log-level")
            .cloned()
            .or(env_log_level)
            .map(normalize_log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            input: endpoint("input"),
            output: endpoint("output"),
            input_format: matches
                .get_one::<WireFormat>("input-format")
                .copied()
                .unwrap_or_default(),
            output_format: matches
                .get_one::<WireFormat>("output-format")
                .copied()
                .unwrap_or_default(),
            converter: ConverterConfig {
                resolver_policy: matches
                    .get_one::<ResolverPolicy>("resolver-policy")
                    .copied()
                    .unwrap_or_default(),
            },
            log_level,
        }
    }
}

/// A bare level is lowercased. Directives naming targets are kept as given, since target names
/// are case-sensitive.
fn normalize_log_level(level: String) -> String {
    let lowercase = level.to_ascii_lowercase();
    match lowercase.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => lowercase,
        _ => level,
    }
}
