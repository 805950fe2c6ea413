// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod config;

use anyhow::Context;
use config::{Config, Endpoint};
use libdd_otel_profiles_converter::migrate;
use std::io::{Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let matches = config::cli().get_matches();
    let config = Config::from_matches(&matches, std::env::var("DD_LOG_LEVEL").ok());
    init_logging(&config.log_level)?;
    run(&config)
}

/// Logs go to stderr, stdout may carry the payload.
fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("could not parse log level `{log_level}`"))?;
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    debug!("Logging subsystem enabled");
    Ok(())
}

/// Nothing is written unless the whole batch converted.
fn run(config: &Config) -> anyhow::Result<()> {
    let input = read_input(&config.input)?;
    debug!(
        bytes = input.len(),
        format = %config.input_format,
        policy = %config.converter.resolver_policy,
        "Read input"
    );

    let migration = migrate(
        &input,
        config.input_format,
        config.output_format,
        config.converter,
    )
    .context("failed to migrate profiles")?;

    let report = &migration.report;
    info!(
        profiles = report.profiles,
        unresolved = report.unresolved.len(),
        "Migrated profiles, dictionary has {}",
        report.dictionary
    );

    write_output(&config.output, &migration.output)
}

fn read_input(input: &Endpoint) -> anyhow::Result<Vec<u8>> {
    match input {
        Endpoint::Stdio => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
        Endpoint::Path(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}

fn write_output(output: &Endpoint, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Endpoint::Stdio => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
        Endpoint::Path(path) => std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display())),
    }
}
