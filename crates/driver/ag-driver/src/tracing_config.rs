//! Tracing subscriber setup
//!
//! Filter directives come from `AG_LOG`, then `RUST_LOG`, then the
//! configured `log.filter`. Without any of them no subscriber is installed.
//!
//! ```bash
//! AG_LOG=ag_lower=trace AG_LOG_FORMAT=tree my-tool input.swift
//! ```
//!
//! All output goes to stderr.

use crate::config::{LOG_FILTER_VAR, LogConfig, LogFormat};
use anyhow::{Context as _, Result, anyhow};
use std::env;
use std::io;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};
use tracing_tree::HierarchicalLayer;

/// Filter directives to use, if any are set
fn resolve_filter(config: &LogConfig, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    [LOG_FILTER_VAR, "RUST_LOG"]
        .into_iter()
        .find_map(&lookup)
        .or_else(|| config.filter.clone())
        .filter(|directives| !directives.trim().is_empty())
}

/// Installs the global tracing subscriber described by `config`.
///
/// Returns `false` without installing anything when no filter is set.
///
/// # Errors
///
/// Returns an error if the filter directives are malformed or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<bool> {
    let Some(directives) = resolve_filter(config, |name| env::var(name).ok()) else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {directives}"))?;

    match config.format {
        LogFormat::Tree => {
            let tree_layer = HierarchicalLayer::default()
                .with_writer(io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        LogFormat::Text => {
            fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init()
                .map_err(|error| anyhow!(error).context("Failed to install tracing subscriber"))?;
        }
    }
    Ok(true)
}
