//! `agent` command-line dispatcher
//!
//! Looks up an agent in the JSON registry, runs it on the given input and
//! prints a plain-text report.
//!
//! ```text
//! agent run <agent-name> [free-text input...]
//! ```

mod cli;
mod dispatch;
mod registry;
mod report;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use agent_catalog::Catalog;
use agent_core::{AgentDeps, Lifecycle, Settings};
use agent_runtime::ProviderEngineFactory;

use crate::cli::Args;
use crate::dispatch::Dispatcher;

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()
        .context("failed to initialise logging")
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = Settings::from_env().context("invalid settings")?;
    if let Some(path) = &args.registry {
        settings.registry_path.clone_from(path);
    }
    Ok(settings)
}

fn init_metrics(settings: &Settings) -> anyhow::Result<Option<PrometheusHandle>> {
    if !settings.enable_metrics {
        return Ok(None);
    }
    PrometheusBuilder::new()
        .install_recorder()
        .map(Some)
        .context("failed to install metrics recorder")
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        provider = %settings.provider,
        registry = %settings.registry_path.display(),
        "settings loaded"
    );

    let metrics = match init_metrics(&settings) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{e:#}");
            None
        }
    };

    let deps = AgentDeps::new(
        Arc::new(ProviderEngineFactory::new(settings.clone())),
        Lifecycle::from_settings(&settings),
    );
    let dispatcher = Dispatcher::new(Catalog::builtin(), deps, settings.registry_path);

    let outcome = dispatcher.dispatch(&args.invocation()).await;

    if let Some(handle) = &metrics {
        tracing::info!(snapshot = %handle.render(), "metrics");
    }

    match outcome {
        Ok(response) => {
            print!("{}", report::render(&response));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "dispatch failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
