use anyhow::Result;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the file writer and the OpenTelemetry provider alive for the
/// lifetime of the process.
pub struct Logger {
    _guard: WorkerGuard,
    _provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, log_dir: &Path, is_dev: bool) -> Result<Self> {
        let file_appender = file_appender(component, log_dir)?;
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if is_dev {
            None
        } else {
            Some(SdkLoggerProvider::builder().build())
        };

        if let Some(provider) = &provider {
            let otel_filter = EnvFilter::new("info")
                .add_directive("opentelemetry=off".parse()?)
                .add_directive("reqwest=off".parse()?);

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .try_init()?;
        } else {
            registry.try_init()?;
        }

        Ok(Self {
            _guard: guard,
            _provider: provider,
        })
    }
}

fn file_appender(component: &str, log_dir: &Path) -> Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("cardgen_{component}"))
        .filename_suffix("log")
        .build(log_dir)?;

    Ok(appender)
}
