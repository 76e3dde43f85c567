// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console and file layers with env-based filtering

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.output.file {
        if let Some(parent) = config.file.path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create log directory: {}",
                parent.display()
            ))?;
        }

        let file_name = config
            .file
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .context("Invalid log file path")?;

        let directory = config
            .file
            .path
            .parent()
            .context("Log file path has no parent directory")?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(_guard); // Keep the guard alive

        if config.output.console {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(file_writer),
                )
                .try_init()?;
        } else {
            // File only
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(file_writer),
                )
                .try_init()?;
        }
    } else {
        // Console only
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        file_path = %config.file.path.display(),
        "Typeahead logging initialized"
    );

    Ok(())
}

/// Create an environment filter from the logging configuration.
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(format!("{}", config.level.0));

    // Add module-specific filters
    for (module, level) in &config.module_levels {
        filter = filter.add_directive(format!("{}={}", module, level.0).parse()?);
    }

    // Allow environment variable overrides
    if let Ok(env_filter) = std::env::var("RUST_LOG") {
        filter = EnvFilter::new(env_filter);
    }

    Ok(filter)
}
