use anyhow::Context;
use mettai_config::Settings;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "storage/logs";

/// Initialize the global tracing subscriber.
///
/// Call once, before the server starts handling requests. The default
/// console level follows the debug flag (`debug` when enabled, `info`
/// otherwise) and can be overridden with `LOG_LEVEL` or a full `RUST_LOG`
/// directive.
pub fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let default_level = if settings.debug { "debug" } else { "info" };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mettai={log_level},tower_http=warn,hyper=warn,sqlx=warn"
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    if settings.profile.is_production() {
        std::fs::create_dir_all(LOG_DIR)
            .with_context(|| format!("failed to create log directory `{LOG_DIR}`"))?;

        // JSON file layer for structured logs, rotated daily
        let json_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "mettai.json");
        let json_layer = fmt::layer()
            .json()
            .with_writer(json_appender)
            .with_current_span(true)
            .with_filter(EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(console_layer)
            .with(json_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(console_layer).init();
    }

    Ok(())
}
