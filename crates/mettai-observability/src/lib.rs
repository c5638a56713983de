//! # Mettai Observability
//!
//! Structured logging setup for the Mettai backend.
//!
//! Every profile gets a compact console layer filtered by `RUST_LOG` (or
//! `LOG_LEVEL` as a simpler fallback). Production additionally writes
//! daily-rolling JSON logs under `storage/logs/` for ingestion by the
//! hosting platform.

pub mod logging;

pub use logging::init_logging;
