//! # Mettai Backend
//!
//! A web-application backend skeleton built with Rust, Axum and PostgreSQL,
//! organized around three deployment profiles: development, production and
//! testing.
//!
//! ## Overview
//!
//! The structural core is configuration composition: base defaults are
//! layered under a profile overlay and environment-variable overrides, then
//! validated fail-fast at startup (see the `mettai-config` crate). On top of
//! the resolved settings sits a static URL dispatch table: the admin group,
//! the installed application modules and, in debug mode only, the
//! `/__debug__` route set with interactive API docs and a settings panel.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # clap commands (serve, check, migrate)
//! ├── db.rs             # Lazily connecting PostgreSQL pool
//! ├── debug.rs          # Debug-only route set
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── logging.rs        # Request logging middleware
//! ├── middleware/       # Allowed-host enforcement, security headers
//! ├── modules/          # Installed application modules
//! │   ├── accounts/    # Accounts module (skeleton)
//! │   ├── rules/       # Rules module (skeleton)
//! │   └── admin/       # Admin site endpoints
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── utils/            # Errors, password hashing
//! ```
//!
//! Each application module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: Response types
//! - `router.rs`: Axum router configuration
//!
//! ## Profiles
//!
//! | Profile | Debug | Secret key | Security headers |
//! |---------|-------|------------|------------------|
//! | development | on (default) | local placeholder | baseline |
//! | production | always off | required from env | hardened (HSTS, SSL redirect) |
//! | testing | off | fixed test value | baseline |
//!
//! Profile selection comes from `APP_ENV` (or `--profile`). Missing
//! required keys fail at startup with the offending variable named.
//!
//! ## Quick Start
//!
//! ```bash
//! APP_ENV=development cargo run -- serve
//! APP_ENV=production SECRET_KEY=... ALLOWED_HOSTS=... DATABASE_URL=... \
//!     cargo run -- check
//! ```
//!
//! With debug enabled, API documentation is served at
//! `/__debug__/swagger-ui` and `/__debug__/scalar`.

pub mod cli;
pub mod db;
pub mod debug;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use mettai_config;
pub use mettai_observability;
