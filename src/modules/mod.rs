//! Installed application modules.
//!
//! The dispatch table is static: every module registers a label and the
//! path prefix it mounts under, and the router walks [`installed_apps`] at
//! startup. The admin group is mounted separately and is not part of the
//! table it reports on.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: Response types
//! - `router.rs`: Axum router configuration

pub mod accounts;
pub mod admin;
pub mod rules;

use axum::Router;

use crate::state::AppState;

/// A registered application module: its label plus the prefix it mounts
/// under.
#[derive(Clone, Copy, Debug)]
pub struct AppDescriptor {
    pub label: &'static str,
    pub prefix: &'static str,
    init: fn() -> Router<AppState>,
}

impl AppDescriptor {
    pub fn router(&self) -> Router<AppState> {
        (self.init)()
    }
}

/// Static dispatch table of installed apps. Order is mount order.
pub fn installed_apps() -> &'static [AppDescriptor] {
    const APPS: &[AppDescriptor] = &[
        AppDescriptor {
            label: "accounts",
            prefix: "/accounts",
            init: accounts::router::init_accounts_router,
        },
        AppDescriptor {
            label: "rules",
            prefix: "/rules",
            init: rules::router::init_rules_router,
        },
    ];
    APPS
}

pub fn find_app(label: &str) -> Option<&'static AppDescriptor> {
    installed_apps().iter().find(|app| app.label == label)
}
