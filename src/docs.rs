use utoipa::OpenApi;

use crate::modules::accounts::model::AccountsStatus;
use crate::modules::admin::model::{AppEntry, SiteIndex};
use crate::modules::rules::model::RulesStatus;
use crate::router::HealthResponse;
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::healthz,
        crate::modules::admin::controller::site_index,
        crate::modules::admin::controller::app_detail,
        crate::modules::accounts::controller::accounts_status,
        crate::modules::rules::controller::rules_status,
        crate::debug::settings_panel,
    ),
    components(
        schemas(
            HealthResponse,
            SiteIndex,
            AppEntry,
            AccountsStatus,
            RulesStatus,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probes"),
        (name = "Admin", description = "Admin site endpoints"),
        (name = "Accounts", description = "Accounts module"),
        (name = "Rules", description = "Rules module"),
        (name = "Debug", description = "Debug-only endpoints, mounted when DEBUG is enabled")
    ),
    info(
        title = "Mettai API",
        version = "0.1.0",
        description = "Backend skeleton with profile-layered configuration (development, production, testing)."
    )
)]
pub struct ApiDoc;
