use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::AppDescriptor;

/// One registered application module, as reported by the admin site.
#[derive(Serialize, ToSchema)]
pub struct AppEntry {
    pub label: String,
    pub prefix: String,
}

impl From<&AppDescriptor> for AppEntry {
    fn from(app: &AppDescriptor) -> Self {
        Self {
            label: app.label.to_string(),
            prefix: app.prefix.to_string(),
        }
    }
}

/// Admin site index: the registered application modules.
#[derive(Serialize, ToSchema)]
pub struct SiteIndex {
    pub apps: Vec<AppEntry>,
}
