use serde::Serialize;

use crate::error::ConfigError;
use crate::profile::Profile;

const HSTS_ONE_YEAR: u64 = 31_536_000;

/// Transport-security and response-header settings.
///
/// The production overlay enables the full hardened set; the other profiles
/// keep the framework baseline (nosniff, frame denial, same-origin referrer).
#[derive(Clone, Debug, Serialize)]
pub struct SecurityConfig {
    pub ssl_redirect: bool,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
    pub hsts_seconds: u64,
    pub hsts_include_subdomains: bool,
    pub hsts_preload: bool,
    pub content_type_nosniff: bool,
    pub browser_xss_filter: bool,
    pub x_frame_options: String,
    pub referrer_policy: String,
}

impl SecurityConfig {
    pub(crate) fn for_profile(profile: Profile) -> Self {
        if profile.is_production() {
            Self::hardened()
        } else {
            Self::relaxed()
        }
    }

    pub fn hardened() -> Self {
        Self {
            ssl_redirect: true,
            session_cookie_secure: true,
            csrf_cookie_secure: true,
            hsts_seconds: HSTS_ONE_YEAR,
            hsts_include_subdomains: true,
            hsts_preload: true,
            content_type_nosniff: true,
            browser_xss_filter: true,
            x_frame_options: "DENY".to_string(),
            referrer_policy: "same-origin".to_string(),
        }
    }

    pub fn relaxed() -> Self {
        Self {
            ssl_redirect: false,
            session_cookie_secure: false,
            csrf_cookie_secure: false,
            hsts_seconds: 0,
            hsts_include_subdomains: false,
            hsts_preload: false,
            content_type_nosniff: true,
            browser_xss_filter: false,
            x_frame_options: "DENY".to_string(),
            referrer_policy: "same-origin".to_string(),
        }
    }

    /// `Strict-Transport-Security` header value for the configured policy.
    pub fn hsts_header_value(&self) -> String {
        let mut value = format!("max-age={}", self.hsts_seconds);
        if self.hsts_include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.hsts_preload {
            value.push_str("; preload");
        }
        value
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.hsts_seconds == 0 && (self.hsts_include_subdomains || self.hsts_preload) {
            return Err(ConfigError::conflict(
                "HSTS qualifiers require SECURE_HSTS_SECONDS to be greater than zero",
            ));
        }
        Ok(())
    }
}
