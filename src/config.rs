//! App Configuration
//!
//! Endpoint and timing settings, shared through Leptos context.

use std::time::Duration;

/// Build-time override for the backend origin
const API_BASE_ENV: Option<&str> = option_env!("TODO_API_BASE_URL");

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash; empty means same origin
    pub api_base_url: String,
    pub toast_ttl: Duration,
    pub alert_ttl: Duration,
    /// Delay before the loading screen is hidden after bootstrap
    pub loading_delay: Duration,
    pub login_redirect_delay: Duration,
    pub register_redirect_delay: Duration,
    pub logout_redirect_delay: Duration,
    /// How many items the dashboard's recent list shows
    pub recent_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            toast_ttl: Duration::from_millis(4000),
            alert_ttl: Duration::from_millis(5000),
            loading_delay: Duration::from_millis(1000),
            login_redirect_delay: Duration::from_millis(1500),
            register_redirect_delay: Duration::from_millis(2000),
            logout_redirect_delay: Duration::from_millis(1500),
            recent_limit: 5,
        }
    }
}

impl AppConfig {
    /// Config for the running page: build-time base URL, else the page origin
    pub fn from_env() -> Self {
        let api_base_url = API_BASE_ENV
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_default();
        Self::default().with_base_url(&api_base_url)
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base_url = base.trim_end_matches('/').to_string();
        self
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = AppConfig::default().with_base_url("http://localhost:8000/");
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_defaults_match_ui_timings() {
        let config = AppConfig::default();
        assert_eq!(config.toast_ttl, Duration::from_secs(4));
        assert_eq!(config.recent_limit, 5);
    }
}
