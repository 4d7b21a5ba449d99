//! API location and request limits.

/// History entries requested per list; the server keeps the most recent ones.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// API base used when the dashboard is served from a local host.
pub const LOCAL_API_BASE: &str = "http://localhost:8081";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub history_limit: usize,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Config for a dashboard page served from `hostname` / `origin`.
    pub fn for_page(hostname: &str, origin: &str) -> Self {
        Self::new(resolve_api_base(hostname, origin))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(LOCAL_API_BASE)
    }
}

/// Resolve the API base URL from the page location.
///
/// Local pages talk to the gateway on port 8081; deployed pages served from
/// `app.<domain>` talk to `api.<domain>`.
pub fn resolve_api_base(hostname: &str, origin: &str) -> String {
    if LOCAL_HOSTS.contains(&hostname) {
        LOCAL_API_BASE.to_string()
    } else {
        origin.replacen("://app.", "://api.", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_local_gateway() {
        assert_eq!(
            resolve_api_base("localhost", "http://localhost:5173"),
            "http://localhost:8081"
        );
        assert_eq!(
            resolve_api_base("127.0.0.1", "http://127.0.0.1:8080"),
            "http://localhost:8081"
        );
    }

    #[test]
    fn test_app_subdomain_maps_to_api() {
        assert_eq!(
            resolve_api_base("app.weatherhub.dev", "https://app.weatherhub.dev"),
            "https://api.weatherhub.dev"
        );
    }

    #[test]
    fn test_other_origin_is_kept() {
        assert_eq!(
            resolve_api_base("weatherhub.dev", "https://weatherhub.dev"),
            "https://weatherhub.dev"
        );
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, LOCAL_API_BASE);
        assert_eq!(config.history_limit, 20);
    }
}
