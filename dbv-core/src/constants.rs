//! Library-wide constants.

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Production API endpoint.
pub const PRODUCTION_URL: &str = "https://api.developer.databeaver.co";

/// Sandbox (test) API endpoint.
pub const SANDBOX_URL: &str = "https://api-databeaver-developer.bluegreensoft.com";

/// Default log level when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base name for rotated log files.
pub const LOG_FILE_NAME: &str = "databeaver.log";

/// REST resource path prefixes, all under `/v1/`.
pub mod resources {
    pub const PROJECTS: &str = "projects";
    pub const FORMS: &str = "forms";
    pub const DISPATCHES: &str = "dispatches";
    pub const AGENTS: &str = "agents";
    pub const ENTRIES: &str = "entries";
}

/// Query parameter names understood by list endpoints.
pub mod params {
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "perPage";
    pub const SORT_BY: &str = "sortBy";
    pub const SORT_ORDER: &str = "sortOrder";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls_have_no_trailing_slash() {
        assert!(!PRODUCTION_URL.ends_with('/'));
        assert!(!SANDBOX_URL.ends_with('/'));
    }
}
