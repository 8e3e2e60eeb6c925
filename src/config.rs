use std::path::{Path, PathBuf};
use std::time::Duration;

/// Suite configuration
///
/// Defaults match the test deployment the suite was written against:
/// backend on port 8001, MongoDB on the default port, application tree
/// mounted at /app.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the backend API, without trailing slash
    pub base_url: String,

    /// MongoDB connection string for the seed-record lookup
    pub mongo_uri: String,

    /// Database holding the seeded constructions
    pub mongo_db: String,

    /// Root of the deployed application tree (backend/ and frontend/)
    pub app_root: PathBuf,

    /// Where the JSON summary report is written
    pub output: PathBuf,

    /// Per-request HTTP timeout
    pub http_timeout: Duration,

    /// MongoDB server selection timeout
    pub store_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001/api".to_string(),
            mongo_uri: "mongodb://localhost:27017".to_string(),
            mongo_db: "yapidenetim".to_string(),
            app_root: PathBuf::from("/app"),
            output: PathBuf::from("/app/test_summary.json"),
            http_timeout: Duration::from_secs(10),
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl SuiteConfig {
    pub fn backend_env_path(&self) -> PathBuf {
        self.app_root.join("backend/.env")
    }

    pub fn frontend_env_path(&self) -> PathBuf {
        self.app_root.join("frontend/.env")
    }

    pub fn backend_server_path(&self) -> PathBuf {
        self.app_root.join("backend/server.py")
    }

    pub fn auth_context_path(&self) -> PathBuf {
        self.app_root.join("frontend/src/contexts/AuthContext.js")
    }

    pub fn app_js_path(&self) -> PathBuf {
        self.app_root.join("frontend/src/App.js")
    }

    /// Build a config from CLI overrides, falling back to deployment defaults
    pub fn with_overrides(
        base_url: Option<String>,
        mongo_uri: Option<String>,
        app_root: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(uri) = mongo_uri {
            config.mongo_uri = uri;
        }
        if let Some(root) = app_root {
            config.app_root = root;
        }
        if let Some(out) = output {
            config.output = out;
        }
        config
    }
}

/// True if the path points at a plausible application tree (used only for
/// a startup warning, never to skip steps).
pub fn looks_like_app_root(root: &Path) -> bool {
    root.join("backend").is_dir() || root.join("frontend").is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001/api");
        assert_eq!(
            config.backend_env_path(),
            PathBuf::from("/app/backend/.env")
        );
        assert_eq!(
            config.auth_context_path(),
            PathBuf::from("/app/frontend/src/contexts/AuthContext.js")
        );
    }

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let config = SuiteConfig::with_overrides(
            Some("http://localhost:9000/api/".to_string()),
            None,
            Some(PathBuf::from("/srv/app")),
            None,
        );
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.app_root, PathBuf::from("/srv/app"));
        // untouched fields keep defaults
        assert_eq!(config.mongo_db, "yapidenetim");
        assert_eq!(config.output, PathBuf::from("/app/test_summary.json"));
    }
}
