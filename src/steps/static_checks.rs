//! Static text scans over the deployed application tree.
//!
//! These are regression checks against specific past defects (a half-written
//! shutdown hook, a duplicated auth initializer, a missing route), expressed
//! as raw substring containment so they need nothing but the source files.

use crate::config::SuiteConfig;
use crate::runner::state::SuiteState;
use std::path::Path;

/// Variables the backend .env must define
const BACKEND_ENV_KEYS: [&str; 3] = ["MONGO_URL", "JWT_SECRET_KEY", "CORS_ORIGINS"];

/// Variable the frontend .env must define
const FRONTEND_ENV_KEY: &str = "REACT_APP_BACKEND_URL";

/// Markers of a complete shutdown hook in the backend entry point
const SHUTDOWN_MARKERS: [&str; 4] = [
    "@app.on_event(\"shutdown\")",
    "client.close()",
    "logger.info",
    "MongoDB connection closed",
];

const CHECK_AUTH_DEF: &str = "const checkAuth = async () =>";
const INIT_AUTH_DEF: &str = "const initAuth = async () =>";

const REGISTER_IMPORT: &str = "import Register from";
const REGISTER_MARKERS: [&str; 2] = ["/register", "<Register />"];

/// Check both .env files for their required variables (two outcomes)
pub fn run_env_checks(state: &mut SuiteState, config: &SuiteConfig) {
    println!("\n⚙️  TEST 6: Environment Variables");

    match read_source(&config.backend_env_path()) {
        Ok(content) => {
            if contains_all(&content, &BACKEND_ENV_KEYS) {
                state.record("Backend .env", true, "all required variables present");
            } else {
                state.record("Backend .env", false, "required variables missing");
            }
        }
        Err(message) => state.record("Backend .env", false, &message),
    }

    match read_source(&config.frontend_env_path()) {
        Ok(content) => {
            if content.contains(FRONTEND_ENV_KEY) {
                state.record("Frontend .env", true, "backend URL configured");
            } else {
                state.record("Frontend .env", false, "backend URL missing");
            }
        }
        Err(message) => state.record("Frontend .env", false, &message),
    }
}

/// Check that the backend closes its store connection on shutdown and logs it
pub fn run_shutdown_check(state: &mut SuiteState, config: &SuiteConfig) {
    println!("\n🔌 TEST 7: Shutdown Function");

    match read_source(&config.backend_server_path()) {
        Ok(content) => {
            if contains_all(&content, &SHUTDOWN_MARKERS) {
                state.record("Shutdown Function", true, "hook closes client and logs");
            } else {
                state.record("Shutdown Function", false, "hook incomplete or missing");
            }
        }
        Err(message) => state.record("Shutdown Function", false, &message),
    }
}

/// Check that the obsolete duplicate auth initializer stayed removed
pub fn run_auth_context_check(state: &mut SuiteState, config: &SuiteConfig) {
    println!("\n🔄 TEST 8: AuthContext Cleanup");

    match read_source(&config.auth_context_path()) {
        Ok(content) => {
            let (check_auth, init_auth) = auth_context_counts(&content);
            if check_auth == 1 && init_auth == 0 {
                state.record("AuthContext Cleanup", true, "duplicate initializer removed");
            } else {
                state.record(
                    "AuthContext Cleanup",
                    false,
                    &format!("checkAuth: {}, initAuth: {}", check_auth, init_auth),
                );
            }
        }
        Err(message) => state.record("AuthContext Cleanup", false, &message),
    }
}

/// Check that the register page is both imported and routed
pub fn run_register_route_check(state: &mut SuiteState, config: &SuiteConfig) {
    println!("\n📝 TEST 9: Register Route");

    match read_source(&config.app_js_path()) {
        Ok(content) => {
            if register_route_present(&content) {
                state.record("Register Route", true, "import and route present");
            } else {
                state.record("Register Route", false, "import or route missing");
            }
        }
        Err(message) => state.record("Register Route", false, &message),
    }
}

fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|_| format!("file not found: {}", path.display()))
}

fn contains_all(content: &str, needles: &[&str]) -> bool {
    needles.iter().all(|needle| content.contains(needle))
}

fn auth_context_counts(content: &str) -> (usize, usize) {
    (
        content.matches(CHECK_AUTH_DEF).count(),
        content.matches(INIT_AUTH_DEF).count(),
    )
}

fn register_route_present(content: &str) -> bool {
    content.contains(REGISTER_IMPORT) && contains_all(content, &REGISTER_MARKERS)
}
