pub mod state;

use crate::config::{looks_like_app_root, SuiteConfig};
use crate::http::ApiClient;
use crate::{report, steps};
use anyhow::Result;
use colored::Colorize;
use log::warn;
use state::SuiteState;

/// Run the whole suite in order and emit the summary.
///
/// Returns whether every recorded outcome passed. Login is the only hard
/// gate: without a token the remaining steps would all fail identically, so
/// the run stops after recording the login failure and still writes the
/// report.
pub async fn run_suite(config: &SuiteConfig) -> Result<bool> {
    let mut client = ApiClient::new(&config.base_url, config.http_timeout)?;
    let mut state = SuiteState::new();

    if !looks_like_app_root(&config.app_root) {
        warn!(
            "{} does not look like an application tree; file checks will fail",
            config.app_root.display()
        );
    }

    if !steps::auth::run(&mut client, &mut state).await {
        println!("\n{} Login failed - skipping remaining tests", "⚠️ ".yellow());
        return report::emit(&state, &config.output);
    }

    steps::dashboard::run(&client, &mut state).await;
    steps::inspections::run(&client, &mut state).await;
    steps::hakedis::run(&client, &mut state, config).await;
    steps::companies::run(&client, &mut state).await;
    steps::static_checks::run_env_checks(&mut state, config);
    steps::static_checks::run_shutdown_check(&mut state, config);
    steps::static_checks::run_auth_context_check(&mut state, config);
    steps::static_checks::run_register_route_check(&mut state, config);

    report::emit(&state, &config.output)
}
