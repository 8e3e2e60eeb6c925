use crate::http::ApiClient;
use crate::runner::state::SuiteState;
use serde_json::Value;

/// Aggregate fields the dashboard endpoint must always return
const REQUIRED_KEYS: [&str; 3] = ["total_inspections", "total_payments", "total_licenses"];

/// Verify the dashboard stats endpoint returns every aggregate field
pub async fn run(client: &ApiClient, state: &mut SuiteState) {
    println!("\n📊 TEST 2: Dashboard Stats");

    match client.get("/dashboard/stats").await {
        Ok(response) if response.is_ok() => {
            let missing = missing_keys(&response.body);
            if missing.is_empty() {
                state.record("Dashboard Stats", true, "all required fields present");
            } else {
                state.record(
                    "Dashboard Stats",
                    false,
                    &format!("missing fields: {}", missing.join(", ")),
                );
            }
        }
        Ok(response) => state.record("Dashboard Stats", false, &response.status_message()),
        Err(e) => state.record("Dashboard Stats", false, &e.to_string()),
    }
}

fn missing_keys(body: &Value) -> Vec<&'static str> {
    REQUIRED_KEYS
        .iter()
        .filter(|key| body.get(**key).is_none())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_keys_present() {
        let body = json!({
            "total_inspections": 1,
            "total_payments": 2,
            "total_licenses": 3
        });
        assert!(missing_keys(&body).is_empty());
    }

    #[test]
    fn test_missing_key_reported() {
        let body = json!({ "total_inspections": 1, "total_payments": 2 });
        assert_eq!(missing_keys(&body), vec!["total_licenses"]);
    }

    #[test]
    fn test_non_object_body_misses_everything() {
        assert_eq!(missing_keys(&Value::Null).len(), REQUIRED_KEYS.len());
    }
}
