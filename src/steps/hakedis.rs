use crate::config::SuiteConfig;
use crate::http::ApiClient;
use crate::runner::state::SuiteState;
use crate::store;
use serde_json::Value;

/// YIBF number of the construction seeded for this check
const SEED_YIBF: &str = "TEST-2025-001";

/// The seed record's yapiInsaatAlani. The calculation once aggregated the
/// wrong source field; an exact match here guards against that regressing.
const EXPECTED_TOTAL_M2: f64 = 1500.5;

/// Verify the hakediş (progress-payment) calculation for the seeded
/// construction. The record's internal id comes straight from the backing
/// store because the API offers no lookup by YIBF number.
pub async fn run(client: &ApiClient, state: &mut SuiteState, config: &SuiteConfig) {
    println!("\n💰 TEST 4: Hakediş Calculation");

    let construction_id = match store::find_construction_id(
        &config.mongo_uri,
        &config.mongo_db,
        SEED_YIBF,
        config.store_timeout,
    )
    .await
    {
        Ok(Some(id)) => id,
        Ok(None) => {
            state.record(
                "Hakediş Calculation",
                false,
                &format!("construction {} not found in store", SEED_YIBF),
            );
            return;
        }
        Err(e) => {
            state.record("Hakediş Calculation", false, &e.to_string());
            return;
        }
    };

    match client
        .get(&format!("/hakedis/hesapla/{}", construction_id))
        .await
    {
        Ok(response) if response.is_ok() => {
            let (passed, message) = check_total_area(&response.body);
            state.record("Hakediş Calculation", passed, &message);
        }
        Ok(response) => state.record("Hakediş Calculation", false, &response.status_message()),
        Err(e) => state.record("Hakediş Calculation", false, &e.to_string()),
    }
}

fn check_total_area(body: &Value) -> (bool, String) {
    match body.get("toplamM2").and_then(Value::as_f64) {
        Some(actual) if actual == EXPECTED_TOTAL_M2 => (
            true,
            format!("toplamM2: {} (from yapiInsaatAlani)", actual),
        ),
        Some(actual) => (
            false,
            format!("expected toplamM2 {}, got {}", EXPECTED_TOTAL_M2, actual),
        ),
        None => (
            false,
            format!("expected toplamM2 {}, field missing", EXPECTED_TOTAL_M2),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expected_total_passes() {
        let (passed, message) = check_total_area(&json!({ "toplamM2": 1500.5 }));
        assert!(passed);
        assert!(message.contains("1500.5"));
    }

    #[test]
    fn test_wrong_total_reports_both_values() {
        let (passed, message) = check_total_area(&json!({ "toplamM2": 1200.0 }));
        assert!(!passed);
        assert!(message.contains("1500.5"));
        assert!(message.contains("1200"));
    }

    #[test]
    fn test_missing_field_fails() {
        let (passed, message) = check_total_area(&json!({ "toplamTutar": 99.0 }));
        assert!(!passed);
        assert!(message.contains("missing"));
    }
}
