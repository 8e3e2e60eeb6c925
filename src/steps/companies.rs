use crate::http::ApiClient;
use crate::runner::state::SuiteState;
use serde_json::Value;

/// Company category used for the filtered listing check
const FILTER_TYPE: &str = "laboratory";

/// List all companies, then (only if that worked) the laboratory subset
pub async fn run(client: &ApiClient, state: &mut SuiteState) {
    println!("\n🏢 TEST 5: Companies");

    match client.get("/companies").await {
        Ok(response) if response.is_ok() => {
            state.record("Companies List", true, &list_message(&response.body));

            match client.get(&format!("/companies/type/{}", FILTER_TYPE)).await {
                Ok(response) if response.is_ok() => state.record(
                    "Companies by Type",
                    true,
                    &format!("{} companies listed", FILTER_TYPE),
                ),
                Ok(response) => {
                    state.record("Companies by Type", false, &response.status_message())
                }
                Err(e) => state.record("Companies by Type", false, &e.to_string()),
            }
        }
        Ok(response) => state.record("Companies List", false, &response.status_message()),
        Err(e) => state.record("Companies List", false, &e.to_string()),
    }
}

/// Cardinality diagnostic for the list outcome; a non-array body counts as 0
fn list_message(body: &Value) -> String {
    let count = body.as_array().map(Vec::len).unwrap_or(0);
    format!("{} companies found", count)
}
