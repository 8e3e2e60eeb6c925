use crate::http::ApiClient;
use crate::runner::state::SuiteState;
use serde_json::{json, Value};

/// Seeded test account; exists only in test deployments
const TEST_EMAIL: &str = "test@batlama.com";
const TEST_PASSWORD: &str = "test123";

/// Log in with the test account and store the bearer token.
///
/// Returns false on any failure. The caller treats that as a hard stop:
/// without a token every later authenticated call would fail the same way.
pub async fn run(client: &mut ApiClient, state: &mut SuiteState) -> bool {
    println!("\n🔐 TEST 1: Authentication");

    let payload = json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD });
    match client.post_json("/auth/login", &payload).await {
        Ok(response) => {
            if response.is_ok() {
                if let Some(token) = extract_token(&response.body) {
                    client.set_token(token);
                    state.token = Some(token.to_string());
                    state.record("Login", true, "token received");
                    return true;
                }
            }
            state.record("Login", false, &response.status_message());
            false
        }
        Err(e) => {
            state.record("Login", false, &e.to_string());
            false
        }
    }
}

fn extract_token(body: &Value) -> Option<&str> {
    body.get("access_token").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        let body = json!({ "access_token": "abc", "token_type": "bearer" });
        assert_eq!(extract_token(&body), Some("abc"));
    }

    #[test]
    fn test_extract_token_missing_or_malformed() {
        assert_eq!(extract_token(&json!({ "detail": "invalid credentials" })), None);
        assert_eq!(extract_token(&json!({ "access_token": 42 })), None);
        assert_eq!(extract_token(&Value::Null), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_login() {
        use std::time::Duration;

        let mut client = ApiClient::new("http://127.0.0.1:1/api", Duration::from_secs(1))
            .expect("client builds");
        let mut state = SuiteState::new();

        assert!(!run(&mut client, &mut state).await);
        assert!(state.token.is_none());
        assert_eq!(state.total(), 1);
        assert!(!state.results()[0].passed);
    }
}
