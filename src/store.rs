use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;
use thiserror::Error;

/// Collection holding the seeded construction records
const CONSTRUCTIONS: &str = "constructions";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connect(mongodb::error::Error),
    #[error("seed lookup failed: {0}")]
    Query(mongodb::error::Error),
}

/// Look up a seeded construction by its YIBF number and return the record's
/// application-level `id` field.
///
/// The hakediş verification needs the internal id of a known seed record, and
/// the API has no lookup-by-YIBF endpoint, so this reaches into the backing
/// store directly. The client lives only for the duration of the lookup and
/// is shut down on every path.
pub async fn find_construction_id(
    uri: &str,
    database: &str,
    yibf_no: &str,
    timeout: Duration,
) -> Result<Option<String>, StoreError> {
    let mut options = ClientOptions::parse(uri).await.map_err(StoreError::Connect)?;
    options.server_selection_timeout = Some(timeout);
    options.app_name = Some("yapidenetim-smoke".to_string());

    let client = Client::with_options(options).map_err(StoreError::Connect)?;
    let lookup = client
        .database(database)
        .collection::<Document>(CONSTRUCTIONS)
        .find_one(doc! { "yibfNo": yibf_no }, None)
        .await;
    client.shutdown().await;

    let record = lookup.map_err(StoreError::Query)?;
    Ok(record.as_ref().and_then(extract_id))
}

/// The backend stores its own `id` alongside Mongo's `_id`; accept the
/// numeric encodings the seeder has used over time as well as strings.
fn extract_id(record: &Document) -> Option<String> {
    match record.get("id")? {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_string() {
        let record = doc! { "id": "abc-123", "yibfNo": "TEST-2025-001" };
        assert_eq!(extract_id(&record), Some("abc-123".to_string()));
    }

    #[test]
    fn test_extract_id_numeric() {
        let record = doc! { "id": 42_i64 };
        assert_eq!(extract_id(&record), Some("42".to_string()));
    }

    #[test]
    fn test_extract_id_missing_or_unusable() {
        assert_eq!(extract_id(&doc! { "yibfNo": "TEST-2025-001" }), None);
        assert_eq!(extract_id(&doc! { "id": { "nested": true } }), None);
    }
}
