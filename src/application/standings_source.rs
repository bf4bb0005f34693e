// Source trait for upstream standings data
use crate::error::FetchError;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// GET `url` and return the parsed JSON body.
    /// A non-success status is an error, not a body.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}
