//! Embedded mock data, served when the service runs in mock mode.

use serde::de::DeserializeOwned;

use crate::api::{ApiError, ApiResult};

pub const ANNUAL: &str = include_str!("../../fixtures/mock-data/annual-statistic.json");
pub const MONTHLY: &str = include_str!("../../fixtures/mock-data/monthly-statistic.json");
pub const HOURLY: &str = include_str!("../../fixtures/mock-data/hourly-statistic.json");
pub const WORD_CLOUD: &str = include_str!("../../fixtures/mock-data/word-cloud.json");
pub const EMOTION: &str = include_str!("../../fixtures/mock-data/emotion.json");

#[derive(serde::Deserialize)]
struct Fixture<T> {
    data: Vec<T>,
}

/// Decode a `{data: [...]}` fixture
pub fn list<T: DeserializeOwned>(name: &str, raw: &str) -> ApiResult<Vec<T>> {
    serde_json::from_str::<Fixture<T>>(raw)
        .map(|f| f.data)
        .map_err(|e| decode_error(name, e))
}

/// Decode a bare-object fixture
pub fn object<T: DeserializeOwned>(name: &str, raw: &str) -> ApiResult<T> {
    serde_json::from_str(raw).map_err(|e| decode_error(name, e))
}

fn decode_error(name: &str, e: serde_json::Error) -> ApiError {
    ApiError::Decode {
        path: format!("fixture:{}", name),
        message: e.to_string(),
    }
}
