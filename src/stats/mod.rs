//! Statistic Services
//!
//! Feature-level fetchers for the dashboard pages:
//! - Annual, monthly and hourly tweet counts
//! - Word cloud weights by part of speech
//! - Sentiment breakdown
//!
//! [`StatisticService`] maps each statistic to one API call, or to an
//! embedded fixture in [`DataMode::Mock`].

mod fixtures;
mod models;
mod service;

pub use models::{
    AnnualStatistic, Emotion, HourlyCount, HourlyStatistic, MonthlyCount, MonthlyStatistic,
    WordCategory, WordCloudEntry,
};
pub use service::{DataMode, StatisticService};

use async_trait::async_trait;

use crate::api::ApiResult;

/// Source of dashboard statistics
#[async_trait]
pub trait StatisticSource: Send + Sync {
    /// Tweet counts per year
    async fn annual_statistics(&self) -> ApiResult<Vec<AnnualStatistic>>;

    /// Tweet counts per month, one entry per year
    async fn monthly_statistics(&self) -> ApiResult<Vec<MonthlyStatistic>>;

    /// Tweet counts per hour of day, one entry per year
    async fn hourly_statistics(&self) -> ApiResult<Vec<HourlyStatistic>>;

    /// Word weights, optionally filtered by part of speech
    async fn word_cloud(&self, category: Option<WordCategory>) -> ApiResult<Vec<WordCloudEntry>>;

    /// Sentiment breakdown
    async fn emotion(&self) -> ApiResult<Emotion>;
}
