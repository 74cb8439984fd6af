//! Statistics fetchers over the data-access layer.

use async_trait::async_trait;
use std::sync::Arc;

use super::fixtures;
use super::models::{
    AnnualStatistic, Emotion, HourlyStatistic, MonthlyStatistic, WordCategory, WordCloudEntry,
};
use super::StatisticSource;
use crate::api::{ApiParams, ApiResult, ApiService};

/// Where statistics come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Call the statistics API
    Remote,
    /// Serve the embedded fixtures
    Mock,
}

impl Default for DataMode {
    /// `Mock` when built with the `mock-data` feature
    fn default() -> Self {
        if cfg!(feature = "mock-data") {
            DataMode::Mock
        } else {
            DataMode::Remote
        }
    }
}

impl DataMode {
    /// Explicit override, else the build default
    pub fn from_override(use_mock: Option<bool>) -> Self {
        match use_mock {
            Some(true) => DataMode::Mock,
            Some(false) => DataMode::Remote,
            None => DataMode::default(),
        }
    }
}

/// One API call per statistic, with a fixture fallback
pub struct StatisticService {
    api: Arc<ApiService>,
    mode: DataMode,
}

impl StatisticService {
    pub fn new(api: Arc<ApiService>, mode: DataMode) -> Self {
        tracing::debug!(mode = ?mode, "Statistic service created");
        Self { api, mode }
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }
}

#[async_trait]
impl StatisticSource for StatisticService {
    async fn annual_statistics(&self) -> ApiResult<Vec<AnnualStatistic>> {
        match self.mode {
            DataMode::Mock => fixtures::list("annual-statistic", fixtures::ANNUAL),
            DataMode::Remote => self.api.get_all("/annual-statistic", ApiParams::new()).await,
        }
    }

    async fn monthly_statistics(&self) -> ApiResult<Vec<MonthlyStatistic>> {
        match self.mode {
            DataMode::Mock => fixtures::list("monthly-statistic", fixtures::MONTHLY),
            DataMode::Remote => self.api.get_all("/monthly-statistic", ApiParams::new()).await,
        }
    }

    async fn hourly_statistics(&self) -> ApiResult<Vec<HourlyStatistic>> {
        match self.mode {
            DataMode::Mock => fixtures::list("hourly-statistic", fixtures::HOURLY),
            DataMode::Remote => self.api.get_all("/hourly-statistic", ApiParams::new()).await,
        }
    }

    async fn word_cloud(&self, category: Option<WordCategory>) -> ApiResult<Vec<WordCloudEntry>> {
        match self.mode {
            DataMode::Mock => fixtures::list("word-cloud", fixtures::WORD_CLOUD),
            DataMode::Remote => {
                let mut params = ApiParams::new();
                if let Some(category) = category {
                    params.insert("category", category.as_str());
                }
                self.api.get_all("/word-cloud", params).await
            }
        }
    }

    async fn emotion(&self) -> ApiResult<Emotion> {
        match self.mode {
            DataMode::Mock => fixtures::object("emotion", fixtures::EMOTION),
            DataMode::Remote => self.api.get("/emotion", ApiParams::new()).await,
        }
    }
}
