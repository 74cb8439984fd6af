//! Dashboard Pages
//!
//! Each page fetches its statistics on load and derives ECharts option
//! objects from them. Fetches within a page run concurrently; the first
//! failure aborts the load.

mod emotion;
mod home;

pub use emotion::{sentiment_intensity_chart, EmotionPage};
pub use home::{
    annual_chart, annual_total, daily_average, hourly_chart, monthly_chart, word_cloud_chart,
    word_color, HomePage, HIGHLIGHT_YEAR, HOUR_COLORS, INAUGURATION_YEAR,
};

use serde::{Deserialize, Serialize};

/// Static asset paths referenced by chart options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageAssets {
    /// Timeline marker on the hourly chart
    pub twitter_icon: String,
    /// Mask image the word cloud is drawn into
    pub word_cloud_mask: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            twitter_icon: "assets/image/twitter.svg".to_string(),
            word_cloud_mask: "assets/image/word-cloud-frame.png".to_string(),
        }
    }
}

/// A rendered page, tagged by name
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Home(HomePage),
    Emotion(EmotionPage),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult};
    use crate::stats::{
        AnnualStatistic, Emotion, HourlyStatistic, MonthlyStatistic, StatisticSource,
        WordCategory, WordCloudEntry,
    };
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    /// In-memory source; records the word-cloud category it was asked for
    #[derive(Default)]
    struct StubSource {
        fail_hourly: bool,
        category: Mutex<Option<WordCategory>>,
    }

    #[async_trait]
    impl StatisticSource for StubSource {
        async fn annual_statistics(&self) -> ApiResult<Vec<AnnualStatistic>> {
            Ok(vec![AnnualStatistic { year: 2018, count: 730 }])
        }

        async fn monthly_statistics(&self) -> ApiResult<Vec<MonthlyStatistic>> {
            Ok(Vec::new())
        }

        async fn hourly_statistics(&self) -> ApiResult<Vec<HourlyStatistic>> {
            if self.fail_hourly {
                Err(ApiError::Status {
                    status: 500,
                    body: Value::String("boom".to_string()),
                })
            } else {
                Ok(Vec::new())
            }
        }

        async fn word_cloud(
            &self,
            category: Option<WordCategory>,
        ) -> ApiResult<Vec<WordCloudEntry>> {
            *self.category.lock().unwrap() = category;
            Ok(vec![WordCloudEntry {
                word: "Great".to_string(),
                value: 10,
            }])
        }

        async fn emotion(&self) -> ApiResult<Emotion> {
            Ok(Emotion {
                positive: 60.0,
                negative: 30.0,
                neutral: 10.0,
            })
        }
    }

    #[tokio::test]
    async fn test_home_page_load() {
        let source = StubSource::default();
        let page = HomePage::load(&source, &PageAssets::default()).await.unwrap();

        assert_eq!(page.annual_total, Some(730));
        assert_eq!(page.annual_average, Some(2));
        assert_eq!(*source.category.lock().unwrap(), Some(WordCategory::Noun));
        assert_eq!(page.word_cloud_chart["series"][0]["data"][0]["name"], "Great");
    }

    #[tokio::test]
    async fn test_home_page_load_propagates_failure() {
        let source = StubSource {
            fail_hourly: true,
            ..Default::default()
        };
        let result = HomePage::load(&source, &PageAssets::default()).await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_page_view_is_tagged() {
        let source = StubSource::default();
        let page = EmotionPage::load(&source).await.unwrap();
        let value = serde_json::to_value(PageView::Emotion(page)).unwrap();

        assert_eq!(value["page"], "emotion");
        assert_eq!(value["emotion"]["positive"], 60.0);
    }

    #[test]
    fn test_assets_default_when_missing() {
        let assets: PageAssets = toml::from_str("twitter_icon = \"icon.svg\"").unwrap();
        assert_eq!(assets.twitter_icon, "icon.svg");
        assert_eq!(assets.word_cloud_mask, PageAssets::default().word_cloud_mask);
    }
}
