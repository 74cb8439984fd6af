//! Emotion Page
//!
//! Sentiment intensity as three gauges.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::ApiResult;
use crate::stats::{Emotion, StatisticSource};

/// Placement of one gauge on the canvas
struct Gauge {
    name: &'static str,
    center: [&'static str; 2],
    radius: &'static str,
    z: Option<u32>,
}

const POSITIVE: Gauge = Gauge {
    name: "Positive",
    center: ["48%", "40%"],
    radius: "50%",
    z: Some(3),
};

const NEGATIVE: Gauge = Gauge {
    name: "Negative",
    center: ["15%", "40%"],
    radius: "35%",
    z: None,
};

const NEUTRAL: Gauge = Gauge {
    name: "Neutral",
    center: ["80%", "40%"],
    radius: "35%",
    z: None,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPage {
    pub sentiment_intensity_chart: Value,
    pub emotion: Emotion,
}

impl EmotionPage {
    pub async fn load(source: &dyn StatisticSource) -> ApiResult<Self> {
        let emotion = source.emotion().await?;
        tracing::debug!(positive = emotion.positive, "Emotion page statistics loaded");
        Ok(Self::build(emotion))
    }

    pub fn build(emotion: Emotion) -> Self {
        Self {
            sentiment_intensity_chart: sentiment_intensity_chart(&emotion),
            emotion,
        }
    }
}

/// Positive in the middle, negative on the left, neutral on the right
pub fn sentiment_intensity_chart(emotion: &Emotion) -> Value {
    json!({
        "grid": { "left": "5%", "right": "10%", "bottom": "5%", "top": "20%", "containLabel": true },
        "series": [
            gauge(&POSITIVE, emotion.positive),
            gauge(&NEGATIVE, emotion.negative),
            gauge(&NEUTRAL, emotion.neutral),
        ],
    })
}

fn gauge(layout: &Gauge, value: f64) -> Value {
    let mut series = json!({
        "name": layout.name,
        "type": "gauge",
        "center": layout.center,
        "min": 0,
        "max": 100,
        "splitNumber": 5,
        "radius": layout.radius,
        "axisLine": { "lineStyle": { "width": 5 } },
        "axisTick": { "length": 15, "lineStyle": { "color": "auto" } },
        "splitLine": { "length": 10, "lineStyle": { "color": "auto" } },
        "data": [{ "value": value, "name": layout.name }],
    });
    if let Some(z) = layout.z {
        series["z"] = json!(z);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emotion() -> Emotion {
        Emotion {
            positive: 46.2,
            negative: 31.5,
            neutral: 22.3,
        }
    }

    #[test]
    fn test_gauge_layout() {
        let chart = sentiment_intensity_chart(&emotion());
        let series = chart["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);

        let positive = &series[0];
        assert_eq!(positive["name"], "Positive");
        assert_eq!(positive["center"], json!(["48%", "40%"]));
        assert_eq!(positive["radius"], "50%");
        assert_eq!(positive["z"], 3);
        assert_eq!(positive["data"][0]["value"], 46.2);

        let negative = &series[1];
        assert_eq!(negative["center"], json!(["15%", "40%"]));
        assert_eq!(negative["radius"], "35%");
        assert!(negative.get("z").is_none());
        assert_eq!(negative["data"][0]["value"], 31.5);

        let neutral = &series[2];
        assert_eq!(neutral["center"], json!(["80%", "40%"]));
        assert_eq!(neutral["data"][0]["name"], "Neutral");

        for gauge in series {
            assert_eq!(gauge["type"], "gauge");
            assert_eq!(gauge["min"], 0);
            assert_eq!(gauge["max"], 100);
            assert_eq!(gauge["splitNumber"], 5);
        }
    }

    #[test]
    fn test_page_serialization() {
        let page = EmotionPage::build(emotion());
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["emotion"]["neutral"], 22.3);
        assert!(value["sentimentIntensityChart"]["series"].is_array());
    }
}
