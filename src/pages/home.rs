//! Home Page
//!
//! Tweet volume overview: annual trend, monthly comparison, hour-of-day
//! timeline and the noun word cloud.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::PageAssets;
use crate::api::ApiResult;
use crate::stats::{
    AnnualStatistic, HourlyStatistic, MonthlyStatistic, StatisticSource, WordCategory,
    WordCloudEntry,
};

/// Year whose total is shown as the headline figure
pub const HIGHLIGHT_YEAR: i32 = 2018;

/// Year annotated on the annual chart
pub const INAUGURATION_YEAR: i32 = 2017;
const INAUGURATION_LABEL: &str = "大統領元年";

/// Legend entries selected by default on the monthly chart (most recent first)
const VISIBLE_MONTHLY_YEARS: usize = 2;

/// Bar colours indexed by hour
pub const HOUR_COLORS: [&str; 32] = [
    "#eb4848", "#eb6449", "#eb7f49", "#eb9a49", "#ebb549", "#ebd049", "#ebeb49", "#d0eb49",
    "#b5eb49", "#9aeb49", "#7feb49", "#64eb49", "#49eb49", "#49eb64", "#49eb7f", "#49eb9a",
    "#49ebb5", "#49ebd0", "#49ebeb", "#49d0eb", "#49b5eb", "#499aeb", "#497feb", "#4964eb",
    "#4949eb", "#6449eb", "#7f49eb", "#9a49eb", "#b549eb", "#d049eb", "#eb49eb", "#eb49d0",
];

/// Chart options and headline figures for the home page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub annual_chart: Value,
    pub monthly_chart: Value,
    pub hourly_chart: Value,
    pub word_cloud_chart: Value,
    /// Tweets in [`HIGHLIGHT_YEAR`]
    pub annual_total: Option<u64>,
    /// Daily average over [`HIGHLIGHT_YEAR`], rounded up
    pub annual_average: Option<u64>,
}

impl HomePage {
    /// Fetch every statistic concurrently, then derive the charts
    pub async fn load(source: &dyn StatisticSource, assets: &PageAssets) -> ApiResult<Self> {
        let (annual, monthly, hourly, words) = tokio::try_join!(
            source.annual_statistics(),
            source.monthly_statistics(),
            source.hourly_statistics(),
            source.word_cloud(Some(WordCategory::Noun)),
        )?;

        tracing::debug!(
            years = annual.len(),
            words = words.len(),
            "Home page statistics loaded"
        );

        Ok(Self::build(&annual, &monthly, &hourly, &words, assets))
    }

    pub fn build(
        annual: &[AnnualStatistic],
        monthly: &[MonthlyStatistic],
        hourly: &[HourlyStatistic],
        words: &[WordCloudEntry],
        assets: &PageAssets,
    ) -> Self {
        let annual_total = annual_total(annual, HIGHLIGHT_YEAR);

        Self {
            annual_chart: annual_chart(annual),
            monthly_chart: monthly_chart(monthly),
            hourly_chart: hourly_chart(hourly, &assets.twitter_icon),
            word_cloud_chart: word_cloud_chart(words, &assets.word_cloud_mask),
            annual_total,
            annual_average: annual_total.and_then(daily_average),
        }
    }
}

/// Count recorded for `year`
pub fn annual_total(stats: &[AnnualStatistic], year: i32) -> Option<u64> {
    stats.iter().find(|s| s.year == year).map(|s| s.count)
}

/// `ceil(total / 365)`; `None` for a zero total
pub fn daily_average(total: u64) -> Option<u64> {
    (total > 0).then(|| total.div_ceil(365))
}

/// Line chart of tweets per year
pub fn annual_chart(stats: &[AnnualStatistic]) -> Value {
    let years: Vec<i32> = stats.iter().map(|s| s.year).collect();
    let counts: Vec<u64> = stats.iter().map(|s| s.count).collect();

    let mark_points: Vec<Value> = stats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.year == INAUGURATION_YEAR)
        .map(|(index, s)| {
            json!({
                "name": INAUGURATION_LABEL,
                "value": INAUGURATION_LABEL,
                "coord": [index, s.count],
            })
        })
        .collect();

    json!({
        "tooltip": { "trigger": "axis", "axisPointer": { "type": "line" } },
        "grid": { "left": "5%", "right": "10%", "bottom": "5%", "top": "10%", "containLabel": true },
        "xAxis": { "type": "category", "name": "年度", "data": years },
        "yAxis": { "type": "value", "name": "件数" },
        "series": [{
            "data": counts,
            "type": "line",
            "label": { "offset": [-5, -5], "show": true, "position": "bottom", "color": "#C23431" },
            "markPoint": { "data": mark_points },
        }],
    })
}

/// Grouped bar chart of tweets per month, one series per year
pub fn monthly_chart(stats: &[MonthlyStatistic]) -> Value {
    let years: Vec<String> = stats.iter().map(MonthlyStatistic::year_with_unit).collect();

    // Only the most recent years start selected in the legend.
    let mut by_recency: Vec<&MonthlyStatistic> = stats.iter().collect();
    by_recency.sort_by(|a, b| b.year.cmp(&a.year));
    let mut selected = Map::new();
    for stat in by_recency.iter().skip(VISIBLE_MONTHLY_YEARS) {
        selected.insert(stat.year_with_unit(), Value::Bool(false));
    }

    let months: Vec<String> = (1..=12).map(|m| format!("{}月", m)).collect();

    let series: Vec<Value> = stats
        .iter()
        .map(|stat| {
            json!({
                "name": stat.year_with_unit(),
                "data": stat.counts_by_month(),
                "type": "bar",
                "barWidth": 10,
                "markLine": { "data": [{ "type": "average", "name": "平均值" }] },
                "markPoint": {
                    "data": [
                        { "type": "max", "name": "最大値" },
                        { "type": "min", "name": "最小値" },
                    ],
                },
            })
        })
        .collect();

    json!({
        "legend": { "data": years, "selected": selected },
        "grid": { "left": "5%", "right": "10%", "bottom": "5%", "top": "20%", "containLabel": true },
        "xAxis": { "type": "category", "name": "月度", "data": months },
        "yAxis": { "type": "value", "name": "件数" },
        "series": series,
    })
}

/// Hour-of-day bar chart with one timeline frame per year
pub fn hourly_chart(stats: &[HourlyStatistic], twitter_icon: &str) -> Value {
    let hours: Vec<String> = (0..24).map(|h| format!("{}時", h)).collect();
    let frames: Vec<String> = stats.iter().map(|s| format!("{}年", s.year)).collect();

    let options: Vec<Value> = stats
        .iter()
        .map(|stat| {
            let data: Vec<Value> = stat
                .counts_by_hour()
                .iter()
                .enumerate()
                .map(|(hour, count)| {
                    json!({
                        "value": count,
                        "itemStyle": { "color": HOUR_COLORS[hour % HOUR_COLORS.len()] },
                    })
                })
                .collect();
            json!({ "series": { "data": data } })
        })
        .collect();

    json!({
        "baseOption": {
            "title": { "text": "Trump一日最初の打ち合わせは午前11時より" },
            "timeline": {
                "axisType": "category",
                "autoPlay": true,
                "playInterval": 5000,
                "data": frames,
                "symbol": format!("image://{}", twitter_icon),
                "symbolSize": 15,
            },
            "grid": { "left": "2%", "right": "2%", "bottom": "15%", "top": "10%", "containLabel": true },
            "tooltip": { "trigger": "axis" },
            "xAxis": [{
                "type": "category",
                "data": hours,
                "nameTextStyle": { "color": "#fff" },
                "axisLabel": { "textStyle": { "fontSize": 12 }, "interval": 0 },
                "axisLine": { "lineStyle": { "color": "#56617b" } },
                "splitLine": { "show": true, "lineStyle": { "color": "#2e3547" } },
            }],
            "yAxis": [{
                "type": "value",
                "name": "",
                "splitNumber": 8,
                "nameTextStyle": { "color": "#56617b" },
                "axisLine": { "lineStyle": { "color": "#56617b" } },
                "axisLabel": { "formatter": "{value}" },
            }],
            "series": [{ "type": "bar", "barWidth": "20%" }],
        },
        "options": options,
    })
}

/// Pentagon word cloud drawn inside the mask image
pub fn word_cloud_chart(words: &[WordCloudEntry], mask_image: &str) -> Value {
    let data: Vec<Value> = words
        .iter()
        .map(|w| {
            json!({
                "name": w.word,
                "value": w.value,
                "textStyle": { "color": word_color(&w.word) },
            })
        })
        .collect();

    json!({
        "series": [{
            "type": "wordCloud",
            "sizeRange": [10, 100],
            "rotationRange": [-90, 90],
            "rotationStep": 45,
            "gridSize": 1,
            "width": "100%",
            "height": "100%",
            "maskImage": mask_image,
            "shape": "pentagon",
            "data": data,
        }],
    })
}

/// Dark `rgb(r,g,b)` colour derived from the word; every channel is at most 160
pub fn word_color(word: &str) -> String {
    // FNV-1a keeps the colour stable across runs and platforms.
    let mut hash: u32 = 0x811c_9dc5;
    for byte in word.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }

    let channel = |shift: u32| ((hash >> shift) & 0xff) % 161;
    format!("rgb({},{},{})", channel(0), channel(8), channel(16))
}
