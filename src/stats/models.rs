//! Statistic shapes returned by the API.

use serde::{Deserialize, Serialize};

/// Tweet count for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualStatistic {
    pub year: i32,
    pub count: u64,
}

/// Tweet count for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// 1-based month
    pub month: u32,
    pub count: u64,
}

/// Monthly breakdown of one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatistic {
    pub year: i32,
    pub data: Vec<MonthlyCount>,
}

impl MonthlyStatistic {
    /// Year label with the 年 unit, used as series and legend name
    pub fn year_with_unit(&self) -> String {
        format!("{}年", self.year)
    }

    /// Twelve counts indexed by month; missing months are zero
    pub fn counts_by_month(&self) -> [u64; 12] {
        let mut counts = [0; 12];
        for entry in &self.data {
            if (1..=12).contains(&entry.month) {
                counts[(entry.month - 1) as usize] = entry.count;
            }
        }
        counts
    }
}

/// Tweet count for one hour of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    /// 0-23
    pub hour: u32,
    pub count: u64,
}

/// Hour-of-day breakdown of one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyStatistic {
    pub year: i32,
    pub data: Vec<HourlyCount>,
}

impl HourlyStatistic {
    /// Twenty-four counts indexed by hour; missing hours are zero
    pub fn counts_by_hour(&self) -> [u64; 24] {
        let mut counts = [0; 24];
        for entry in &self.data {
            if entry.hour < 24 {
                counts[entry.hour as usize] = entry.count;
            }
        }
        counts
    }
}

/// A word and its weight in the cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub word: String,
    pub value: u64,
}

/// Sentiment breakdown in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Part-of-speech filter for the word cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
}

impl WordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Noun => "noun",
            WordCategory::Verb => "verb",
            WordCategory::Adjective => "adjective",
        }
    }
}

impl std::str::FromStr for WordCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noun" => Ok(WordCategory::Noun),
            "verb" => Ok(WordCategory::Verb),
            "adjective" => Ok(WordCategory::Adjective),
            other => Err(format!("Unknown word category: {}", other)),
        }
    }
}
