//! View models consumed by the presentation components.
//!
//! These are the fixed shapes the charts, cards and lists render. They are
//! produced by reshaping wire payloads (see [`crate::wire`]) and replaced
//! wholesale on every successful fetch; nothing merges incrementally.

use serde::{Deserialize, Serialize};

use crate::date_range::RangeKey;

// ===================== Dashboard home =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub id: usize,
    pub title: String,
    pub value: u64,
    /// Percentage change against the previous window, positive = rising.
    pub change: f64,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: usize,
    pub lat: f64,
    pub lng: f64,
    pub count: u64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub center: MapCenter,
    pub hotspots: Vec<Hotspot>,
}

/// Kind of entry in the recent-activity feed, driving icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Incident,
    Alert,
    Report,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: usize,
    pub kind: ActivityKind,
    pub title: String,
    pub location: Option<String>,
    pub time: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub metrics: Vec<MetricCard>,
    pub map_data: MapData,
    pub recent_activity: Vec<ActivityItem>,
}

// ===================== Data analysis =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub id: usize,
    /// ISO `YYYY-MM-DD` date for the bucket.
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub id: usize,
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub line_chart: Vec<TimeSeriesPoint>,
    pub bar_chart: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrimeType {
    All,
    Theft,
    Assault,
    Fraud,
    Vandalism,
    DrugOffenses,
    Burglary,
}

impl CrimeType {
    pub const ALL: [CrimeType; 7] = [
        CrimeType::All,
        CrimeType::Theft,
        CrimeType::Assault,
        CrimeType::Fraud,
        CrimeType::Vandalism,
        CrimeType::DrugOffenses,
        CrimeType::Burglary,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            CrimeType::All => "all",
            CrimeType::Theft => "theft",
            CrimeType::Assault => "assault",
            CrimeType::Fraud => "fraud",
            CrimeType::Vandalism => "vandalism",
            CrimeType::DrugOffenses => "drug_offenses",
            CrimeType::Burglary => "burglary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrimeType::All => "All Crime Types",
            CrimeType::Theft => "Theft",
            CrimeType::Assault => "Assault",
            CrimeType::Fraud => "Fraud",
            CrimeType::Vandalism => "Vandalism",
            CrimeType::DrugOffenses => "Drug Offenses",
            CrimeType::Burglary => "Burglary",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or(CrimeType::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    All,
    SocialMedia,
    News,
    Community,
    Police,
}

impl DataSource {
    pub const ALL: [DataSource; 5] = [
        DataSource::All,
        DataSource::SocialMedia,
        DataSource::News,
        DataSource::Community,
        DataSource::Police,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            DataSource::All => "all",
            DataSource::SocialMedia => "social_media",
            DataSource::News => "news",
            DataSource::Community => "community",
            DataSource::Police => "police",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSource::All => "All Sources",
            DataSource::SocialMedia => "Social Media",
            DataSource::News => "News Articles",
            DataSource::Community => "Community Reports",
            DataSource::Police => "Police Records",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or(DataSource::All)
    }
}

/// Filter state of the data-analysis page. Fixed defaults at mount, mutated
/// only by explicit user selection, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFilters {
    pub crime_type: CrimeType,
    pub data_source: DataSource,
    pub date_range: RangeKey,
}

impl Default for AnalysisFilters {
    fn default() -> Self {
        Self {
            crime_type: CrimeType::All,
            data_source: DataSource::All,
            date_range: RangeKey::Last90Days,
        }
    }
}

impl AnalysisFilters {
    /// The explicit "Reset" action lands on the 30-day window.
    pub fn reset() -> Self {
        Self {
            crime_type: CrimeType::All,
            data_source: DataSource::All,
            date_range: RangeKey::Last30Days,
        }
    }
}

// ===================== Sentiment report =====================

/// Percentage split of analyzed sentiment; the three parts describe the
/// whole sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentOverview {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentOverview {
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// A trending topic from the word-cloud endpoint. `weight` scales the font
/// size; `sentiment` is -1..=1 and drives the color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u32,
    pub name: String,
    pub weight: f64,
    pub sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSentiment {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSources {
    pub twitter: SourceSentiment,
    pub facebook: SourceSentiment,
    pub instagram: SourceSentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySources {
    pub forums: SourceSentiment,
    pub reports: SourceSentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSources {
    pub local: SourceSentiment,
    pub regional: SourceSentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub social: SocialSources,
    pub community: CommunitySources,
    pub news: NewsSources,
}

impl SourceBreakdown {
    /// The per-source split is not served by the API yet; both the live and
    /// the fallback report carry this fixed baseline.
    pub fn baseline() -> Self {
        let s = |positive, neutral, negative| SourceSentiment { positive, neutral, negative };
        Self {
            social: SocialSources {
                twitter: s(40, 30, 30),
                facebook: s(45, 35, 20),
                instagram: s(50, 30, 20),
            },
            community: CommunitySources {
                forums: s(35, 40, 25),
                reports: s(30, 45, 25),
            },
            news: NewsSources {
                local: s(40, 35, 25),
                regional: s(45, 30, 25),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReportData {
    pub overview: SentimentOverview,
    pub timeline: Vec<TimelineEntry>,
    pub topics: Vec<Topic>,
    pub sources: SourceBreakdown,
}

/// Source filter of the sentiment report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentSource {
    All,
    Social,
    Community,
    News,
}

impl SentimentSource {
    pub const ALL: [SentimentSource; 4] = [
        SentimentSource::All,
        SentimentSource::Social,
        SentimentSource::Community,
        SentimentSource::News,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SentimentSource::All => "all",
            SentimentSource::Social => "social",
            SentimentSource::Community => "community",
            SentimentSource::News => "news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentSource::All => "All Sources",
            SentimentSource::Social => "Social Media Only",
            SentimentSource::Community => "Community Reports",
            SentimentSource::News => "News Sources",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_and_reset_windows_differ() {
        assert_eq!(AnalysisFilters::default().date_range, RangeKey::Last90Days);
        assert_eq!(AnalysisFilters::reset().date_range, RangeKey::Last30Days);
        assert_eq!(AnalysisFilters::reset().crime_type, CrimeType::All);
    }

    #[test]
    fn filter_values_round_trip() {
        for t in CrimeType::ALL {
            assert_eq!(CrimeType::from_value(t.value()), t);
        }
        for s in DataSource::ALL {
            assert_eq!(DataSource::from_value(s.value()), s);
        }
        assert_eq!(CrimeType::from_value("unknown"), CrimeType::All);
    }

    #[test]
    fn baseline_breakdown_percentages_describe_whole_samples() {
        let b = SourceBreakdown::baseline();
        for s in [
            b.social.twitter,
            b.social.facebook,
            b.social.instagram,
            b.community.forums,
            b.community.reports,
            b.news.local,
            b.news.regional,
        ] {
            assert_eq!(s.positive + s.neutral + s.negative, 100);
        }
    }
}
