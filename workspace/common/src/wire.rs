//! Mirrors of the remote analytics API payloads and their reshaping into
//! view models.
//!
//! The backend is an opaque collaborator; these structs only pin down the
//! field names the frontend actually reads. Reshaping renames fields,
//! truncates lists to the display count and attaches synthetic sequential
//! ids for list keys, so the components never see wire shapes.

use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityItem, ActivityKind, AnalysisData, CategoryCount, DashboardData, Hotspot, MapCenter,
    MapData, MetricCard, SentimentOverview, SentimentReportData, SourceBreakdown, TimeSeriesPoint,
    TimelineEntry, Topic,
};

/// Lists are cut to this many entries before display.
pub const DISPLAY_LIMIT: usize = 3;

/// The counts endpoint does not serve a trend yet; cards carry this
/// placeholder until it does.
const METRIC_TREND_PLACEHOLDER: f64 = 2.1;
const METRIC_ICON: &str = "Home";
const HOTSPOT_CATEGORY: &str = "Crime";
const RECENT_TIME_LABEL: &str = "recently";

// ===================== /get_crime_counts =====================

#[derive(Debug, Clone, Deserialize)]
pub struct CrimeCountsEnvelope {
    #[serde(rename = "Data")]
    pub data: CrimeCountsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrimeCountsData {
    pub counts: Vec<CrimeCount>,
    pub map_data: WireMapData,
    pub recent: Vec<RecentIncident>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrimeCount {
    pub crime_type_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireMapData {
    pub center: MapCenter,
    pub hotspots: Vec<WireHotspot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireHotspot {
    pub latitude: f64,
    pub longitude: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentIncident {
    pub crime_type_name: String,
    pub location: String,
    pub premises_name: String,
}

impl CrimeCountsData {
    pub fn into_dashboard(self) -> DashboardData {
        let metrics = self
            .counts
            .into_iter()
            .take(DISPLAY_LIMIT)
            .enumerate()
            .map(|(id, item)| MetricCard {
                id,
                title: item.crime_type_name,
                value: item.count,
                change: METRIC_TREND_PLACEHOLDER,
                icon: METRIC_ICON.to_string(),
            })
            .collect();

        let hotspots = self
            .map_data
            .hotspots
            .into_iter()
            .take(DISPLAY_LIMIT)
            .enumerate()
            .map(|(id, item)| Hotspot {
                id,
                lat: item.latitude,
                lng: item.longitude,
                count: item.count,
                category: HOTSPOT_CATEGORY.to_string(),
            })
            .collect();

        let recent_activity = self
            .recent
            .into_iter()
            .take(DISPLAY_LIMIT)
            .enumerate()
            .map(|(id, item)| ActivityItem {
                id,
                kind: ActivityKind::Incident,
                title: item.crime_type_name,
                location: Some(item.location),
                time: RECENT_TIME_LABEL.to_string(),
                category: item.premises_name,
            })
            .collect();

        DashboardData {
            metrics,
            map_data: MapData { center: self.map_data.center, hotspots },
            recent_activity,
        }
    }
}

// ===================== /get_chart_data =====================

#[derive(Debug, Clone, Deserialize)]
pub struct ChartDataEnvelope {
    #[serde(rename = "Data")]
    pub data: ChartData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartData {
    #[serde(rename = "lineChartData")]
    pub line_chart_data: Vec<WireTimePoint>,
    #[serde(rename = "barChartData")]
    pub bar_chart_data: Vec<WireCategoryCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireTimePoint {
    pub reported_date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireCategoryCount {
    pub crime_type_name: String,
    pub count: u64,
}

impl ChartData {
    pub fn into_analysis(self) -> AnalysisData {
        let line_chart = self
            .line_chart_data
            .into_iter()
            .enumerate()
            .map(|(id, item)| TimeSeriesPoint {
                id,
                date: item.reported_date,
                count: item.count,
            })
            .collect();

        let bar_chart = self
            .bar_chart_data
            .into_iter()
            .enumerate()
            .map(|(id, item)| CategoryCount {
                id,
                category: item.crime_type_name,
                count: item.count,
            })
            .collect();

        AnalysisData { line_chart, bar_chart }
    }
}

// ===================== sentiment endpoints =====================

/// `/get-sentiment-percentage` body. The field names already match the view
/// model, so the mirrors are reused directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPercentageResponse {
    pub overview: SentimentOverview,
    pub timeline: Vec<TimelineEntry>,
}

/// `/get-word-cloud` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCloudResponse {
    pub topics: Vec<Topic>,
}

/// Combine the two sequential sentiment responses into the report the page
/// renders. The per-source breakdown is not served yet; see
/// [`SourceBreakdown::baseline`].
pub fn assemble_report(
    percentages: SentimentPercentageResponse,
    cloud: WordCloudResponse,
) -> SentimentReportData {
    SentimentReportData {
        overview: percentages.overview,
        timeline: percentages.timeline,
        topics: cloud.topics,
        sources: SourceBreakdown::baseline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crime_counts_reshape_truncates_and_renames() {
        let payload = serde_json::json!({
            "Data": {
                "counts": [
                    {"crime_type_name": "Theft", "count": 145},
                    {"crime_type_name": "Assault", "count": 87},
                    {"crime_type_name": "Fraud", "count": 113},
                    {"crime_type_name": "Vandalism", "count": 76}
                ],
                "map_data": {
                    "center": {"lat": 34.0522, "lng": -118.2437},
                    "hotspots": [
                        {"latitude": 34.052, "longitude": -118.243, "count": 87},
                        {"latitude": 34.047, "longitude": -118.251, "count": 65},
                        {"latitude": 34.058, "longitude": -118.235, "count": 43},
                        {"latitude": 34.061, "longitude": -118.248, "count": 38}
                    ]
                },
                "recent": [
                    {"crime_type_name": "Burglary", "location": "Downtown", "premises_name": "Residence"},
                    {"crime_type_name": "Theft", "location": "North District", "premises_name": "Store"},
                    {"crime_type_name": "Assault", "location": "Harbor", "premises_name": "Street"},
                    {"crime_type_name": "Fraud", "location": "Midtown", "premises_name": "Bank"}
                ]
            }
        });

        let envelope: CrimeCountsEnvelope =
            serde_json::from_value(payload).expect("payload deserializes");
        let dashboard = envelope.data.into_dashboard();

        assert_eq!(dashboard.metrics.len(), DISPLAY_LIMIT);
        assert_eq!(dashboard.metrics[0].title, "Theft");
        assert_eq!(dashboard.metrics[0].value, 145);
        assert_eq!(
            dashboard.metrics.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        assert_eq!(dashboard.map_data.hotspots.len(), DISPLAY_LIMIT);
        assert_eq!(dashboard.map_data.hotspots[1].lat, 34.047);
        assert_eq!(dashboard.map_data.hotspots[1].lng, -118.251);
        assert_eq!(dashboard.map_data.center.lat, 34.0522);

        assert_eq!(dashboard.recent_activity.len(), DISPLAY_LIMIT);
        assert_eq!(dashboard.recent_activity[0].title, "Burglary");
        assert_eq!(
            dashboard.recent_activity[0].location.as_deref(),
            Some("Downtown")
        );
        assert_eq!(dashboard.recent_activity[0].category, "Residence");
        assert_eq!(dashboard.recent_activity[0].kind, ActivityKind::Incident);
    }

    #[test]
    fn shorter_lists_pass_through_untruncated() {
        let payload = serde_json::json!({
            "Data": {
                "counts": [{"crime_type_name": "Theft", "count": 1}],
                "map_data": {"center": {"lat": 0.0, "lng": 0.0}, "hotspots": []},
                "recent": []
            }
        });
        let envelope: CrimeCountsEnvelope =
            serde_json::from_value(payload).expect("payload deserializes");
        let dashboard = envelope.data.into_dashboard();
        assert_eq!(dashboard.metrics.len(), 1);
        assert!(dashboard.map_data.hotspots.is_empty());
        assert!(dashboard.recent_activity.is_empty());
    }

    #[test]
    fn chart_data_reshape_renames_axis_fields() {
        let payload = serde_json::json!({
            "Data": {
                "lineChartData": [
                    {"reported_date": "2023-01-01", "count": 12},
                    {"reported_date": "2023-01-08", "count": 19}
                ],
                "barChartData": [
                    {"crime_type_name": "Theft", "count": 145},
                    {"crime_type_name": "Assault", "count": 87}
                ]
            }
        });

        let envelope: ChartDataEnvelope =
            serde_json::from_value(payload).expect("payload deserializes");
        let analysis = envelope.data.into_analysis();

        assert_eq!(analysis.line_chart[0].date, "2023-01-01");
        assert_eq!(analysis.line_chart[1].id, 1);
        assert_eq!(analysis.bar_chart[0].category, "Theft");
        assert_eq!(analysis.bar_chart[1].count, 87);
    }

    #[test]
    fn report_assembly_keeps_overview_and_attaches_baseline_sources() {
        let percentages: SentimentPercentageResponse = serde_json::from_value(serde_json::json!({
            "overview": {"positive": 42.0, "neutral": 35.0, "negative": 23.0},
            "timeline": [
                {"date": "2023-05-01", "positive": 38.0, "neutral": 40.0, "negative": 22.0}
            ]
        }))
        .expect("percentages deserialize");
        let cloud: WordCloudResponse = serde_json::from_value(serde_json::json!({
            "topics": [
                {"id": 1, "name": "Public Safety", "weight": 85.0, "sentiment": 0.2}
            ]
        }))
        .expect("cloud deserializes");

        let report = assemble_report(percentages, cloud);
        assert_eq!(report.overview.total(), 100.0);
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.topics[0].name, "Public Safety");
        assert_eq!(report.sources, SourceBreakdown::baseline());
    }
}
