use common::DateRange;
use common::wire::{ChartData, ChartDataEnvelope, CrimeCountsData, CrimeCountsEnvelope};

use crate::api_client;

/// Counts, map hotspots and recent incidents for the dashboard home.
pub async fn get_crime_counts(range: &DateRange) -> Result<CrimeCountsData, String> {
    log::trace!(
        "Fetching crime counts for {}..{}",
        range.start_iso(),
        range.end_iso()
    );
    let envelope: CrimeCountsEnvelope = api_client::get(
        "/get_crime_counts",
        &[
            ("reported_date_after", range.start_iso()),
            ("reported_date_before", range.end_iso()),
        ],
    )
    .await?;
    Ok(envelope.data)
}

/// Time-series and per-category data for the analysis charts.
pub async fn get_chart_data(range: &DateRange) -> Result<ChartData, String> {
    log::trace!(
        "Fetching chart data for {}..{}",
        range.start_iso(),
        range.end_iso()
    );
    let envelope: ChartDataEnvelope = api_client::get(
        "/get_chart_data",
        &[
            ("reported_date_after", range.start_iso()),
            ("reported_date_before", range.end_iso()),
        ],
    )
    .await?;
    Ok(envelope.data)
}
