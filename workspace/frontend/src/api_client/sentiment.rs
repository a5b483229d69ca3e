use common::DateRange;
use common::wire::{SentimentPercentageResponse, WordCloudResponse};

use crate::api_client;

/// Sentiment percentage split and timeline for the report window. Note the
/// different parameter names on this endpoint family.
pub async fn get_sentiment_percentage(
    range: &DateRange,
) -> Result<SentimentPercentageResponse, String> {
    log::trace!(
        "Fetching sentiment percentages for {}..{}",
        range.start_iso(),
        range.end_iso()
    );
    api_client::get(
        "/get-sentiment-percentage",
        &[
            ("tweet_date_after", range.start_iso()),
            ("tweet_date_before", range.end_iso()),
        ],
    )
    .await
}

/// Trending topics for the tag cloud. The endpoint is not window-scoped.
pub async fn get_word_cloud() -> Result<WordCloudResponse, String> {
    api_client::get("/get-word-cloud", &[]).await
}
