pub mod map_visualization;
pub mod metric_cards;
pub mod recent_activity;
pub mod time_filter;
