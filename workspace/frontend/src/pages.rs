pub mod dashboard_home;
pub mod data_analysis;
pub mod login;
pub mod not_found;
pub mod sentiment_report;
