pub mod breadcrumbs;
pub mod filter_panel;
