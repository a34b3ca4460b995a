// Application layer - fetch, reconcile and render use cases
pub mod alert_feed;
pub mod chart_manager;
pub mod dashboard_api;
pub mod dashboard_view;
pub mod error;
pub mod identity_resolver;
pub mod kpi_renderer;
pub mod launcher;
pub mod module_list;
pub mod refresh_scheduler;
