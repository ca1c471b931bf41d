//! Dashboard module - aggregated account overview.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{DashboardSummary, TopAsset};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
