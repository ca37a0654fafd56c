pub mod api_client;
pub mod auth_service;

pub use api_client::{ApiClient, DashboardSummary};
pub use auth_service::{clear_session, perform_login, restore_session};
