// ============================================================================
// USER - Usuarios administrables del dashboard
// ============================================================================

use crate::models::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}
