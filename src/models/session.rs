// ============================================================================
// SESSION - Sesión autenticada y payloads de auth del backend
// ============================================================================

use crate::models::role::Role;
use serde::{Deserialize, Serialize};

/// Sesión en memoria del actor autenticado. Las vistas solo la leen;
/// la muta únicamente el auth state (login/logout/update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Credenciales del formulario de login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Usuario tal como lo devuelve el backend en el login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

impl AuthUser {
    pub fn into_session(self) -> UserSession {
        UserSession {
            user_id: self.id,
            username: self.username,
            role: self.role,
        }
    }
}

/// Respuesta del endpoint de login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<AuthUser>,
    pub error: Option<String>,
}
