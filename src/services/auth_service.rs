// ============================================================================
// AUTH SERVICE - Login, logout y persistencia de la sesión
// ============================================================================
// El token y el usuario se persisten bajo claves fijas de localStorage;
// el AccessGate nunca lee storage directamente, solo la sesión en memoria.
// ============================================================================

use crate::models::{Credentials, UserSession};
use crate::services::api_client::ApiClient;
use crate::utils::{
    load_from_storage, remove_from_storage, save_raw_to_storage, save_to_storage,
    STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_AUTH_USER,
};

/// Login contra el backend. Si es exitoso persiste token + usuario y
/// devuelve la sesión lista para el store.
pub async fn perform_login(username: &str, password: &str) -> Result<UserSession, String> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    let api = ApiClient::new();
    let response = api.login(&credentials).await?;

    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| "Error de autenticación".to_string());
        log::error!("❌ Login fallido: {}", message);
        return Err(message);
    }

    let token = response.token.ok_or("Respuesta sin token")?;
    let user = response.user.ok_or("Respuesta sin usuario")?;

    if let Err(e) = save_raw_to_storage(STORAGE_KEY_AUTH_TOKEN, &token) {
        log::error!("❌ Error guardando token: {}", e);
    }
    if let Err(e) = save_to_storage(STORAGE_KEY_AUTH_USER, &user) {
        log::error!("❌ Error guardando usuario: {}", e);
    }

    log::info!("✅ Login exitoso: {} ({})", user.username, user.role);

    Ok(user.into_session())
}

/// Rehidratar la sesión persistida (arranque de la app).
pub fn restore_session() -> Option<UserSession> {
    let user = load_from_storage::<crate::models::AuthUser>(STORAGE_KEY_AUTH_USER)?;
    log::info!("✅ Sesión persistida encontrada: {}", user.username);
    Some(user.into_session())
}

/// Logout: limpia las claves persistidas.
pub fn clear_session() {
    let _ = remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
    let _ = remove_from_storage(STORAGE_KEY_AUTH_USER);
    log::info!("👋 Logout");
}
