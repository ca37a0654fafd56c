use crate::models::{Role, UserSession};
use crate::services::{clear_session, perform_login, restore_session};
use yew::prelude::*;

/// Estado de autenticación compartido por toda la app.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<UserSession>,
    /// true mientras se resuelve la sesión persistida.
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.role)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(|| AuthState {
        session: None,
        loading: true,
        error: None,
    });

    // Rehidratar sesión persistida al montar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let session = restore_session();
            if session.is_none() {
                log::info!("ℹ️ No hay sesión persistida");
            }
            state.set(AuthState {
                session,
                loading: false,
                error: None,
            });
            || ()
        });
    }

    // Login callback
    let login = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            let state = state.clone();
            state.set(AuthState {
                session: None,
                loading: true,
                error: None,
            });
            wasm_bindgen_futures::spawn_local(async move {
                match perform_login(&username, &password).await {
                    Ok(session) => {
                        state.set(AuthState {
                            session: Some(session),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        state.set(AuthState {
                            session: None,
                            loading: false,
                            error: Some(e),
                        });
                    }
                }
            });
        })
    };

    // Logout callback
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            clear_session();
            state.set(AuthState {
                session: None,
                loading: false,
                error: None,
            });
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}
