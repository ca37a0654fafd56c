// ============================================================================
// AUTH CONTEXT - Compartir el estado de autenticación entre componentes
// ============================================================================
// Usa Context API de Yew: el provider envuelve la app y cualquier vista
// lee la sesión sin tocar estado global ambiente.
// ============================================================================

use crate::hooks::use_auth::{use_auth, UseAuthHandle};
use yew::prelude::*;

/// Provider que envuelve la app y proporciona el estado de auth.
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth_handle = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth_handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Acceso al handle de auth desde cualquier componente bajo el provider.
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("AuthContextProvider no está montado")
}
