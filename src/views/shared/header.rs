// ============================================================================
// HEADER - Barra superior con navegación por rol
// ============================================================================

use crate::app::{use_nav, Route};
use crate::hooks::use_auth_context;
use crate::models::Role;
use yew::prelude::*;

const NAV_ROUTES: [Route; 6] = [
    Route::Dashboard,
    Route::Keywords,
    Route::SearchTopics,
    Route::ExploreTopics,
    Route::Categories,
    Route::Users,
];

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth_context();
    let nav = use_nav();

    let role = auth.state.role().cloned();
    let current = nav.route();

    // Solo se listan las rutas que el rol actual puede abrir; el gate de
    // cada ruta sigue siendo la barrera real.
    let visible = NAV_ROUTES.iter().copied().filter(|route| {
        match (route.required_role(), role.as_ref()) {
            (None, _) => true,
            (Some(required), Some(role)) => role.satisfies(&required),
            (Some(_), None) => false,
        }
    });

    let on_logout = {
        let logout = auth.logout.clone();
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("👋 Cerrando sesión");
            logout.emit(());
            nav.replace(Route::Login);
        })
    };

    let username = auth
        .state
        .session
        .as_ref()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let role_label = role
        .as_ref()
        .map(Role::as_str)
        .map(str::to_string)
        .unwrap_or_default();

    html! {
        <header class="app-header">
            <div class="header-brand">
                <span class="logo-icon">{"📈"}</span>
                <h1>{"TrendScope Admin"}</h1>
            </div>
            <nav class="header-nav">
                { for visible.map(|route| {
                    let onclick = {
                        let nav = nav.clone();
                        Callback::from(move |_: MouseEvent| nav.navigate(route))
                    };
                    html! {
                        <button
                            class={classes!("nav-link", (route == current).then_some("active"))}
                            {onclick}
                        >
                            {route.label()}
                        </button>
                    }
                }) }
            </nav>
            <div class="header-user">
                <span class="user-name">{username}</span>
                <span class="user-role">{role_label}</span>
                <button class="btn-logout" onclick={on_logout}>
                    {"Salir"}
                </button>
            </div>
        </header>
    }
}
