// ============================================================================
// APP - Raíz de la aplicación y navegación
// ============================================================================
// Enrutado propio sobre History API: el estado de ruta vive en un
// ContextProvider y cada vista protegida se monta detrás de un AccessGate
// con el rol mínimo de la ruta.
// ============================================================================

use crate::components::AccessGate;
use crate::hooks::{use_auth_context, AuthContextProvider};
use crate::models::Role;
use crate::views::{
    CategoriesView, DashboardView, ExploreTopicsView, Header, KeywordsView, LoginView,
    SearchTopicsView, UsersView,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Keywords,
    SearchTopics,
    ExploreTopics,
    Categories,
    Users,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Keywords => "/keywords",
            Route::SearchTopics => "/search-topics",
            Route::ExploreTopics => "/explore-topics",
            Route::Categories => "/categories",
            Route::Users => "/users",
        }
    }

    pub fn from_path(path: &str) -> Route {
        match path {
            "/login" => Route::Login,
            "/keywords" => Route::Keywords,
            "/search-topics" => Route::SearchTopics,
            "/explore-topics" => Route::ExploreTopics,
            "/categories" => Route::Categories,
            "/users" => Route::Users,
            _ => Route::Dashboard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Iniciar sesión",
            Route::Dashboard => "Dashboard",
            Route::Keywords => "Keywords",
            Route::SearchTopics => "Búsquedas",
            Route::ExploreTopics => "Explorar",
            Route::Categories => "Categorías",
            Route::Users => "Usuarios",
        }
    }

    /// Rol mínimo de la ruta; `None` = basta estar autenticado.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Users => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Handle de navegación compartido por contexto.
#[derive(Clone, PartialEq)]
pub struct NavHandle {
    route: UseStateHandle<Route>,
}

impl NavHandle {
    pub fn route(&self) -> Route {
        *self.route
    }

    /// Navega empujando una entrada nueva al historial.
    pub fn navigate(&self, route: Route) {
        if *self.route == route {
            return;
        }
        push_history(route, false);
        self.route.set(route);
    }

    /// Navega reemplazando la entrada actual (la vista origen no queda en
    /// el historial).
    pub fn replace(&self, route: Route) {
        push_history(route, true);
        self.route.set(route);
    }

    /// Un paso atrás en el historial del navegador.
    pub fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}

fn push_history(route: Route, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if let Err(e) = result {
        log::warn!("⚠️ History API no disponible: {:?}", e);
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[hook]
pub fn use_nav() -> NavHandle {
    use_context::<NavHandle>().expect("NavHandle requiere montarse dentro de App")
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <Shell />
        </AuthContextProvider>
    }
}

/// Capa interior: necesita el contexto de auth ya montado.
#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth_context();
    let route = use_state(|| Route::from_path(&current_path()));
    let nav = NavHandle {
        route: route.clone(),
    };

    // Botón atrás/adelante del navegador: sincronizar la ruta con popstate.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::<dyn Fn()>::new(move || {
                route.set(Route::from_path(&current_path()));
            });
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "popstate",
                    closure.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Sesión ya iniciada en /login: saltar directo al dashboard.
    {
        let nav = nav.clone();
        let authenticated = auth.state.is_authenticated();
        let at_login = *route == Route::Login;
        use_effect_with((authenticated, at_login), move |&(authenticated, at_login)| {
            if authenticated && at_login {
                nav.replace(Route::Dashboard);
            }
            || ()
        });
    }

    let current = *route;
    let body = match current {
        Route::Login => html! { <LoginView /> },
        Route::Dashboard => gated(current, html! { <DashboardView /> }),
        Route::Keywords => gated(current, html! { <KeywordsView /> }),
        Route::SearchTopics => gated(current, html! { <SearchTopicsView /> }),
        Route::ExploreTopics => gated(current, html! { <ExploreTopicsView /> }),
        Route::Categories => gated(current, html! { <CategoriesView /> }),
        Route::Users => gated(current, html! { <UsersView /> }),
    };

    html! {
        <ContextProvider<NavHandle> context={nav}>
            <div class="app-shell">
                if current != Route::Login {
                    <Header />
                }
                <main class="app-main">
                    {body}
                </main>
            </div>
        </ContextProvider<NavHandle>>
    }
}

fn gated(route: Route, view: Html) -> Html {
    html! {
        <AccessGate required={route.required_role()}>
            {view}
        </AccessGate>
    }
}
