// ============================================================================
// LOGIN VIEW - Formulario de acceso al dashboard
// ============================================================================

use crate::hooks::use_auth_context;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth_context();

    // Estados para los valores de los inputs
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username_val = (*username).clone();
            let password_val = (*password).clone();

            if username_val.is_empty() || password_val.is_empty() {
                return;
            }

            login.emit((username_val, password_val));
        })
    };

    let submitting = auth.state.loading;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"📈"}</div>
                    </div>
                    <h1>{"TrendScope Admin"}</h1>
                    <p>{"Analítica de tendencias de TikTok"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu usuario"
                            value={(*username).clone()}
                            oninput={on_username_change}
                            disabled={submitting}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            disabled={submitting}
                            required=true
                        />
                    </div>

                    if let Some(error) = auth.state.error.as_ref() {
                        <div class="login-error">{error.clone()}</div>
                    }

                    <button type="submit" class="btn-login" disabled={submitting}>
                        <span class="btn-text">
                            { if submitting { "Entrando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
