// ============================================================================
// ACCESS DENIED - Vista para autenticados sin rango suficiente
// ============================================================================

use crate::app::use_nav;
use crate::models::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccessDeniedProps {
    pub required: Role,
    pub current: Role,
}

#[function_component(AccessDeniedView)]
pub fn access_denied_view(props: &AccessDeniedProps) -> Html {
    let nav = use_nav();

    let on_back = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.back())
    };

    html! {
        <div class="access-denied">
            <div class="access-denied-card">
                <div class="denied-icon">{"🚫"}</div>
                <h2>{"Acceso denegado"}</h2>
                <p>
                    {"Esta sección requiere rol "}
                    <strong>{props.required.as_str()}</strong>
                    {"; tu rol actual es "}
                    <strong>{props.current.as_str()}</strong>
                    {"."}
                </p>
                <button class="btn-back" onclick={on_back}>
                    {"← Volver"}
                </button>
            </div>
        </div>
    }
}
