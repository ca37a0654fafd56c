// ============================================================================
// ACCESS GATE - Control de acceso por rol para cada vista
// ============================================================================
// Decisión síncrona sobre estado de sesión ya resuelto; sin red. Cuatro
// salidas posibles: pending, no autenticado, prohibido, permitido.
// ============================================================================

use crate::app::{use_nav, Route};
use crate::hooks::use_auth_context;
use crate::models::Role;
use crate::views::access_denied::AccessDeniedView;
use yew::prelude::*;

/// Resultado de evaluar el gate para una (sesión, requisito).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Sesión todavía resolviéndose: mostrar indicador neutro y reevaluar.
    Pending,
    /// Sin autenticar: redirigir a login descartando la entrada de navegación.
    DenyUnauthenticated,
    /// Autenticado pero sin rango suficiente: vista de acceso denegado.
    DenyForbidden,
    Allow,
}

/// Evalúa el gate. Nunca lanza: un rol no reconocido vale rango 0 y solo
/// puede pasar chequeos sin requisito (fail-closed deliberado).
pub fn evaluate_gate(
    loading: bool,
    authenticated: bool,
    role: Option<&Role>,
    required: Option<&Role>,
) -> GateOutcome {
    if loading {
        return GateOutcome::Pending;
    }
    if !authenticated {
        return GateOutcome::DenyUnauthenticated;
    }
    if let Some(required) = required {
        let satisfied = role.map(|r| r.satisfies(required)).unwrap_or(false);
        if !satisfied {
            return GateOutcome::DenyForbidden;
        }
    }
    GateOutcome::Allow
}

#[derive(Properties, PartialEq)]
pub struct AccessGateProps {
    /// Rol mínimo requerido; `None` = basta estar autenticado.
    #[prop_or_default]
    pub required: Option<Role>,
    pub children: Children,
}

/// Envuelve una vista protegida. Se reevalúa en cada render.
#[function_component(AccessGate)]
pub fn access_gate(props: &AccessGateProps) -> Html {
    let auth = use_auth_context();
    let nav = use_nav();

    let outcome = evaluate_gate(
        auth.state.loading,
        auth.state.is_authenticated(),
        auth.state.role(),
        props.required.as_ref(),
    );

    // Redirigir a login fuera del render, reemplazando la entrada actual
    // para que "atrás" no vuelva a la vista protegida.
    {
        let nav = nav.clone();
        use_effect_with(outcome.clone(), move |outcome| {
            if *outcome == GateOutcome::DenyUnauthenticated {
                log::info!("🔒 Sin sesión, redirigiendo a login");
                nav.replace(Route::Login);
            }
            || ()
        });
    }

    match outcome {
        GateOutcome::Pending => html! {
            <div class="gate-loading">
                <div class="spinner"></div>
                <p>{"Cargando sesión..."}</p>
            </div>
        },
        GateOutcome::DenyUnauthenticated => html! {
            <div class="gate-loading"></div>
        },
        GateOutcome::DenyForbidden => {
            let required = props
                .required
                .clone()
                .unwrap_or_else(|| Role::Unknown(String::new()));
            let current = auth
                .state
                .role()
                .cloned()
                .unwrap_or_else(|| Role::Unknown(String::new()));
            html! { <AccessDeniedView {required} {current} /> }
        }
        GateOutcome::Allow => html! { <>{props.children.clone()}</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(
        loading: bool,
        authenticated: bool,
        role: Option<Role>,
        required: Option<Role>,
    ) -> GateOutcome {
        evaluate_gate(loading, authenticated, role.as_ref(), required.as_ref())
    }

    #[test]
    fn loading_siempre_es_pending() {
        // Irrelevante qué diga authenticated/role mientras carga.
        assert_eq!(
            gate(true, false, None, Some(Role::Admin)),
            GateOutcome::Pending
        );
        assert_eq!(
            gate(true, true, Some(Role::SuperAdmin), None),
            GateOutcome::Pending
        );
    }

    #[test]
    fn sin_autenticar_redirige_a_login() {
        assert_eq!(
            gate(false, false, None, Some(Role::Viewer)),
            GateOutcome::DenyUnauthenticated
        );
        assert_eq!(gate(false, false, None, None), GateOutcome::DenyUnauthenticated);
    }

    #[test]
    fn super_admin_pasa_cualquier_requisito() {
        for required in [
            Role::Viewer,
            Role::Editor,
            Role::Admin,
            Role::SuperAdmin,
            Role::Unknown("ghost".into()),
        ] {
            assert_eq!(
                gate(false, true, Some(Role::SuperAdmin), Some(required)),
                GateOutcome::Allow
            );
        }
    }

    #[test]
    fn rango_suficiente_permite() {
        assert_eq!(
            gate(false, true, Some(Role::Admin), Some(Role::Editor)),
            GateOutcome::Allow
        );
        assert_eq!(
            gate(false, true, Some(Role::Editor), Some(Role::Editor)),
            GateOutcome::Allow
        );
    }

    #[test]
    fn rango_insuficiente_prohibe() {
        // editor contra requisito admin: prohibido (escenario punta a punta).
        assert_eq!(
            gate(false, true, Some(Role::Editor), Some(Role::Admin)),
            GateOutcome::DenyForbidden
        );
        assert_eq!(
            gate(false, true, Some(Role::Viewer), Some(Role::Editor)),
            GateOutcome::DenyForbidden
        );
    }

    #[test]
    fn sin_requisito_basta_autenticarse() {
        assert_eq!(
            gate(false, true, Some(Role::Unknown("ghost".into())), None),
            GateOutcome::Allow
        );
    }

    #[test]
    fn rol_desconocido_falla_cerrado() {
        assert_eq!(
            gate(
                false,
                true,
                Some(Role::Unknown("ghost".into())),
                Some(Role::Viewer)
            ),
            GateOutcome::DenyForbidden
        );
    }
}
