// ============================================================================
// USERS VIEW - Administración de usuarios del dashboard
// ============================================================================
// Solo visible para admin+ (gate de la ruta). Cambiar el rol de un usuario
// requiere super_admin: el selector no se muestra por debajo de ese rango.
// ============================================================================

use crate::components::{ColumnSpec, DataTable, Pager};
use crate::hooks::{use_auth_context, use_table};
use crate::models::{AdminUser, ListParams, Role};
use crate::services::ApiClient;
use crate::state::CellValue;
use crate::utils::{RequestSeq, DEFAULT_PAGE_SIZE};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Roles asignables desde el selector. `Unknown` nunca se ofrece.
const ASSIGNABLE_ROLES: [Role; 4] = [Role::Viewer, Role::Editor, Role::Admin, Role::SuperAdmin];

fn render_username(user: &AdminUser) -> Html {
    html! { <span class="cell-primary">{user.username.clone()}</span> }
}

fn render_email(user: &AdminUser) -> Html {
    match &user.email {
        Some(email) => html! { {email.clone()} },
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn render_role(user: &AdminUser) -> Html {
    html! { <span class="badge badge-role">{user.role.as_str()}</span> }
}

fn render_active(user: &AdminUser) -> Html {
    if user.active {
        html! { <span class="badge badge-active">{"activo"}</span> }
    } else {
        html! { <span class="badge badge-inactive">{"inactivo"}</span> }
    }
}

fn render_created(user: &AdminUser) -> Html {
    match user.created_at {
        Some(ts) => html! { {ts.format("%Y-%m-%d").to_string()} },
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn columns() -> Vec<ColumnSpec<AdminUser>> {
    vec![
        ColumnSpec {
            id: "username",
            header: "Usuario",
            sortable: true,
            accessor: Some(|u| CellValue::text(u.username.clone())),
            render: render_username,
        },
        ColumnSpec {
            id: "email",
            header: "Email",
            sortable: true,
            accessor: Some(|u| CellValue::opt_text(u.email.clone())),
            render: render_email,
        },
        ColumnSpec {
            id: "role",
            header: "Rol",
            sortable: true,
            accessor: Some(|u| CellValue::text(u.role.as_str())),
            render: render_role,
        },
        ColumnSpec {
            id: "active",
            header: "Estado",
            sortable: false,
            accessor: None,
            render: render_active,
        },
        ColumnSpec {
            id: "created_at",
            header: "Alta",
            sortable: false,
            accessor: None,
            render: render_created,
        },
    ]
}

#[function_component(UsersView)]
pub fn users_view() -> Html {
    let auth = use_auth_context();
    let table = use_table(DEFAULT_PAGE_SIZE);
    let rows = use_state(Vec::<AdminUser>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);
    let seq = use_mut_ref(RequestSeq::new);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        let set_total_items = table.set_total_items.clone();
        let seq = seq.borrow().clone();
        let deps = (
            table.state.pagination.page(),
            table.state.pagination.page_size(),
            table.state.sort_params(),
            *reload,
        );
        use_effect_with(deps, move |(page, size, sort, _)| {
            let mut params = ListParams::new(*page, *size);
            params.sort_by = sort.0.clone();
            params.sort_order = sort.1.clone();

            let seq_no = seq.begin();
            loading.set(true);

            spawn_local(async move {
                let api = ApiClient::new();
                let result = api.list_users(&params).await;
                if !seq.is_current(seq_no) {
                    log::info!("⏭️ Respuesta de usuarios obsoleta, descartada");
                    return;
                }
                match result {
                    Ok(response) => {
                        set_total_items.emit(response.total);
                        rows.set(response.items);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando usuarios: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let can_edit_roles = auth
        .state
        .role()
        .map(|r| r.satisfies(&Role::SuperAdmin))
        .unwrap_or(false);

    let on_change_role = {
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |(user_id, role): (String, Role)| {
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.update_user_role(&user_id, &role).await {
                    Ok(updated) => {
                        log::info!("✅ Usuario {} ahora es {}", updated.username, updated.role);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error cambiando rol: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let render_detail = {
        let on_change_role = on_change_role.clone();
        Callback::from(move |user: AdminUser| {
            let onchange = {
                let on_change_role = on_change_role.clone();
                let user_id = user.id.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_change_role.emit((user_id.clone(), Role::from(select.value().as_str())));
                })
            };
            html! {
                <div class="row-detail">
                    <dl class="detail-grid">
                        <dt>{"Usuario"}</dt>
                        <dd>{user.username.clone()}</dd>
                        <dt>{"Email"}</dt>
                        <dd>{user.email.clone().unwrap_or_else(|| "sin email".to_string())}</dd>
                        <dt>{"Rol"}</dt>
                        <dd>{user.role.as_str()}</dd>
                    </dl>
                    if can_edit_roles {
                        <label class="role-select-label">
                            {"Cambiar rol: "}
                            <select class="role-select" {onchange}>
                                { for ASSIGNABLE_ROLES.iter().map(|role| html! {
                                    <option
                                        value={role.as_str().to_string()}
                                        selected={*role == user.role}
                                    >
                                        {role.as_str()}
                                    </option>
                                }) }
                            </select>
                        </label>
                    }
                </div>
            }
        })
    };

    html! {
        <div class="list-view users-view">
            <div class="view-toolbar">
                <h2>{"Usuarios"}</h2>
            </div>

            if let Some(error) = error.as_ref() {
                <div class="view-error">{error.clone()}</div>
            }

            if *loading && rows.is_empty() {
                <div class="view-loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <DataTable<AdminUser>
                    columns={columns()}
                    rows={(*rows).clone()}
                    table={(*table.state).clone()}
                    on_sort={table.toggle_sort.clone()}
                    on_toggle_detail={table.toggle_detail.clone()}
                    row_id={Callback::from(|u: AdminUser| u.id.clone())}
                    render_detail={render_detail}
                />
                <Pager
                    pagination={table.state.pagination.clone()}
                    on_page={table.set_page.clone()}
                />
            }
        </div>
    }
}
