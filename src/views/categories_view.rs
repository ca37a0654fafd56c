// ============================================================================
// CATEGORIES VIEW - Categorías de keywords
// ============================================================================
// Listado server-paginado; activar/desactivar una categoría requiere rol
// editor o superior (el control simplemente no se muestra por debajo).
// ============================================================================

use crate::components::{ColumnSpec, DataTable, Pager};
use crate::hooks::{use_auth_context, use_table};
use crate::models::{Category, ListParams, Role};
use crate::services::ApiClient;
use crate::state::CellValue;
use crate::utils::{RequestSeq, DEFAULT_PAGE_SIZE};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn render_name(category: &Category) -> Html {
    html! { <span class="cell-primary">{category.name.clone()}</span> }
}

fn render_keyword_count(category: &Category) -> Html {
    html! { {category.keyword_count} }
}

fn render_active(category: &Category) -> Html {
    if category.active {
        html! { <span class="badge badge-active">{"activa"}</span> }
    } else {
        html! { <span class="badge badge-inactive">{"inactiva"}</span> }
    }
}

fn columns() -> Vec<ColumnSpec<Category>> {
    vec![
        ColumnSpec {
            id: "name",
            header: "Categoría",
            sortable: true,
            accessor: Some(|c| CellValue::text(c.name.clone())),
            render: render_name,
        },
        ColumnSpec {
            id: "keyword_count",
            header: "Keywords",
            sortable: true,
            accessor: Some(|c| CellValue::number(c.keyword_count as f64)),
            render: render_keyword_count,
        },
        ColumnSpec {
            id: "active",
            header: "Estado",
            sortable: false,
            accessor: None,
            render: render_active,
        },
    ]
}

#[function_component(CategoriesView)]
pub fn categories_view() -> Html {
    let auth = use_auth_context();
    let table = use_table(DEFAULT_PAGE_SIZE);
    let rows = use_state(Vec::<Category>::new);
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
                let result = api.list_categories(&params).await;
                if !seq.is_current(seq_no) {
                    log::info!("⏭️ Respuesta de categorías obsoleta, descartada");
                    return;
                }
                match result {
                    Ok(response) => {
                        set_total_items.emit(response.total);
                        rows.set(response.items);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando categorías: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let can_edit = auth
        .state
        .role()
        .map(|r| r.satisfies(&Role::Editor))
        .unwrap_or(false);

    let on_toggle_active = {
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |category: Category| {
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.set_category_active(&category.id, !category.active).await {
                    Ok(updated) => {
                        log::info!("✅ Categoría {} → active={}", updated.id, updated.active);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando categoría: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let render_detail = {
        let on_toggle_active = on_toggle_active.clone();
        Callback::from(move |category: Category| {
            let toggle = {
                let on_toggle_active = on_toggle_active.clone();
                let category = category.clone();
                Callback::from(move |_: MouseEvent| on_toggle_active.emit(category.clone()))
            };
            html! {
                <div class="row-detail">
                    <p>
                        {format!(
                            "{} keywords asignadas. Las categorías inactivas se excluyen del análisis de tendencias.",
                            category.keyword_count
                        )}
                    </p>
                    if can_edit {
                        <button class="btn-secondary" onclick={toggle}>
                            { if category.active { "Desactivar" } else { "Activar" } }
                        </button>
                    }
                </div>
            }
        })
    };

    html! {
        <div class="list-view categories-view">
            <div class="view-toolbar">
                <h2>{"Categorías"}</h2>
            </div>

            if let Some(error) = error.as_ref() {
                <div class="view-error">{error.clone()}</div>
            }

            if *loading && rows.is_empty() {
                <div class="view-loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <DataTable<Category>
                    columns={columns()}
                    rows={(*rows).clone()}
                    table={(*table.state).clone()}
                    on_sort={table.toggle_sort.clone()}
                    on_toggle_detail={table.toggle_detail.clone()}
                    row_id={Callback::from(|c: Category| c.id.clone())}
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
