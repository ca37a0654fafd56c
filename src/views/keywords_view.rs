// ============================================================================
// KEYWORDS VIEW - Listado principal de keywords con métricas de tendencia
// ============================================================================
// Server-pagination completa: búsqueda con debounce, sort tri-estado
// delegado al backend, detalle expandible y borrado para editor+.
// ============================================================================

use crate::components::{ColumnSpec, DataTable, Pager};
use crate::hooks::{use_auth_context, use_table};
use crate::models::{Keyword, ListParams, Role};
use crate::services::ApiClient;
use crate::state::CellValue;
use crate::utils::{Debouncer, RequestSeq, DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn render_text(kw: &Keyword) -> Html {
    html! { <span class="cell-primary">{kw.text.clone()}</span> }
}

fn render_videos(kw: &Keyword) -> Html {
    html! { {kw.video_count} }
}

fn render_score(kw: &Keyword) -> Html {
    html! { {format!("{:.1}", kw.trend_score)} }
}

fn render_growth(kw: &Keyword) -> Html {
    match kw.growth_rate {
        Some(rate) => {
            let class = if rate >= 0.0 { "growth-up" } else { "growth-down" };
            html! { <span class={class}>{format!("{:+.1}%", rate)}</span> }
        }
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn render_category(kw: &Keyword) -> Html {
    match &kw.category {
        Some(category) => html! { {category.clone()} },
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn render_last_seen(kw: &Keyword) -> Html {
    match kw.last_seen {
        Some(ts) => html! { {ts.format("%Y-%m-%d %H:%M").to_string()} },
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn columns() -> Vec<ColumnSpec<Keyword>> {
    vec![
        ColumnSpec {
            id: "text",
            header: "Keyword",
            sortable: true,
            accessor: Some(|kw| CellValue::text(kw.text.clone())),
            render: render_text,
        },
        ColumnSpec {
            id: "video_count",
            header: "Videos",
            sortable: true,
            accessor: Some(|kw| CellValue::number(kw.video_count as f64)),
            render: render_videos,
        },
        ColumnSpec {
            id: "trend_score",
            header: "Score",
            sortable: true,
            accessor: Some(|kw| CellValue::number(kw.trend_score)),
            render: render_score,
        },
        ColumnSpec {
            id: "growth_rate",
            header: "Crecimiento",
            sortable: true,
            accessor: Some(|kw| CellValue::opt_number(kw.growth_rate)),
            render: render_growth,
        },
        ColumnSpec {
            id: "category",
            header: "Categoría",
            sortable: true,
            accessor: Some(|kw| CellValue::opt_text(kw.category.clone())),
            render: render_category,
        },
        ColumnSpec {
            id: "last_seen",
            header: "Visto por última vez",
            sortable: false,
            accessor: None,
            render: render_last_seen,
        },
    ]
}

#[function_component(KeywordsView)]
pub fn keywords_view() -> Html {
    let auth = use_auth_context();
    let table = use_table(DEFAULT_PAGE_SIZE);
    let rows = use_state(Vec::<Keyword>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // Texto del input (inmediato) vs filtro confirmado (post-debounce).
    let search_input = use_state(String::new);
    let search = use_state(String::new);
    // Bump para refetch tras mutaciones (borrado).
    let reload = use_state(|| 0u32);
    let seq = use_mut_ref(RequestSeq::new);

    let debouncer = {
        let search = search.clone();
        let set_page = table.set_page.clone();
        use_mut_ref(move || {
            Debouncer::new(SEARCH_DEBOUNCE_MS, move |value: String| {
                // Un filtro nuevo siempre arranca en la página 1.
                set_page.emit(1);
                search.set(value);
            })
        })
    };

    // Fetch en mount y ante cualquier cambio de página/tamaño/sort/filtro.
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
            (*search).clone(),
            *reload,
        );
        use_effect_with(deps, move |(page, size, sort, search, _)| {
            let mut params = ListParams::new(*page, *size);
            params.search = (!search.is_empty()).then(|| search.clone());
            params.sort_by = sort.0.clone();
            params.sort_order = sort.1.clone();

            let seq_no = seq.begin();
            loading.set(true);

            spawn_local(async move {
                let api = ApiClient::new();
                let result = api.list_keywords(&params).await;
                if !seq.is_current(seq_no) {
                    log::info!("⏭️ Respuesta de keywords obsoleta, descartada");
                    return;
                }
                match result {
                    Ok(response) => {
                        set_total_items.emit(response.total);
                        rows.set(response.items);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando keywords: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search_input = {
        let search_input = search_input.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            search_input.set(value.clone());
            debouncer.borrow().schedule(value);
        })
    };

    let on_page_size = {
        let set_page_size = table.set_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                set_page_size.emit(size);
            }
        })
    };

    let can_delete = auth
        .state
        .role()
        .map(|r| r.satisfies(&Role::Editor))
        .unwrap_or(false);

    let on_delete = {
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |keyword: Keyword| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("¿Borrar la keyword \"{}\"?", keyword.text))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.delete_keyword(&keyword.id).await {
                    Ok(()) => {
                        log::info!("✅ Keyword {} borrada", keyword.id);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error borrando keyword: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let render_detail = {
        let on_delete = on_delete.clone();
        Callback::from(move |kw: Keyword| {
            let delete = {
                let on_delete = on_delete.clone();
                let kw = kw.clone();
                Callback::from(move |_: MouseEvent| on_delete.emit(kw.clone()))
            };
            html! {
                <div class="row-detail">
                    <dl class="detail-grid">
                        <dt>{"Keyword"}</dt>
                        <dd>{kw.text.clone()}</dd>
                        <dt>{"Videos"}</dt>
                        <dd>{kw.video_count}</dd>
                        <dt>{"Score de tendencia"}</dt>
                        <dd>{format!("{:.2}", kw.trend_score)}</dd>
                        <dt>{"Crecimiento"}</dt>
                        <dd>{ match kw.growth_rate {
                            Some(rate) => format!("{:+.2}%", rate),
                            None => "sin datos".to_string(),
                        } }</dd>
                        <dt>{"Categoría"}</dt>
                        <dd>{kw.category.clone().unwrap_or_else(|| "sin asignar".to_string())}</dd>
                    </dl>
                    if can_delete {
                        <button class="btn-danger" onclick={delete}>
                            {"🗑️ Borrar keyword"}
                        </button>
                    }
                </div>
            }
        })
    };

    html! {
        <div class="list-view keywords-view">
            <div class="view-toolbar">
                <h2>{"Keywords"}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Buscar keyword..."
                    value={(*search_input).clone()}
                    oninput={on_search_input}
                />
                <select class="page-size-select" onchange={on_page_size}>
                    { for [10u32, 20, 50].iter().map(|n| html! {
                        <option
                            value={n.to_string()}
                            selected={*n == table.state.pagination.page_size()}
                        >
                            {format!("{} por página", n)}
                        </option>
                    }) }
                </select>
            </div>

            if let Some(error) = error.as_ref() {
                <div class="view-error">{error.clone()}</div>
            }

            if *loading && rows.is_empty() {
                <div class="view-loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <DataTable<Keyword>
                    columns={columns()}
                    rows={(*rows).clone()}
                    table={(*table.state).clone()}
                    on_sort={table.toggle_sort.clone()}
                    on_toggle_detail={table.toggle_detail.clone()}
                    row_id={Callback::from(|kw: Keyword| kw.id.clone())}
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
