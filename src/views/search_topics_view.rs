// ============================================================================
// SEARCH TOPICS VIEW - Ranking de búsquedas de TikTok
// ============================================================================
// El ranking completo es pequeño: se baja una sola vez y la tabla trabaja
// en modo client (sort y paginación locales).
// ============================================================================

use crate::components::{ColumnSpec, DataTable, Pager};
use crate::hooks::use_table;
use crate::models::{ListParams, SearchTopic};
use crate::services::ApiClient;
use crate::state::CellValue;
use crate::utils::DEFAULT_PAGE_SIZE;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// El backend limita el ranking a este tamaño; una página basta.
const RANKING_FETCH_SIZE: u32 = 500;

fn render_rank(topic: &SearchTopic) -> Html {
    html! { <span class="cell-rank">{format!("#{}", topic.rank)}</span> }
}

fn render_title(topic: &SearchTopic) -> Html {
    html! { <span class="cell-primary">{topic.title.clone()}</span> }
}

fn render_volume(topic: &SearchTopic) -> Html {
    html! { {topic.search_volume} }
}

fn render_region(topic: &SearchTopic) -> Html {
    match &topic.region {
        Some(region) => html! { {region.clone()} },
        None => html! { <span class="cell-missing">{"global"}</span> },
    }
}

fn columns() -> Vec<ColumnSpec<SearchTopic>> {
    vec![
        ColumnSpec {
            id: "rank",
            header: "Puesto",
            sortable: true,
            accessor: Some(|t| CellValue::number(t.rank)),
            render: render_rank,
        },
        ColumnSpec {
            id: "title",
            header: "Búsqueda",
            sortable: true,
            accessor: Some(|t| CellValue::text(t.title.clone())),
            render: render_title,
        },
        ColumnSpec {
            id: "search_volume",
            header: "Volumen",
            sortable: true,
            accessor: Some(|t| CellValue::number(t.search_volume as f64)),
            render: render_volume,
        },
        ColumnSpec {
            id: "region",
            header: "Región",
            sortable: true,
            accessor: Some(|t| CellValue::opt_text(t.region.clone())),
            render: render_region,
        },
    ]
}

#[function_component(SearchTopicsView)]
pub fn search_topics_view() -> Html {
    let table = use_table(DEFAULT_PAGE_SIZE);
    let rows = use_state(Vec::<SearchTopic>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        let set_total_items = table.set_total_items.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match api
                    .list_search_topics(&ListParams::new(1, RANKING_FETCH_SIZE))
                    .await
                {
                    Ok(response) => {
                        set_total_items.emit(response.items.len() as u64);
                        rows.set(response.items);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando búsquedas: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="list-view search-topics-view">
            <div class="view-toolbar">
                <h2>{"Ranking de búsquedas"}</h2>
            </div>

            if let Some(error) = error.as_ref() {
                <div class="view-error">{error.clone()}</div>
            }

            if *loading {
                <div class="view-loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <DataTable<SearchTopic>
                    columns={columns()}
                    rows={(*rows).clone()}
                    table={(*table.state).clone()}
                    on_sort={table.toggle_sort.clone()}
                    on_toggle_detail={table.toggle_detail.clone()}
                    row_id={Callback::from(|t: SearchTopic| t.id.clone())}
                    client_mode=true
                />
                <Pager
                    pagination={table.state.pagination.clone()}
                    on_page={table.set_page.clone()}
                />
            }
        </div>
    }
}
