// ============================================================================
// EXPLORE TOPICS VIEW - Topics de la pestaña explore
// ============================================================================

use crate::components::{ColumnSpec, DataTable, Pager};
use crate::hooks::use_table;
use crate::models::{ExploreTopic, ListParams};
use crate::services::ApiClient;
use crate::state::CellValue;
use crate::utils::{Debouncer, RequestSeq, DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn render_title(topic: &ExploreTopic) -> Html {
    html! { <span class="cell-primary">{topic.title.clone()}</span> }
}

fn render_posts(topic: &ExploreTopic) -> Html {
    html! { {topic.post_count} }
}

fn render_views(topic: &ExploreTopic) -> Html {
    html! { {topic.view_count} }
}

fn render_hashtag(topic: &ExploreTopic) -> Html {
    match &topic.hashtag {
        Some(tag) => html! { <span class="cell-hashtag">{format!("#{}", tag)}</span> },
        None => html! { <span class="cell-missing">{"—"}</span> },
    }
}

fn columns() -> Vec<ColumnSpec<ExploreTopic>> {
    vec![
        ColumnSpec {
            id: "title",
            header: "Topic",
            sortable: true,
            accessor: Some(|t| CellValue::text(t.title.clone())),
            render: render_title,
        },
        ColumnSpec {
            id: "post_count",
            header: "Posts",
            sortable: true,
            accessor: Some(|t| CellValue::number(t.post_count as f64)),
            render: render_posts,
        },
        ColumnSpec {
            id: "view_count",
            header: "Vistas",
            sortable: true,
            accessor: Some(|t| CellValue::number(t.view_count as f64)),
            render: render_views,
        },
        ColumnSpec {
            id: "hashtag",
            header: "Hashtag",
            sortable: false,
            accessor: None,
            render: render_hashtag,
        },
    ]
}

#[function_component(ExploreTopicsView)]
pub fn explore_topics_view() -> Html {
    let table = use_table(DEFAULT_PAGE_SIZE);
    let rows = use_state(Vec::<ExploreTopic>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search_input = use_state(String::new);
    let search = use_state(String::new);
    let seq = use_mut_ref(RequestSeq::new);

    let debouncer = {
        let search = search.clone();
        let set_page = table.set_page.clone();
        use_mut_ref(move || {
            Debouncer::new(SEARCH_DEBOUNCE_MS, move |value: String| {
                set_page.emit(1);
                search.set(value);
            })
        })
    };

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
        );
        use_effect_with(deps, move |(page, size, sort, search)| {
            let mut params = ListParams::new(*page, *size);
            params.search = (!search.is_empty()).then(|| search.clone());
            params.sort_by = sort.0.clone();
            params.sort_order = sort.1.clone();

            let seq_no = seq.begin();
            loading.set(true);

            spawn_local(async move {
                let api = ApiClient::new();
                let result = api.list_explore_topics(&params).await;
                if !seq.is_current(seq_no) {
                    log::info!("⏭️ Respuesta de explore obsoleta, descartada");
                    return;
                }
                match result {
                    Ok(response) => {
                        set_total_items.emit(response.total);
                        rows.set(response.items);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando explore topics: {}", e);
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

    html! {
        <div class="list-view explore-topics-view">
            <div class="view-toolbar">
                <h2>{"Explorar"}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Buscar topic..."
                    value={(*search_input).clone()}
                    oninput={on_search_input}
                />
            </div>

            if let Some(error) = error.as_ref() {
                <div class="view-error">{error.clone()}</div>
            }

            if *loading && rows.is_empty() {
                <div class="view-loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <DataTable<ExploreTopic>
                    columns={columns()}
                    rows={(*rows).clone()}
                    table={(*table.state).clone()}
                    on_sort={table.toggle_sort.clone()}
                    on_toggle_detail={table.toggle_detail.clone()}
                    row_id={Callback::from(|t: ExploreTopic| t.id.clone())}
                />
                <Pager
                    pagination={table.state.pagination.clone()}
                    on_page={table.set_page.clone()}
                />
            }
        </div>
    }
}
