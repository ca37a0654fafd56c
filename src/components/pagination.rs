// ============================================================================
// PAGINATION - Selector de página para las tablas
// ============================================================================
// Se renderiza solo cuando hay más de una página (convención de todas las
// vistas de listado: con 0 o 1 páginas el pager no se muestra).
// ============================================================================

use crate::state::PaginationState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub pagination: PaginationState,
    pub on_page: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let total_pages = props.pagination.total_pages();
    if total_pages <= 1 {
        return Html::default();
    }

    let page = props.pagination.page();

    let go = |target: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    html! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled={page <= 1}
                onclick={go(page.saturating_sub(1))}
            >
                {"‹"}
            </button>
            { for (1..=total_pages).map(|n| html! {
                <button
                    class={classes!("pager-btn", (n == page).then_some("current"))}
                    onclick={go(n)}
                >
                    {n}
                </button>
            }) }
            <button
                class="pager-btn"
                disabled={page >= total_pages}
                onclick={go(page + 1)}
            >
                {"›"}
            </button>
        </div>
    }
}
