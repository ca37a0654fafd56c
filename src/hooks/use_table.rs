// ============================================================================
// USE TABLE - Hook que expone TableState a las vistas de listado
// ============================================================================
// El estado vive detrás de use_reducer: cada mutación es una acción que se
// aplica sobre el estado VIGENTE, no sobre el snapshot del render que creó
// el callback. Así un callback viejo (p. ej. el del debouncer de búsqueda,
// creado una sola vez al montar) nunca pisa sort/página/totales posteriores.
// ============================================================================

use crate::state::TableState;
use std::rc::Rc;
use yew::prelude::*;

pub enum TableAction {
    ToggleSort(String),
    SetPage(u32),
    SetPageSize(u32),
    SetTotalItems(u64),
    ToggleDetail(String),
}

impl Reducible for TableState {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: TableAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TableAction::ToggleSort(column_id) => {
                next.sort.toggle(&column_id);
                // Cambiar el sort vuelve a la primera página.
                next.pagination.set_page(1);
            }
            TableAction::SetPage(page) => next.pagination.set_page(page),
            TableAction::SetPageSize(size) => next.pagination.set_page_size(size),
            TableAction::SetTotalItems(total) => next.pagination.set_total_items(total),
            TableAction::ToggleDetail(row_id) => next.toggle_detail(&row_id),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseTableHandle {
    pub state: UseReducerHandle<TableState>,
    pub toggle_sort: Callback<String>,
    pub set_page: Callback<u32>,
    pub set_page_size: Callback<u32>,
    pub set_total_items: Callback<u64>,
    pub toggle_detail: Callback<String>,
}

#[hook]
pub fn use_table(page_size: u32) -> UseTableHandle {
    let state = use_reducer(move || TableState::new(page_size));

    let toggle_sort = {
        let state = state.clone();
        Callback::from(move |column_id: String| state.dispatch(TableAction::ToggleSort(column_id)))
    };

    let set_page = {
        let state = state.clone();
        Callback::from(move |page: u32| state.dispatch(TableAction::SetPage(page)))
    };

    let set_page_size = {
        let state = state.clone();
        Callback::from(move |size: u32| state.dispatch(TableAction::SetPageSize(size)))
    };

    let set_total_items = {
        let state = state.clone();
        Callback::from(move |total: u64| state.dispatch(TableAction::SetTotalItems(total)))
    };

    let toggle_detail = {
        let state = state.clone();
        Callback::from(move |row_id: String| state.dispatch(TableAction::ToggleDetail(row_id)))
    };

    UseTableHandle {
        state,
        toggle_sort,
        set_page,
        set_page_size,
        set_total_items,
        toggle_detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortDirection;

    fn reduce(state: TableState, action: TableAction) -> TableState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn las_acciones_aplican_sobre_el_estado_vigente() {
        // El reset de página que dispara un filtro nuevo no borra el sort
        // ni el page_size elegidos después de montar la vista.
        let mut state = TableState::new(20);
        state = reduce(state, TableAction::SetTotalItems(100));
        state = reduce(state, TableAction::ToggleSort("trend_score".into()));
        state = reduce(state, TableAction::SetPageSize(50));
        state = reduce(state, TableAction::SetPage(1));
        assert_eq!(
            state.sort.direction_of("trend_score"),
            Some(SortDirection::Asc)
        );
        assert_eq!(state.pagination.page_size(), 50);
        assert_eq!(state.pagination.total_items(), 100);
    }

    #[test]
    fn total_del_backend_no_pisa_el_detalle_expandido() {
        // Una fila expandida mientras el fetch estaba en vuelo sobrevive
        // a la llegada del total.
        let mut state = TableState::new(20);
        state = reduce(state, TableAction::ToggleDetail("kw-7".into()));
        state = reduce(state, TableAction::SetTotalItems(23));
        assert!(state.is_expanded("kw-7"));
        assert_eq!(state.pagination.total_pages(), 2);
    }

    #[test]
    fn toggle_sort_vuelve_a_la_primera_pagina() {
        let mut state = TableState::new(20);
        state = reduce(state, TableAction::SetTotalItems(100));
        state = reduce(state, TableAction::SetPage(4));
        state = reduce(state, TableAction::ToggleSort("name".into()));
        assert_eq!(state.pagination.page(), 1);
        assert_eq!(state.sort.direction_of("name"), Some(SortDirection::Asc));
    }
}
