// ============================================================================
// DATA TABLE - Tabla genérica dirigida por columnas
// ============================================================================
// Todas las vistas de listado se montan sobre este componente: columnas
// declarativas (accessor + render), headers ordenables con ciclo
// tri-estado, fila de detalle expandible (una sola a la vez) y dos modos:
// server-pagination (default: las filas llegan ya ordenadas y cortadas)
// o client (ordena y corta localmente un dataset completo).
// ============================================================================

use crate::state::table_state::{client_page, sort_rows, CellValue, SortDirection, TableState};
use yew::prelude::*;

/// Descriptor de columna: clave de acceso, header, render y flag sortable.
#[derive(Clone, PartialEq)]
pub struct ColumnSpec<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    /// Valor crudo de la celda, usado solo para ordenar.
    pub accessor: Option<fn(&T) -> CellValue>,
    pub render: fn(&T) -> Html,
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: PartialEq + Clone + 'static> {
    pub columns: Vec<ColumnSpec<T>>,
    pub rows: Vec<T>,
    pub table: TableState,
    pub on_sort: Callback<String>,
    pub on_toggle_detail: Callback<String>,
    /// Identificador único y estable de cada fila.
    pub row_id: Callback<T, String>,
    /// Panel de detalle para la fila expandida.
    #[prop_or_default]
    pub render_detail: Option<Callback<T, Html>>,
    /// true: ordenar/cortar localmente (dataset completo ya cargado).
    #[prop_or(false)]
    pub client_mode: bool,
}

#[function_component(DataTable)]
pub fn data_table<T: PartialEq + Clone + 'static>(props: &DataTableProps<T>) -> Html {
    let table = &props.table;

    // Orden visible. En modo server las filas llegan ya ordenadas por el
    // backend; en modo client se ordena con el accessor de la columna
    // activa (columna sin accessor → no-op estable).
    let order: Vec<usize> = if props.client_mode {
        let accessor = table
            .sort
            .column()
            .and_then(|col| props.columns.iter().find(|c| c.id == col))
            .and_then(|c| c.accessor);
        let order = match accessor {
            Some(acc) => sort_rows(&props.rows, &table.sort, Some(&acc)),
            None => sort_rows(&props.rows, &table.sort, None),
        };
        let paged = client_page(
            &order,
            table.pagination.page(),
            table.pagination.page_size(),
        );
        paged.to_vec()
    } else {
        (0..props.rows.len()).collect()
    };

    let detail_span = props.columns.len() + usize::from(props.render_detail.is_some());

    html! {
        <div class="data-table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        { for props.columns.iter().map(|col| render_header(col, table, &props.on_sort)) }
                        if props.render_detail.is_some() {
                            <th class="col-detail"></th>
                        }
                    </tr>
                </thead>
                <tbody>
                    if props.rows.is_empty() {
                        <tr class="empty-row">
                            <td colspan={detail_span.to_string()}>{"Sin resultados"}</td>
                        </tr>
                    } else {
                        { for order.iter().map(|&idx| {
                            let row = &props.rows[idx];
                            let id = props.row_id.emit(row.clone());
                            let expanded = table.is_expanded(&id);
                            render_row(props, row, id, expanded, detail_span)
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn render_header<T: PartialEq + Clone + 'static>(
    col: &ColumnSpec<T>,
    table: &TableState,
    on_sort: &Callback<String>,
) -> Html {
    if !col.sortable {
        return html! { <th>{col.header}</th> };
    }

    let indicator = match table.sort.direction_of(col.id) {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    };

    let onclick = {
        let on_sort = on_sort.clone();
        let id = col.id.to_string();
        Callback::from(move |_: MouseEvent| on_sort.emit(id.clone()))
    };

    html! {
        <th class="sortable" {onclick}>
            {col.header}{indicator}
        </th>
    }
}

fn render_row<T: PartialEq + Clone + 'static>(
    props: &DataTableProps<T>,
    row: &T,
    id: String,
    expanded: bool,
    detail_span: usize,
) -> Html {
    let toggle = props.render_detail.as_ref().map(|_| {
        let on_toggle = props.on_toggle_detail.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    });

    html! {
        <>
            <tr key={id.clone()} class={classes!(expanded.then_some("expanded"))}>
                { for props.columns.iter().map(|col| html! { <td>{(col.render)(row)}</td> }) }
                if let Some(toggle) = toggle {
                    <td class="col-detail">
                        <button class="btn-info" onclick={toggle}>
                            { if expanded { "▾" } else { "i" } }
                        </button>
                    </td>
                }
            </tr>
            if expanded {
                if let Some(render_detail) = props.render_detail.as_ref() {
                    <tr class="detail-row">
                        <td colspan={detail_span.to_string()}>
                            {render_detail.emit(row.clone())}
                        </td>
                    </tr>
                }
            }
        </>
    }
}
