// ============================================================================
// STATE MODULE - Lógica pura de tablas (sin DOM)
// ============================================================================

pub mod table_state;

pub use table_state::{
    client_page, sort_rows, CellValue, PaginationState, SortDirection, SortState, TableState,
};
