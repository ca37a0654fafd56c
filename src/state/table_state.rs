// ============================================================================
// TABLE STATE - Motor genérico de tablas (sort + paginación + detalle)
// ============================================================================
// Lógica pura, sin DOM: las vistas le pasan las filas que devolvió el
// backend y este módulo calcula el orden visible, las transiciones del
// sort tri-estado y los límites de paginación. En modo server-pagination
// NO re-filtra ni re-corta: confía en la página que entregó el servicio.
// ============================================================================

use std::cmp::Ordering;

/// Dirección de ordenamiento activa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Valor para el parámetro `sortOrder` del backend.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Estado de sort: a lo sumo una columna activa a la vez.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn column(&self) -> Option<&str> {
        self.active.as_ref().map(|(col, _)| col.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, dir)| *dir)
    }

    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        match &self.active {
            Some((col, dir)) if col == column_id => Some(*dir),
            _ => None,
        }
    }

    /// Ciclo tri-estado al activar el header de una columna:
    /// ninguna → asc → desc → ninguna. Activar otra columna descarta la
    /// anterior y arranca en asc.
    pub fn toggle(&mut self, column_id: &str) {
        self.active = match self.active.take() {
            Some((col, SortDirection::Asc)) if col == column_id => {
                Some((col, SortDirection::Desc))
            }
            Some((col, SortDirection::Desc)) if col == column_id => None,
            _ => Some((column_id.to_string(), SortDirection::Asc)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Estado de paginación. Invariantes: `total_pages = ceil(total/size)` con
/// `size > 0` (0 en caso contrario) y `1 <= page <= max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u32,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_items: 0,
            total_pages: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Cambia de página con clamp a `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: u32) {
        let upper = self.total_pages.max(1);
        self.page = page.clamp(1, upper);
    }

    /// Cambiar el tamaño de página vuelve a la página 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
        self.page = 1;
        self.recompute();
    }

    pub fn set_total_items(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total_pages = if self.page_size == 0 {
            0
        } else {
            self.total_items.div_ceil(u64::from(self.page_size)) as u32
        };
        // Re-clampear por si la página actual quedó fuera de rango.
        self.page = self.page.clamp(1, self.total_pages.max(1));
    }
}

/// Valor crudo de una celda, usado por el comparador genérico.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn text(raw: impl Into<String>) -> Self {
        CellValue::Text(raw.into())
    }

    pub fn number(raw: impl Into<f64>) -> Self {
        CellValue::Number(raw.into())
    }

    /// `None` se representa como `Missing` (ordena al final siempre).
    pub fn opt_text(raw: Option<impl Into<String>>) -> Self {
        raw.map(CellValue::text).unwrap_or(CellValue::Missing)
    }

    pub fn opt_number(raw: Option<impl Into<f64>>) -> Self {
        raw.map(CellValue::number).unwrap_or(CellValue::Missing)
    }

    /// Valor numérico del contenido: números directos o strings numéricos.
    fn numeric(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Missing => None,
        }
    }

    /// Comparación genérica con dirección: numérica si ambos valores son
    /// numéricos, lexicográfica (case-insensitive) en caso contrario.
    /// `Missing` ordena al final en ambas direcciones; desc invierte solo
    /// las comparaciones decididas, así que Equal queda Equal y el sort
    /// sigue siendo estable.
    fn cmp_dir(&self, other: &CellValue, direction: SortDirection) -> Ordering {
        match (self, other) {
            (CellValue::Missing, CellValue::Missing) => Ordering::Equal,
            (CellValue::Missing, _) => Ordering::Greater,
            (_, CellValue::Missing) => Ordering::Less,
            (a, b) => {
                let ord = if let (Some(x), Some(y)) = (a.numeric(), b.numeric()) {
                    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
                } else {
                    let sa = a.as_text();
                    let sb = b.as_text();
                    sa.to_lowercase()
                        .cmp(&sb.to_lowercase())
                        .then_with(|| sa.cmp(&sb))
                };
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
        }
    }

    fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Missing => String::new(),
        }
    }
}

/// Calcula la permutación de índices a mostrar para `rows`.
///
/// - Sin sort activo o sin accessor conocido → orden de llegada (identidad).
///   Un id de columna sin accessor degrada a no-op estable, nunca a panic.
/// - Sort estable anclado al ascendente: las claves iguales conservan su
///   orden original de llegada en ambas direcciones, y `Missing` queda al
///   final también en ambas.
pub fn sort_rows<T>(
    rows: &[T],
    sort: &SortState,
    accessor: Option<&dyn Fn(&T) -> CellValue>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let (direction, accessor) = match (sort.direction(), accessor) {
        (Some(dir), Some(acc)) => (dir, acc),
        _ => return order,
    };

    let keys: Vec<CellValue> = rows.iter().map(accessor).collect();
    order.sort_by(|&a, &b| keys[a].cmp_dir(&keys[b], direction));
    order
}

/// Modo client-side: corta la sub-secuencia `[(page-1)*size, page*size)`.
/// Fuera de rango devuelve slice vacío, nunca panic.
pub fn client_page<T>(rows: &[T], page: u32, page_size: u32) -> &[T] {
    if page_size == 0 {
        return &rows[..0];
    }
    let start = (page.max(1) as usize - 1).saturating_mul(page_size as usize);
    if start >= rows.len() {
        return &rows[..0];
    }
    let end = (start + page_size as usize).min(rows.len());
    &rows[start..end]
}

/// Estado completo de una tabla: sort + paginación + fila expandida.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort: SortState,
    pub pagination: PaginationState,
    expanded_row: Option<String>,
}

impl TableState {
    pub fn new(page_size: u32) -> Self {
        Self {
            sort: SortState::default(),
            pagination: PaginationState::new(page_size),
            expanded_row: None,
        }
    }

    /// Parámetros de sort para el list-service (`sortBy`/`sortOrder`).
    pub fn sort_params(&self) -> (Option<String>, Option<String>) {
        match (self.sort.column(), self.sort.direction()) {
            (Some(col), Some(dir)) => {
                (Some(col.to_string()), Some(dir.as_param().to_string()))
            }
            _ => (None, None),
        }
    }

    /// Toggle de detalle: una sola fila expandida a la vez. Expandir otra
    /// fila colapsa implícitamente la anterior.
    pub fn toggle_detail(&mut self, row_id: &str) {
        if self.expanded_row.as_deref() == Some(row_id) {
            self.expanded_row = None;
        } else {
            self.expanded_row = Some(row_id.to_string());
        }
    }

    pub fn expanded_row(&self) -> Option<&str> {
        self.expanded_row.as_deref()
    }

    pub fn is_expanded(&self, row_id: &str) -> bool {
        self.expanded_row.as_deref() == Some(row_id)
    }

    pub fn collapse_detail(&mut self) {
        self.expanded_row = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_accessor(row: &i64) -> CellValue {
        CellValue::Number(*row as f64)
    }

    #[test]
    fn ciclo_tri_estado_del_sort() {
        let mut sort = SortState::default();
        sort.toggle("score");
        assert_eq!(sort.direction_of("score"), Some(SortDirection::Asc));
        sort.toggle("score");
        assert_eq!(sort.direction_of("score"), Some(SortDirection::Desc));
        sort.toggle("score");
        assert_eq!(sort.column(), None);
        // El cuarto click repite asc.
        sort.toggle("score");
        assert_eq!(sort.direction_of("score"), Some(SortDirection::Asc));
    }

    #[test]
    fn cambiar_de_columna_descarta_la_anterior() {
        let mut sort = SortState::default();
        sort.toggle("score");
        sort.toggle("score"); // score desc
        sort.toggle("name");
        assert_eq!(sort.direction_of("name"), Some(SortDirection::Asc));
        assert_eq!(sort.direction_of("score"), None);
    }

    #[test]
    fn sort_numerico_estable_en_ambas_direcciones() {
        let rows = vec![30i64, 5, 100, 5];
        let mut sort = SortState::default();
        sort.toggle("value");

        let asc = sort_rows(&rows, &sort, Some(&numeric_accessor));
        // [5(idx1), 5(idx3), 30, 100]: los dos 5 conservan orden de llegada.
        assert_eq!(asc, vec![1, 3, 0, 2]);

        sort.toggle("value");
        let desc = sort_rows(&rows, &sort, Some(&numeric_accessor));
        // [100, 30, 5(idx1), 5(idx3)]: también en desc.
        assert_eq!(desc, vec![2, 0, 1, 3]);
    }

    #[test]
    fn strings_numericos_comparan_como_numeros() {
        let rows = vec!["30".to_string(), "5".to_string(), "100".to_string()];
        let accessor = |row: &String| CellValue::Text(row.clone());
        let mut sort = SortState::default();
        sort.toggle("count");
        let asc = sort_rows(&rows, &sort, Some(&accessor));
        assert_eq!(asc, vec![1, 0, 2]); // 5 < 30 < 100, no lexicográfico
    }

    #[test]
    fn missing_ordena_al_final_en_ambas_direcciones() {
        let rows = vec![Some(2.0f64), None, Some(1.0)];
        let accessor = |row: &Option<f64>| CellValue::opt_number(*row);
        let mut sort = SortState::default();
        sort.toggle("growth");

        let asc = sort_rows(&rows, &sort, Some(&accessor));
        assert_eq!(asc, vec![2, 0, 1]);

        sort.toggle("growth");
        let desc = sort_rows(&rows, &sort, Some(&accessor));
        assert_eq!(desc, vec![0, 2, 1]);
    }

    #[test]
    fn desc_con_missing_y_claves_iguales() {
        // Un solo comparador resuelve ambos casos a la vez: Missing al
        // final y las claves iguales en orden de llegada.
        let rows = vec![Some(5.0f64), None, Some(5.0), Some(9.0)];
        let accessor = |row: &Option<f64>| CellValue::opt_number(*row);
        let mut sort = SortState::default();
        sort.toggle("growth");
        sort.toggle("growth"); // desc
        let desc = sort_rows(&rows, &sort, Some(&accessor));
        assert_eq!(desc, vec![3, 0, 2, 1]);
    }

    #[test]
    fn accessor_desconocido_es_identidad() {
        let rows = vec![3i64, 1, 2];
        let mut sort = SortState::default();
        sort.toggle("ghost_column");
        let order = sort_rows(&rows, &sort, None);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn sin_sort_activo_orden_de_llegada() {
        let rows = vec![3i64, 1, 2];
        let sort = SortState::default();
        let order = sort_rows(&rows, &sort, Some(&numeric_accessor));
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn paginacion_con_clamp() {
        let mut pagination = PaginationState::new(20);
        pagination.set_total_items(45);
        assert_eq!(pagination.total_pages(), 3);

        pagination.set_page(0);
        assert_eq!(pagination.page(), 1);
        pagination.set_page(99);
        assert_eq!(pagination.page(), 3);

        // Cambiar page_size resetea a página 1 y recalcula.
        pagination.set_page_size(10);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.total_pages(), 5);
    }

    #[test]
    fn dataset_vacio_no_muestra_pager() {
        let mut pagination = PaginationState::new(20);
        pagination.set_total_items(0);
        assert_eq!(pagination.total_pages(), 0);
        assert_eq!(pagination.page(), 1);

        let mut degenerate = PaginationState::new(0);
        degenerate.set_total_items(10);
        assert_eq!(degenerate.total_pages(), 0);
    }

    #[test]
    fn modo_server_confia_en_el_total_del_backend() {
        // 23 keywords, páginas de 20: el engine solo expone la cuenta,
        // no re-corta los items que llegaron.
        let mut table = TableState::new(20);
        table.pagination.set_total_items(23);
        assert_eq!(table.pagination.total_pages(), 2);
        table.pagination.set_page(2);
        assert_eq!(table.pagination.page(), 2);
    }

    #[test]
    fn modo_client_corta_la_pagina() {
        let rows: Vec<u32> = (0..23).collect();
        assert_eq!(client_page(&rows, 1, 20).len(), 20);
        let last = client_page(&rows, 2, 20);
        assert_eq!(last, &[20, 21, 22]);
        assert!(client_page(&rows, 3, 20).is_empty());
        assert!(client_page(&rows, 1, 0).is_empty());
    }

    #[test]
    fn toggle_de_detalle_una_sola_fila() {
        let mut table = TableState::new(20);
        table.toggle_detail("kw-x");
        assert!(table.is_expanded("kw-x"));
        // Expandir otra colapsa la anterior.
        table.toggle_detail("kw-y");
        assert!(table.is_expanded("kw-y"));
        assert!(!table.is_expanded("kw-x"));
        // Toggle de la expandida la colapsa.
        table.toggle_detail("kw-y");
        assert_eq!(table.expanded_row(), None);
    }

    #[test]
    fn sort_params_para_el_backend() {
        let mut table = TableState::new(20);
        assert_eq!(table.sort_params(), (None, None));
        table.sort.toggle("rank");
        assert_eq!(
            table.sort_params(),
            (Some("rank".to_string()), Some("asc".to_string()))
        );
    }
}
