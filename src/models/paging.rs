// ============================================================================
// PAGING - Contrato de listado paginado con el backend
// ============================================================================
// Todos los list-services comparten este contrato: parámetros de página,
// búsqueda y sort; respuesta con los items ya ordenados/filtrados/paginados
// por el servidor (modo server-pagination).
// ============================================================================

use serde::Deserialize;

/// Parámetros de un request de listado.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: None,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Pares clave/valor para el query string, listos para el builder HTTP
    /// (que se encarga del percent-encoding). El search vacío se omite y
    /// sortOrder solo acompaña a sortBy.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(ref search) = self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        if let Some(ref sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
            if let Some(ref order) = self.sort_order {
                pairs.push(("sortOrder", order.clone()));
            }
        }
        pairs
    }
}

/// Página devuelta por un list-service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pares_basicos() {
        let params = ListParams::new(2, 20);
        assert_eq!(
            params.query_pairs(),
            vec![("page", "2".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn pares_con_search_y_sort() {
        let mut params = ListParams::new(1, 10);
        params.search = Some("dance trend".to_string());
        params.sort_by = Some("trend_score".to_string());
        params.sort_order = Some("desc".to_string());
        assert_eq!(
            params.query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("size", "10".to_string()),
                ("search", "dance trend".to_string()),
                ("sortBy", "trend_score".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn search_vacio_se_omite() {
        let mut params = ListParams::new(1, 10);
        params.search = Some(String::new());
        assert_eq!(
            params.query_pairs(),
            vec![("page", "1".to_string()), ("size", "10".to_string())]
        );
    }

    #[test]
    fn sort_order_requiere_sort_by() {
        let mut params = ListParams::new(1, 10);
        params.sort_order = Some("desc".to_string());
        assert_eq!(
            params.query_pairs(),
            vec![("page", "1".to_string()), ("size", "10".to_string())]
        );
    }
}
