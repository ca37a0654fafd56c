/// Claves fijas de localStorage para la sesión persistida.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "trendscope_auth_token";
pub const STORAGE_KEY_AUTH_USER: &str = "trendscope_auth_user";

/// Ventana de debounce para filtros de búsqueda (ms).
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Tamaño de página por defecto de las tablas.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
