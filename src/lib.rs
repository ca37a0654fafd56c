// ============================================================================
// TRENDSCOPE ADMIN - Dashboard de analítica de tendencias TikTok (Rust/WASM)
// ============================================================================
// Capas:
// - Views: vistas por ruta (Yew function components)
// - Components: piezas reutilizables (tabla, pager, gate de acceso)
// - Hooks: estado compartido vía Context API
// - Services: SOLO comunicación API
// - State: lógica pura de tablas y sesión
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use app::App;
