use trend_admin_pwa::App;

fn main() {
    console_error_panic_hook::set_once();
    if trend_admin_pwa::config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 TrendScope Admin starting...");

    yew::Renderer::<App>::new().render();
}
