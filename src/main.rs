//! Browser entry point: installs the panic hook and console logger,
//! then mounts the application. Building for anything other than wasm
//! produces an inert binary; the crate is exercised natively through
//! its unit tests.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        reelist::net::api::log_key_status();
        leptos::mount::mount_to_body(reelist::app::App);
    }
}
