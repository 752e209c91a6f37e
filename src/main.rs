#[cfg(target_arch = "wasm32")]
mod app;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::app::App;
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
