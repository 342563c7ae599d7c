pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use config::BuildMode;

fn log_level(mode: BuildMode) -> log::Level {
    match mode {
        BuildMode::Development => log::Level::Debug,
        BuildMode::Production => log::Level::Info,
    }
}

/// Browser entry point: panic hook and logger first, then config, then the app.
pub fn boot() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level(BuildMode::detect())) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }
    log::info!("Starting NEWWORK frontend: initializing runtime config");

    leptos::spawn_local(async move {
        let config = config::init().await;
        config::spawn_connectivity_probe(config);
        router::mount_app();
    });
}
