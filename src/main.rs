use std::str::FromStr;

use estate_desk::app::App;
use estate_desk::config::{default_webview_data_dir, AppConfig, LOG_ENV};

fn init_tracing() {
    let env = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() {
    init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            std::process::exit(1);
        }
    };
    let webview_data_dir = match default_webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("failed to prepare WebView data directory: {err:#}");
            std::process::exit(1);
        }
    };
    tracing::info!(export_dir = %config.export_dir.display(), "starting estate desk");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Estate Desk"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
