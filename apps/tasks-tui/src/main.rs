mod api;
mod app;
mod board;
mod config;
mod ui;

use core_config::tracing::install_color_eyre;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Colored error reports; no tracing subscriber here, the terminal
    // belongs to the TUI.
    install_color_eyre();

    let config = config::ClientConfig::from_env();
    let api = api::TasksApi::new(config.api_url);

    app::App::new(api).run().await
}
