use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clipocr_config::Config;
use clipocr_config::log::LogConfig;
use clipocr_types::Notice;
use tokio::runtime::Runtime;

pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod state;


use self::cli::Cli;
use self::controller::AppController;
use self::logging::init_logging;
use self::state::AppState;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    match &config {
        Ok(config) => init_logging(&config.log),
        Err(_) => init_logging(&LogConfig::default()),
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    // Dialogs talk to the desktop portal through this runtime
    let _guard = runtime.enter();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config error: {}", e);
            clipocr_ui::show_notice(&Notice::error("Configuration error", e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    // Refuse to start without the language data
    if let Err(e) = clipocr_ocr::check_language_data(&config.ocr) {
        tracing::error!("{}", e);
        clipocr_ui::show_notice(&Notice::error("Missing language data", e.to_string()));
        return ExitCode::FAILURE;
    }

    match run(&runtime, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Backend tasks on the runtime, UI on the main thread.
///
/// Must be called with `runtime` entered.
fn run(runtime: &Runtime, config: Config) -> anyhow::Result<()> {
    let ui_config = config.clone();
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tracing::info!("Starting UI");
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_endpoints();
    let ui_result = clipocr_ui::ui_loop(&ui_config, app_to_ui_rx, ui_to_app_tx);

    tracing::info!("UI closed, shutting down");
    controller.shutdown();

    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => tracing::debug!("Task finished"),
                Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
                Err(e) => tracing::error!("Task panicked: {}", e),
            }
        }
    });

    ui_result
}
