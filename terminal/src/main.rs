use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use swap_terminal::app::{App, TradeState};
use swap_terminal::cli::Cli;
use swap_terminal::config::{Preferences, SwapConfig, TokenRegistry};
use swap_terminal::core::{QuoteService, WalletService};
use swap_terminal::debug::{init_logger, LogConfig};
use swap_terminal::services::{ExportWallet, QuoteClient};
use swap_terminal::ui::SwapTerminal;
use swap_terminal::utils::runtime::TOKIO_RT;

const WINDOW_TITLE: &str = "Swap Terminal";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(level) = &cli.log_level {
        log_config = log_config.with_level(level.clone());
    }
    init_logger(&log_config);

    let mut config = match SwapConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    cli.apply_to(&mut config);
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let quotes: Arc<dyn QuoteService> = match QuoteClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build quote client");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let wallet: Arc<dyn WalletService> = Arc::new(ExportWallet::new());

    let tokens = Arc::new(TokenRegistry::default());
    let initial = TradeState::from_query(&cli.query_params(), &tokens);
    let preferences = Preferences::load_or_default(&config.settings_path);

    // Debounce timers and requests are spawned from UI callbacks.
    let _runtime = TOKIO_RT.enter();

    let app = App::new(&config, initial, tokens, quotes, wallet, preferences);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 460.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SwapTerminal::new(app)))),
    );

    match result {
        Ok(()) => {
            tracing::info!("Swap terminal exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Window error");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
