use std::io::{self, IsTerminal};

use quiz_portal::{
    app_state::AppState,
    config::Config,
    handlers::{self, Console, TerminalInput},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!(
        "Starting quiz portal against {} (storage: {})",
        config.api_base_url,
        config.storage_path.display()
    );

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to start: {}", err);
            std::process::exit(1);
        }
    };

    // Piped input is read line by line; a real terminal goes through crossterm.
    let result = if io::stdin().is_terminal() {
        let mut console = Console::new(TerminalInput::new(), io::stdout());
        handlers::run(&mut console, &state).await
    } else {
        let mut console = Console::new(io::stdin().lock(), io::stdout());
        handlers::run(&mut console, &state).await
    };

    if let Err(err) = result {
        log::error!("Quiz portal stopped: {}", err);
        std::process::exit(1);
    }
}
