use study_helper_server::{app_state::AppState, config::Config, logging, server};

type StartupResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() {
    let config = Config::default();

    if let Err(err) = logging::init_logging(&config) {
        eprintln!("failed to initialise logging: {}", err);
    }

    log::info!("Starting Study Helper MCP server...");

    if let Err(err) = run(config).await {
        log::error!("Server error: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> StartupResult {
    let state = AppState::new(config);
    server::serve_stdio(state).await?;
    Ok(())
}
