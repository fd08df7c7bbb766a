use site_server::{init_logger_with_file, Config, Server, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("Site server starting (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
