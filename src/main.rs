use billing_service::config::AppConfig;
use billing_service::{build_server, AppState};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let state = AppState::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    log::info!(
        "Starting server at http://{}:{} (GST rate {})",
        config.host,
        config.port,
        config.gst_rate
    );

    build_server(state, &config.host, config.port)?.await
}
