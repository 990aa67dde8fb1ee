use mock_server::MockConfig;
use tokio::net::TcpListener;

fn env_or(var: &str, default: String) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let defaults = MockConfig::default();
    let config = MockConfig {
        api_key: env_or("TMDB_MOCK_API_KEY", defaults.api_key),
        read_access_token: env_or("TMDB_MOCK_TOKEN", defaults.read_access_token),
        session_id: env_or("TMDB_MOCK_SESSION_ID", defaults.session_id),
    };

    let port = env_or("PORT", "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    mock_server::run(listener, config).await
}
