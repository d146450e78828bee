use backend::api;
use backend::supervisor::{Supervisor, SupervisorConfig};

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenv::dotenv().ok();

    let config = SupervisorConfig::from_env();
    let supervisor = match Supervisor::start(config).await {
        Ok(supervisor) => supervisor,
        Err(err) => {
            error!("failed to start engine supervisor: {}", err);
            std::process::exit(1);
        }
    };
    if !supervisor.hint_available() {
        info!("hint engine not configured; /api/hint will return 503");
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let app = api::router(supervisor);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("API listening on {}", addr);
    let listener = TcpListener::bind(addr).await.expect("bind HTTP listener");
    axum::serve(listener, app).await.expect("serve HTTP");
}
