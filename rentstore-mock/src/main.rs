use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rentstore_mock::{create_router, AppState};

/// In-memory store API for manual provider checks
#[derive(Parser)]
#[command(name = "rentstore-mock")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Token clients must send in x-auth-token
    #[arg(long, env = "SERVICE_TOKEN", default_value = "secret", hide_env_values = true)]
    token: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rentstore_mock=info".parse()?))
        .init();

    let args = Args::parse();
    let app = create_router(AppState::new(&args.token));

    info!("Mock store listening on http://{}", args.listen);
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
