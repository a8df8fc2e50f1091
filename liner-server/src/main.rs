use std::net::SocketAddr;

use liner_server::engine::SearchConfig;
use liner_server::network::demo_network;
use liner_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("liner_server=info")),
        )
        .init();

    // Built-in world catalog; replace with a master-data feed when wiring
    // this into a real deployment.
    let network = demo_network();
    tracing::info!(
        ports = network.port_count(),
        services = network.services().len(),
        connections = network.connections().len(),
        "network snapshot loaded"
    );

    let state = AppState::new(network, SearchConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("LINER_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Liner Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health             - Health check");
    println!("  GET /api/ports          - Port catalog");
    println!("  GET /api/carriers       - Carrier catalog");
    println!("  GET /api/routes/search  - Search routes between two ports");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
