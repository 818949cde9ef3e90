use tracing::info;

use site_server::{create_site_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = AppState::new(&config);

    info!("📦 Product API: {}", state.manager.lock().await.client().base_url());
    info!("🌍 Timezone API: {}", state.worldtime.url());

    // Mount event: load the product list once before the first render.
    {
        let mut manager = state.manager.lock().await;
        manager.refresh_products().await;
        info!("🔄 Initial product list: {} items", manager.products.len());
    }

    let router = create_site_router(state);

    let addr = config.bind_addr.parse::<std::net::SocketAddr>()?;
    info!("🚀 Starting site server on {}", addr);
    info!("   Time page:     http://{}/mock", addr);
    info!("   Products page: http://{}/products", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✅ Site server ready!");

    axum::serve(listener, router).await?;

    Ok(())
}
