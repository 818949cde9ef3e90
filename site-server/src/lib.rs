pub mod logging;
pub mod pages;

use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use product_desk_core::manager::ProductManager;
use product_desk_core::products_api::ProductsApiClient;
use product_desk_core::worldtime::WorldTimeClient;

use crate::logging::request_logging_middleware;

/// Runtime settings, read once at startup. The defaults point at the public
/// hosted services the demo runs against.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub products_api_url: String,
    pub worldtime_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3030".to_string()),
            products_api_url: std::env::var("PRODUCTS_API_URL").unwrap_or_else(|_| {
                "https://66efbac3f2a8bce81be3efe8.mockapi.io/api/v1".to_string()
            }),
            worldtime_api_url: std::env::var("WORLDTIME_API_URL").unwrap_or_else(|_| {
                "https://worldtimeapi.org/api/timezone/America/Vancouver".to_string()
            }),
        }
    }
}

/// Shared server state. The product manager lives behind a lock because
/// page handlers mutate it; each handler holds the lock for exactly one
/// widget operation.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<Mutex<ProductManager>>,
    pub worldtime: WorldTimeClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let client = ProductsApiClient::new(&config.products_api_url);
        Self {
            manager: Arc::new(Mutex::new(ProductManager::new(client))),
            worldtime: WorldTimeClient::new(&config.worldtime_api_url),
        }
    }
}

/// Form fields exactly as the products page posts them. `price` arrives as
/// text; anything that does not parse becomes 0 and so fails the
/// positive-price gate with the usual validation message.
#[derive(Debug, Deserialize)]
pub struct ProductFormData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub price: String,
}

impl ProductFormData {
    fn apply_to(self, manager: &mut ProductManager) {
        manager.form.id = self.id;
        manager.form.product = self.product;
        manager.form.price = self.price.parse::<f64>().unwrap_or(0.0);
    }
}

pub fn create_site_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(|| async { "OK" }))
        .route("/mock", get(time_page))
        .route("/products", get(products_page))
        .route("/products/insert", post(insert_product))
        .route("/products/update", post(update_product))
        .route("/products/delete", post(delete_product))
        .route("/products/select/:id", get(select_product))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::permissive()) // Enable CORS for browser requests
        .with_state(state)
}

async fn index_page() -> Html<String> {
    Html(pages::render_index_page())
}

/// One uncached fetch per render; a fetch failure answers 500.
#[axum::debug_handler(state = AppState)]
async fn time_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match state.worldtime.fetch_timezone().await {
        Ok(record) => Ok(Html(pages::render_time_page(&record))),
        Err(e) => {
            error!("❌ Timezone fetch failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[axum::debug_handler(state = AppState)]
async fn products_page(State(state): State<AppState>) -> Html<String> {
    let manager = state.manager.lock().await;
    Html(pages::render_products_page(&manager))
}

#[axum::debug_handler(state = AppState)]
async fn insert_product(
    State(state): State<AppState>,
    Form(form): Form<ProductFormData>,
) -> Redirect {
    info!("➕ Insert requested for '{}'", form.product);

    let mut manager = state.manager.lock().await;
    form.apply_to(&mut manager);
    manager.insert_product().await;

    Redirect::to("/products")
}

#[axum::debug_handler(state = AppState)]
async fn update_product(
    State(state): State<AppState>,
    Form(form): Form<ProductFormData>,
) -> Redirect {
    info!("✏️ Update requested for id '{}'", form.id);

    let mut manager = state.manager.lock().await;
    form.apply_to(&mut manager);
    manager.update_product().await;

    Redirect::to("/products")
}

#[axum::debug_handler(state = AppState)]
async fn delete_product(
    State(state): State<AppState>,
    Form(form): Form<ProductFormData>,
) -> Redirect {
    info!("🗑️ Delete requested for id '{}'", form.id);

    let mut manager = state.manager.lock().await;
    form.apply_to(&mut manager);
    manager.delete_product().await;

    Redirect::to("/products")
}

#[axum::debug_handler(state = AppState)]
async fn select_product(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    info!("📄 Selection requested for id '{}'", id);

    let mut manager = state.manager.lock().await;
    manager.select_product(&id).await;

    Redirect::to("/products")
}
