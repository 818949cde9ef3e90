use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::{Product, ProductPayload};

#[derive(Error, Debug)]
pub enum ProductsApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server error: {status}")]
    ServerError { status: u16 },
}

pub type Result<T> = std::result::Result<T, ProductsApiError>;

/// HTTP client for the hosted product collection. Success is judged by the
/// HTTP status alone; non-ok response bodies are never read.
#[derive(Debug, Clone)]
pub struct ProductsApiClient {
    client: Client,
    base_url: String,
}

impl ProductsApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);

        debug!("📋 Fetching products: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProductsApiError::ServerError {
                status: response.status().as_u16(),
            });
        }

        let products: Vec<Product> = response.json().await?;
        debug!("✅ Retrieved {} products", products.len());
        Ok(products)
    }

    pub async fn fetch_product(&self, id: &str) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);

        debug!("📄 Fetching product {}: {}", id, url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProductsApiError::ServerError {
                status: response.status().as_u16(),
            });
        }

        let product: Product = response.json().await?;
        Ok(product)
    }

    pub async fn insert_product(&self, payload: &ProductPayload) -> Result<Product> {
        let url = format!("{}/products", self.base_url);

        debug!("➕ Inserting product '{}': {}", payload.product, url);

        let response = self.client.post(&url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(ProductsApiError::ServerError {
                status: response.status().as_u16(),
            });
        }

        let created: Product = response.json().await?;
        debug!("✅ Inserted product with id {}", created.id);
        Ok(created)
    }

    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);

        debug!("✏️ Updating product {}: {}", id, url);

        let response = self.client.put(&url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(ProductsApiError::ServerError {
                status: response.status().as_u16(),
            });
        }

        let updated: Product = response.json().await?;
        debug!("✅ Updated product {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        let url = format!("{}/products/{}", self.base_url, id);

        debug!("🗑️ Deleting product {}: {}", id, url);

        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProductsApiError::ServerError {
                status: response.status().as_u16(),
            });
        }

        debug!("✅ Deleted product {}", id);
        Ok(())
    }
}
