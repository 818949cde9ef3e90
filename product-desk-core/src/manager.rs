// Product manager - central state for the product CRUD widget
// Separates state from page rendering

use tracing::{error, info};

use crate::models::{Product, ProductForm};
use crate::products_api::{ProductsApiClient, ProductsApiError};

/// State manager for the product widget.
/// Pure state - no page logic, just flat data slices and the five remote
/// operations. Each slice is overwritten by whichever operation ran last;
/// there is no cross-field consistency to maintain.
#[derive(Debug)]
pub struct ProductManager {
    // ---- Form State ----
    pub form: ProductForm,

    // ---- Feedback ----
    pub message: Option<String>,

    // ---- Collection State ----
    pub products: Vec<Product>,
    pub selected_product: Option<Product>,

    // ---- Internal (hidden from pages) ----
    client: ProductsApiClient,
}

impl ProductManager {
    /// Initial state: empty form, no message, empty list, no selection.
    pub fn new(client: ProductsApiClient) -> Self {
        Self {
            form: ProductForm::default(),
            message: None,
            products: Vec::new(),
            selected_product: None,
            client,
        }
    }

    pub fn client(&self) -> &ProductsApiClient {
        &self.client
    }

    // ============================================
    // PUBLIC API - page handlers call these
    // ============================================

    /// Fetch the whole collection. Runs once at mount and again after every
    /// successful insert/update/delete. On failure the current list is kept
    /// as-is, not cleared.
    pub async fn refresh_products(&mut self) {
        match self.client.fetch_products().await {
            Ok(products) => {
                info!("🔄 Refreshed product list: {} items", products.len());
                self.products = products;
            }
            Err(e) => {
                error!("❌ Failed to fetch products: {}", e);
                self.message = Some("Error occurred while fetching the products.".to_string());
            }
        }
    }

    /// Fetch one item and make it the current selection. A failure leaves
    /// any previous selection untouched.
    pub async fn select_product(&mut self, id: &str) {
        match self.client.fetch_product(id).await {
            Ok(product) => {
                info!("📄 Selected product {}", product.id);
                self.selected_product = Some(product);
            }
            Err(e) => {
                error!("❌ Failed to fetch product {}: {}", id, e);
                self.message = Some("Error occurred while fetching the product.".to_string());
            }
        }
    }

    /// POST the form's name and price as a new product. The form's id is
    /// ignored; the server assigns one. Only a successful insert resets the
    /// form and refreshes the list.
    pub async fn insert_product(&mut self) {
        if !self.form.valid_for_insert() {
            self.message = Some("Please provide valid product information.".to_string());
            return;
        }

        let payload = self.form.payload();
        match self.client.insert_product(&payload).await {
            Ok(created) => {
                info!("➕ Inserted product {}", created.id);
                self.message = Some("Product inserted successfully!".to_string());
                self.form.reset();
                self.refresh_products().await;
            }
            Err(ProductsApiError::ServerError { status }) => {
                error!("❌ Insert rejected with status {}", status);
                self.message = Some("Failed to insert product.".to_string());
            }
            Err(e) => {
                error!("❌ Insert failed: {}", e);
                self.message = Some("Error occurred while inserting the product.".to_string());
            }
        }
    }

    /// PUT the form's name and price to the item the form's id names. The
    /// form keeps its values on success as well as on failure.
    pub async fn update_product(&mut self) {
        if !self.form.valid_for_update() {
            self.message = Some("Please provide valid product information.".to_string());
            return;
        }

        let payload = self.form.payload();
        match self.client.update_product(&self.form.id, &payload).await {
            Ok(updated) => {
                info!("✏️ Updated product {}", updated.id);
                self.message = Some("Product updated successfully!".to_string());
                self.refresh_products().await;
            }
            Err(ProductsApiError::ServerError { status }) => {
                error!("❌ Update rejected with status {}", status);
                self.message = Some("Failed to update product.".to_string());
            }
            Err(e) => {
                error!("❌ Update failed: {}", e);
                self.message = Some("Error occurred while updating the product.".to_string());
            }
        }
    }

    /// DELETE the item the form's id names. Only a successful delete clears
    /// the form and refreshes the list; a rejected delete leaves both alone.
    pub async fn delete_product(&mut self) {
        if !self.form.valid_for_delete() {
            self.message = Some("Please provide a product ID to delete.".to_string());
            return;
        }

        match self.client.delete_product(&self.form.id).await {
            Ok(()) => {
                info!("🗑️ Deleted product {}", self.form.id);
                self.message = Some("Product deleted successfully!".to_string());
                self.form.reset();
                self.refresh_products().await;
            }
            Err(ProductsApiError::ServerError { status }) => {
                error!("❌ Delete rejected with status {}", status);
                self.message = Some("Failed to delete product.".to_string());
            }
            Err(e) => {
                error!("❌ Delete failed: {}", e);
                self.message = Some("Error occurred while deleting the product.".to_string());
            }
        }
    }
}
