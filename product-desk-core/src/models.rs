use serde::{Deserialize, Serialize};

/// A product as the remote collection returns it. The `id` is opaque and
/// server-assigned; clients only ever hold transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub product: String,
    pub price: f64,
}

// Request body for insert and update. The id is never sent - the server
// assigns it on insert and the item URL names it on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub product: String,
    pub price: f64,
}

/// Form state for the product manager: one id/name/price triple, reused by
/// insert (id ignored), update and delete (id names the target).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub product: String,
    pub price: f64,
}

impl ProductForm {
    /// Insert needs a name and a positive price. NaN is not positive.
    pub fn valid_for_insert(&self) -> bool {
        !self.product.is_empty() && self.price > 0.0
    }

    /// Update additionally needs the target id.
    pub fn valid_for_update(&self) -> bool {
        !self.id.is_empty() && !self.product.is_empty() && self.price > 0.0
    }

    /// Delete only needs the target id.
    pub fn valid_for_delete(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            product: self.product.clone(),
            price: self.price,
        }
    }

    /// Back to the initial state: empty id, empty name, price 0.
    pub fn reset(&mut self) {
        *self = ProductForm::default();
    }
}
