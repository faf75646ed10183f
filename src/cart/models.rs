use crate::product::models::Product;
use serde::{Deserialize, Serialize};

/// One pending purchase selection. Entries are unique per
/// (product id, size, color); the product is carried as a full snapshot
/// the same way the storefront keeps it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl CartItem {
    pub fn matches(&self, product_id: i32, size: Option<&str>, color: Option<&str>) -> bool {
        self.product.id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }
}
