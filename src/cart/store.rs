use super::models::CartItem;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed storage key, the same one the storefront used in local storage.
pub const STORAGE_KEY: &str = "cart";

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("failed to access cart storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode cart items: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait CartStore {
    /// Returns the saved items, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<CartItem>>, CartStoreError>;
    fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError>;
}

/// File-backed analog of the browser's local storage: one JSON array
/// under the fixed key, in a directory the caller owns.
#[derive(Debug)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileCartStore {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CartStoreError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let items = serde_json::from_str(&payload)?;
        Ok(Some(items))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError> {
        let payload = serde_json::to_string(items)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::product::models::Product;
    use chrono::DateTime;

    fn test_product(id: i32) -> Product {
        Product {
            id,
            name: "Riding Gloves".to_owned(),
            description: "All-weather gloves".to_owned(),
            product_type: "gloves".to_owned(),
            price: "4500.00".parse().unwrap(),
            category_id: None,
            brand: "Alpinestars".to_owned(),
            sizes: vec!["S".to_owned(), "M".to_owned()],
            colors: vec![],
            image_url: "https://example.com/gloves.jpg".to_owned(),
            stock_quantity: 4,
            in_stock: true,
            featured: false,
            created_at: DateTime::UNIX_EPOCH.naive_utc(),
            updated_at: DateTime::UNIX_EPOCH.naive_utc(),
        }
    }

    #[test]
    fn saved_cart_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        let mut cart = Cart::new();
        cart.add_item(test_product(1), 2, Some("M".to_owned()), None);
        cart.save_to(&store).unwrap();

        let reloaded = Cart::from_store(&store);

        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(reloaded.total_items(), 2);
    }

    #[test]
    fn missing_storage_loads_an_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        let cart = Cart::from_store(&store);

        assert!(cart.is_empty());
    }

    #[test]
    fn corrupt_storage_loads_an_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        let cart = Cart::from_store(&store);

        assert!(cart.is_empty());
    }

    #[test]
    fn cleared_cart_stays_empty_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        let mut cart = Cart::new();
        cart.add_item(test_product(1), 3, None, None);
        cart.save_to(&store).unwrap();

        cart.clear();
        cart.save_to(&store).unwrap();

        let reloaded = Cart::from_store(&store);

        assert!(reloaded.is_empty());
    }
}
