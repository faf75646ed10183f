use super::models::CartItem;
use super::store::{CartStore, CartStoreError};
use crate::product::models::Product;
use bigdecimal::BigDecimal;

/// The in-session shopping cart. Owns its line items outright; durable
/// storage happens only through the explicit [`Cart::from_store`] /
/// [`Cart::save_to`] pair, never as a hidden side effect of a mutation.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    pub fn with_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Restores a previously saved cart, falling back to an empty one when
    /// nothing was saved or the stored payload does not parse.
    pub fn from_store<S: CartStore>(store: &S) -> Self {
        match store.load() {
            Ok(Some(items)) => Cart { items },
            _ => Cart::new(),
        }
    }

    pub fn save_to<S: CartStore>(&self, store: &S) -> Result<(), CartStoreError> {
        store.save(&self.items)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of a product variant. An entry with the same
    /// (product id, size, color) absorbs the quantity; anything else
    /// appends. No stock check is made here, matching the storefront.
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: i32,
        size: Option<String>,
        color: Option<String>,
    ) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id && item.size == size && item.color == color)
        {
            existing.quantity += quantity;
            return;
        }

        self.items.push(CartItem {
            product,
            quantity,
            size,
            color,
        });
    }

    /// Removes the matching variant entry; absent entries are a no-op.
    pub fn remove_item(&mut self, product_id: i32, size: Option<&str>, color: Option<&str>) {
        self.items
            .retain(|item| !item.matches(product_id, size, color));
    }

    /// A non-positive quantity means "remove"; otherwise the matching
    /// entry's quantity is replaced outright.
    pub fn update_quantity(
        &mut self,
        product_id: i32,
        quantity: i32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        if quantity <= 0 {
            self.remove_item(product_id, size, color);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, size, color))
        {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    // Recomputed on every call; the cart is small enough that caching
    // would only add invalidation to get wrong.
    pub fn total_price(&self) -> BigDecimal {
        self.items.iter().fold(BigDecimal::from(0), |acc, item| {
            acc + &item.product.price * BigDecimal::from(item.quantity)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn test_product(id: i32, price: &str) -> Product {
        Product {
            id,
            name: format!("Helmet {}", id),
            description: "Full-face helmet".to_owned(),
            product_type: "helmet".to_owned(),
            price: price.parse().unwrap(),
            category_id: Some(1),
            brand: "Shoei".to_owned(),
            sizes: vec!["M".to_owned(), "L".to_owned()],
            colors: vec!["Black".to_owned()],
            image_url: "https://example.com/helmet.jpg".to_owned(),
            stock_quantity: 10,
            in_stock: true,
            featured: false,
            created_at: DateTime::UNIX_EPOCH.naive_utc(),
            updated_at: DateTime::UNIX_EPOCH.naive_utc(),
        }
    }

    #[test]
    fn add_item_merges_matching_variant() {
        let mut cart = Cart::new();
        let product = test_product(1, "1000.00");

        cart.add_item(product.clone(), 2, Some("M".to_owned()), Some("Black".to_owned()));
        cart.add_item(product, 3, Some("M".to_owned()), Some("Black".to_owned()));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn add_item_keeps_distinct_variants_apart() {
        let mut cart = Cart::new();
        let product = test_product(1, "1000.00");

        cart.add_item(product.clone(), 2, Some("M".to_owned()), Some("Black".to_owned()));
        cart.add_item(product, 1, Some("L".to_owned()), None);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), "3000.00".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn totals_follow_quantities_and_prices() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "2500.00"), 2, None, None);
        cart.add_item(test_product(2, "150.50"), 3, None, None);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), "5451.50".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn totals_on_empty_cart_are_zero() {
        let cart = Cart::new();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), BigDecimal::from(0));
    }

    #[test]
    fn update_quantity_replaces_rather_than_adds() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "1000.00"), 2, Some("M".to_owned()), None);

        cart.update_quantity(1, 7, Some("M"), None);

        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn update_quantity_zero_matches_remove_item() {
        let mut updated = Cart::new();
        let mut removed = Cart::new();
        let product = test_product(1, "1000.00");

        updated.add_item(product.clone(), 2, Some("M".to_owned()), Some("Black".to_owned()));
        removed.add_item(product, 2, Some("M".to_owned()), Some("Black".to_owned()));

        updated.update_quantity(1, 0, Some("M"), Some("Black"));
        removed.remove_item(1, Some("M"), Some("Black"));

        assert_eq!(updated.items(), removed.items());
        assert!(updated.is_empty());
    }

    #[test]
    fn update_quantity_negative_removes_entry() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "1000.00"), 2, None, None);

        cart.update_quantity(1, -1, None, None);

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_item_on_absent_variant_is_a_noop() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "1000.00"), 2, Some("M".to_owned()), None);

        cart.remove_item(1, Some("L"), None);
        cart.remove_item(99, Some("M"), None);

        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "1000.00"), 2, None, None);
        cart.add_item(test_product(2, "500.00"), 1, None, None);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }
}
