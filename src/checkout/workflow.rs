use super::form::CheckoutForm;
use crate::cart::Cart;
use crate::order::models::{CreateOrderRequest, NewOrder, OrderItemPayload};
use bigdecimal::BigDecimal;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: i32,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("order request was rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("failed to reach the store: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Invalid(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Submission seam to `POST /api/orders`. The workflow never retries.
pub trait OrderGateway {
    async fn submit(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderConfirmation, GatewayError>;
}

/// Materializes the cart into the exact `{order, items}` body the store
/// expects: totals scaled to two decimals, statuses forced to pending,
/// product name and price denormalized per line.
pub fn build_order_request(cart: &Cart, form: &CheckoutForm) -> CreateOrderRequest {
    let order = NewOrder {
        user_id: None,
        customer_name: form.customer_name.clone(),
        customer_email: form.customer_email.clone(),
        customer_phone: form.customer_phone.clone(),
        shipping_address: form.shipping_address.clone(),
        total_amount: cart.total_price().with_scale(2),
        status: "pending".to_owned(),
        payment_status: "pending".to_owned(),
    };

    let items = cart
        .items()
        .iter()
        .map(|item| OrderItemPayload {
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            product_price: item.product.price.clone(),
            quantity: item.quantity,
            size: item.size.clone(),
            color: item.color.clone(),
            subtotal: (&item.product.price * BigDecimal::from(item.quantity)).with_scale(2),
        })
        .collect();

    CreateOrderRequest { order, items }
}

/// Runs a checkout end to end. An empty cart is rejected before any
/// gateway call; on success the cart is cleared and the confirmed order
/// id returned; on failure the cart is left exactly as it was so the
/// customer can retry.
pub async fn place_order<G: OrderGateway>(
    cart: &mut Cart,
    form: &CheckoutForm,
    gateway: &G,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    form.validate()?;

    let request = build_order_request(cart, form);
    let confirmation = gateway.submit(&request).await?;

    cart.clear();

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::models::Product;
    use chrono::DateTime;
    use std::cell::RefCell;

    fn test_product(id: i32, price: &str) -> Product {
        Product {
            id,
            name: format!("Bell Custom {}", id),
            description: "Open-face helmet".to_owned(),
            product_type: "helmet".to_owned(),
            price: price.parse().unwrap(),
            category_id: Some(2),
            brand: "Bell".to_owned(),
            sizes: vec!["M".to_owned()],
            colors: vec!["Black".to_owned()],
            image_url: "https://example.com/bell.jpg".to_owned(),
            stock_quantity: 8,
            in_stock: true,
            featured: false,
            created_at: DateTime::UNIX_EPOCH.naive_utc(),
            updated_at: DateTime::UNIX_EPOCH.naive_utc(),
        }
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Asha Njeri".to_owned(),
            customer_email: "asha@example.com".to_owned(),
            customer_phone: "0712345678".to_owned(),
            shipping_address: "14 Kimathi Street, Nairobi".to_owned(),
        }
    }

    /// Records every submission instead of touching the network.
    struct MockGateway {
        calls: RefCell<Vec<CreateOrderRequest>>,
        fail: bool,
    }

    impl MockGateway {
        fn succeeding() -> Self {
            MockGateway {
                calls: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            MockGateway {
                calls: RefCell::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl OrderGateway for MockGateway {
        async fn submit(
            &self,
            request: &CreateOrderRequest,
        ) -> Result<OrderConfirmation, GatewayError> {
            self.calls.borrow_mut().push(request.clone());

            if self.fail {
                return Err(GatewayError::Rejected {
                    status: 500,
                    message: "Failed to create order".to_owned(),
                });
            }

            Ok(OrderConfirmation { order_id: 42 })
        }
    }

    #[tokio::test]
    async fn empty_cart_never_reaches_the_gateway() {
        let mut cart = Cart::new();
        let gateway = MockGateway::succeeding();

        let res = place_order(&mut cart, &valid_form(), &gateway).await;

        assert!(matches!(res, Err(CheckoutError::EmptyCart)));
        assert!(gateway.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_gateway() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, "1000.00"), 1, None, None);
        let gateway = MockGateway::succeeding();

        let form = CheckoutForm {
            customer_email: "not-an-email".to_owned(),
            ..valid_form()
        };
        let res = place_order(&mut cart, &form, &gateway).await;

        assert!(matches!(res, Err(CheckoutError::Invalid(_))));
        assert!(gateway.calls.borrow().is_empty());
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn successful_checkout_clears_the_cart() {
        let mut cart = Cart::new();
        cart.add_item(
            test_product(3, "2500.00"),
            2,
            Some("M".to_owned()),
            Some("Black".to_owned()),
        );
        let gateway = MockGateway::succeeding();

        let confirmation = place_order(&mut cart, &valid_form(), &gateway)
            .await
            .unwrap();

        assert_eq!(confirmation.order_id, 42);
        assert!(cart.is_empty());

        let calls = gateway.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].order.total_amount.to_string(), "5000.00");
        assert_eq!(calls[0].order.status, "pending");
        assert_eq!(calls[0].order.payment_status, "pending");
        assert_eq!(calls[0].items[0].subtotal.to_string(), "5000.00");
    }

    #[tokio::test]
    async fn failed_checkout_leaves_the_cart_untouched() {
        let mut cart = Cart::new();
        cart.add_item(test_product(3, "2500.00"), 2, Some("M".to_owned()), None);
        let gateway = MockGateway::failing();

        let res = place_order(&mut cart, &valid_form(), &gateway).await;

        assert!(matches!(res, Err(CheckoutError::Gateway(_))));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn build_order_request_denormalizes_every_line() {
        let mut cart = Cart::new();
        cart.add_item(
            test_product(3, "2500.00"),
            2,
            Some("M".to_owned()),
            Some("Black".to_owned()),
        );
        cart.add_item(test_product(7, "150.50"), 3, None, None);

        let request = build_order_request(&cart, &valid_form());

        assert_eq!(request.order.user_id, None);
        assert_eq!(request.order.total_amount.to_string(), "5451.50");
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product_name, "Bell Custom 3");
        assert_eq!(request.items[0].product_price.to_string(), "2500.00");
        assert_eq!(request.items[0].size.as_deref(), Some("M"));
        assert_eq!(request.items[1].subtotal.to_string(), "451.50");
        assert_eq!(request.items[1].color, None);
    }
}
