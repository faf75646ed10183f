use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer details collected on the checkout page, validated locally
/// before anything goes over the wire.
#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub customer_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub customer_email: String,
    #[validate(length(min = 10, message = "Phone must be at least 10 characters"))]
    pub customer_phone: String,
    #[validate(length(min = 10, message = "Address must be at least 10 characters"))]
    pub shipping_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Asha Njeri".to_owned(),
            customer_email: "asha@example.com".to_owned(),
            customer_phone: "0712345678".to_owned(),
            shipping_address: "14 Kimathi Street, Nairobi".to_owned(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn rejects_a_one_character_name() {
        let form = CheckoutForm {
            customer_name: "A".to_owned(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("customer_name"));
    }

    #[test]
    fn rejects_a_malformed_email() {
        let form = CheckoutForm {
            customer_email: "not-an-email".to_owned(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("customer_email"));
    }

    #[test]
    fn rejects_a_short_phone_and_address() {
        let form = CheckoutForm {
            customer_phone: "12345".to_owned(),
            shipping_address: "short".to_owned(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("customer_phone"));
        assert!(errors.field_errors().contains_key("shipping_address"));
    }
}
