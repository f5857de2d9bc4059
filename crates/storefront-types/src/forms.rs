//! Form payloads validated client-side before any request is issued.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email id"))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email id"))]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub country: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_malformed_email_and_short_password() {
        let bad = LoginForm {
            email: "not-an-email".into(),
            password: "12345".into(),
        };
        let errs = bad.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("email"));
        assert!(errs.field_errors().contains_key("password"));

        let ok = LoginForm {
            email: "a@b.com".into(),
            password: "123456".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn signup_requires_name_country_and_long_password() {
        let bad = SignupForm {
            name: String::new(),
            email: "a@b.com".into(),
            password: "short".into(),
            country: String::new(),
            role: Role::Member,
        };
        let errs = bad.validate().unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("country"));
    }

    #[test]
    fn menu_item_price_must_be_positive() {
        let zero = MenuItemForm {
            name: "Dosa".into(),
            description: String::new(),
            price: 0.0,
        };
        assert!(zero.validate().is_err());

        let negative = MenuItemForm {
            price: -1.0,
            ..zero.clone()
        };
        assert!(negative.validate().is_err());

        let ok = MenuItemForm { price: 4.5, ..zero };
        assert!(ok.validate().is_ok());
    }
}
