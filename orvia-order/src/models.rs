use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping methods known to the rate table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethod {
    Standard,
    Express,
    Priority,
    Free,
    /// Anything the rate table does not know; priced at the fallback rate
    Other(String),
}

impl ShippingMethod {
    /// Parse a raw method code. Unknown codes never fail, they carry
    /// through as `Other` and hit the fallback rate.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Standard" => Self::Standard,
            "Express" => Self::Express,
            "Priority" => Self::Priority,
            "Free" => Self::Free,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Express => write!(f, "Express"),
            Self::Priority => write!(f, "Priority"),
            Self::Free => write!(f, "Free"),
            Self::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Payment methods with a dedicated acknowledgment line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    /// Unrecognized providers; processed silently
    Other(String),
}

impl PaymentMethod {
    pub fn from_code(code: &str) -> Self {
        match code {
            "CreditCard" => Self::CreditCard,
            "PayPal" => Self::PayPal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "CreditCard"),
            Self::PayPal => write!(f, "PayPal"),
            Self::Other(code) => write!(f, "{}", code),
        }
    }
}

/// A customer order. Immutable after construction; named fields replace
/// the long positional constructor this grew out of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub customer_address: String,
    pub customer_email: String,
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Discount fraction in [0, 1]; out-of-range values compute through
    pub discount_rate: f64,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub is_rush_order: bool,
    pub special_instructions: Option<String>,
}

impl Order {
    /// One-line customer summary
    pub fn customer_details(&self) -> String {
        format!(
            "Customer: {}, Email: {}",
            self.customer_name, self.customer_email
        )
    }
}

/// Priced outcome for a single order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub total_price: f64,
    pub shipping_cost: f64,
    /// May differ from the order's method when a coupon overrides it
    pub effective_shipping_method: ShippingMethod,
    /// Assigned exactly once per processed order, never empty
    pub tracking_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_method_parsing() {
        assert_eq!(ShippingMethod::from_code("Express"), ShippingMethod::Express);
        assert_eq!(
            ShippingMethod::from_code("Drone"),
            ShippingMethod::Other("Drone".to_string())
        );
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!(
            PaymentMethod::from_code("PayPal"),
            PaymentMethod::PayPal
        );
        assert_eq!(
            PaymentMethod::from_code("WireTransfer"),
            PaymentMethod::Other("WireTransfer".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_known_codes() {
        for code in ["Standard", "Express", "Priority", "Free"] {
            assert_eq!(ShippingMethod::from_code(code).to_string(), code);
        }
    }

    #[test]
    fn test_known_methods_use_screaming_snake_wire_names() {
        assert_eq!(
            serde_json::to_value(ShippingMethod::Express).unwrap(),
            serde_json::json!("EXPRESS")
        );
        assert_eq!(
            serde_json::to_value(PaymentMethod::CreditCard).unwrap(),
            serde_json::json!("CREDIT_CARD")
        );
    }

    #[test]
    fn test_customer_details_line() {
        let order = Order {
            customer_name: "John Doe".to_string(),
            customer_address: "123 Main St".to_string(),
            customer_email: "john.doe@example.com".to_string(),
            product_id: "PRODUCT456".to_string(),
            quantity: 2,
            unit_price: 25.0,
            discount_rate: 0.10,
            shipping_method: ShippingMethod::Standard,
            payment_method: PaymentMethod::CreditCard,
            is_rush_order: false,
            special_instructions: None,
        };

        assert_eq!(
            order.customer_details(),
            "Customer: John Doe, Email: john.doe@example.com"
        );
    }
}
