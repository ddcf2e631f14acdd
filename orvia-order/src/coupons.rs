use crate::models::ShippingMethod;
use serde::{Deserialize, Serialize};

/// What a matched coupon does to the running quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CouponAction {
    /// Multiply the running subtotal by (1 - fraction); stacks with the
    /// order's own discount rate
    PercentOff(f64),
    /// Override the shipping method used for the cost lookup only
    ForceShipping(ShippingMethod),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponRule {
    pub code: String,
    pub action: CouponAction,
}

/// Active promotional codes. Unknown codes resolve to nothing rather than
/// an error.
pub struct CouponBook {
    rules: Vec<CouponRule>,
}

impl CouponBook {
    pub fn new(rules: Vec<CouponRule>) -> Self {
        Self { rules }
    }

    /// Look up the action for a coupon code, if any
    pub fn resolve(&self, code: &str) -> Option<&CouponAction> {
        if code.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.code == code)
            .map(|rule| &rule.action)
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::new(vec![
            CouponRule {
                code: "SUMMER20".to_string(),
                action: CouponAction::PercentOff(0.20),
            },
            CouponRule {
                code: "FREESHIP".to_string(),
                action: CouponAction::ForceShipping(ShippingMethod::Free),
            },
        ])
    }
}
