use crate::coupons::{CouponAction, CouponBook};
use crate::models::{Order, PaymentMethod, Quote, ShippingMethod};
use orvia_core::tracking::TrackingGenerator;
use serde::{Deserialize, Serialize};

/// Shipping rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingRates {
    pub standard: f64,
    pub express: f64,
    pub priority: f64,
    pub free: f64,

    /// Applied to any method the table does not know
    pub fallback: f64,

    /// Flat surcharge added on top of the method rate for rush orders
    pub rush_surcharge: f64,
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            standard: 5.0,
            express: 15.0,
            priority: 10.0,
            free: 0.0,
            fallback: 7.0,
            rush_surcharge: 10.0,
        }
    }
}

impl ShippingRates {
    /// Rate for a shipping method. Unknown methods take the fallback rate.
    pub fn cost_of(&self, method: &ShippingMethod) -> f64 {
        match method {
            ShippingMethod::Standard => self.standard,
            ShippingMethod::Express => self.express,
            ShippingMethod::Priority => self.priority,
            ShippingMethod::Free => self.free,
            ShippingMethod::Other(code) => {
                tracing::warn!(%code, "unrecognized shipping method, using fallback rate");
                self.fallback
            }
        }
    }
}

/// Prices an order: line subtotal, discount, coupon, shipping, surcharge,
/// tracking token.
pub struct PricingEngine {
    rates: ShippingRates,
    coupons: CouponBook,
    tracking: TrackingGenerator,
}

impl PricingEngine {
    pub fn new(rates: ShippingRates, coupons: CouponBook) -> Self {
        Self {
            rates,
            coupons,
            tracking: TrackingGenerator::new(),
        }
    }

    /// Produce a quote for an order.
    ///
    /// Inputs are taken as given: negative quantities or out-of-range
    /// discount rates compute through arithmetically, matching the
    /// permissive contract of the rate table's fallback branches.
    pub fn quote(&self, order: &Order, coupon_code: Option<&str>) -> Quote {
        let base = order.quantity as f64 * order.unit_price;
        let mut subtotal = base - base * order.discount_rate;

        // Coupon override: a percent-off stacks on the discounted subtotal;
        // a shipping override only changes which rate row is consulted.
        let mut effective_method = order.shipping_method.clone();
        if let Some(action) = coupon_code.and_then(|code| self.coupons.resolve(code)) {
            match action {
                CouponAction::PercentOff(fraction) => {
                    subtotal *= 1.0 - fraction;
                }
                CouponAction::ForceShipping(method) => {
                    effective_method = method.clone();
                }
            }
        }

        let mut shipping_cost = self.rates.cost_of(&effective_method);
        if order.is_rush_order {
            shipping_cost += self.rates.rush_surcharge;
        }

        if let PaymentMethod::Other(code) = &order.payment_method {
            tracing::warn!(%code, "unrecognized payment method");
        }

        let tracking_number = self.tracking.generate();
        tracing::debug!(
            product_id = %order.product_id,
            subtotal,
            shipping_cost,
            %tracking_number,
            "order priced"
        );

        Quote {
            total_price: subtotal + shipping_cost,
            shipping_cost,
            effective_shipping_method: effective_method,
            tracking_number,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(ShippingRates::default(), CouponBook::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_order() -> Order {
        Order {
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
            special_instructions: Some("Leave at front door".to_string()),
        }
    }

    #[test]
    fn test_summer20_stacks_with_order_discount() {
        let engine = PricingEngine::default();

        // 2 x 25.00 = 50.00, minus 10% = 45.00, minus 20% coupon = 36.00,
        // plus 5.00 standard shipping = 41.00
        let quote = engine.quote(&demo_order(), Some("SUMMER20"));

        assert_eq!(quote.shipping_cost, 5.0);
        assert_eq!(quote.total_price, 41.0);
        assert_eq!(quote.effective_shipping_method, ShippingMethod::Standard);
    }

    #[test]
    fn test_freeship_overrides_any_shipping_method() {
        let engine = PricingEngine::default();

        let mut order = demo_order();
        order.shipping_method = ShippingMethod::Express;
        let quote = engine.quote(&order, Some("FREESHIP"));

        assert_eq!(quote.shipping_cost, 0.0);
        assert_eq!(quote.effective_shipping_method, ShippingMethod::Free);
        // 45.00 subtotal, no coupon discount, free shipping
        assert_eq!(quote.total_price, 45.0);
    }

    #[test]
    fn test_rush_surcharge_is_a_flat_add() {
        let engine = PricingEngine::default();

        let mut order = demo_order();
        order.is_rush_order = true;
        let quote = engine.quote(&order, None);
        assert_eq!(quote.shipping_cost, 15.0);

        // Surcharge applies on top of the coupon-forced free rate too
        let rushed_free = engine.quote(&order, Some("FREESHIP"));
        assert_eq!(rushed_free.shipping_cost, 10.0);
    }

    #[test]
    fn test_unknown_shipping_method_takes_fallback_rate() {
        let engine = PricingEngine::default();

        let mut order = demo_order();
        order.shipping_method = ShippingMethod::Other("Drone".to_string());
        let quote = engine.quote(&order, None);

        assert_eq!(quote.shipping_cost, 7.0);
    }

    #[test]
    fn test_unknown_coupon_has_no_effect() {
        let engine = PricingEngine::default();

        let plain = engine.quote(&demo_order(), None);
        let unknown = engine.quote(&demo_order(), Some("WINTER50"));

        assert_eq!(plain.total_price, unknown.total_price);
        assert_eq!(plain.shipping_cost, unknown.shipping_cost);
    }

    #[test]
    fn test_no_discount_no_coupon_is_exact() {
        let engine = PricingEngine::default();

        let mut order = demo_order();
        order.discount_rate = 0.0;
        let quote = engine.quote(&order, None);

        assert_eq!(
            quote.total_price,
            order.quantity as f64 * order.unit_price + quote.shipping_cost
        );
    }

    #[test]
    fn test_tracking_numbers_are_distinct_for_identical_inputs() {
        let engine = PricingEngine::default();
        let order = demo_order();

        let first = engine.quote(&order, None);
        let second = engine.quote(&order, None);

        assert!(!first.tracking_number.is_empty());
        assert_ne!(first.tracking_number, second.tracking_number);
    }
}
