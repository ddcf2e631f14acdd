pub mod coupons;
pub mod models;
pub mod pricing;
pub mod processor;
pub mod receipt;

pub use coupons::{CouponAction, CouponBook, CouponRule};
pub use models::{Order, PaymentMethod, Quote, ShippingMethod};
pub use pricing::{PricingEngine, ShippingRates};
pub use processor::{OrderProcessor, ProcessError, ProcessRequest};
pub use receipt::ReceiptPrinter;
