use crate::models::{Order, Quote};
use crate::pricing::PricingEngine;
use crate::receipt::ReceiptPrinter;
use std::io::Write;

/// Per-run inputs that arrive alongside the order
#[derive(Debug, Clone, Default)]
pub struct ProcessRequest {
    pub coupon_code: Option<String>,
    pub gift_message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Receipt sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Prices an order and emits its receipt. Each order passes through once,
/// synchronously; the returned quote carries the tracking number assigned
/// during that single pass.
pub struct OrderProcessor {
    engine: PricingEngine,
    printer: ReceiptPrinter,
}

impl OrderProcessor {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            engine,
            printer: ReceiptPrinter::new(),
        }
    }

    /// Price the order and write the receipt lines to the sink
    pub fn process(
        &self,
        order: &Order,
        request: &ProcessRequest,
        sink: &mut dyn Write,
    ) -> Result<Quote, ProcessError> {
        let quote = self.engine.quote(order, request.coupon_code.as_deref());

        self.printer
            .write_receipt(order, &quote, request.gift_message.as_deref(), sink)?;

        tracing::info!(
            customer = %order.customer_name,
            total = quote.total_price,
            tracking = %quote.tracking_number,
            "order processed"
        );

        Ok(quote)
    }

    /// Write the confirmation message for an already-processed order
    pub fn send_confirmation(
        &self,
        order: &Order,
        quote: &Quote,
        sink: &mut dyn Write,
    ) -> Result<(), ProcessError> {
        self.printer.write_confirmation(order, quote, sink)?;
        Ok(())
    }
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}
