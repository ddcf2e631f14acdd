use crate::models::{Order, PaymentMethod, Quote};
use std::io::{self, Write};

/// Writes order status lines and the confirmation message to an injected
/// sink. Keeping the sink a parameter keeps this testable; nothing here
/// touches stdout directly.
pub struct ReceiptPrinter;

impl ReceiptPrinter {
    pub fn new() -> Self {
        Self
    }

    /// Emit the per-order status lines: payment acknowledgment, gift and
    /// instruction echoes, then the priced summary.
    pub fn write_receipt(
        &self,
        order: &Order,
        quote: &Quote,
        gift_message: Option<&str>,
        sink: &mut dyn Write,
    ) -> io::Result<()> {
        match &order.payment_method {
            PaymentMethod::CreditCard => {
                writeln!(sink, "Processing credit card payment...")?;
            }
            PaymentMethod::PayPal => {
                writeln!(sink, "Processing PayPal payment...")?;
            }
            // Unrecognized providers get no acknowledgment line
            PaymentMethod::Other(_) => {}
        }

        if let Some(message) = gift_message.filter(|m| !m.is_empty()) {
            writeln!(sink, "Adding gift message: {}", message)?;
        }

        if let Some(instructions) = order
            .special_instructions
            .as_deref()
            .filter(|i| !i.is_empty())
        {
            writeln!(sink, "Special instructions: {}", instructions)?;
        }

        writeln!(sink, "Order processed for: {}", order.customer_name)?;
        writeln!(sink, "Total Price: ${:.2}", quote.total_price)?;
        writeln!(
            sink,
            "Shipping via: {} (Cost: ${:.2})",
            quote.effective_shipping_method, quote.shipping_cost
        )?;
        writeln!(sink, "Tracking Number: {}", quote.tracking_number)?;

        Ok(())
    }

    /// Assemble and emit the order confirmation message
    pub fn write_confirmation(
        &self,
        order: &Order,
        quote: &Quote,
        sink: &mut dyn Write,
    ) -> io::Result<()> {
        let subject = "Order Confirmation";
        let body = format!(
            "Dear {},\n\n\
             Your order for product {} (quantity: {}) has been processed.\n\
             Tracking number: {}\n\n\
             Thank you for your order!",
            order.customer_name, order.product_id, order.quantity, quote.tracking_number
        );

        writeln!(sink, "Sending email to: {}", order.customer_email)?;
        writeln!(sink, "Subject: {}", subject)?;
        writeln!(sink, "Body:\n{}", body)?;

        Ok(())
    }
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        Self::new()
    }
}
