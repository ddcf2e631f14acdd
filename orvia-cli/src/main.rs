use orvia_core::dispatch::{Dispatch, HandlerChain, MatchValueHandler};
use orvia_order::{Order, OrderProcessor, PaymentMethod, ProcessRequest, ShippingMethod};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orvia_cli=info,orvia_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Orvia checkout demo");

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    run_order_demo(&mut sink)?;
    run_dispatch_demo(&mut sink)?;

    Ok(())
}

/// Process the demo order end to end and print its confirmation
fn run_order_demo(sink: &mut dyn std::io::Write) -> anyhow::Result<()> {
    let order = Order {
        customer_name: "John Doe".to_string(),
        customer_address: "123 Main St".to_string(),
        customer_email: "john.doe@example.com".to_string(),
        product_id: "PRODUCT456".to_string(),
        quantity: 2,
        unit_price: 25.00,
        discount_rate: 0.10,
        shipping_method: ShippingMethod::Standard,
        payment_method: PaymentMethod::CreditCard,
        is_rush_order: false,
        special_instructions: Some("Leave at front door".to_string()),
    };

    let processor = OrderProcessor::default();
    let request = ProcessRequest {
        coupon_code: Some("SUMMER20".to_string()),
        gift_message: Some("Happy Birthday!".to_string()),
    };

    let quote = processor.process(&order, &request, sink)?;
    processor.send_confirmation(&order, &quote, sink)?;
    writeln!(sink, "{}", order.customer_details())?;

    Ok(())
}

/// Run a couple of requests through a two-handler chain
fn run_dispatch_demo(sink: &mut dyn std::io::Write) -> anyhow::Result<()> {
    let mut chain = HandlerChain::new();
    chain.register(Box::new(MatchValueHandler::new("handler-1", 1)));
    chain.register(Box::new(MatchValueHandler::new("handler-2", 2)));

    for request in [1, 2, 3] {
        match chain.dispatch(request) {
            Dispatch::Handled { by } => {
                writeln!(sink, "Request {} handled by {}", request, by)?;
            }
            Dispatch::Unhandled { request } => {
                writeln!(sink, "Request {} was not handled by any handler", request)?;
            }
        }
    }

    Ok(())
}
