// Factory + Strategy: a resolved processor with swappable pricing.

use colored::Colorize;
use pattern_catalog::behavioral::strategy::{
    DiscountPricing, PaymentService, PremiumPricing, StandardPricing,
};
use pattern_catalog::logging::init_tracing;
use pattern_catalog::Result;

fn charge(service: &PaymentService, amount: f64) {
    let charge = service.process_payment(amount);
    println!("{charge}");
    println!("{}", charge.receipt);
}

fn main() -> Result<()> {
    init_tracing();
    println!("{}", "=== FACTORY + STRATEGY PATTERN EXAMPLE ===".bold());

    // PayPal with standard pricing, then premium on the same processor
    let mut paypal = PaymentService::new("paypal", Box::new(StandardPricing))?;
    charge(&paypal, 100.0);
    paypal.set_pricing_strategy(Box::new(PremiumPricing));
    charge(&paypal, 100.0);

    // Stripe with a discount, switched back to standard at runtime
    let mut stripe = PaymentService::new("stripe", Box::new(DiscountPricing))?;
    charge(&stripe, 100.0);
    stripe.set_pricing_strategy(Box::new(StandardPricing));
    charge(&stripe, 100.0);

    match PaymentService::new("cash", Box::new(StandardPricing)) {
        Ok(_) => println!("cash accepted"),
        Err(err) => println!("{}", err.to_string().yellow()),
    }

    Ok(())
}
