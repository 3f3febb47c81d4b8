// Strategy demo: the same host, different behaviors swapped at runtime.

use colored::Colorize;
use pattern_catalog::behavioral::strategy::{
    CasualGreeting, CreditCard, ExpressShipping, FormalGreeting, FriendlyGreeting,
    GreetingContext, OvernightShipping, PayPal, ShippingContext, ShoppingCart, StandardShipping,
};

fn main() {
    println!("{}", "=== PAYMENT STRATEGY ===".bold());
    let mut cart = ShoppingCart::new(Box::new(CreditCard::new("Alice", "1234-5678")));
    println!("{}", cart.checkout(50.0));
    cart.set_payment(Box::new(PayPal::new("alice@example.com")));
    println!("{}", cart.checkout(25.0));

    println!();
    println!("{}", "=== SHIPPING STRATEGY ===".bold());
    println!("Package: \"Laptop\", Distance: 100km");
    let mut shipping = ShippingContext::new(Box::new(StandardShipping));
    println!("{}", shipping.ship("Laptop", 100));
    shipping.set_method(Box::new(ExpressShipping));
    println!("{}", shipping.ship("Laptop", 100));
    shipping.set_method(Box::new(OvernightShipping));
    println!("{}", shipping.ship("Laptop", 100));

    println!();
    println!("{}", "=== GREETING STRATEGY ===".bold());
    let mut greeter = GreetingContext::new(Box::new(FormalGreeting));
    println!("{}", greeter.greet("John"));
    greeter.set_style(Box::new(CasualGreeting));
    println!("{}", greeter.greet("John"));
    greeter.set_style(Box::new(FriendlyGreeting));
    println!("{}", greeter.greet("John"));
}
