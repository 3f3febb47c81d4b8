// Strategy Pattern: a host delegates to one replaceable behavior.

use std::fmt;

use crate::creational::factory::{new_payment_processor, PaymentProcessor, Receipt};
use crate::error::Result;

/// Holds exactly one strategy and hands it out for delegation.
///
/// Replacing the strategy affects only calls made afterwards.
pub struct Context<S: ?Sized> {
    strategy: Box<S>,
}

impl<S: ?Sized> Context<S> {
    pub fn new(strategy: Box<S>) -> Self {
        Self { strategy }
    }

    /// Install a new strategy, returning the one it replaces.
    pub fn set_strategy(&mut self, strategy: Box<S>) -> Box<S> {
        std::mem::replace(&mut self.strategy, strategy)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

// ============================================================================
// Example: paying at checkout
// ============================================================================

pub trait PaymentStrategy {
    fn pay(&self, amount: f64) -> String;
}

#[derive(Debug, Clone)]
pub struct CreditCard {
    pub name: String,
    pub card_number: String,
}

impl CreditCard {
    pub fn new(name: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CreditCard {
    fn pay(&self, amount: f64) -> String {
        format!("Paid ${amount:.2} using Credit Card ({})", self.card_number)
    }
}

#[derive(Debug, Clone)]
pub struct PayPal {
    pub email: String,
}

impl PayPal {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPal {
    fn pay(&self, amount: f64) -> String {
        format!("Paid ${amount:.2} using PayPal ({})", self.email)
    }
}

pub struct ShoppingCart {
    payment: Context<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(payment: Box<dyn PaymentStrategy>) -> Self {
        Self {
            payment: Context::new(payment),
        }
    }

    pub fn set_payment(&mut self, payment: Box<dyn PaymentStrategy>) {
        self.payment.set_strategy(payment);
    }

    pub fn checkout(&self, amount: f64) -> String {
        self.payment.strategy().pay(amount)
    }
}

// ============================================================================
// Example: shipping methods
// ============================================================================

pub trait ShippingStrategy {
    fn label(&self) -> &'static str;
    fn delivery(&self, item: &str, distance_km: u32) -> String;
}

pub struct StandardShipping;
impl ShippingStrategy for StandardShipping {
    fn label(&self) -> &'static str {
        "Standard"
    }

    fn delivery(&self, _item: &str, _distance_km: u32) -> String {
        "Standard delivery in 5-7 days".to_string()
    }
}

pub struct ExpressShipping;
impl ShippingStrategy for ExpressShipping {
    fn label(&self) -> &'static str {
        "Express"
    }

    fn delivery(&self, _item: &str, _distance_km: u32) -> String {
        "Express delivery in 2-3 days".to_string()
    }
}

pub struct OvernightShipping;
impl ShippingStrategy for OvernightShipping {
    fn label(&self) -> &'static str {
        "Overnight"
    }

    fn delivery(&self, _item: &str, _distance_km: u32) -> String {
        "Overnight delivery".to_string()
    }
}

pub struct ShippingContext {
    method: Context<dyn ShippingStrategy>,
}

impl ShippingContext {
    pub fn new(method: Box<dyn ShippingStrategy>) -> Self {
        Self {
            method: Context::new(method),
        }
    }

    pub fn set_method(&mut self, method: Box<dyn ShippingStrategy>) {
        self.method.set_strategy(method);
    }

    pub fn ship(&self, item: &str, distance_km: u32) -> String {
        let method = self.method.strategy();
        format!("{}: {}", method.label(), method.delivery(item, distance_km))
    }
}

// ============================================================================
// Example: greetings
// ============================================================================

pub trait GreetingStrategy {
    fn label(&self) -> &'static str;
    fn greeting(&self, name: &str) -> String;
}

pub struct FormalGreeting;
impl GreetingStrategy for FormalGreeting {
    fn label(&self) -> &'static str {
        "Formal"
    }

    fn greeting(&self, name: &str) -> String {
        format!("Hello, Mr. {name}")
    }
}

pub struct CasualGreeting;
impl GreetingStrategy for CasualGreeting {
    fn label(&self) -> &'static str {
        "Casual"
    }

    fn greeting(&self, name: &str) -> String {
        format!("Hi {name}!")
    }
}

pub struct FriendlyGreeting;
impl GreetingStrategy for FriendlyGreeting {
    fn label(&self) -> &'static str {
        "Friendly"
    }

    fn greeting(&self, name: &str) -> String {
        format!("Hey {name}, how are you?")
    }
}

pub struct GreetingContext {
    style: Context<dyn GreetingStrategy>,
}

impl GreetingContext {
    pub fn new(style: Box<dyn GreetingStrategy>) -> Self {
        Self {
            style: Context::new(style),
        }
    }

    pub fn set_style(&mut self, style: Box<dyn GreetingStrategy>) {
        self.style.set_strategy(style);
    }

    pub fn greet(&self, name: &str) -> String {
        let style = self.style.strategy();
        format!("{}: {}", style.label(), style.greeting(name))
    }
}

// ============================================================================
// Example: Factory + Strategy (pricing on top of a resolved processor)
// ============================================================================

pub trait PricingStrategy {
    fn calculate_price(&self, amount: f64) -> f64;
}

// Any closure works as a pricing rule.
impl<F> PricingStrategy for F
where
    F: Fn(f64) -> f64,
{
    fn calculate_price(&self, amount: f64) -> f64 {
        self(amount)
    }
}

/// 2% fee.
pub struct StandardPricing;
impl PricingStrategy for StandardPricing {
    fn calculate_price(&self, amount: f64) -> f64 {
        amount * 1.02
    }
}

/// 5% fee.
pub struct PremiumPricing;
impl PricingStrategy for PremiumPricing {
    fn calculate_price(&self, amount: f64) -> f64 {
        amount * 1.05
    }
}

/// 2% discount.
pub struct DiscountPricing;
impl PricingStrategy for DiscountPricing {
    fn calculate_price(&self, amount: f64) -> f64 {
        amount * 0.98
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub original: f64,
    pub final_amount: f64,
    pub receipt: Receipt,
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Original: ${:.2}, Final: ${:.2}",
            self.original, self.final_amount
        )
    }
}

pub struct PaymentService {
    processor: Box<dyn PaymentProcessor>,
    pricing: Context<dyn PricingStrategy>,
}

impl PaymentService {
    pub fn new(provider: &str, pricing: Box<dyn PricingStrategy>) -> Result<Self> {
        let processor = new_payment_processor(provider)?;
        Ok(Self {
            processor,
            pricing: Context::new(pricing),
        })
    }

    pub fn set_pricing_strategy(&mut self, pricing: Box<dyn PricingStrategy>) {
        self.pricing.set_strategy(pricing);
    }

    pub fn provider(&self) -> &'static str {
        self.processor.provider()
    }

    pub fn process_payment(&self, amount: f64) -> Charge {
        let final_amount = self.pricing.strategy().calculate_price(amount);
        tracing::debug!(provider = self.provider(), amount, final_amount, "charging");
        Charge {
            original: amount,
            final_amount,
            receipt: self.processor.process_payment(final_amount),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
