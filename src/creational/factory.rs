// Factory Pattern: construct a capability from a string discriminator.
// Each family is a closed Registry table; unknown keys are an explicit error.

use std::fmt;

use crate::error::Result;
use crate::registry::Registry;

// ============================================================================
// Payment processors
// ============================================================================

/// Outcome of a processed payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub provider: &'static str,
    pub amount: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] Payment of ${:.2} processed successfully.",
            self.provider, self.amount
        )
    }
}

pub trait PaymentProcessor {
    fn provider(&self) -> &'static str;

    fn process_payment(&self, amount: f64) -> Receipt {
        Receipt {
            provider: self.provider(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn provider(&self) -> &'static str {
        "PayPal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripeProcessor;

impl PaymentProcessor for StripeProcessor {
    fn provider(&self) -> &'static str {
        "Stripe"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoProcessor;

impl PaymentProcessor for CryptoProcessor {
    fn provider(&self) -> &'static str {
        "Crypto"
    }
}

fn paypal() -> Box<dyn PaymentProcessor> {
    Box::new(PayPalProcessor)
}

fn stripe() -> Box<dyn PaymentProcessor> {
    Box::new(StripeProcessor)
}

fn crypto() -> Box<dyn PaymentProcessor> {
    Box::new(CryptoProcessor)
}

pub static PAYMENT_PROCESSORS: Registry<dyn PaymentProcessor> = Registry::new(
    "payment provider",
    &[("paypal", paypal), ("stripe", stripe), ("crypto", crypto)],
);

pub fn new_payment_processor(provider: &str) -> Result<Box<dyn PaymentProcessor>> {
    PAYMENT_PROCESSORS.resolve(provider)
}

// ============================================================================
// Notifiers
// ============================================================================

pub trait Notifier {
    fn send(&self, message: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn send(&self, _message: &str) -> String {
        "send email".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn send(&self, _message: &str) -> String {
        "send SMS".to_string()
    }
}

fn email() -> Box<dyn Notifier> {
    Box::new(EmailNotifier)
}

fn sms() -> Box<dyn Notifier> {
    Box::new(SmsNotifier)
}

pub static NOTIFIERS: Registry<dyn Notifier> =
    Registry::new("notifier", &[("email", email), ("sms", sms)]);

pub fn new_notifier(kind: &str) -> Result<Box<dyn Notifier>> {
    NOTIFIERS.resolve(kind)
}

// ============================================================================
// Tests
// ============================================================================
