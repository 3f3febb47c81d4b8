// Observer Pattern: a publisher fans one event out to every subscriber.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{DeliveryFailure, PatternError, Result};

pub trait Subscriber<E: ?Sized> {
    /// Receive one event. An `Err` is reported back to the publisher but
    /// never stops delivery to the remaining subscribers.
    fn update(&self, event: &E) -> std::result::Result<(), String>;
}

/// Result of one `notify` round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifyReport {
    pub delivered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl NotifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.delivered + self.failures.len()
    }

    pub fn into_result(self) -> Result<usize> {
        if self.failures.is_empty() {
            return Ok(self.delivered);
        }
        Err(PatternError::DeliveryFailed {
            failed: self.failures.len(),
            total: self.total(),
            failures: self.failures,
        })
    }
}

pub struct Publisher<E: ?Sized> {
    subscribers: Vec<Rc<dyn Subscriber<E>>>,
}

impl<E: ?Sized> Default for Publisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> Publisher<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. The same subscriber may be registered twice and
    /// will then be notified twice.
    pub fn register(&mut self, subscriber: Rc<dyn Subscriber<E>>) {
        self.subscribers.push(subscriber);
    }

    /// Remove the first registration of `subscriber`. Returns `false` when
    /// it was not registered.
    pub fn unregister(&mut self, subscriber: &Rc<dyn Subscriber<E>>) -> bool {
        match self
            .subscribers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, subscriber))
        {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `event` to every subscriber in registration order.
    pub fn notify(&self, event: &E) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (position, subscriber) in self.subscribers.iter().enumerate() {
            match subscriber.update(event) {
                Ok(()) => report.delivered += 1,
                Err(reason) => {
                    tracing::warn!(position, %reason, "subscriber rejected event");
                    report.failures.push(DeliveryFailure { position, reason });
                }
            }
        }
        tracing::debug!(
            delivered = report.delivered,
            failed = report.failures.len(),
            "notify complete"
        );
        report
    }
}

// ============================================================================
// Example: article feed
// ============================================================================

pub struct EmailSubscriber {
    pub email: String,
    received: RefCell<Vec<String>>,
}

impl EmailSubscriber {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Subscriber<str> for EmailSubscriber {
    fn update(&self, article: &str) -> std::result::Result<(), String> {
        let line = format!("Email to {}: New article published: {article}", self.email);
        self.received.borrow_mut().push(line);
        Ok(())
    }
}

pub struct SmsSubscriber {
    pub phone: String,
    received: RefCell<Vec<String>>,
}

impl SmsSubscriber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Subscriber<str> for SmsSubscriber {
    fn update(&self, article: &str) -> std::result::Result<(), String> {
        if self.phone.trim().is_empty() {
            return Err("no phone number on file".to_string());
        }
        let line = format!("SMS to {}: New article published: {article}", self.phone);
        self.received.borrow_mut().push(line);
        Ok(())
    }
}

// ============================================================================
// Example: weather station alerts
// ============================================================================

#[derive(Default)]
pub struct MobileAlert {
    received: RefCell<Vec<String>>,
}

impl MobileAlert {
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Subscriber<str> for MobileAlert {
    fn update(&self, message: &str) -> std::result::Result<(), String> {
        self.received
            .borrow_mut()
            .push(format!("Mobile alert received: {message}"));
        Ok(())
    }
}

#[derive(Default)]
pub struct WebAlert {
    received: RefCell<Vec<String>>,
}

impl WebAlert {
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Subscriber<str> for WebAlert {
    fn update(&self, message: &str) -> std::result::Result<(), String> {
        self.received
            .borrow_mut()
            .push(format!("Web alert received: {message}"));
        Ok(())
    }
}

// ============================================================================
// Example: commands registered as observers
// ============================================================================

pub trait NotificationCommand {
    fn execute(&self, data: &str) -> String;
}

pub struct EmailNotification;
impl NotificationCommand for EmailNotification {
    fn execute(&self, data: &str) -> String {
        format!("Email notification: {data}")
    }
}

pub struct SmsNotification;
impl NotificationCommand for SmsNotification {
    fn execute(&self, data: &str) -> String {
        format!("SMS notification: {data}")
    }
}

pub struct PushNotification;
impl NotificationCommand for PushNotification {
    fn execute(&self, data: &str) -> String {
        format!("Push notification: {data}")
    }
}

#[derive(Default)]
pub struct NotificationCenter {
    commands: Vec<Box<dyn NotificationCommand>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Box<dyn NotificationCommand>) {
        self.commands.push(command);
    }

    pub fn notify_all(&self, message: &str) -> Vec<String> {
        self.commands.iter().map(|cmd| cmd.execute(message)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
