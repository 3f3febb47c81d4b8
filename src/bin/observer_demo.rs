// Observer demo: article feed, weather station, and a notification center.

use std::rc::Rc;

use colored::Colorize;
use pattern_catalog::behavioral::observer::{
    EmailNotification, EmailSubscriber, MobileAlert, NotificationCenter, Publisher,
    PushNotification, SmsNotification, SmsSubscriber, Subscriber, WebAlert,
};
use pattern_catalog::logging::init_tracing;

fn main() {
    init_tracing();

    println!("{}", "=== Article Feed ===".bold());
    let mut publisher = Publisher::<str>::new();
    let email = Rc::new(EmailSubscriber::new("alice@example.com"));
    let sms = Rc::new(SmsSubscriber::new("+1234567890"));
    let email_handle: Rc<dyn Subscriber<str>> = email.clone();
    publisher.register(email_handle.clone());
    publisher.register(sms.clone());

    publisher.notify("Observer Pattern in Rust");
    publisher.unregister(&email_handle);
    publisher.notify("Another Article");

    for line in email.received().iter().chain(sms.received().iter()) {
        println!("{line}");
    }

    println!();
    println!("{}", "=== Weather Station ===".bold());
    let mut station = Publisher::<str>::new();
    let mobile = Rc::new(MobileAlert::default());
    let web = Rc::new(WebAlert::default());
    let mobile_handle: Rc<dyn Subscriber<str>> = mobile.clone();
    station.register(mobile_handle.clone());
    station.register(web.clone());

    station.notify("Electrical storm in the area");
    station.notify("Extreme temperature");
    station.unregister(&mobile_handle);
    let report = station.notify("Heavy rain");
    println!("last alert reached {} subscriber(s)", report.delivered);

    for line in mobile.received().iter().chain(web.received().iter()) {
        println!("{line}");
    }

    println!();
    println!("{}", "=== Failing Subscriber ===".bold());
    let mut feed = Publisher::<str>::new();
    feed.register(Rc::new(SmsSubscriber::new("")));
    feed.register(email.clone());
    if let Err(err) = feed.notify("Breaking news").into_result() {
        println!("{}", err.to_string().yellow());
    }
    println!("{}", email.received().last().map(String::as_str).unwrap_or("-"));

    println!();
    println!("{}", "=== Notification Center ===".bold());
    let mut center = NotificationCenter::new();
    center.register(Box::new(EmailNotification));
    center.register(Box::new(SmsNotification));
    center.register(Box::new(PushNotification));
    for line in center.notify_all("New message received!") {
        println!("{line}");
    }
}
