// Singleton demo: shared config, logger, and counter.

use colored::Colorize;
use pattern_catalog::config::Settings;
use pattern_catalog::creational::singleton::{AppConfig, Counter, Logger};
use pattern_catalog::logging::init_tracing;

fn main() {
    init_tracing();

    println!("{}", "=== Config ===".bold());
    let config1 = AppConfig::global();
    let config2 = AppConfig::global();
    let name = Settings::from_env()
        .app_name
        .unwrap_or_else(|| "PatternCatalog".to_string());
    config1.set_app_name(name);
    println!("AppName from config1: {}", config1.app_name());
    println!("AppName from config2: {}", config2.app_name());

    println!();
    println!("{}", "=== Logger ===".bold());
    let logger1 = Logger::global();
    let logger2 = Logger::global();
    println!("{}", logger1.log("First message"));
    println!("{}", logger2.log("Second message"));
    println!("Logger instances are the same: {}", std::ptr::eq(logger1, logger2));
    println!("Log count: {}", logger1.count());

    println!();
    println!("{}", "=== Counter from 8 threads ===".bold());
    crossbeam::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|_| {
                Counter::global().increment();
            });
        }
    })
    .expect("counter threads panicked");
    println!("Counter value: {}", Counter::global().value());
}
