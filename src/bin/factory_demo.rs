// Factory demo: pick the payment processor and notifier from settings.
//
//   PAYMENT_PROVIDER=stripe NOTIFIER=sms cargo run --bin factory_demo
//   SETTINGS_FILE=demo.toml cargo run --bin factory_demo

use std::process::ExitCode;

use colored::Colorize;
use pattern_catalog::config::Settings;
use pattern_catalog::creational::factory::{
    new_notifier, new_payment_processor, NOTIFIERS, PAYMENT_PROCESSORS,
};
use pattern_catalog::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    println!("{}", "=== Factory Pattern ===".bold());
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let processor = match new_payment_processor(settings.payment_provider_key()) {
        Ok(processor) => processor,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            let known: Vec<&str> = PAYMENT_PROCESSORS.keys().collect();
            eprintln!("set PAYMENT_PROVIDER to one of: {}", known.join(", "));
            return ExitCode::FAILURE;
        }
    };
    println!("{}", processor.process_payment(63.0));

    println!();
    println!("{}", "=== Notifier Factory ===".bold());
    // Without NOTIFIER, show every registered kind.
    let kinds: Vec<&str> = match settings.notifier.as_deref() {
        Some(_) => vec![settings.notifier_key()],
        None => NOTIFIERS.keys().collect(),
    };
    for kind in kinds {
        match new_notifier(kind) {
            Ok(notifier) => println!("{kind}: {}", notifier.send("hola")),
            Err(err) => println!("{kind}: {}", err.to_string().yellow()),
        }
    }

    ExitCode::SUCCESS
}
