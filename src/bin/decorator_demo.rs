// Decorator demo: coffee add-ons and payment card features.

use colored::Colorize;
use pattern_catalog::structural::decorator::{
    BasicCard, CardExt, Coffee, Milk, PaymentCard, SimpleCoffee, Sugar,
};

fn main() {
    println!("{}", "=== Coffee ===".bold());
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    println!("{} {}", coffee.cost(), coffee.ingredients());

    coffee = Box::new(Milk::new(coffee));
    println!("{} {}", coffee.cost(), coffee.ingredients());

    coffee = Box::new(Sugar::new(coffee));
    println!("{} {}", coffee.cost(), coffee.ingredients());

    println!();
    println!("{}", "=== Payment Card ===".bold());
    let steps: Vec<Box<dyn PaymentCard>> = vec![
        Box::new(BasicCard),
        Box::new(BasicCard.with_rewards()),
        Box::new(BasicCard.with_rewards().with_travel()),
        Box::new(BasicCard.with_rewards().with_travel().with_premium()),
    ];
    for card in &steps {
        println!("Annual fee: ${}, Features: {}", card.annual_fee(), card.features());
    }
}
