// Builder demo: fluent construction.

use colored::Colorize;
use pattern_catalog::creational::builder::CarBuilder;

fn main() {
    println!("{}", "=== Builder Pattern ===".bold());
    let car = CarBuilder::new()
        .brand("Ford")
        .model("Mustang")
        .year(2024)
        .color("Red")
        .electric(false)
        .build();

    println!("{car}");
    println!("{car:?}");
}
