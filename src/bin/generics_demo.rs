// Generics demo: one min/max for every ordered type.

use pattern_catalog::generics::{max, min};

fn main() {
    println!("{}", min(3, 7));
    println!("{}", min(2.5, 1.2));
    println!("{}", min("go", "generic"));
    println!("{}", max('a', 'z'));
}
