// Decorator Pattern: wrappers that own one inner component and add to it.
// Generic wrappers compose at compile time; Box<dyn _> also implements the
// component trait, so the same wrappers build chains at runtime.

// ============================================================================
// Example: coffee
// ============================================================================

pub trait Coffee {
    fn cost(&self) -> u32;
    fn ingredients(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn ingredients(&self) -> String {
        (**self).ingredients()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        5
    }

    fn ingredients(&self) -> String {
        "Coffee".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Milk<C> {
    inner: C,
}

impl<C: Coffee> Milk<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn ingredients(&self) -> String {
        self.inner.ingredients() + ", Milk"
    }
}

#[derive(Debug, Clone)]
pub struct Sugar<C> {
    inner: C,
}

impl<C: Coffee> Sugar<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 1
    }

    fn ingredients(&self) -> String {
        self.inner.ingredients() + ", Sugar"
    }
}

pub trait CoffeeExt: Coffee + Sized {
    fn with_milk(self) -> Milk<Self> {
        Milk::new(self)
    }

    fn with_sugar(self) -> Sugar<Self> {
        Sugar::new(self)
    }
}

impl<C: Coffee> CoffeeExt for C {}

// ============================================================================
// Example: payment card features
// ============================================================================

pub trait PaymentCard {
    fn annual_fee(&self) -> u32;
    fn features(&self) -> String;
}

impl<P: PaymentCard + ?Sized> PaymentCard for Box<P> {
    fn annual_fee(&self) -> u32 {
        (**self).annual_fee()
    }

    fn features(&self) -> String {
        (**self).features()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCard;

impl PaymentCard for BasicCard {
    fn annual_fee(&self) -> u32 {
        0
    }

    fn features(&self) -> String {
        "Basic Payment".to_string()
    }
}

macro_rules! card_feature {
    ($name:ident, $fee:expr, $feature:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name<P> {
            inner: P,
        }

        impl<P: PaymentCard> $name<P> {
            pub fn new(inner: P) -> Self {
                Self { inner }
            }
        }

        impl<P: PaymentCard> PaymentCard for $name<P> {
            fn annual_fee(&self) -> u32 {
                self.inner.annual_fee() + $fee
            }

            fn features(&self) -> String {
                format!("{}, {}", self.inner.features(), $feature)
            }
        }
    };
}

card_feature!(Rewards, 50, "Cashback Rewards");
card_feature!(Travel, 100, "Travel Insurance");
card_feature!(Premium, 200, "Premium Support");

pub trait CardExt: PaymentCard + Sized {
    fn with_rewards(self) -> Rewards<Self> {
        Rewards::new(self)
    }

    fn with_travel(self) -> Travel<Self> {
        Travel::new(self)
    }

    fn with_premium(self) -> Premium<Self> {
        Premium::new(self)
    }
}

impl<P: PaymentCard> CardExt for P {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_coffee() {
        let coffee = SimpleCoffee;
        assert_eq!(coffee.cost(), 5);
        assert_eq!(coffee.ingredients(), "Coffee");
    }

    #[test]
    fn test_milk_then_sugar() {
        let coffee = SimpleCoffee.with_milk().with_sugar();
        assert_eq!(coffee.cost(), 8);
        assert_eq!(coffee.ingredients(), "Coffee, Milk, Sugar");
    }

    #[test]
    fn test_runtime_chain_through_boxes() {
        let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
        assert_eq!((coffee.cost(), coffee.ingredients()), (5, "Coffee".to_string()));

        coffee = Box::new(Milk::new(coffee));
        assert_eq!(coffee.cost(), 7);

        coffee = Box::new(Sugar::new(coffee));
        assert_eq!(coffee.cost(), 8);
        assert_eq!(coffee.ingredients(), "Coffee, Milk, Sugar");
    }

    #[test]
    fn test_order_of_application_is_preserved() {
        let coffee = SimpleCoffee.with_sugar().with_milk();
        assert_eq!(coffee.cost(), 8);
        assert_eq!(coffee.ingredients(), "Coffee, Sugar, Milk");
    }

    #[test]
    fn test_card_chain() {
        let card = BasicCard.with_rewards().with_travel().with_premium();
        assert_eq!(card.annual_fee(), 350);
        assert_eq!(
            card.features(),
            "Basic Payment, Cashback Rewards, Travel Insurance, Premium Support"
        );
    }

    #[test]
    fn test_card_steps() {
        let basic = BasicCard;
        assert_eq!(basic.annual_fee(), 0);

        let rewards = basic.with_rewards();
        assert_eq!(rewards.annual_fee(), 50);
        assert_eq!(rewards.features(), "Basic Payment, Cashback Rewards");

        let travel: Box<dyn PaymentCard> = Box::new(rewards.with_travel());
        assert_eq!(travel.annual_fee(), 150);
    }

    proptest! {
        #[test]
        fn prop_cost_is_sum_of_increments(milks in 0usize..8, sugars in 0usize..8) {
            let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
            for _ in 0..milks {
                coffee = Box::new(Milk::new(coffee));
            }
            for _ in 0..sugars {
                coffee = Box::new(Sugar::new(coffee));
            }

            prop_assert_eq!(coffee.cost() as usize, 5 + 2 * milks + sugars);
            let ingredients = coffee.ingredients();
            prop_assert!(ingredients.starts_with("Coffee"));
            prop_assert_eq!(ingredients.matches("Milk").count(), milks);
            prop_assert_eq!(ingredients.matches("Sugar").count(), sugars);
        }
    }
}
