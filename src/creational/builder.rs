// Builder Pattern: fluent, consuming construction of a Car.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub electric: bool,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let drive = if self.electric { "electric" } else { "combustion" };
        write!(
            f,
            "{} {} {} ({}, {})",
            self.year, self.brand, self.model, self.color, drive
        )
    }
}

#[derive(Debug, Default)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct CarBuilder {
    brand: Option<String>,
    model: Option<String>,
    year: Option<u16>,
    color: Option<String>,
    electric: bool,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn electric(mut self, electric: bool) -> Self {
        self.electric = electric;
        self
    }

    /// Unset fields come out empty, with year 0.
    pub fn build(self) -> Car {
        Car {
            brand: self.brand.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            electric: self.electric,
        }
    }
}
