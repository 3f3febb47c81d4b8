//! Creational patterns: how variants come into existence.

pub mod builder;
pub mod factory;
pub mod singleton;
