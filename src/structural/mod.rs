//! Structural patterns: composing components behind a shared trait.

pub mod adapter;
pub mod decorator;
