//! Behavioral patterns: who does the work, and how it gets dispatched.

pub mod command;
pub mod observer;
pub mod strategy;
