//! # Design Patterns Catalog
//!
//! Runnable, tested implementations of the classic object patterns, written
//! around one recurring shape: a small capability trait, a closed registry
//! that constructs variants by key, and a host that delegates to (and can
//! swap) the variant it holds.
//!
//! ## Creational
//! - Factory: closed [`Registry`] tables of constructors
//! - Singleton: [`creational::singleton::Lazy`] over `OnceLock`
//! - Builder: consuming fluent builder
//!
//! ## Behavioral
//! - Strategy: [`behavioral::strategy::Context`] and its domain hosts
//! - Observer: [`behavioral::observer::Publisher`] fan-out
//! - Command: [`behavioral::command::RemoteControl`] with undo/redo
//!
//! ## Structural
//! - Decorator: generic wrappers that own their inner component
//! - Adapter: media players behind one target trait
//!
//! Run a demo with:
//! ```bash
//! cargo run --bin factory_demo
//! cargo run --bin observer_demo
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod generics;
pub mod logging;
pub mod registry;
pub mod structural;

pub use error::{PatternError, Result};
pub use registry::Registry;
