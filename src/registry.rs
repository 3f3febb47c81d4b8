//! Closed lookup from a string discriminator to a variant constructor.
//!
//! A registry is a fixed table built at compile time, so the set of variants
//! cannot grow at runtime. Keys are matched exactly and case-sensitively.

use crate::error::{PatternError, Result};

pub type Constructor<C> = fn() -> Box<C>;

pub struct Registry<C: ?Sized + 'static> {
    kind: &'static str,
    entries: &'static [(&'static str, Constructor<C>)],
}

impl<C: ?Sized + 'static> Registry<C> {
    pub const fn new(kind: &'static str, entries: &'static [(&'static str, Constructor<C>)]) -> Self {
        Self { kind, entries }
    }

    /// Construct a fresh variant for `key`.
    ///
    /// Unknown keys fail with [`PatternError::UnsupportedVariant`] and
    /// construct nothing.
    pub fn resolve(&self, key: &str) -> Result<Box<C>> {
        let Some((_, construct)) = self.entries.iter().find(|(known, _)| *known == key) else {
            tracing::debug!(kind = self.kind, key, "unknown discriminator");
            return Err(PatternError::unsupported(self.kind, key));
        };
        tracing::debug!(kind = self.kind, key, "resolved variant");
        Ok(construct())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(known, _)| *known == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Shape {
        fn sides(&self) -> u32;
    }

    struct Triangle;
    impl Shape for Triangle {
        fn sides(&self) -> u32 {
            3
        }
    }

    struct Square;
    impl Shape for Square {
        fn sides(&self) -> u32 {
            4
        }
    }

    static BUILT: AtomicUsize = AtomicUsize::new(0);

    fn triangle() -> Box<dyn Shape> {
        Box::new(Triangle)
    }

    fn square() -> Box<dyn Shape> {
        Box::new(Square)
    }

    fn counted_square() -> Box<dyn Shape> {
        BUILT.fetch_add(1, Ordering::SeqCst);
        Box::new(Square)
    }

    static COUNTED: Registry<dyn Shape> = Registry::new("shape", &[("square", counted_square)]);

    static SHAPES: Registry<dyn Shape> =
        Registry::new("shape", &[("triangle", triangle), ("square", square)]);

    #[test]
    fn test_resolve_known_keys() {
        assert_eq!(SHAPES.resolve("triangle").unwrap().sides(), 3);
        assert_eq!(SHAPES.resolve("square").unwrap().sides(), 4);
    }

    #[test]
    fn test_resolve_unknown_key_constructs_nothing() {
        let err = COUNTED.resolve("hexagon").err().unwrap();
        assert_eq!(err, PatternError::unsupported("shape", "hexagon"));
        assert_eq!(BUILT.load(Ordering::SeqCst), 0);

        COUNTED.resolve("square").unwrap();
        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(SHAPES.resolve("Triangle").is_err());
        assert!(SHAPES.resolve(" triangle").is_err());
        assert!(SHAPES.resolve("").is_err());
    }

    #[test]
    fn test_keys_preserve_table_order() {
        let keys: Vec<&str> = SHAPES.keys().collect();
        assert_eq!(keys, vec!["triangle", "square"]);
        assert_eq!(SHAPES.len(), 2);
        assert!(!SHAPES.is_empty());
        assert!(SHAPES.contains("square"));
        assert!(!SHAPES.contains("circle"));
        assert_eq!(SHAPES.kind(), "shape");
    }

    #[test]
    fn test_each_resolve_builds_a_fresh_variant() {
        let first = SHAPES.resolve("square").unwrap();
        let second = SHAPES.resolve("square").unwrap();
        assert_eq!(first.sides(), second.sides());
    }
}
