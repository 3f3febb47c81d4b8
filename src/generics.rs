// Type-safe generic functions over ordered values.

/// The smaller of two values. Ties (and incomparable floats) yield `b`.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of two values. Ties (and incomparable floats) yield `b`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}
