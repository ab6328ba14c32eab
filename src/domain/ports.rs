use std::fmt::Debug;

/// Horizontal outline of a container.
///
/// The registry and everything downstream of it only see a container through
/// this trait plus its depth, so a new outline (oval, trapezoid, ...) needs an
/// implementation here and nothing else. Implementations are expected to be
/// immutable once constructed.
pub trait Footprint: Debug + Send + Sync {
    /// Lowercase tag, e.g. `"rectangle"`.
    fn shape_name(&self) -> &'static str;

    /// Surface area in square inches.
    fn area(&self) -> f64;

    /// Longest horizontal measure in inches (the diameter for round outlines).
    fn length(&self) -> f64;

    /// Second horizontal measure, where the outline has one.
    fn width(&self) -> Option<f64> {
        None
    }
}
