mod line;
mod segment;

pub use line::Line;
pub use segment::Segment;

use super::Vector;

/// Entities with a one-dimensional measure.
///
/// Unbounded entities report `f64::INFINITY`.
pub trait HasLength {
    /// Returns the length of the entity.
    fn length(&self) -> f64;
}

impl HasLength for Vector {
    fn length(&self) -> f64 {
        Vector::length(self)
    }
}

impl HasLength for Segment {
    fn length(&self) -> f64 {
        Segment::length(self)
    }
}

impl HasLength for Line {
    fn length(&self) -> f64 {
        f64::INFINITY
    }
}
