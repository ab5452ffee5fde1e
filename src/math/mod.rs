//! Low-level planar routines on raw coordinates.
//!
//! Everything here takes an explicit `eps`; the public entity API wraps
//! these and reads the epsilon from a [`Tolerance`].

pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// Default epsilon for point and vector equality.
pub const POINT_TOLERANCE: f64 = 1e-9;

/// Default epsilon for shape-level equality and containment.
pub const SHAPE_TOLERANCE: f64 = 1e-6;

/// Tolerances threaded through every comparison-sensitive query.
///
/// `point` governs position/vector equality, parallelism and the
/// intersection solvers; `shape` governs containment and shape-level
/// equality. Each function documents which field it reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Epsilon for point and vector comparisons.
    pub point: f64,
    /// Epsilon for containment and shape comparisons.
    pub shape: f64,
}

impl Tolerance {
    /// Creates a tolerance with distinct point and shape epsilons.
    #[must_use]
    pub fn new(point: f64, shape: f64) -> Self {
        Self { point, shape }
    }

    /// Creates a tolerance using the same epsilon for every comparison.
    #[must_use]
    pub fn uniform(eps: f64) -> Self {
        Self {
            point: eps,
            shape: eps,
        }
    }

    /// Returns a copy with a different point epsilon.
    #[must_use]
    pub fn with_point(mut self, point: f64) -> Self {
        self.point = point;
        self
    }

    /// Returns a copy with a different shape epsilon.
    #[must_use]
    pub fn with_shape(mut self, shape: f64) -> Self {
        self.shape = shape;
        self
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            point: POINT_TOLERANCE,
            shape: SHAPE_TOLERANCE,
        }
    }
}

/// 2D cross product of `(ax, ay)` and `(bx, by)`.
#[inline]
#[must_use]
pub fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Positive when `a, b, c` turn counter-clockwise.
#[inline]
#[must_use]
pub fn orient(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    cross(bx - ax, by - ay, cx - ax, cy - ay)
}

/// Signed perpendicular distance of `c` from the line through `a` and `b`.
///
/// Same sign as [`orient`], but scales linearly with the coordinates so it
/// can be compared against a length tolerance. Zero when `a` and `b`
/// coincide.
#[must_use]
pub fn turn_offset(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    let base = (bx - ax).hypot(by - ay);
    if base <= 0.0 {
        return 0.0;
    }
    orient(ax, ay, bx, by, cx, cy) / base
}
