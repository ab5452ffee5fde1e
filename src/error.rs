use thiserror::Error;

/// Top-level error type for the planar geometry library.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by smart constructors when an entity would violate its invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("coordinate is not finite: ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("line direction must not be the zero vector")]
    ZeroDirection,

    #[error("radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("expected exactly {expected} vertices, got {actual}")]
    VertexCount { expected: usize, actual: usize },

    #[error("invalid bounds: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("invalid ellipse axes: semi-major {semi_major}, semi-minor {semi_minor}")]
    InvalidAxes { semi_major: f64, semi_minor: f64 },

    #[error("side lengths {a}, {b}, {c} do not form a triangle")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to geometric computations on valid entities.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("no algorithm for {left} vs {right}")]
    Unsupported {
        left: &'static str,
        right: &'static str,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
