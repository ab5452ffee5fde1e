//! Planar computational geometry.
//!
//! Value types for points, vectors, segments, lines and planar regions,
//! with intersection, distance, angle, containment and convex hull queries
//! under an explicit [`Tolerance`].
//!
//! ```
//! use planar_geometry::{Point, Polygon, Tolerance};
//!
//! let square = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(0.0, 2.0),
//! ])?;
//! assert!(square.contains_point(&Point::new(1.0, 1.0), &Tolerance::default()));
//! assert!((square.area() - 4.0).abs() < 1e-12);
//! # Ok::<(), planar_geometry::PlanarError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ConstructionError, GeometryError, PlanarError, Result};
pub use geometry::{
    Circle, Ellipse, HasArea, HasLength, HasPerimeter, Line, Point, Polygon, Rectangle, Segment,
    Shape, Triangle, Vector,
};
pub use math::{Tolerance, POINT_TOLERANCE, SHAPE_TOLERANCE};
