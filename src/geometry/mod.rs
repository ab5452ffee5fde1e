pub mod curve;
mod point;
mod shape;
pub mod surface;
mod vector;

pub use curve::{HasLength, Line, Segment};
pub use point::Point;
pub use shape::Shape;
pub use surface::{Circle, Ellipse, HasArea, HasPerimeter, Polygon, Rectangle, Triangle};
pub use vector::Vector;

