mod circle;
mod ellipse;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::geometry::Point;

/// Planar regions with an enclosed area.
pub trait HasArea {
    /// Returns the unsigned area of the region.
    fn area(&self) -> f64;
}

/// Planar regions with a boundary length.
pub trait HasPerimeter {
    /// Returns the length of the region's boundary.
    fn perimeter(&self) -> f64;
}

macro_rules! impl_measures {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasArea for $ty {
                fn area(&self) -> f64 {
                    <$ty>::area(self)
                }
            }

            impl HasPerimeter for $ty {
                fn perimeter(&self) -> f64 {
                    <$ty>::perimeter(self)
                }
            }
        )*
    };
}

impl_measures!(Rectangle, Circle, Polygon, Triangle, Ellipse);

/// Per-coordinate comparison of two vertex lists within `eps`.
pub(crate) fn vertices_close(a: &[Point], b: &[Point], eps: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| (p.x - q.x).abs() <= eps && (p.y - q.y).abs() <= eps)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn measures_through_trait_objects() {
        let shapes: Vec<Box<dyn HasArea>> = vec![
            Box::new(Rectangle::from_bounds(0.0, 0.0, 4.0, 3.0).unwrap()),
            Box::new(Circle::new(Point::origin(), 1.0).unwrap()),
        ];
        let total: f64 = shapes.iter().map(|s| s.area()).sum();
        assert!((total - (12.0 + std::f64::consts::PI)).abs() < 1e-12);
    }

    #[test]
    fn perimeter_through_trait() {
        fn boundary(s: &impl HasPerimeter) -> f64 {
            s.perimeter()
        }
        let tri = Triangle::new([Point::origin(), Point::new(3.0, 0.0), Point::new(0.0, 4.0)]);
        assert!((boundary(&tri) - 12.0).abs() < 1e-12);
    }
}
