use std::f64::consts::TAU;

use crate::error::{ConstructionError, Result};
use crate::geometry::curve::Segment;
use crate::geometry::Point;
use crate::math::polygon_2d::{
    contains_point_2d, edges, is_convex_2d, is_simple_2d, perimeter_2d, signed_area_2d,
};
use crate::math::Tolerance;
use crate::operations::query::{Aabb, ConvexHull, Hull};

use super::vertices_close;

/// A closed polygon given by its vertex ring.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Orientation is not normalized; [`Polygon::signed_area`] reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from at least three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::TooFewVertices`] for fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ConstructionError::TooFewVertices(vertices.len()).into());
        }
        Ok(Self { vertices })
    }

    /// Internal constructor for rings already known to have 3+ vertices.
    pub(crate) fn from_corners(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    /// Regular `n`-gon inscribed in the circle of `radius` around `center`.
    ///
    /// The first vertex sits at `rotation_deg` counter-clockwise from +x.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::TooFewVertices`] for `n < 3` and
    /// [`ConstructionError::InvalidRadius`] for a negative or non-finite radius.
    pub fn regular(n: usize, center: Point, radius: f64, rotation_deg: f64) -> Result<Self> {
        if n < 3 {
            return Err(ConstructionError::TooFewVertices(n).into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConstructionError::InvalidRadius(radius).into());
        }
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / n as f64;
        let start = rotation_deg.to_radians();
        let vertices = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let (s, c) = (start + step * i as f64).sin_cos();
                Point::new(center.x + radius * c, center.y + radius * s)
            })
            .collect();
        Ok(Self { vertices })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edges `(v[i], v[i + 1 mod n])`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        edges(&self.vertices).map(Segment::from)
    }

    /// Shoelace area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices)
    }

    /// Arithmetic mean of the vertices.
    ///
    /// This is the vertex centroid, not the area centroid; the two differ
    /// for irregular polygons.
    #[must_use]
    pub fn centroid(&self) -> Point {
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Ray-casting containment; boundary inclusive within `tol.shape`.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        contains_point_2d(&self.vertices, p, tol.shape)
    }

    /// Consistent turn direction, with turns below `tol.shape` ignored.
    #[must_use]
    pub fn is_convex(&self, tol: &Tolerance) -> bool {
        is_convex_2d(&self.vertices, tol.shape)
    }

    /// No two non-adjacent edges intersect (within `tol.point`).
    #[must_use]
    pub fn is_simple(&self, tol: &Tolerance) -> bool {
        is_simple_2d(&self.vertices, tol.point)
    }

    /// Equal edge lengths and equal vertex angles, each within `tol.shape`
    /// of the mean (population standard deviation).
    #[must_use]
    pub fn is_regular(&self, tol: &Tolerance) -> bool {
        let n = self.vertices.len();
        let lengths: Vec<f64> = self.edges().map(|e| e.length()).collect();
        if std_dev(&lengths) > tol.shape {
            return false;
        }
        let angles: Vec<f64> = (0..n)
            .filter_map(|i| {
                let prev = self.vertices[(i + n - 1) % n];
                let cur = self.vertices[i];
                let next = self.vertices[(i + 1) % n];
                let a = prev - cur;
                let b = next - cur;
                let denom = a.length() * b.length();
                (denom > 0.0).then(|| (a.dot(&b) / denom).clamp(-1.0, 1.0).acos().to_degrees())
            })
            .collect();
        std_dev(&angles) <= tol.shape
    }

    /// Convex hull of the vertices.
    ///
    /// # Errors
    ///
    /// Propagates [`ConvexHull::execute`] errors; a constructed polygon is
    /// never empty, so in practice this succeeds.
    pub fn convex_hull(&self, tol: &Tolerance) -> Result<Hull> {
        ConvexHull::new(&self.vertices).with_tolerance(*tol).execute()
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(&self.vertices)
            .unwrap_or_else(|| Aabb::new(Point::origin(), Point::origin()))
    }

    /// Vertex-wise equality within `tol.shape`, same starting vertex.
    #[must_use]
    pub fn approx_eq(&self, other: &Polygon, tol: &Tolerance) -> bool {
        vertices_close(&self.vertices, &other.vertices, tol.shape)
    }
}

fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}
