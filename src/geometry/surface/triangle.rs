use nalgebra::{Matrix2, Vector2};

use crate::error::{ConstructionError, GeometryError, Result};
use crate::geometry::curve::Segment;
use crate::geometry::Point;
use crate::math::polygon_2d::{contains_point_2d, signed_area_2d};
use crate::math::{Tolerance, POINT_TOLERANCE};
use crate::operations::query::Aabb;

use super::{vertices_close, Circle, Polygon};

/// A triangle with vertices `a`, `b`, `c` (indices 0, 1, 2).
///
/// Collinear vertices are allowed; the special points that need a proper
/// triangle return [`GeometryError::Degenerate`] for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    #[must_use]
    pub fn new(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }

    /// Creates a triangle from a slice of vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::VertexCount`] unless exactly three points are given.
    pub fn from_slice(points: &[Point]) -> Result<Self> {
        let vertices: [Point; 3] = points.try_into().map_err(|_| ConstructionError::VertexCount {
            expected: 3,
            actual: points.len(),
        })?;
        Ok(Self { vertices })
    }

    /// Builds a counter-clockwise triangle from its side lengths.
    ///
    /// `side_a` runs from vertex 0 to 1, `side_b` from 1 to 2 and `side_c`
    /// from 2 back to 0. Vertex 0 is placed at the origin and vertex 1 on
    /// the +x axis.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::TriangleInequality`] if any side is not
    /// positive or the strict triangle inequality fails.
    pub fn from_sides(side_a: f64, side_b: f64, side_c: f64) -> Result<Self> {
        let (a, b, c) = (side_a, side_b, side_c);
        let positive = [a, b, c].iter().all(|s| s.is_finite() && *s > 0.0);
        if !positive || a + b <= c || a + c <= b || b + c <= a {
            return Err(ConstructionError::TriangleInequality { a, b, c }.into());
        }
        let x = (a * a + c * c - b * b) / (2.0 * a);
        let y = (c * c - x * x).max(0.0).sqrt();
        Ok(Self {
            vertices: [Point::origin(), Point::new(a, 0.0), Point::new(x, y)],
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Lengths of sides `0-1`, `1-2`, `2-0`.
    #[must_use]
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        let [a, b, c] = self.vertices;
        (a.distance_to(&b), b.distance_to(&c), c.distance_to(&a))
    }

    /// Interior angles at vertices 0, 1, 2 in radians.
    #[must_use]
    pub fn angles_rad(&self) -> (f64, f64, f64) {
        let (ab, bc, ca) = self.side_lengths();
        // The angle at each vertex is opposite the side not touching it.
        (
            law_of_cosines(ab, ca, bc),
            law_of_cosines(ab, bc, ca),
            law_of_cosines(bc, ca, ab),
        )
    }

    /// Interior angles at vertices 0, 1, 2 in degrees.
    #[must_use]
    pub fn angles_deg(&self) -> (f64, f64, f64) {
        let (a, b, c) = self.angles_rad();
        (a.to_degrees(), b.to_degrees(), c.to_degrees())
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
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
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    /// `true` when the area is below `tol.point`.
    #[must_use]
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.area() < tol.point
    }

    /// Mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Center of the circumscribed circle.
    ///
    /// Solves the perpendicular-bisector system relative to vertex 0.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn circumcenter(&self) -> Result<Point> {
        self.require_area("circumcenter")?;
        let [a, b, c] = self.vertices;
        let u = b - a;
        let v = c - a;
        let m = Matrix2::new(u.x, u.y, v.x, v.y);
        let rhs = Vector2::new(u.length_squared() * 0.5, v.length_squared() * 0.5);
        let x = m.lu().solve(&rhs).ok_or_else(|| {
            GeometryError::Degenerate("circumcenter: singular bisector system".into())
        })?;
        Ok(Point::new(a.x + x.x, a.y + x.y))
    }

    /// Center of the inscribed circle (vertex weights are opposite side lengths).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn incenter(&self) -> Result<Point> {
        self.require_area("incenter")?;
        let [a, b, c] = self.vertices;
        let (ab, bc, ca) = self.side_lengths();
        let (wa, wb, wc) = (bc, ca, ab);
        let sum = wa + wb + wc;
        Ok(Point::new(
            (wa * a.x + wb * b.x + wc * c.x) / sum,
            (wa * a.y + wb * b.y + wc * c.y) / sum,
        ))
    }

    /// Intersection of the altitudes.
    ///
    /// Uses the Euler-line identity `H = A + B + C - 2O`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn orthocenter(&self) -> Result<Point> {
        let o = self.circumcenter()?;
        let [a, b, c] = self.vertices;
        Ok(Point::new(
            a.x + b.x + c.x - 2.0 * o.x,
            a.y + b.y + c.y - 2.0 * o.y,
        ))
    }

    /// `abc / 4A`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn circumradius(&self) -> Result<f64> {
        self.require_area("circumradius")?;
        let (a, b, c) = self.side_lengths();
        Ok(a * b * c / (4.0 * self.area()))
    }

    /// `A / s` with `s` the semi-perimeter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn inradius(&self) -> Result<f64> {
        self.require_area("inradius")?;
        Ok(self.area() / (self.perimeter() * 0.5))
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn circumcircle(&self) -> Result<Circle> {
        Circle::new(self.circumcenter()?, self.circumradius()?)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn incircle(&self) -> Result<Circle> {
        Circle::new(self.incenter()?, self.inradius()?)
    }

    /// Pythagoras on the sorted sides, within `tol.shape`.
    #[must_use]
    pub fn is_right_angled(&self, tol: &Tolerance) -> bool {
        let (a, b, c) = self.side_lengths();
        let mut sides = [a, b, c];
        sides.sort_by(f64::total_cmp);
        (sides[0] * sides[0] + sides[1] * sides[1] - sides[2] * sides[2]).abs() <= tol.shape
    }

    #[must_use]
    pub fn is_equilateral(&self, tol: &Tolerance) -> bool {
        let (a, b, c) = self.side_lengths();
        (a - b).abs() <= tol.shape && (b - c).abs() <= tol.shape && (a - c).abs() <= tol.shape
    }

    #[must_use]
    pub fn is_isosceles(&self, tol: &Tolerance) -> bool {
        let (a, b, c) = self.side_lengths();
        (a - b).abs() <= tol.shape || (b - c).abs() <= tol.shape || (a - c).abs() <= tol.shape
    }

    /// Boundary inclusive within `tol.shape`.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        contains_point_2d(&self.vertices, p, tol.shape)
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(&self.vertices)
            .unwrap_or_else(|| Aabb::new(self.vertices[0], self.vertices[0]))
    }

    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_corners(self.vertices.to_vec())
    }

    /// Vertex-wise equality within `tol.shape`.
    #[must_use]
    pub fn approx_eq(&self, other: &Triangle, tol: &Tolerance) -> bool {
        vertices_close(&self.vertices, &other.vertices, tol.shape)
    }

    fn require_area(&self, what: &str) -> Result<()> {
        if self.area() < POINT_TOLERANCE {
            return Err(GeometryError::Degenerate(format!("{what}: vertices are collinear")).into());
        }
        Ok(())
    }
}

/// Angle between the sides of length `adj1` and `adj2`, opposite `opp`.
fn law_of_cosines(adj1: f64, adj2: f64, opp: f64) -> f64 {
    let denom = 2.0 * adj1 * adj2;
    if denom <= 0.0 {
        return 0.0;
    }
    ((adj1 * adj1 + adj2 * adj2 - opp * opp) / denom)
        .clamp(-1.0, 1.0)
        .acos()
}
