use crate::operations::query::Aabb;

use super::{Circle, Ellipse, Line, Point, Polygon, Rectangle, Segment, Triangle};

/// Any planar entity, for queries that dispatch on the pair of kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Lower-case name of the entity kind, as used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Segment(_) => "segment",
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
            Shape::Triangle(_) => "triangle",
            Shape::Ellipse(_) => "ellipse",
        }
    }

    /// `true` for kinds that enclose an area.
    #[must_use]
    pub fn is_region(&self) -> bool {
        matches!(
            self,
            Shape::Rectangle(_)
                | Shape::Circle(_)
                | Shape::Polygon(_)
                | Shape::Triangle(_)
                | Shape::Ellipse(_)
        )
    }

    /// Axis-aligned bounds; `None` for an unbounded line.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Shape::Point(p) => Some(Aabb::new(*p, *p)),
            Shape::Segment(s) => Aabb::enclosing(&[s.start, s.end]),
            Shape::Line(_) => None,
            Shape::Rectangle(r) => Some(r.bounds()),
            Shape::Circle(c) => Some(c.bounds()),
            Shape::Polygon(p) => Some(p.bounds()),
            Shape::Triangle(t) => Some(t.bounds()),
            Shape::Ellipse(e) => Some(e.bounds()),
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(value: $variant) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_from_entity!(Point, Segment, Line, Rectangle, Circle, Polygon, Triangle, Ellipse);
