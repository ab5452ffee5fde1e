mod angle;
mod bounding_box;
mod closest_point;
mod convex_hull;
mod coordinate;
mod distance;
mod intersect;
mod shape_query;

pub use angle::{
    angle_at_vertex, angle_between, angle_between_rad, are_parallel, are_perpendicular,
    polar_angle, polygon_vertex_angles,
};
pub use bounding_box::{bounding_box, centroid, Aabb, BoundingBox};
pub use closest_point::{NearestPoint, NearestPointResult};
pub use convex_hull::{ConvexHull, Hull};
pub use coordinate::{are_collinear, cartesian_to_polar, polar_to_cartesian, sort_points_by_angle};
pub use distance::{
    point_side_of_segment, point_to_line_closest_point, point_to_line_distance,
    point_to_polygon_distance, point_to_rectangle_distance, point_to_segment_closest_point,
    point_to_segment_distance, polygon_nearest_points, segments_closest_points, segments_distance,
    Side,
};
pub use intersect::{
    circle_line_intersection, circle_polygon_intersect, circle_segment_intersection,
    circles_intersection, ellipse_circle_intersection, ellipse_line_intersection, line_intersection,
    line_polygon_intersection_points, line_segment_intersection, polygon_intersection_points,
    rectangle_intersection_points, segment_intersection, segment_polygon_intersection_points,
    CircleIntersection,
};
pub use shape_query::{contains, intersects, minimum_distance, within_distance};
