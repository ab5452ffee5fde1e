/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LEN_SQ: f64 = 1e-20;

/// Returns the unclamped parameter `t` of the projection of `(px, py)` onto
/// the infinite line through `(ax, ay)` and `(bx, by)`.
///
/// `t = dot(P - A, B - A) / |B - A|^2`. A zero-length segment yields `0.0`.
#[must_use]
pub fn segment_parameter(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < DEGENERATE_LEN_SQ {
        return 0.0;
    }

    ((px - ax) * dx + (py - ay) * dy) / len_sq
}

/// Returns the closest point to `(px, py)` on the segment `(ax, ay)`→`(bx, by)`
/// together with its parameter, clamped to `[0, 1]`.
#[must_use]
pub fn closest_on_segment(
    px: f64,
    py: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> ((f64, f64), f64) {
    let t = segment_parameter(px, py, ax, ay, bx, by).clamp(0.0, 1.0);
    ((ax + t * (bx - ax), ay + t * (by - ay)), t)
}

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let ((cx, cy), _) = closest_on_segment(px, py, ax, ay, bx, by);
    (px - cx).hypot(py - cy)
}

/// Returns the perpendicular distance from `(px, py)` to the infinite line
/// through `(ox, oy)` with unit direction `(dx, dy)`.
#[must_use]
pub fn point_to_line_dist(px: f64, py: f64, ox: f64, oy: f64, dx: f64, dy: f64) -> f64 {
    super::cross(px - ox, py - oy, dx, dy).abs()
}

/// Closest pair of points between segments `a0→a1` and `b0→b1`.
///
/// Returns `(point_on_a, point_on_b)`. Crossing segments return the crossing
/// point twice; otherwise the minimum is attained at an endpoint of one of the
/// two segments, so the four endpoint projections are compared.
#[must_use]
pub fn closest_between_segments(
    a0: (f64, f64),
    a1: (f64, f64),
    b0: (f64, f64),
    b1: (f64, f64),
    eps: f64,
) -> ((f64, f64), (f64, f64)) {
    if let Some(hit) = super::intersect_2d::segment_segment_intersect_2d(a0, a1, b0, b1, eps) {
        return (hit.point, hit.point);
    }

    let candidates = [
        {
            let (q, _) = closest_on_segment(b0.0, b0.1, a0.0, a0.1, a1.0, a1.1);
            (q, b0)
        },
        {
            let (q, _) = closest_on_segment(b1.0, b1.1, a0.0, a0.1, a1.0, a1.1);
            (q, b1)
        },
        {
            let (q, _) = closest_on_segment(a0.0, a0.1, b0.0, b0.1, b1.0, b1.1);
            (a0, q)
        },
        {
            let (q, _) = closest_on_segment(a1.0, a1.1, b0.0, b0.1, b1.0, b1.1);
            (a1, q)
        },
    ];

    let mut best = candidates[0];
    let mut best_dist = dist_sq(best.0, best.1);
    for &(p, q) in &candidates[1..] {
        let d = dist_sq(p, q);
        if d < best_dist {
            best_dist = d;
            best = (p, q);
        }
    }
    best
}

fn dist_sq(p: (f64, f64), q: (f64, f64)) -> f64 {
    let dx = p.0 - q.0;
    let dy = p.1 - q.1;
    dx * dx + dy * dy
}
