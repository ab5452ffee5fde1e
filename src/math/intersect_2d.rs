use super::cross;
use super::distance_2d::segment_parameter;

/// A bounded intersection between two parametric segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// The intersection point.
    pub point: (f64, f64),
    /// Parameter on the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter on the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallel and coincident lines (`|cross(d1, d2)| < eps`) both return `None`.
#[must_use]
pub fn line_line_params(
    p1: (f64, f64),
    d1: (f64, f64),
    p2: (f64, f64),
    d2: (f64, f64),
    eps: f64,
) -> Option<(f64, f64)> {
    let denom = cross(d1.0, d1.1, d2.0, d2.1);
    if denom.abs() < eps {
        return None;
    }
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let t = cross(dx, dy, d2.0, d2.1) / denom;
    let u = cross(dx, dy, d1.0, d1.1) / denom;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Both parameters must lie in `[-eps, 1 + eps]`; they are clamped to
/// `[0, 1]` in the result. Collinear overlapping segments return `None`:
/// overlap intervals are not reported. A zero-length segment is tested as a
/// point lying on the other segment.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: (f64, f64),
    a1: (f64, f64),
    b0: (f64, f64),
    b1: (f64, f64),
    eps: f64,
) -> Option<SegmentHit> {
    let da = (a1.0 - a0.0, a1.1 - a0.1);
    let db = (b1.0 - b0.0, b1.1 - b0.1);
    let a_degenerate = da.0.hypot(da.1) < eps;
    let b_degenerate = db.0.hypot(db.1) < eps;

    match (a_degenerate, b_degenerate) {
        (true, true) => {
            let d = (a0.0 - b0.0).hypot(a0.1 - b0.1);
            return (d < eps).then_some(SegmentHit {
                point: a0,
                t: 0.0,
                u: 0.0,
            });
        }
        (true, false) => {
            return point_on_segment_param(a0, b0, b1, eps).map(|u| SegmentHit {
                point: a0,
                t: 0.0,
                u,
            });
        }
        (false, true) => {
            return point_on_segment_param(b0, a0, a1, eps).map(|t| SegmentHit {
                point: b0,
                t,
                u: 0.0,
            });
        }
        (false, false) => {}
    }

    let (t, u) = line_line_params(a0, da, b0, db, eps)?;

    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some(SegmentHit {
            point: point_at(a0, da, t),
            t,
            u: u.clamp(0.0, 1.0),
        })
    } else {
        None
    }
}

/// Intersection of the infinite line `p + t * d` with the segment `b0→b1`.
///
/// Returns `(point, t, u)` with `u` (the segment parameter) clamped to `[0, 1]`.
/// Parallel configurations return `None`, including a segment lying on the line.
#[must_use]
pub fn line_segment_intersect_2d(
    p: (f64, f64),
    d: (f64, f64),
    b0: (f64, f64),
    b1: (f64, f64),
    eps: f64,
) -> Option<((f64, f64), f64, f64)> {
    let db = (b1.0 - b0.0, b1.1 - b0.1);
    if db.0.hypot(db.1) < eps {
        // Degenerate segment: a hit only if the point lies on the line.
        let len = d.0.hypot(d.1);
        if len < eps {
            return None;
        }
        let off = cross(b0.0 - p.0, b0.1 - p.1, d.0, d.1).abs() / len;
        if off >= eps {
            return None;
        }
        let t = ((b0.0 - p.0) * d.0 + (b0.1 - p.1) * d.1) / (len * len);
        return Some((b0, t, 0.0));
    }

    let (t, u) = line_line_params(p, d, b0, db, eps)?;
    if u >= -eps && u <= 1.0 + eps {
        let u = u.clamp(0.0, 1.0);
        Some((point_at(b0, db, u), t, u))
    } else {
        None
    }
}

/// Intersection parameters of the line `o + t * d` (unit `d`) with the circle
/// centered at `c` with radius `r`.
///
/// Returns zero, one (tangent, `| h - r | <= eps` where `h` is the distance from
/// the center to the line) or two parameters in ascending order.
#[must_use]
pub fn line_circle_params(o: (f64, f64), d: (f64, f64), c: (f64, f64), r: f64, eps: f64) -> Vec<f64> {
    // Foot of the perpendicular from the center.
    let t_foot = (c.0 - o.0) * d.0 + (c.1 - o.1) * d.1;
    let h = cross(c.0 - o.0, c.1 - o.1, d.0, d.1).abs();

    if h > r + eps {
        return Vec::new();
    }
    if (h - r).abs() <= eps {
        return vec![t_foot];
    }
    let half_chord = (r * r - h * h).max(0.0).sqrt();
    vec![t_foot - half_chord, t_foot + half_chord]
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: (f64, f64), dir: (f64, f64), t: f64) -> (f64, f64) {
    (origin.0 + dir.0 * t, origin.1 + dir.1 * t)
}

/// Parameter of `p` on segment `a→b` when `p` lies within `eps` of it.
fn point_on_segment_param(p: (f64, f64), a: (f64, f64), b: (f64, f64), eps: f64) -> Option<f64> {
    let t = segment_parameter(p.0, p.1, a.0, a.1, b.0, b.1);
    if t < -eps || t > 1.0 + eps {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    let q = point_at(a, (b.0 - a.0, b.1 - a.1), t);
    ((p.0 - q.0).hypot(p.1 - q.1) < eps).then_some(t)
}
