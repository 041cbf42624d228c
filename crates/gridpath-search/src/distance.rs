use gridpath_core::Point;

/// Approximation of √2 used for diagonal steps.
pub const DIAGONAL_COST: f64 = 1.414;

#[inline]
fn deltas(a: Point, b: Point) -> (f64, f64) {
    (f64::from(a.x.abs_diff(b.x)), f64::from(a.y.abs_diff(b.y)))
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Octile distance: straight steps cost 1, diagonal steps cost
/// [`DIAGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    (dx + dy) + (DIAGONAL_COST - 2.0) * dx.min(dy)
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Length of a path of adjacent cells: 1 per straight step and
/// [`DIAGONAL_COST`] per diagonal step. Empty and single-point paths have
/// length 0.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| {
            if w[0].is_diagonal_to(w[1]) {
                DIAGONAL_COST
            } else {
                1.0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn metrics() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert!((manhattan(a, b) - 7.0).abs() < EPS);
        assert!((euclidean(a, b) - 5.0).abs() < EPS);
        assert!((chebyshev(a, b) - 4.0).abs() < EPS);
        // 3 diagonal steps + 1 straight step.
        assert!((octile(a, b) - (3.0 * DIAGONAL_COST + 1.0)).abs() < EPS);
    }

    #[test]
    fn metrics_are_symmetric() {
        let a = Point::new(-2, 5);
        let b = Point::new(4, 1);
        for f in [manhattan, octile, euclidean, chebyshev] {
            assert!((f(a, b) - f(b, a)).abs() < EPS);
            assert!(f(a, a).abs() < EPS);
        }
    }

    #[test]
    fn far_apart_points_do_not_overflow() {
        let a = Point::new(i32::MAX, 0);
        let b = Point::new(i32::MIN, 0);
        let d = f64::from(u32::MAX);
        assert_eq!(manhattan(a, b), d);
        assert_eq!(euclidean(a, b), d);
        assert_eq!(chebyshev(b, a), d);
    }

    #[test]
    fn path_length_mixed() {
        let path = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 2),
        ];
        assert!((path_length(&path) - (2.0 * DIAGONAL_COST + 1.0)).abs() < EPS);
    }

    #[test]
    fn path_length_degenerate() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(4, 4)]), 0.0);
    }
}
