use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// A point in the normalized unit square. Canvas convention: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Principal axis of a point set from the covariance eigen-decomposition.
#[derive(Debug, Clone, Copy)]
pub struct PrincipalAxis {
    /// Axis angle in radians from +x, normalized to (-π/2, π/2].
    pub angle: f64,
    /// Stddev along the axis.
    pub major_dev: f64,
    /// Stddev perpendicular to the axis.
    pub minor_dev: f64,
}

/// Unweighted centroid. Callers guarantee a non-empty slice.
pub fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point::new(sum_x / n, sum_y / n)
}

/// Centroid weighted by per-point weights. Weights are assumed normalized
/// (sum = 1); callers guarantee matching non-empty slices.
pub fn weighted_centroid(points: &[Point], weights: &[f64]) -> Point {
    let mut x = 0.0;
    let mut y = 0.0;
    for (p, w) in points.iter().zip(weights) {
        x += p.x * w;
        y += p.y * w;
    }
    Point::new(x, y)
}

/// Direction of maximum variance plus the spread along and across it.
/// A single point (or coincident points) yields angle 0 with zero spread.
pub fn principal_axis(points: &[Point]) -> PrincipalAxis {
    let n = points.len() as f64;
    let c = centroid(points);

    let mut cov_xx = 0.0;
    let mut cov_yy = 0.0;
    let mut cov_xy = 0.0;
    for p in points {
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        cov_xx += dx * dx;
        cov_yy += dy * dy;
        cov_xy += dx * dy;
    }
    cov_xx /= n;
    cov_yy /= n;
    cov_xy /= n;

    if cov_xx < EPSILON && cov_yy < EPSILON {
        return PrincipalAxis {
            angle: 0.0,
            major_dev: 0.0,
            minor_dev: 0.0,
        };
    }

    // Eigenvalues of the 2x2 covariance matrix
    let mean = (cov_xx + cov_yy) / 2.0;
    let half_diff = (cov_xx - cov_yy) / 2.0;
    let det_term = (half_diff * half_diff + cov_xy * cov_xy).sqrt();
    let major = (mean + det_term).max(0.0);
    let minor = (mean - det_term).max(0.0);

    let mut angle = 0.5 * (2.0 * cov_xy).atan2(cov_xx - cov_yy);
    if angle <= -std::f64::consts::FRAC_PI_2 {
        angle += std::f64::consts::PI;
    } else if angle > std::f64::consts::FRAC_PI_2 {
        angle -= std::f64::consts::PI;
    }

    PrincipalAxis {
        angle,
        major_dev: major.sqrt(),
        minor_dev: minor.sqrt(),
    }
}

/// Ratio of stddev to mean of distances from `center`.
/// 0.0 means perfectly radial; degenerate inputs (all points at the
/// center) also read as 0.0.
pub fn radial_dispersion(points: &[Point], center: Point) -> f64 {
    let n = points.len() as f64;
    let dists: Vec<f64> = points.iter().map(|p| p.distance(center)).collect();
    let mean: f64 = dists.iter().sum::<f64>() / n;
    if mean < EPSILON {
        return 0.0;
    }
    let var: f64 = dists.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / n;
    var.sqrt() / mean
}

/// Scalar projection of `p` onto the axis through `origin` at `angle`.
pub fn project(p: Point, origin: Point, angle: f64) -> f64 {
    (p.x - origin.x) * angle.cos() + (p.y - origin.y) * angle.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.9)]));
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_centroid_pulls_toward_heavy_point() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let c = weighted_centroid(&points, &[0.75, 0.25]);
        assert_relative_eq!(c.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_axis_horizontal() {
        let axis = principal_axis(&pts(&[(0.1, 0.5), (0.5, 0.5), (0.9, 0.5)]));
        assert_relative_eq!(axis.angle, 0.0, epsilon = 1e-10);
        assert!(axis.major_dev > 0.0);
        assert_relative_eq!(axis.minor_dev, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_principal_axis_diagonal() {
        let axis = principal_axis(&pts(&[(0.1, 0.1), (0.5, 0.5), (0.9, 0.9)]));
        assert_relative_eq!(axis.angle, std::f64::consts::FRAC_PI_4, epsilon = 1e-10);
    }

    #[test]
    fn test_principal_axis_vertical_triangle() {
        // Wide base, tall apex: more variance vertically than horizontally
        let axis = principal_axis(&pts(&[(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)]));
        assert_relative_eq!(
            axis.angle.abs(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_principal_axis_degenerate() {
        let axis = principal_axis(&pts(&[(0.5, 0.5), (0.5, 0.5)]));
        assert_eq!(axis.angle, 0.0);
        assert_eq!(axis.major_dev, 0.0);
    }

    #[test]
    fn test_radial_dispersion_ring_is_zero() {
        let center = Point::new(0.5, 0.5);
        let points = pts(&[(0.5, 0.2), (0.8, 0.5), (0.5, 0.8), (0.2, 0.5)]);
        assert_relative_eq!(radial_dispersion(&points, center), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radial_dispersion_line_is_high() {
        let center = Point::new(0.5, 0.5);
        let points = pts(&[(0.5, 0.5), (0.6, 0.5), (0.9, 0.5)]);
        assert!(radial_dispersion(&points, center) > 0.5);
    }

    #[test]
    fn test_project_orders_along_axis() {
        let origin = Point::new(0.5, 0.5);
        let a = project(Point::new(0.1, 0.5), origin, 0.0);
        let b = project(Point::new(0.9, 0.5), origin, 0.0);
        assert!(a < b);
        assert_relative_eq!(a, -0.4, epsilon = 1e-12);
    }
}
