//! Geometric primitives.
//!
//! Positions are carried by vertices only to compute edge lengths and
//! midpoints. Comparisons are exact: a hanging vertex is recognized only when
//! its position is bit-for-bit equal to the midpoint of the edge it splits.

use approx::{AbsDiffEq, RelativeEq};

/// Point in three-dimensional Euclidean space.
///
/// `Point3` is an immutable value. Equality (`PartialEq`) compares components
/// exactly; use the `approx` traits for tolerant comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Gets the componentwise average of two points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conform::geometry::Point3;
    ///
    /// let a = Point3::new(0.0, 0.0, 0.0);
    /// let b = Point3::new(100.0, 0.0, 0.0);
    ///
    /// assert_eq!(Point3::new(50.0, 0.0, 0.0), Point3::midpoint(&a, &b));
    /// ```
    pub fn midpoint(a: &Point3, b: &Point3) -> Self {
        Point3 {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
            z: (a.z + b.z) / 2.0,
        }
    }

    /// Gets the Euclidean distance to another point.
    pub fn distance(&self, other: &Point3) -> f64 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(x, y, z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Gets the area of the triangle formed by three points.
pub fn triangle_area(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    let (ux, uy, uz) = (b.x - a.x, b.y - a.y, b.z - a.z);
    let (vx, vy, vz) = (c.x - a.x, c.y - a.y, c.z - a.z);
    let (nx, ny, nz) = (uy * vz - uz * vy, uz * vx - ux * vz, ux * vy - uy * vx);
    (nx * nx + ny * ny + nz * nz).sqrt() / 2.0
}
