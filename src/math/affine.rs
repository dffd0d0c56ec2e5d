//! Two-dimensional points and affine maps over them

use std::ops::Neg;

/// Real-valued coordinate produced by the chaos game
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Point {
    /// Starting point of every generation run
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a point from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components are finite
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Raw bit patterns of both components, used for exact-match keys
    pub const fn to_bits(self) -> [u64; 2] {
        [self.x.to_bits(), self.y.to_bits()]
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Affine map `p -> M·p + b` with a row-major 2x2 linear part
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMap {
    /// Linear part, `matrix[row][col]`
    pub matrix: [[f64; 2]; 2],
    /// Translation applied after the linear part
    pub offset: Point,
}

impl AffineMap {
    /// Map that leaves every point unchanged
    pub const IDENTITY: Self = Self::new([[1.0, 0.0], [0.0, 1.0]], Point::ORIGIN);

    /// Create a map from its linear part and offset
    pub const fn new(matrix: [[f64; 2]; 2], offset: Point) -> Self {
        Self { matrix, offset }
    }

    /// Apply the map to a point
    pub fn apply(&self, point: Point) -> Point {
        let [[a, b], [c, d]] = self.matrix;
        Point::new(
            a.mul_add(point.x, b * point.y) + self.offset.x,
            c.mul_add(point.x, d * point.y) + self.offset.y,
        )
    }

    /// Whether every matrix entry and offset component is finite
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().flatten().all(|value| value.is_finite()) && self.offset.is_finite()
    }

    /// Raw bit patterns of all six parameters, used for exact-match keys
    pub const fn to_bits(&self) -> [u64; 6] {
        let [[a, b], [c, d]] = self.matrix;
        [
            a.to_bits(),
            b.to_bits(),
            c.to_bits(),
            d.to_bits(),
            self.offset.x.to_bits(),
            self.offset.y.to_bits(),
        ]
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}
