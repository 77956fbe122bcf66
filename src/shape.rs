use na::Vector3;
use thiserror::Error;

/// Errors raised when building a shape from invalid input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("half-extent {value} along axis {axis} is negative")]
    NegativeHalfExtent { axis: usize, value: f32 },
    #[error("box center and half-extents must be finite")]
    NonFinite,
}

/// Axis-aligned box spanning `center - half_extents ..= center + half_extents`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vector3<f32>,
    pub half_extents: Vector3<f32>,
}

impl Aabb {
    /// Builds a box, rejecting negative or non-finite components.
    ///
    /// A zero half-extent is allowed and flattens the box along that axis.
    pub fn new(center: Vector3<f32>, half_extents: Vector3<f32>) -> Result<Self, ShapeError> {
        if !center.iter().chain(half_extents.iter()).all(|x| x.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        for axis in 0..3 {
            if half_extents[axis] < 0.0 {
                return Err(ShapeError::NegativeHalfExtent {
                    axis,
                    value: half_extents[axis],
                });
            }
        }
        Ok(Aabb {
            center,
            half_extents,
        })
    }

    pub fn from_min_max(mins: Vector3<f32>, maxs: Vector3<f32>) -> Result<Self, ShapeError> {
        Self::new((mins + maxs) * 0.5, (maxs - mins) * 0.5)
    }

    pub fn mins(&self) -> Vector3<f32> {
        self.center - self.half_extents
    }

    pub fn maxs(&self) -> Vector3<f32> {
        self.center + self.half_extents
    }

    /// The same box moved by `translation`, e.g. a translation returned by the tester.
    pub fn translated(&self, translation: &Vector3<f32>) -> Self {
        Aabb {
            center: self.center + translation,
            half_extents: self.half_extents,
        }
    }
}

/// Triangle given by three world-space vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vector3<f32>,
    pub b: Vector3<f32>,
    pub c: Vector3<f32>,
}

impl Triangle {
    pub fn new(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> Self {
        Triangle { a, b, c }
    }

    pub fn vertices(&self) -> [Vector3<f32>; 3] {
        [self.a, self.b, self.c]
    }

    /// Same triangle with the opposite winding.
    pub fn reversed(&self) -> Self {
        Triangle::new(self.a, self.c, self.b)
    }

    /// The edges `b - a`, `c - b` and `a - c`; they sum to zero.
    pub fn edges(&self) -> [Vector3<f32>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Non-normalized normal, oriented by the winding.
    pub fn raw_normal(&self) -> Vector3<f32> {
        (self.b - self.a).cross(&(self.c - self.b))
    }

    /// Whether the vertices are collinear (or coincident) up to `tolerance`,
    /// measured relative to the lengths of the first two edges.
    pub fn is_degenerate(&self, tolerance: f32) -> bool {
        let [e0, e1, _] = self.edges();
        self.raw_normal().norm() <= tolerance * e0.norm() * e1.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_half_extent_is_rejected() {
        let err = Aabb::new(Vector3::zeros(), Vector3::new(1.0, -0.5, 1.0)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::NegativeHalfExtent {
                axis: 1,
                value: -0.5
            }
        );
    }

    #[test]
    fn non_finite_box_is_rejected() {
        let err = Aabb::new(Vector3::new(f32::NAN, 0.0, 0.0), Vector3::repeat(1.0)).unwrap_err();
        assert_eq!(err, ShapeError::NonFinite);
        let err = Aabb::new(Vector3::zeros(), Vector3::new(f32::INFINITY, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, ShapeError::NonFinite);
    }

    #[test]
    fn flat_box_is_accepted() {
        let aabb = Aabb::new(Vector3::zeros(), Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(aabb.mins(), Vector3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.maxs(), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn min_max_round_trip() {
        let aabb =
            Aabb::from_min_max(Vector3::new(-1.0, 0.0, 2.0), Vector3::new(3.0, 1.0, 4.0)).unwrap();
        assert_eq!(aabb.center, Vector3::new(1.0, 0.5, 3.0));
        assert_eq!(aabb.half_extents, Vector3::new(2.0, 0.5, 1.0));
        assert!(Aabb::from_min_max(Vector3::repeat(1.0), Vector3::zeros()).is_err());
    }

    #[test]
    fn edges_sum_to_zero() {
        let triangle = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
        );
        let [e0, e1, e2] = triangle.edges();
        assert_eq!(e0 + e1 + e2, Vector3::zeros());
        assert_eq!(triangle.raw_normal(), Vector3::new(0.0, 0.0, 6.0));
        assert_eq!(triangle.reversed().raw_normal(), Vector3::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let triangle = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0),
        );
        assert!(triangle.is_degenerate(1.0e-6));

        let point = Triangle::new(Vector3::repeat(1.0), Vector3::repeat(1.0), Vector3::repeat(1.0));
        assert!(point.is_degenerate(1.0e-6));

        let proper = Triangle::new(Vector3::zeros(), Vector3::x(), Vector3::y());
        assert!(!proper.is_degenerate(1.0e-6));
    }
}
