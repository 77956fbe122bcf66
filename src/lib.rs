//! Box vs triangle overlap test with minimum translation vector.
//!
//! The test uses the separating axis theorem on the 13 axes that are enough to
//! decide overlap between an axis-aligned box and a triangle. When no axis
//! separates the shapes, the axis of least penetration gives the translation
//! that pushes the box out of the triangle.
//!
//! ```
//! use nalgebra::Vector3;
//! use tribox_mtv::{tri_box_mtv, Aabb, Triangle};
//!
//! let aabb = Aabb::new(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0)).unwrap();
//! let triangle = Triangle::new(
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(0.5, 0.0, 0.0),
//!     Vector3::new(0.0, 0.5, 0.0),
//! );
//! assert!(tri_box_mtv(&aabb, &triangle).is_overlapping());
//! ```

extern crate log;
extern crate nalgebra as na;
extern crate thiserror;

mod axis;
mod config;
mod shape;
mod tribox;

pub use axis::AxisKind;
pub use config::{ConfigError, SatConfig};
pub use shape::{Aabb, ShapeError, Triangle};
pub use tribox::{tri_box_mtv, tri_box_mtv_with, tri_box_penetration, Penetration, TriBoxResult};
