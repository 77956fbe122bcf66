/********************************************************/
/* AABB-triangle overlap test with minimum translation  */
/* vector, using the separating axis theorem.           */
/* Function: tri_box_mtv(aabb, triangle)                */
/*                                                      */
/* Axes tested, in this order:                          */
/*   1) crossproduct({x,y,z}-direction, edge from tri)  */
/*      this gives 3x3=9 tests                          */
/*   2) the {x,y,z}-directions                          */
/*   3) normal of the triangle                          */
/********************************************************/

use crate::axis::{candidate_axes, AxisKind};
use crate::config::SatConfig;
use crate::shape::{Aabb, Triangle};
use log::trace;
use na::{Unit, Vector3};

fn min_max3(x0: f32, x1: f32, x2: f32) -> (f32, f32) {
    let mut min = x0;
    let mut max = x0;
    if x1 < min {
        min = x1;
    }
    if x1 > max {
        max = x1;
    }
    if x2 < min {
        min = x2;
    }
    if x2 > max {
        max = x2;
    }
    (min, max)
}

/// Outcome of projecting both shapes on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AxisOverlap {
    Separating,
    /// Signed penetration depth along the axis.
    Overlapping(f32),
}

/// Projects the box-relative vertices and the box on `axis` and compares the intervals.
///
/// Intervals are closed: a vertex exactly on the box boundary is not separating.
pub(crate) fn evaluate_axis(
    axis: &Vector3<f32>,
    half_extents: &Vector3<f32>,
    vertices: &[Vector3<f32>; 3],
) -> AxisOverlap {
    let rad = half_extents.dot(&axis.abs());
    let (min, max) = min_max3(
        vertices[0].dot(axis),
        vertices[1].dot(axis),
        vertices[2].dot(axis),
    );

    if min > rad || max < -rad {
        AxisOverlap::Separating
    } else if min < -rad {
        // resolve towards the negative side: pull the box along `axis`
        AxisOverlap::Overlapping(-(max + rad))
    } else {
        AxisOverlap::Overlapping(rad - min)
    }
}

/// Penetration along the axis of least overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit axis the depth is measured along.
    pub axis: Unit<Vector3<f32>>,
    /// Signed penetration depth along `axis`.
    pub depth: f32,
    /// Which of the 13 candidate axes this is.
    pub kind: AxisKind,
}

impl Penetration {
    /// Translation to add to the box center to resolve the penetration.
    pub fn translation(&self) -> Vector3<f32> {
        self.axis.into_inner() * -self.depth
    }
}

/// Result of the box vs triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriBoxResult {
    /// Some axis separates the shapes.
    Separated,
    /// No axis separates the shapes; `translation` moves the box out along the
    /// axis of least penetration.
    Overlapping { translation: Vector3<f32> },
}

impl TriBoxResult {
    pub fn is_overlapping(&self) -> bool {
        matches!(self, TriBoxResult::Overlapping { .. })
    }

    pub fn translation(&self) -> Option<Vector3<f32>> {
        match *self {
            TriBoxResult::Separated => None,
            TriBoxResult::Overlapping { translation } => Some(translation),
        }
    }
}

impl From<Option<Penetration>> for TriBoxResult {
    fn from(penetration: Option<Penetration>) -> Self {
        match penetration {
            None => TriBoxResult::Separated,
            Some(penetration) => TriBoxResult::Overlapping {
                translation: penetration.translation(),
            },
        }
    }
}

/// Finds the axis of least penetration between `aabb` and `triangle`.
///
/// Returns `None` as soon as one of the candidate axes separates the shapes.
/// Degenerate axes (an edge parallel to a box axis, or the face normal of a
/// collinear triangle) are skipped. The box faces are never degenerate, so
/// every overlap comes with an axis.
pub fn tri_box_penetration(
    aabb: &Aabb,
    triangle: &Triangle,
    config: &SatConfig,
) -> Option<Penetration> {
    /* move everything so that the box center is in (0,0,0) */
    let vertices = [
        triangle.a - aabb.center,
        triangle.b - aabb.center,
        triangle.c - aabb.center,
    ];
    let edges = [
        vertices[1] - vertices[0],
        vertices[2] - vertices[1],
        vertices[0] - vertices[2],
    ];

    let mut best: Option<Penetration> = None;

    for candidate in candidate_axes(edges, *config) {
        let axis = match candidate.direction {
            Some(axis) => axis,
            None => {
                trace!("skipping degenerate axis {:?}", candidate.kind);
                continue;
            }
        };

        match evaluate_axis(&axis, &aabb.half_extents, &vertices) {
            AxisOverlap::Separating => {
                trace!("separating axis {:?}: {:?}", candidate.kind, axis);
                return None;
            }
            AxisOverlap::Overlapping(depth) => {
                // strict comparison: the first axis wins ties
                if best.map_or(true, |best| depth.abs() < best.depth.abs()) {
                    best = Some(Penetration {
                        axis,
                        depth,
                        kind: candidate.kind,
                    });
                }
            }
        }
    }

    best
}

/// Tests `aabb` against `triangle` with the default configuration.
pub fn tri_box_mtv(aabb: &Aabb, triangle: &Triangle) -> TriBoxResult {
    tri_box_mtv_with(aabb, triangle, &SatConfig::default())
}

pub fn tri_box_mtv_with(aabb: &Aabb, triangle: &Triangle, config: &SatConfig) -> TriBoxResult {
    tri_box_penetration(aabb, triangle, config).into()
}
