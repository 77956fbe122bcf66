use crate::config::SatConfig;
use na::{Unit, Vector3};
use std::iter;

/// Where a candidate separating axis comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// `box_axis × edge`, with `box_axis` in `0..3` (x, y, z) and `edge` in `0..3`
    /// (`b - a`, `c - b`, `a - c`).
    EdgeCross { box_axis: usize, edge: usize },
    /// One of the principal axes of the box.
    BoxFace { box_axis: usize },
    /// Normal of the triangle plane, `(b - a) × (c - b)`.
    TriangleFace,
}

/// An entry of the axis table. `direction` is `None` when the axis is degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CandidateAxis {
    pub kind: AxisKind,
    pub direction: Option<Unit<Vector3<f32>>>,
}

fn cross_axis(
    u: &Vector3<f32>,
    v: &Vector3<f32>,
    config: &SatConfig,
) -> Option<Unit<Vector3<f32>>> {
    let min_norm = config.degenerate_tolerance() * u.norm() * v.norm();
    Unit::try_new(u.cross(v), min_norm)
}

/// Lazily yields the 13 candidate axes in their fixed order: the 9 edge-cross
/// axes (box axis major), the 3 box faces, then the triangle face.
pub(crate) fn candidate_axes(
    edges: [Vector3<f32>; 3],
    config: SatConfig,
) -> impl Iterator<Item = CandidateAxis> {
    let edge_cross = (0..3).flat_map(move |box_axis| {
        (0..3).map(move |edge| CandidateAxis {
            kind: AxisKind::EdgeCross { box_axis, edge },
            direction: cross_axis(&Vector3::ith(box_axis, 1.0), &edges[edge], &config),
        })
    });

    let box_faces = (0..3).map(|box_axis| CandidateAxis {
        kind: AxisKind::BoxFace { box_axis },
        direction: Some(Vector3::ith_axis(box_axis)),
    });

    let triangle_face = iter::once_with(move || CandidateAxis {
        kind: AxisKind::TriangleFace,
        direction: cross_axis(&edges[0], &edges[1], &config),
    });

    edge_cross.chain(box_faces).chain(triangle_face)
}
