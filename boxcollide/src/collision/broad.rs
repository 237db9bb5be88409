use nalgebra as na;
use rapier3d::parry::{
    bounding_volume::Aabb,
    partitioning::{Bvh, BvhBuildStrategy},
};

use super::types::{Body, BoxShape, Vec3};

/// Acceleration structure for broad-phase queries over a set of bodies.
///
/// Notes:
/// - Built from a snapshot of body boxes. Rebuild after bodies move if you need
///   exact candidates; a stale accel only costs missed or extra candidates.
/// - Every body is indexed, including flat and zero-size boxes: a flat floor
///   still overlaps anything crossing it.
/// - Leaf `i` is body `i` of the slice the accel was built from. Queries
///   against a different slice skip indices that slice does not have.
pub struct BodyAccel {
    /// BVH over the body AABBs, one leaf per body.
    pub bvh: Bvh,
    len: usize,
}

impl BodyAccel {
    /// Return true if this accelerator has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of indexed bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl BoxShape {
    /// World-space parry AABB with the same corners as this box.
    #[inline]
    pub fn to_aabb(&self) -> Aabb {
        Aabb {
            mins: na::Point3::from(self.mins()),
            maxs: na::Point3::from(self.maxs()),
        }
    }
}

/// Build a broad-phase accelerator over `bodies`.
pub fn build_body_accel<B: Body>(bodies: &[B]) -> BodyAccel {
    let aabbs: Vec<Aabb> = bodies.iter().map(|body| body.shape().to_aabb()).collect();

    BodyAccel {
        bvh: Bvh::from_leaves(BvhBuildStrategy::Binned, &aabbs),
        len: aabbs.len(),
    }
}

/// AABB covering `shape` at its current center and after moving by `displacement`.
///
/// Useful to prune everything a body could touch during one step.
pub fn swept_aabb(shape: &BoxShape, displacement: Vec3) -> Aabb {
    let start = shape.to_aabb();
    let end = shape.shifted(displacement).to_aabb();
    aabb_union(&start, &end)
}

/// Query body indices whose AABB intersects `query`, in ascending order.
///
/// This is conservative: parry's AABB test counts touching boxes, so callers
/// still need the strict overlap test (or `resolve`, which runs it first).
pub fn query_candidates(accel: &BodyAccel, query: &Aabb) -> Vec<usize> {
    let mut out: Vec<usize> = accel
        .bvh
        .intersect_aabb(query)
        .map(|leaf_idx| leaf_idx as usize)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// All index pairs `(i, j)` with `i < j` whose AABBs intersect, sorted.
///
/// `bodies` should be the slice `accel` was built from. Indices past its end
/// are ignored.
pub fn candidate_pairs<B: Body>(accel: &BodyAccel, bodies: &[B]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, body) in bodies.iter().enumerate() {
        let query = body.shape().to_aabb();
        for j in query_candidates(accel, &query) {
            if j > i && j < bodies.len() {
                pairs.push((i, j));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}

/// Like [`candidate_pairs`], keeping only pairs that strictly overlap.
pub fn overlapping_pairs<B: Body>(accel: &BodyAccel, bodies: &[B]) -> Vec<(usize, usize)> {
    candidate_pairs(accel, bodies)
        .into_iter()
        .filter(|&(i, j)| match (bodies.get(i), bodies.get(j)) {
            (Some(a), Some(b)) => a.shape().overlaps_box(&b.shape()),
            _ => false,
        })
        .collect()
}

/// Compute the union of two AABBs.
fn aabb_union(a: &Aabb, b: &Aabb) -> Aabb {
    let min = na::Point3::new(
        a.mins.x.min(b.mins.x),
        a.mins.y.min(b.mins.y),
        a.mins.z.min(b.mins.z),
    );
    let max = na::Point3::new(
        a.maxs.x.max(b.maxs.x),
        a.maxs.y.max(b.maxs.y),
        a.maxs.z.max(b.maxs.z),
    );
    Aabb {
        mins: min,
        maxs: max,
    }
}
