use super::types::{Axis, Vec3};

/// Strict interval test on one axis.
///
/// Both boxes span `[p - s/2, p + s/2]`. Edges that merely touch do not count,
/// so resting contact is never reported as overlap. A zero extent still counts
/// when it lies strictly inside the other interval (a flat floor, a point).
#[inline]
pub fn overlaps_on_axis(pos_a: f32, size_a: f32, pos_b: f32, size_b: f32) -> bool {
    pos_a + size_a / 2.0 > pos_b - size_b / 2.0 && pos_a - size_a / 2.0 < pos_b + size_b / 2.0
}

/// Whether two axis-aligned boxes intersect on all three axes at once.
///
/// `pos_*` are box centers, `size_*` full extents. Symmetric in its arguments.
#[inline]
pub fn overlaps(pos_a: Vec3, size_a: Vec3, pos_b: Vec3, size_b: Vec3) -> bool {
    Axis::ALL.iter().all(|axis| {
        let i = axis.index();
        overlaps_on_axis(pos_a[i], size_a[i], pos_b[i], size_b[i])
    })
}
