use log::trace;

use super::{
    broad::{self, BodyAccel},
    resolve::{PenetrationResolver, Resolution},
    types::{Body, MovableBody},
};

/// Summary of resolving one moving body against several others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Number of bodies tested.
    pub tested: usize,
    /// Number of contacts that moved the body.
    pub contacts: usize,
    /// Whether any contact resolved on y (the body landed on something).
    pub grounded: bool,
    /// Number of contacts that took the non-axis fallback.
    pub fallbacks: usize,
}

impl StepReport {
    #[inline]
    fn record(&mut self, resolution: Resolution) {
        self.tested += 1;
        match resolution {
            Resolution::Separate => {}
            Resolution::Axis { .. } => {
                self.contacts += 1;
                self.grounded |= resolution.is_grounded();
            }
            Resolution::Fallback { .. } => {
                self.contacts += 1;
                self.fallbacks += 1;
            }
        }
    }
}

/// Resolve `body` against every body in `others`, in slice order.
///
/// Each resolution sees the position and velocity left by the previous one, so
/// order matters. Contacts are not solved simultaneously.
pub fn resolve_against_all<S, O>(
    resolver: &PenetrationResolver,
    body: &mut S,
    others: &[O],
) -> StepReport
where
    S: MovableBody + ?Sized,
    O: Body,
{
    let mut report = StepReport::default();
    for other in others {
        report.record(resolver.resolve_contact(body, other));
    }
    trace!("step: {report:?}");
    report
}

/// Broad-phase pruned variant of [`resolve_against_all`].
///
/// Only bodies whose AABB touches `body`'s current box are tested, in ascending
/// index order. `skip` excludes one index (the moving body itself, when it is
/// part of `others`). `accel` should be built from `others`; candidates past
/// the end of `others` are ignored.
pub fn resolve_against_accel<S, O>(
    resolver: &PenetrationResolver,
    body: &mut S,
    others: &[O],
    accel: &BodyAccel,
    skip: Option<usize>,
) -> StepReport
where
    S: MovableBody + ?Sized,
    O: Body,
{
    let query = body.shape().to_aabb();
    let mut report = StepReport::default();

    for idx in broad::query_candidates(accel, &query) {
        if Some(idx) == skip {
            continue;
        }
        let Some(other) = others.get(idx) else {
            continue;
        };
        report.record(resolver.resolve_contact(body, other));
    }

    trace!("accelerated step: {report:?}");
    report
}
