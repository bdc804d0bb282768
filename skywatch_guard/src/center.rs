// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-center pan lock.
//!
//! The "fully locked" widgets on small screens hold their pan as well as
//! their zoom. Pan lands in relayout payloads as the view-center property,
//! so the pan lock is a center guard: any center farther than a small
//! tolerance from the allowed one is pulled back. The tolerance exists
//! because hosts round-trip centers through floating point; without it the
//! guard would correct its own echo's last few ulps forever.

use alloc::borrow::Cow;

use skywatch_relayout::{LatLon, RelayoutData};

use crate::guard::GuardPhase;

/// Fixed-center policy: the allowed center plus a degree-space tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterPolicy {
    allowed: LatLon,
    tolerance_deg: f64,
}

impl CenterPolicy {
    /// Default tolerance in degrees, roughly a meter at mid latitudes.
    pub const DEFAULT_TOLERANCE_DEG: f64 = 1e-5;

    /// Creates a policy holding the view at `allowed`.
    #[must_use]
    pub fn new(allowed: LatLon) -> Self {
        Self {
            allowed,
            tolerance_deg: Self::DEFAULT_TOLERANCE_DEG,
        }
    }

    /// Sets a custom tolerance in degrees.
    #[must_use]
    pub fn with_tolerance_deg(mut self, tolerance_deg: f64) -> Self {
        self.tolerance_deg = tolerance_deg.abs();
        self
    }

    /// The allowed center.
    #[must_use]
    pub fn allowed(&self) -> LatLon {
        self.allowed
    }

    /// Evaluates a requested center, returning the corrective target if it
    /// strays beyond the tolerance.
    #[must_use]
    pub fn evaluate(&self, requested: LatLon) -> Option<LatLon> {
        let offset = requested.to_point() - self.allowed.to_point();
        (offset.hypot() > self.tolerance_deg).then_some(self.allowed)
    }
}

/// One attached center guard instance.
///
/// Runs the same two-phase echo-suppression machine as
/// [`ZoomGuard`](crate::ZoomGuard), watching the center key instead of the
/// zoom key.
#[derive(Clone, Debug)]
pub struct CenterGuard {
    key: Cow<'static, str>,
    policy: CenterPolicy,
    phase: GuardPhase,
}

impl CenterGuard {
    /// Creates a guard watching `key` with the given policy.
    #[must_use]
    pub fn new(key: impl Into<Cow<'static, str>>, policy: CenterPolicy) -> Self {
        Self {
            key: key.into(),
            policy,
            phase: GuardPhase::Idle,
        }
    }

    /// The watched relayout property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current guard phase.
    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// The allowed center.
    #[must_use]
    pub fn allowed(&self) -> LatLon {
        self.policy.allowed()
    }

    /// Moves the allowed center for a legitimate programmatic re-centering.
    pub fn set_allowed(&mut self, center: LatLon) {
        self.policy.allowed = center;
    }

    /// Handles one relayout event, returning the corrective command to
    /// issue, if any.
    ///
    /// Same shape as [`ZoomGuard::on_relayout`](crate::ZoomGuard::on_relayout):
    /// payloads without the watched key are ignored, a pending correction's
    /// echo slot is absorbed, non-center values pass through, and a center
    /// beyond tolerance yields a single-key corrective payload.
    pub fn on_relayout(&mut self, event: &RelayoutData) -> Option<RelayoutData> {
        let value = event.get(&self.key)?;
        if self.phase == GuardPhase::CorrectionPending {
            self.phase = GuardPhase::Idle;
            return None;
        }
        let requested = value.as_lat_lon()?;
        let target = self.policy.evaluate(requested)?;
        self.phase = GuardPhase::CorrectionPending;
        Some(RelayoutData::single(self.key.clone(), target))
    }
}
