// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget zoom guard state machine.

use alloc::borrow::Cow;
use alloc::string::String;

use skywatch_relayout::RelayoutData;

use crate::policy::ZoomPolicy;

/// Phase of an attached guard.
///
/// A guard that has issued a corrective command is waiting for that
/// command's echo; the very next event carrying the watched key clears the
/// phase unconditionally, whether or not it is the expected echo. This
/// single-phase handshake is what keeps guard and widget from chasing each
/// other, and it relies on the host delivering events in emission order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    /// Attached, no correction outstanding.
    #[default]
    Idle,
    /// A corrective command has been issued; its echo has not arrived yet.
    CorrectionPending,
}

/// One attached zoom guard instance.
///
/// `ZoomGuard` is a pure state machine: feed it each relayout payload the
/// widget emits, in order, and issue whatever corrective command it returns.
/// It holds the watched property key, the policy, the last allowed zoom
/// level, and the echo-suppression phase — the explicit per-widget record
/// that used to live as ad hoc attributes on the widget object.
#[derive(Clone, Debug)]
pub struct ZoomGuard {
    key: Cow<'static, str>,
    policy: ZoomPolicy,
    last_allowed: f64,
    phase: GuardPhase,
}

impl ZoomGuard {
    /// Creates a guard watching `key` with the given policy.
    ///
    /// `initial_zoom` seeds the last allowed level: for
    /// [`ZoomPolicy::Lock`] it is the level the widget is held at, for
    /// [`ZoomPolicy::Clamp`] it is folded into the range first.
    #[must_use]
    pub fn new(key: impl Into<Cow<'static, str>>, policy: ZoomPolicy, initial_zoom: f64) -> Self {
        let last_allowed = match policy {
            ZoomPolicy::Lock => initial_zoom,
            ZoomPolicy::Clamp { min, max } => initial_zoom.clamp(min, max),
        };
        Self {
            key: key.into(),
            policy,
            last_allowed,
            phase: GuardPhase::Idle,
        }
    }

    /// The watched relayout property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The policy this guard enforces.
    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        self.policy
    }

    /// The last allowed zoom level.
    #[must_use]
    pub fn last_allowed(&self) -> f64 {
        self.last_allowed
    }

    /// The current guard phase.
    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Moves the allowed zoom level for a legitimate programmatic change.
    ///
    /// Under [`ZoomPolicy::Lock`] the guard would otherwise revert any
    /// change, including ones the application itself issues (a data refresh
    /// re-fitting the view, for example). The application retargets the
    /// guard with the new level before issuing such a change, so the
    /// resulting relayout event reads as allowed.
    pub fn set_allowed(&mut self, zoom: f64) {
        self.last_allowed = match self.policy {
            ZoomPolicy::Lock => zoom,
            ZoomPolicy::Clamp { min, max } => zoom.clamp(min, max),
        };
    }

    /// Handles one relayout event, returning the corrective command to
    /// issue, if any.
    ///
    /// Semantics, in order:
    ///
    /// 1. A payload without the watched key is ignored entirely.
    /// 2. If a correction is pending, this event is its echo slot: the
    ///    phase clears and the event is not re-evaluated.
    /// 3. A non-numeric (or non-finite) value passes through untouched.
    /// 4. Otherwise the policy decides: a violation flips the guard to
    ///    [`GuardPhase::CorrectionPending`] and yields a single-key
    ///    corrective payload; an acceptable value becomes the new last
    ///    allowed level.
    pub fn on_relayout(&mut self, event: &RelayoutData) -> Option<RelayoutData> {
        let value = event.get(&self.key)?;
        if self.phase == GuardPhase::CorrectionPending {
            self.phase = GuardPhase::Idle;
            return None;
        }
        let requested = value.as_number()?;
        match self.policy.evaluate(requested, self.last_allowed) {
            Some(target) => {
                self.phase = GuardPhase::CorrectionPending;
                Some(RelayoutData::single(self.key.clone(), target))
            }
            None => {
                self.last_allowed = requested;
                None
            }
        }
    }

    /// Snapshot of the current guard state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomGuardDebugInfo {
        ZoomGuardDebugInfo {
            key: String::from(self.key.as_ref()),
            policy: self.policy,
            last_allowed: self.last_allowed,
            phase: self.phase,
        }
    }
}

/// Debug snapshot of a [`ZoomGuard`] state.
#[derive(Clone, Debug)]
pub struct ZoomGuardDebugInfo {
    /// Watched relayout property key.
    pub key: String,
    /// Enforced policy.
    pub policy: ZoomPolicy,
    /// Last allowed zoom level.
    pub last_allowed: f64,
    /// Current guard phase.
    pub phase: GuardPhase,
}

#[cfg(test)]
mod tests {
    use skywatch_relayout::{LatLon, keys};

    use super::*;

    fn zoom_event(zoom: f64) -> RelayoutData {
        RelayoutData::single(keys::MAP_ZOOM, zoom)
    }

    #[test]
    fn lock_reverts_and_absorbs_the_echo() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);

        let correction = guard.on_relayout(&zoom_event(7.0));
        assert_eq!(correction, Some(RelayoutData::single(keys::MAP_ZOOM, 5.0)));
        assert_eq!(guard.phase(), GuardPhase::CorrectionPending);

        // The echo clears the phase and produces no further command.
        assert_eq!(guard.on_relayout(&zoom_event(5.0)), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);

        // A later allowed event is simply accepted.
        assert_eq!(guard.on_relayout(&zoom_event(5.0)), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);
    }

    #[test]
    fn clamp_corrects_out_of_range_and_accepts_in_range() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);

        assert_eq!(
            guard.on_relayout(&zoom_event(2.0)),
            Some(RelayoutData::single(keys::MAP_ZOOM, 3.0))
        );
        // Absorb the echo before the next user action.
        assert_eq!(guard.on_relayout(&zoom_event(3.0)), None);

        assert_eq!(guard.on_relayout(&zoom_event(5.0)), None);
        assert_eq!(guard.last_allowed(), 5.0);
        assert_eq!(guard.on_relayout(&zoom_event(8.0)), None);
        assert_eq!(
            guard.on_relayout(&zoom_event(9.0)),
            Some(RelayoutData::single(keys::MAP_ZOOM, 8.0))
        );
    }

    #[test]
    fn clamp_has_echo_suppression_too() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);

        assert!(guard.on_relayout(&zoom_event(12.0)).is_some());
        assert_eq!(guard.phase(), GuardPhase::CorrectionPending);

        // Even though a clamped value would re-clamp to itself, the echo is
        // absorbed without re-evaluation.
        assert_eq!(guard.on_relayout(&zoom_event(8.0)), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);
    }

    #[test]
    fn missing_watched_key_is_a_no_op() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);
        let pan = RelayoutData::single(keys::MAP_CENTER, LatLon::new(44.0, -121.0));

        assert_eq!(guard.on_relayout(&pan), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);
        assert_eq!(guard.last_allowed(), 5.0);
    }

    #[test]
    fn missing_watched_key_does_not_consume_the_echo_slot() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);

        assert!(guard.on_relayout(&zoom_event(7.0)).is_some());
        // An unrelated pan event sneaks in before the echo.
        let pan = RelayoutData::single(keys::MAP_CENTER, LatLon::new(44.0, -121.0));
        assert_eq!(guard.on_relayout(&pan), None);
        assert_eq!(guard.phase(), GuardPhase::CorrectionPending);

        // The actual echo is still absorbed.
        assert_eq!(guard.on_relayout(&zoom_event(5.0)), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);
    }

    #[test]
    fn non_numeric_zoom_passes_through() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);
        let auto = RelayoutData::single(keys::MAP_ZOOM, "auto");

        assert_eq!(guard.on_relayout(&auto), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);
        assert_eq!(guard.last_allowed(), 5.0);
    }

    #[test]
    fn next_key_event_clears_pending_even_when_not_the_echo() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);

        assert!(guard.on_relayout(&zoom_event(7.0)).is_some());
        // Suppose an unexpected zoom value arrives in the echo slot; it is
        // absorbed unconditionally rather than corrected.
        assert_eq!(guard.on_relayout(&zoom_event(9.0)), None);
        assert_eq!(guard.phase(), GuardPhase::Idle);

        // The following event is evaluated normally again.
        assert!(guard.on_relayout(&zoom_event(9.0)).is_some());
    }

    #[test]
    fn set_allowed_moves_the_lock_target() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);

        // A data refresh re-fits the view to zoom 4; the app retargets the
        // guard before issuing the change.
        guard.set_allowed(4.0);
        assert_eq!(guard.on_relayout(&zoom_event(4.0)), None);

        // User gestures are still reverted, now to the new target.
        assert_eq!(
            guard.on_relayout(&zoom_event(6.0)),
            Some(RelayoutData::single(keys::MAP_ZOOM, 4.0))
        );
    }

    #[test]
    fn set_allowed_respects_clamp_bounds() {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);
        guard.set_allowed(20.0);
        assert_eq!(guard.last_allowed(), 8.0);
    }

    #[test]
    fn initial_zoom_is_clamped_into_range() {
        let guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 11.0);
        assert_eq!(guard.last_allowed(), 8.0);
    }

    #[test]
    fn debug_info_snapshots_state() {
        let mut guard = ZoomGuard::new(keys::MAPBOX_ZOOM, ZoomPolicy::Lock, 6.0);
        assert!(
            guard
                .on_relayout(&RelayoutData::single(keys::MAPBOX_ZOOM, 8.0))
                .is_some()
        );

        let info = guard.debug_info();
        assert_eq!(info.key, keys::MAPBOX_ZOOM);
        assert_eq!(info.policy, ZoomPolicy::Lock);
        assert_eq!(info.last_allowed, 6.0);
        assert_eq!(info.phase, GuardPhase::CorrectionPending);
    }
}
