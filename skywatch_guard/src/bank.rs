// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget guard ownership and idempotent attachment.

use alloc::borrow::Cow;

use bitflags::bitflags;
use smallvec::SmallVec;

use skywatch_relayout::RelayoutData;

use crate::guard::ZoomGuard;
use crate::host::RelayoutHost;
use crate::policy::ZoomPolicy;

#[cfg(feature = "center")]
use crate::center::{CenterGuard, CenterPolicy};

bitflags! {
    /// Which guard kinds are attached to a widget.
    ///
    /// At most one guard of each kind may be attached per widget; the bank
    /// checks these flags before attaching, which is what makes repeated
    /// attach calls from re-render callbacks cheap no-ops.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct GuardKinds: u8 {
        /// A zoom guard is attached.
        const ZOOM = 1 << 0;
        /// A center guard is attached.
        const CENTER = 1 << 1;
    }
}

/// Result of an attach call.
///
/// None of these is an error: a guard is a best-effort UI affordance, and
/// every recognized condition is part of the normal lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The guard was attached by this call.
    Attached,
    /// A guard of this kind was already attached; nothing changed.
    AlreadyAttached,
    /// The widget is not rendered yet; nothing was attached. The caller is
    /// expected to try again on its next lifecycle trigger.
    NotReady,
}

/// Configuration for attaching a zoom guard.
#[derive(Clone, Debug)]
pub struct ZoomGuardConfig {
    /// Watched relayout property key (`keys::MAP_ZOOM` or the host
    /// variant's equivalent).
    pub key: Cow<'static, str>,
    /// Policy to enforce.
    pub policy: ZoomPolicy,
    /// Allowed-zoom seed used when the live widget does not report a
    /// current zoom.
    pub fallback_zoom: f64,
}

impl ZoomGuardConfig {
    /// Lock configuration: hold the zoom at its level at attachment time
    /// (or at `fallback_zoom` if the widget does not report one).
    #[must_use]
    pub fn lock(key: impl Into<Cow<'static, str>>, fallback_zoom: f64) -> Self {
        Self {
            key: key.into(),
            policy: ZoomPolicy::Lock,
            fallback_zoom,
        }
    }

    /// Clamp configuration over `[min, max]`.
    #[must_use]
    pub fn clamp(
        key: impl Into<Cow<'static, str>>,
        min: f64,
        max: f64,
        fallback_zoom: f64,
    ) -> Self {
        Self {
            key: key.into(),
            policy: ZoomPolicy::clamp(min, max),
            fallback_zoom,
        }
    }
}

/// Configuration for attaching a center guard.
#[cfg(feature = "center")]
#[derive(Clone, Debug)]
pub struct CenterGuardConfig {
    /// Watched relayout property key (`keys::MAP_CENTER` or the host
    /// variant's equivalent).
    pub key: Cow<'static, str>,
    /// Policy to enforce. When the live widget reports a current center,
    /// attachment re-targets the policy at it, so "lock where it is now"
    /// needs no special casing.
    pub policy: CenterPolicy,
    /// Keep the configured policy target even when the widget reports a
    /// current center.
    pub pin_configured_target: bool,
}

#[cfg(feature = "center")]
impl CenterGuardConfig {
    /// Lock configuration: hold the center where it is at attachment time,
    /// falling back to the policy's configured target.
    #[must_use]
    pub fn lock(key: impl Into<Cow<'static, str>>, policy: CenterPolicy) -> Self {
        Self {
            key: key.into(),
            policy,
            pin_configured_target: false,
        }
    }

    /// Lock configuration that always holds the policy's configured target,
    /// ignoring wherever the widget happens to be.
    #[must_use]
    pub fn pinned(key: impl Into<Cow<'static, str>>, policy: CenterPolicy) -> Self {
        Self {
            key: key.into(),
            policy,
            pin_configured_target: true,
        }
    }
}

/// The per-widget guard record.
///
/// A `GuardBank` lives alongside one widget handle and dies with it; guards
/// attached to different widgets share no state. The bank owns the attached
/// guard instances and the [`GuardKinds`] attachment flags, replacing the
/// ad hoc string-keyed attributes earlier revisions merged into the widget
/// object itself.
#[derive(Clone, Debug, Default)]
pub struct GuardBank {
    attached: GuardKinds,
    zoom: Option<ZoomGuard>,
    #[cfg(feature = "center")]
    center: Option<CenterGuard>,
}

impl GuardBank {
    /// Creates an empty bank with nothing attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of currently attached guard kinds.
    #[must_use]
    pub fn attached(&self) -> GuardKinds {
        self.attached
    }

    /// Attaches a zoom guard. Idempotent; safe to call on every render.
    ///
    /// The initial allowed zoom is read from the live widget, falling back
    /// to `config.fallback_zoom` when it reports none.
    pub fn attach_zoom(&mut self, host: &impl RelayoutHost, config: ZoomGuardConfig) -> AttachOutcome {
        if self.attached.contains(GuardKinds::ZOOM) {
            return AttachOutcome::AlreadyAttached;
        }
        if !host.is_live() {
            return AttachOutcome::NotReady;
        }
        let initial = host.current_zoom().unwrap_or(config.fallback_zoom);
        self.zoom = Some(ZoomGuard::new(config.key, config.policy, initial));
        self.attached |= GuardKinds::ZOOM;
        AttachOutcome::Attached
    }

    /// Attaches a center guard. Idempotent; safe to call on every render.
    #[cfg(feature = "center")]
    pub fn attach_center(
        &mut self,
        host: &impl RelayoutHost,
        config: CenterGuardConfig,
    ) -> AttachOutcome {
        if self.attached.contains(GuardKinds::CENTER) {
            return AttachOutcome::AlreadyAttached;
        }
        if !host.is_live() {
            return AttachOutcome::NotReady;
        }
        let mut guard = CenterGuard::new(config.key, config.policy);
        if !config.pin_configured_target
            && let Some(current) = host.current_center()
        {
            guard.set_allowed(current);
        }
        self.center = Some(guard);
        self.attached |= GuardKinds::CENTER;
        AttachOutcome::Attached
    }

    /// The attached zoom guard, if any.
    #[must_use]
    pub fn zoom_guard(&self) -> Option<&ZoomGuard> {
        self.zoom.as_ref()
    }

    /// Mutable access to the attached zoom guard, for programmatic
    /// retargeting via [`ZoomGuard::set_allowed`].
    pub fn zoom_guard_mut(&mut self) -> Option<&mut ZoomGuard> {
        self.zoom.as_mut()
    }

    /// The attached center guard, if any.
    #[cfg(feature = "center")]
    #[must_use]
    pub fn center_guard(&self) -> Option<&CenterGuard> {
        self.center.as_ref()
    }

    /// Mutable access to the attached center guard.
    #[cfg(feature = "center")]
    pub fn center_guard_mut(&mut self) -> Option<&mut CenterGuard> {
        self.center.as_mut()
    }

    /// Runs every attached guard over one relayout event, collecting the
    /// corrective commands to issue, in attachment order.
    ///
    /// A single event almost never violates more than one policy, so the
    /// result is inline-allocated for the one-command case.
    pub fn handle(&mut self, event: &RelayoutData) -> SmallVec<[RelayoutData; 1]> {
        let mut corrections = SmallVec::new();
        if let Some(guard) = self.zoom.as_mut()
            && let Some(correction) = guard.on_relayout(event)
        {
            corrections.push(correction);
        }
        #[cfg(feature = "center")]
        if let Some(guard) = self.center.as_mut()
            && let Some(correction) = guard.on_relayout(event)
        {
            corrections.push(correction);
        }
        corrections
    }

    /// Handles one relayout event and forwards the resulting corrective
    /// commands straight to the host, in order.
    pub fn dispatch(&mut self, host: &mut impl RelayoutHost, event: &RelayoutData) {
        for correction in self.handle(event) {
            host.relayout(correction);
        }
    }
}
