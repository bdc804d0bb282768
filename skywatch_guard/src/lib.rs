// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skywatch_guard --heading-base-level=0

//! Skywatch Guard: viewport interaction guards for embedded map widgets.
//!
//! The Skywatch dashboards embed interactive map widgets whose zoom and pan
//! respond to user gestures (pinch, double-tap, drag-zoom). On small touch
//! screens those gestures fight with page scrolling, so the dashboards
//! enforce a view policy against them: keep the zoom locked at its current
//! level, or clamp it into a range, without blocking programmatic updates
//! that legitimately change the view.
//!
//! This crate is the headless core of that enforcement. It owns no widget
//! and performs no I/O; the host widget is reached only through the
//! [`RelayoutHost`] seam, and the guards themselves are small per-widget
//! state machines fed one relayout payload at a time:
//!
//! - [`ZoomPolicy`]: the rule to enforce — [`ZoomPolicy::Lock`] (reset every
//!   change back to the last allowed level) or [`ZoomPolicy::Clamp`]
//!   (bound the level into a closed range).
//! - [`ZoomGuard`] / [`CenterGuard`]: one attached guard instance each,
//!   producing the corrective command to issue, if any, and suppressing the
//!   echo that correction causes.
//! - [`GuardBank`]: the explicit per-widget record holding the attached
//!   guards, with idempotent attachment keyed by [`GuardKinds`] flags.
//!
//! ## Correction and echo
//!
//! Issuing a corrective relayout command makes the widget emit a fresh
//! relayout event for it. That echo must not be treated as a new user
//! action, or guard and widget chase each other forever. Every guard
//! therefore runs the same two-phase machine: a violation moves it from
//! `Idle` to `CorrectionPending`, and the next event carrying the watched
//! key clears the phase without being re-evaluated. The host's event
//! dispatch is serialized per widget, which guarantees exactly one
//! intervening event between a correction and its echo.
//!
//! ## Minimal example
//!
//! ```rust
//! use skywatch_guard::{GuardPhase, ZoomGuard, ZoomPolicy};
//! use skywatch_relayout::{keys, RelayoutData};
//!
//! // Lock the zoom at level 5.
//! let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::Lock, 5.0);
//!
//! // A pinch gesture requests zoom 7: one corrective command comes back.
//! let correction = guard.on_relayout(&RelayoutData::single(keys::MAP_ZOOM, 7.0));
//! assert_eq!(correction, Some(RelayoutData::single(keys::MAP_ZOOM, 5.0)));
//! assert_eq!(guard.phase(), GuardPhase::CorrectionPending);
//!
//! // The correction's echo is absorbed, not re-processed.
//! let echo = guard.on_relayout(&RelayoutData::single(keys::MAP_ZOOM, 5.0));
//! assert_eq!(echo, None);
//! assert_eq!(guard.phase(), GuardPhase::Idle);
//! ```
//!
//! ## Attachment lifecycle
//!
//! The enclosing dashboard re-runs its render callback freely, so guard
//! attachment is designed to be called on every render:
//! [`GuardBank::attach_zoom`] is a no-op once the zoom guard is attached,
//! and silently reports [`AttachOutcome::NotReady`] while the widget has not
//! rendered yet (the caller simply tries again on its next lifecycle
//! trigger). Whether to attach at all — for example only on touch devices —
//! is the caller's decision, not this crate's.
//!
//! ```rust
//! use skywatch_guard::{AttachOutcome, GuardBank, RelayoutHost, ZoomGuardConfig};
//! use skywatch_relayout::{keys, RelayoutData};
//!
//! struct Widget {
//!     zoom: f64,
//!     commands: Vec<RelayoutData>,
//! }
//!
//! impl RelayoutHost for Widget {
//!     fn is_live(&self) -> bool {
//!         true
//!     }
//!     fn current_zoom(&self) -> Option<f64> {
//!         Some(self.zoom)
//!     }
//!     fn relayout(&mut self, update: RelayoutData) {
//!         self.commands.push(update);
//!     }
//! }
//!
//! let mut widget = Widget { zoom: 6.0, commands: Vec::new() };
//! let mut bank = GuardBank::new();
//!
//! // Render callback runs twice; the second attach is a no-op.
//! let config = ZoomGuardConfig::clamp(keys::MAP_ZOOM, 3.0, 8.0, 6.0);
//! assert_eq!(bank.attach_zoom(&widget, config.clone()), AttachOutcome::Attached);
//! assert_eq!(bank.attach_zoom(&widget, config), AttachOutcome::AlreadyAttached);
//!
//! // An out-of-range zoom gesture gets exactly one corrective command.
//! bank.dispatch(&mut widget, &RelayoutData::single(keys::MAP_ZOOM, 11.0));
//! assert_eq!(widget.commands, vec![RelayoutData::single(keys::MAP_ZOOM, 8.0)]);
//! ```
//!
//! ## Concurrency
//!
//! Guards assume the single-threaded, in-order event dispatch of a UI event
//! loop. The types are plain data and `Send`, but nothing here locks; an
//! embedding that handles widget events on more than one thread must
//! confine each [`GuardBank`] to one scheduling context or synchronize
//! around it.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod bank;
mod guard;
mod host;
mod policy;

#[cfg(feature = "center")]
mod center;

pub use bank::{AttachOutcome, GuardBank, GuardKinds, ZoomGuardConfig};
pub use guard::{GuardPhase, ZoomGuard, ZoomGuardDebugInfo};
pub use host::RelayoutHost;
pub use policy::ZoomPolicy;

#[cfg(feature = "center")]
pub use bank::CenterGuardConfig;
#[cfg(feature = "center")]
pub use center::{CenterGuard, CenterPolicy};
