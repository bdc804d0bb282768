// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-widget seam.

use skywatch_relayout::{LatLon, RelayoutData};

/// Capabilities a host map widget exposes to the guards.
///
/// The crate never owns a widget; the embedding implements this trait over
/// whatever handle its UI framework provides and is responsible for the
/// subscription side of the boundary — forwarding every relayout event the
/// widget emits into [`GuardBank::handle`](crate::GuardBank::handle) or
/// [`GuardBank::dispatch`](crate::GuardBank::dispatch), preserving the
/// widget's emission order.
///
/// `relayout` is the one command channel back: it changes the named view
/// properties and, as a consequence, makes the widget emit a fresh relayout
/// event (the echo the guards suppress).
pub trait RelayoutHost {
    /// Returns `true` once the widget is rendered and able to take
    /// commands.
    ///
    /// Attachment against a non-live host is silently skipped; the caller
    /// retries on its next lifecycle trigger.
    fn is_live(&self) -> bool;

    /// The widget's current zoom level, if it exposes one.
    fn current_zoom(&self) -> Option<f64>;

    /// The widget's current view center, if it exposes one.
    fn current_center(&self) -> Option<LatLon> {
        None
    }

    /// Issues a partial view update to the widget.
    fn relayout(&mut self, update: RelayoutData);
}
