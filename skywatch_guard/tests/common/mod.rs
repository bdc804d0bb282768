// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fake map widget for guard integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::collections::VecDeque;

use skywatch_guard::{GuardBank, RelayoutHost};
use skywatch_relayout::{LatLon, PropValue, RelayoutData, keys};

/// In-process stand-in for an embedded map widget.
///
/// Models the two host capabilities the guards rely on: serialized,
/// in-order event delivery, and a `relayout` command channel whose commands
/// apply to the view and then come back as echo events — exactly one echo
/// per command, queued behind anything already pending.
pub(crate) struct FakeMapWidget {
    pub(crate) live: bool,
    pub(crate) zoom: f64,
    pub(crate) center: LatLon,
    pub(crate) commands: Vec<RelayoutData>,
    queue: VecDeque<RelayoutData>,
}

impl FakeMapWidget {
    pub(crate) fn new(zoom: f64, center: LatLon) -> Self {
        Self {
            live: true,
            zoom,
            center,
            commands: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Queues an event as if the user gestured on the widget.
    pub(crate) fn gesture(&mut self, event: RelayoutData) {
        self.apply(&event);
        self.queue.push_back(event);
    }

    /// Issues a programmatic update, as the enclosing application would.
    ///
    /// Indistinguishable from a guard correction on the widget side: the
    /// update applies and echoes like any other relayout command.
    #[allow(
        dead_code,
        reason = "Not every integration test file exercises programmatic updates."
    )]
    pub(crate) fn relayout_from_app(&mut self, update: RelayoutData) {
        self.relayout(update);
    }

    fn apply(&mut self, update: &RelayoutData) {
        if let Some(zoom) = update.number(keys::MAP_ZOOM) {
            self.zoom = zoom;
        }
        if let Some(center) = update.lat_lon(keys::MAP_CENTER) {
            self.center = center;
        }
    }

    /// Delivers queued events to the bank in emission order until the
    /// widget settles. Corrective commands re-enter the queue as echoes, so
    /// a guard that never stops correcting would keep this loop running;
    /// the cap turns that bug into a test failure instead of a hang.
    pub(crate) fn pump(&mut self, bank: &mut GuardBank) {
        let mut budget = 100;
        while let Some(event) = self.queue.pop_front() {
            budget -= 1;
            assert!(budget > 0, "guard/widget feedback loop did not settle");
            bank.dispatch(self, &event);
        }
    }
}

impl RelayoutHost for FakeMapWidget {
    fn is_live(&self) -> bool {
        self.live
    }

    fn current_zoom(&self) -> Option<f64> {
        Some(self.zoom)
    }

    fn current_center(&self) -> Option<LatLon> {
        Some(self.center)
    }

    fn relayout(&mut self, update: RelayoutData) {
        self.apply(&update);
        self.commands.push(update.clone());
        // The widget reports the command's effect as a fresh relayout event.
        self.queue.push_back(update);
    }
}

#[allow(
    dead_code,
    reason = "Not every integration test file exercises the zoom helpers."
)]
pub(crate) fn zoom_event(zoom: f64) -> RelayoutData {
    RelayoutData::single(keys::MAP_ZOOM, zoom)
}

#[allow(
    dead_code,
    reason = "Not every integration test file exercises the non-numeric case."
)]
pub(crate) fn zoom_text_event(text: &str) -> RelayoutData {
    RelayoutData::single(keys::MAP_ZOOM, PropValue::from(text))
}
