// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Skywatch demos.
//!
//! The demos have no browser to embed a real map widget in, so they run the
//! guards against [`SimWidget`]: an in-process widget that keeps a view,
//! delivers events in emission order, and echoes every relayout command as
//! a fresh event — the same contract a real map host provides.

use std::collections::VecDeque;

use skywatch_guard::{GuardBank, RelayoutHost};
use skywatch_relayout::{LatLon, RelayoutData, keys};

/// An in-process map widget simulation.
#[derive(Debug)]
pub struct SimWidget {
    /// Whether the widget has "rendered" yet.
    pub live: bool,
    /// Current zoom level.
    pub zoom: f64,
    /// Current view center.
    pub center: LatLon,
    /// Every relayout command received, in order.
    pub commands: Vec<RelayoutData>,
    queue: VecDeque<RelayoutData>,
}

impl SimWidget {
    /// Creates a live widget at the given view.
    #[must_use]
    pub fn new(zoom: f64, center: LatLon) -> Self {
        Self {
            live: true,
            zoom,
            center,
            commands: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Applies a user gesture and queues its relayout event.
    pub fn gesture(&mut self, event: RelayoutData) {
        self.apply(&event);
        self.queue.push_back(event);
    }

    /// Delivers queued events to `bank` in order until the widget settles.
    pub fn pump(&mut self, bank: &mut GuardBank) {
        while let Some(event) = self.queue.pop_front() {
            bank.dispatch(self, &event);
        }
    }

    fn apply(&mut self, update: &RelayoutData) {
        if let Some(zoom) = update.number(keys::MAP_ZOOM) {
            self.zoom = zoom;
        }
        if let Some(center) = update.lat_lon(keys::MAP_CENTER) {
            self.center = center;
        }
    }
}

impl RelayoutHost for SimWidget {
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
        self.queue.push_back(update);
    }
}
