// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom/center memory.

use alloc::borrow::Cow;

use skywatch_relayout::{LatLon, RelayoutData, keys};

/// Remembered map view state, carried across dashboard re-renders.
///
/// `ViewMemory` applies the same folding rule the dashboards' store
/// callbacks use: a relayout event updates whichever watched properties it
/// carries with a usable value, and everything else keeps its previous
/// value. Missing keys and non-numeric zoom values are not errors; they
/// simply do not move the memory.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewMemory {
    zoom_key: Cow<'static, str>,
    center_key: Cow<'static, str>,
    default_zoom: f64,
    default_center: LatLon,
    zoom: f64,
    center: LatLon,
}

impl ViewMemory {
    /// Creates a memory starting at, and resetting to, the given defaults.
    ///
    /// Watches [`keys::MAP_ZOOM`] and [`keys::MAP_CENTER`]; use
    /// [`with_keys`](Self::with_keys) for the legacy mapbox layer.
    #[must_use]
    pub fn new(default_zoom: f64, default_center: LatLon) -> Self {
        Self {
            zoom_key: Cow::Borrowed(keys::MAP_ZOOM),
            center_key: Cow::Borrowed(keys::MAP_CENTER),
            default_zoom,
            default_center,
            zoom: default_zoom,
            center: default_center,
        }
    }

    /// Replaces the watched property keys.
    #[must_use]
    pub fn with_keys(
        mut self,
        zoom_key: impl Into<Cow<'static, str>>,
        center_key: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.zoom_key = zoom_key.into();
        self.center_key = center_key.into();
        self
    }

    /// The remembered zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The remembered view center.
    #[must_use]
    pub fn center(&self) -> LatLon {
        self.center
    }

    /// Folds one relayout event into the memory.
    pub fn apply(&mut self, event: &RelayoutData) {
        if let Some(zoom) = event.number(&self.zoom_key) {
            self.zoom = zoom;
        }
        if let Some(center) = event.lat_lon(&self.center_key) {
            self.center = center;
        }
    }

    /// Restores the defaults (the refresh-button path).
    pub fn reset(&mut self) {
        self.zoom = self.default_zoom;
        self.center = self.default_center;
    }
}
