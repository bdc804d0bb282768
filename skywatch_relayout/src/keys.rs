// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known relayout property keys.
//!
//! The dashboards in this project have embedded two map layer generations
//! whose relayout payloads use different key prefixes for what is otherwise
//! the same property (`map.zoom` vs `mapbox.zoom`). Consumers therefore take
//! the watched key as a configuration parameter; these constants name the
//! variants so call sites do not scatter string literals.

/// Zoom level key used by the current map layer.
pub const MAP_ZOOM: &str = "map.zoom";

/// Zoom level key used by the legacy mapbox layer.
pub const MAPBOX_ZOOM: &str = "mapbox.zoom";

/// View center key used by the current map layer.
pub const MAP_CENTER: &str = "map.center";

/// View center key used by the legacy mapbox layer.
pub const MAPBOX_CENTER: &str = "mapbox.center";
