// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skywatch_relayout --heading-base-level=0

//! Skywatch Relayout: payload model for map widget view updates.
//!
//! Embedded map widgets report every view change — pan, zoom, programmatic
//! update — as a *relayout* payload: a small mapping from affected property
//! names (for example `"map.zoom"`) to their new values. Corrective commands
//! sent back to the widget have exactly the same shape. This crate models
//! that payload once, for both directions:
//!
//! - [`RelayoutData`]: an ordered, small association list from property key
//!   to value.
//! - [`PropValue`]: the value vocabulary relayout payloads actually carry
//!   (numbers, text, booleans, geographic centers).
//! - [`LatLon`]: a geographic coordinate matching the host's
//!   `{lat, lon}` center objects.
//! - [`keys`]: well-known property-key constants for the two host map layers
//!   the Skywatch dashboards embed. The watched key is always a
//!   configuration parameter of consumers; these constants only name the
//!   common choices.
//!
//! ## Minimal example
//!
//! ```rust
//! use skywatch_relayout::{keys, PropValue, RelayoutData};
//!
//! // A zoom gesture as reported by the widget.
//! let event = RelayoutData::new().with(keys::MAP_ZOOM, 7.25);
//! assert_eq!(event.number(keys::MAP_ZOOM), Some(7.25));
//!
//! // Keys the payload does not carry read as absent, not as errors.
//! assert!(event.get(keys::MAP_CENTER).is_none());
//!
//! // Non-numeric values are representable and simply not numbers.
//! let auto = RelayoutData::single(keys::MAP_ZOOM, "auto");
//! assert_eq!(auto.number(keys::MAP_ZOOM), None);
//! assert!(matches!(auto.get(keys::MAP_ZOOM), Some(PropValue::Text(_))));
//! ```
//!
//! With the `serde` feature enabled, payloads serialize in the host's own
//! JSON shape (`{"map.zoom": 7.25, "map.center": {"lat": 44.0, "lon": -121.0}}`),
//! so a JSON-speaking widget boundary needs no hand-written glue.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod data;
mod value;

pub mod keys;

pub use data::RelayoutData;
pub use value::{LatLon, PropValue};
