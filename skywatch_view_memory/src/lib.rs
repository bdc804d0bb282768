// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skywatch_view_memory --heading-base-level=0

//! Skywatch View Memory: map view persistence across dashboard re-renders.
//!
//! Dashboard frameworks rebuild the whole figure on every interaction, which
//! resets an embedded map to its initial view unless the application carries
//! the view forward itself. This crate is that carry: a small headless store
//! that folds each relayout event into remembered zoom/center values, which
//! the next render feeds back into the figure.
//!
//! - [`ViewMemory`]: remembered zoom and center, with reset-to-defaults for
//!   the dashboard's refresh control.
//! - [`DeviceClass`]: touch/pointer classification from a user-agent
//!   string — the decision the application uses to choose whether to attach
//!   interaction guards at all. It lives here rather than in
//!   `skywatch_guard` because attaching is a caller decision; the guard
//!   itself is device-agnostic.
//!
//! ## Minimal example
//!
//! ```rust
//! use skywatch_relayout::{keys, LatLon, RelayoutData};
//! use skywatch_view_memory::ViewMemory;
//!
//! let mut view = ViewMemory::new(5.0, LatLon::new(44.0, -121.0));
//!
//! // The user zooms in; the memory follows.
//! view.apply(&RelayoutData::single(keys::MAP_ZOOM, 7.0));
//! assert_eq!(view.zoom(), 7.0);
//!
//! // A pan-only event leaves the zoom untouched.
//! view.apply(&RelayoutData::single(keys::MAP_CENTER, LatLon::new(45.5, -122.6)));
//! assert_eq!(view.zoom(), 7.0);
//! assert_eq!(view.center(), LatLon::new(45.5, -122.6));
//!
//! // The refresh button restores the defaults.
//! view.reset();
//! assert_eq!(view.zoom(), 5.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod device;
mod memory;

pub use device::DeviceClass;
pub use memory::ViewMemory;
