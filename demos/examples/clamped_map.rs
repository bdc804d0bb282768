// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped map with view memory across re-renders.
//!
//! The desktop dashboards let the user zoom freely inside a sane range and
//! remember the view between figure rebuilds; the refresh control drops
//! back to the default Oregon overview.

use skywatch_demos::SimWidget;
use skywatch_guard::{GuardBank, ZoomGuardConfig};
use skywatch_relayout::{LatLon, RelayoutData, keys};
use skywatch_view_memory::ViewMemory;

fn main() {
    let oregon = LatLon::new(44.0, -121.0);
    let mut widget = SimWidget::new(5.0, oregon);
    let mut bank = GuardBank::new();
    let mut view = ViewMemory::new(5.0, oregon);

    bank.attach_zoom(&widget, ZoomGuardConfig::clamp(keys::MAP_ZOOM, 3.0, 8.0, 5.0));

    let gestures = [
        RelayoutData::single(keys::MAP_ZOOM, 6.0),
        RelayoutData::single(keys::MAP_CENTER, LatLon::new(45.5, -122.6)),
        RelayoutData::single(keys::MAP_ZOOM, 12.0),
    ];
    for gesture in gestures {
        widget.gesture(gesture);
        widget.pump(&mut bank);
        // Whatever the widget settled on is what the next render restores.
        view.apply(&RelayoutData::new().with(keys::MAP_ZOOM, widget.zoom).with(
            keys::MAP_CENTER,
            widget.center,
        ));
        println!(
            "settled at zoom {} center {} (remembered zoom {})",
            widget.zoom,
            widget.center,
            view.zoom()
        );
    }

    println!("corrections issued: {}", widget.commands.len());

    // Refresh control: back to the defaults.
    view.reset();
    println!("after refresh: zoom {} center {}", view.zoom(), view.center());
}
