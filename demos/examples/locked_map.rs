// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fully locked map on a touch device.
//!
//! Replays the mobile dashboard flow: classify the device from its
//! user-agent, attach zoom and center locks once the widget renders, then
//! feed it a pinch and a drag and watch the guards pull the view back.

use skywatch_demos::SimWidget;
use skywatch_guard::{
    AttachOutcome, CenterGuardConfig, CenterPolicy, GuardBank, ZoomGuardConfig,
};
use skywatch_relayout::{LatLon, RelayoutData, keys};
use skywatch_view_memory::DeviceClass;

const PHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

fn main() {
    let device = DeviceClass::from_user_agent(PHONE_UA);
    println!("device class: {device:?}");

    let home = LatLon::new(44.0, -121.0);
    let mut widget = SimWidget::new(5.0, home);
    let mut bank = GuardBank::new();

    // The render callback attaches on every run; only touch devices get
    // guards at all.
    if device.is_touch() {
        let outcome = bank.attach_zoom(&widget, ZoomGuardConfig::lock(keys::MAP_ZOOM, 5.0));
        println!("zoom guard: {outcome:?}");
        let outcome = bank.attach_center(
            &widget,
            CenterGuardConfig::lock(keys::MAP_CENTER, CenterPolicy::new(home)),
        );
        println!("center guard: {outcome:?}");
        assert_eq!(
            bank.attach_zoom(&widget, ZoomGuardConfig::lock(keys::MAP_ZOOM, 5.0)),
            AttachOutcome::AlreadyAttached
        );
    }

    // A pinch gesture zooms and drifts the center at once.
    widget.gesture(
        RelayoutData::new()
            .with(keys::MAP_ZOOM, 7.5)
            .with(keys::MAP_CENTER, LatLon::new(45.1, -120.2)),
    );
    widget.pump(&mut bank);

    println!("view after pinch: zoom {} center {}", widget.zoom, widget.center);
    for command in &widget.commands {
        println!("corrective command: {}", serde_json::to_string(command).unwrap());
    }
    if let Some(guard) = bank.zoom_guard() {
        println!("guard state: {:?}", guard.debug_info());
    }
}
