// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-class detection from user-agent strings.

use alloc::string::String;

/// Touch markers looked for in a lowercased user-agent string.
///
/// The list follows the usual mobile-browser families; anything not matched
/// is treated as a pointer device, which errs on the side of leaving the
/// map fully interactive.
const TOUCH_MARKERS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "windows phone",
    "blackberry",
    "opera mini",
    "mobile",
];

/// Coarse input-device classification.
///
/// The dashboards attach viewport guards only on touch devices, where map
/// gestures fight with page scrolling; on pointer devices the map stays
/// fully interactive. That decision belongs to the enclosing application,
/// so this type lives beside the view state rather than inside the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// A touch-first device (phone, tablet).
    Touch,
    /// A pointer-first device (desktop, laptop).
    Pointer,
}

impl DeviceClass {
    /// Classifies a browser user-agent string.
    ///
    /// Matching is case-insensitive substring search over a small marker
    /// list; unknown or empty strings classify as [`DeviceClass::Pointer`].
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua: String = user_agent.to_ascii_lowercase();
        if TOUCH_MARKERS.iter().any(|marker| ua.contains(marker)) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    /// Returns `true` for touch-first devices.
    #[must_use]
    pub fn is_touch(self) -> bool {
        self == Self::Touch
    }
}
