// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom policies.

/// The rule a zoom guard enforces against incoming zoom changes.
///
/// A policy is chosen at attachment time and is immutable for the lifetime
/// of the guard. Evaluation is a pure function from the requested level and
/// the last allowed level to an optional corrective target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomPolicy {
    /// Reset every zoom change back to the last allowed level.
    ///
    /// The allowed level is guard state, recorded at attachment (from the
    /// widget's current zoom or a configured fallback) and moved only by
    /// [`ZoomGuard::set_allowed`](crate::ZoomGuard::set_allowed) when the
    /// application issues a legitimate programmatic change.
    Lock,
    /// Bound the requested level into a closed range.
    ///
    /// Construct with [`ZoomPolicy::clamp`], which normalizes the interval
    /// so `min <= max`.
    Clamp {
        /// Lowest allowed zoom level.
        min: f64,
        /// Highest allowed zoom level.
        max: f64,
    },
}

impl ZoomPolicy {
    /// Creates a clamp policy over `[min, max]`.
    ///
    /// The bounds are normalized so that `min <= max`.
    #[must_use]
    pub fn clamp(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self::Clamp { min, max }
    }

    /// Evaluates a requested zoom level against the policy.
    ///
    /// Returns the corrective target if the request violates the policy, or
    /// `None` if the request is acceptable as-is. Non-finite requests are
    /// never corrected; the caller treats them as "not our concern", the
    /// same as non-numeric payload values.
    #[must_use]
    pub fn evaluate(&self, requested: f64, allowed: f64) -> Option<f64> {
        if !requested.is_finite() {
            return None;
        }
        match *self {
            Self::Lock => (requested != allowed).then_some(allowed),
            Self::Clamp { min, max } => {
                let clamped = requested.clamp(min, max);
                (clamped != requested).then_some(clamped)
            }
        }
    }
}
