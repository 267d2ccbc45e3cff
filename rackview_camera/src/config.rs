// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera constants, grouped per focus mode, plus transition policies.

use glam::Vec3;
use kurbo::{Point, Rect, Size};
use rackview_layout::Warehouse;

/// Perspective lens shared by every perspective evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lens {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y: 60_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Free-roam orbit around the world origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Horizontal distance from the origin.
    pub radius: f32,
    /// Height above the floor.
    pub height: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            radius: 10.0,
            height: 5.0,
        }
    }
}

/// Overhead camera for the plan view.
///
/// Floor-plan coordinates are world x (horizontal) and world z (vertical), matching
/// [`Warehouse::site_footprint`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanFraming {
    /// Floor-plan point directly below the camera.
    pub center: Point,
    /// Camera height above the floor.
    pub altitude: f64,
    /// Minimum half-size of the visible floor area; the wider axis for the current
    /// aspect ratio wins.
    pub half_extent: Size,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl PlanFraming {
    /// Smallest half-width the plan camera will show.
    pub const MIN_HALF_EXTENT: f64 = 0.5;

    /// Frame `footprint` with `margin` (1.0 = tight) around it.
    ///
    /// The half-width never drops below [`MIN_HALF_EXTENT`](Self::MIN_HALF_EXTENT), so a
    /// degenerate footprint still yields a usable projection.
    pub fn fit(footprint: Rect, margin: f64) -> Self {
        let half = |extent: f64| {
            let h = extent.abs() * 0.5 * margin;
            if h.is_finite() { h } else { 0.0 }
        };
        Self {
            center: footprint.center(),
            half_extent: Size::new(
                half(footprint.width()).max(Self::MIN_HALF_EXTENT),
                half(footprint.height()),
            ),
            ..Self::default()
        }
    }
}

impl Default for PlanFraming {
    fn default() -> Self {
        Self {
            center: Point::new(7.0, 2.0),
            altitude: 14.0,
            half_extent: Size::new(8.0, 0.0),
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Camera placement relative to a focused platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlatformFraming {
    /// Translation applied in the platform's local frame before turning to face it.
    pub offset: Vec3,
    /// Half-height of the orthographic volume used at the peak of a transition.
    pub ortho_half_height: f32,
}

impl Default for PlatformFraming {
    fn default() -> Self {
        Self {
            offset: Vec3::new(-4.0 / 3.0, -0.5, 2.5),
            ortho_half_height: 1.0,
        }
    }
}

/// What happens when a focus change starts or ends on free-roam or plan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// Switch instantly; no transition is recorded.
    #[default]
    Cut,
    /// Ease view and projection together with the ease-in-out curve.
    Blend,
}

/// Where a transition starts when the focus changes while another is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RetargetPolicy {
    /// Start from the previous target focus, even if the camera had not reached it yet.
    #[default]
    FromPreviousTarget,
    /// Start from the last drawn (interpolated) camera matrices.
    FromCurrentPose,
}

/// Focus transition settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Length of a transition in milliseconds. Zero or less means every change cuts.
    pub duration_ms: f64,
    /// Handling of free-roam and plan endpoints.
    pub endpoints: EndpointPolicy,
    /// Handling of a change mid-transition.
    pub retarget: RetargetPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500.0,
            endpoints: EndpointPolicy::default(),
            retarget: RetargetPolicy::default(),
        }
    }
}

/// Everything [`synthesize`](crate::synthesize) and the [`Viewer`](crate::Viewer) need
/// besides the focus, aspect ratio and clock.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CameraConfig {
    /// Perspective lens.
    pub lens: Lens,
    /// Free-roam orbit.
    pub orbit: Orbit,
    /// Plan camera.
    pub plan: PlanFraming,
    /// Platform camera.
    pub platform: PlatformFraming,
    /// Focus transitions.
    pub transition: TransitionConfig,
}

impl CameraConfig {
    /// Default settings with the plan camera framing `warehouse`'s footprint.
    ///
    /// Falls back to the default plan framing for a warehouse without trays.
    pub fn framed(warehouse: &Warehouse) -> Self {
        let plan = warehouse
            .site_footprint()
            .map(|fp| PlanFraming::fit(fp, 1.1))
            .unwrap_or_default();
        Self {
            plan,
            ..Self::default()
        }
    }
}
