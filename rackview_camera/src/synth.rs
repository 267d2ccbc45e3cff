// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resting camera matrices for each focus mode.
//!
//! Everything here is a pure function of its inputs. Projections follow OpenGL clip-space
//! conventions (`glam`'s `*_rh_gl` constructors) and all matrices are column-major.

use core::f32::consts::{FRAC_PI_2, PI};
use core::f64::consts::TAU;

use glam::{Mat4, Vec3};
use rackview_layout::{PlatformId, Warehouse};

use crate::config::{CameraConfig, Lens, PlanFraming};
use crate::error::CameraError;
use crate::focus::Focus;

/// Viewport width divided by height; always finite and positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aspect(f32);

impl Aspect {
    /// Validate a width/height ratio.
    pub fn new(ratio: f32) -> Result<Self, CameraError> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(CameraError::InvalidAspect(ratio))
        }
    }

    /// Ratio of a `width` × `height` pixel viewport.
    pub fn from_viewport(width: u32, height: u32) -> Result<Self, CameraError> {
        #[allow(clippy::cast_precision_loss, reason = "Viewport sizes are far below 2^24.")]
        let ratio = width as f32 / height as f32;
        Self::new(ratio)
    }

    /// The ratio.
    pub fn get(self) -> f32 {
        self.0
    }
}

/// A view and projection pair, handed to the renderer every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraMatrices {
    /// World to camera space.
    pub view: Mat4,
    /// Camera to clip space.
    pub projection: Mat4,
}

impl CameraMatrices {
    /// `projection * view`.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Blend view and projection independently towards `other`.
    pub fn blend(&self, other: &Self, view_weight: f32, projection_weight: f32) -> Self {
        Self {
            view: lerp(self.view, other.view, view_weight),
            projection: lerp(self.projection, other.projection, projection_weight),
        }
    }
}

/// Per-element linear interpolation: `(1 - w) * a + w * b`.
pub fn lerp(a: Mat4, b: Mat4, w: f32) -> Mat4 {
    a * (1.0 - w) + b * w
}

/// Resting camera for `focus`.
///
/// Free-roam depends on `now_ms`; plan and platform views do not. A platform focus at rest is
/// pure perspective.
pub fn synthesize(
    warehouse: &Warehouse,
    focus: Focus,
    aspect: Aspect,
    now_ms: f64,
    config: &CameraConfig,
) -> Result<CameraMatrices, CameraError> {
    match focus {
        Focus::Free => Ok(free_roam(aspect, now_ms, config)),
        Focus::Plan => Ok(plan(aspect, config)),
        Focus::Platform(id) => platform(warehouse, id, aspect, 0.0, config),
    }
}

/// Orbit the origin at a fixed radius and height, one revolution per `2π` seconds.
pub fn free_roam(aspect: Aspect, now_ms: f64, config: &CameraConfig) -> CameraMatrices {
    let orbit = config.orbit;
    let seconds = (now_ms / 1000.0) % TAU;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The angle is reduced to one turn before narrowing."
    )]
    let angle = seconds as f32;
    let eye_offset = Vec3::new(
        -orbit.radius * angle.cos(),
        -orbit.height,
        -orbit.radius * angle.sin(),
    );
    let pitch = (orbit.height / 2.0 / orbit.radius).atan();
    let view = Mat4::from_rotation_x(pitch)
        * Mat4::from_rotation_y(angle - FRAC_PI_2)
        * Mat4::from_translation(eye_offset);
    CameraMatrices {
        view,
        projection: perspective(config.lens, aspect),
    }
}

/// Look straight down at the site with an orthographic projection.
pub fn plan(aspect: Aspect, config: &CameraConfig) -> CameraMatrices {
    let framing = config.plan;
    let aspect = aspect.get();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Plan coordinates are well within f32 range."
    )]
    let (eye, half_extent) = (
        Vec3::new(
            framing.center.x as f32,
            framing.altitude as f32,
            framing.center.y as f32,
        ),
        (framing.half_extent.width as f32, framing.half_extent.height as f32),
    );
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The minimum is a small constant."
    )]
    let min_half_width = PlanFraming::MIN_HALF_EXTENT as f32;
    let half_width = half_extent.0.max(half_extent.1 * aspect).max(min_half_width);
    let half_height = half_width / aspect;
    CameraMatrices {
        view: Mat4::from_rotation_x(FRAC_PI_2) * Mat4::from_translation(-eye),
        projection: Mat4::orthographic_rh_gl(
            -half_width,
            half_width,
            -half_height,
            half_height,
            framing.near,
            framing.far,
        ),
    }
}

/// Face platform `id` from a fixed offset in its local frame.
///
/// The projection is `(1 - ortho_factor) * perspective + ortho_factor * orthographic`,
/// blended element by element.
pub fn platform(
    warehouse: &Warehouse,
    id: PlatformId,
    aspect: Aspect,
    ortho_factor: f32,
    config: &CameraConfig,
) -> Result<CameraMatrices, CameraError> {
    let placement = warehouse
        .platform_matrix(id)
        .ok_or(CameraError::UnknownPlatform(id))?;
    let view = Mat4::from_rotation_y(PI)
        * Mat4::from_translation(config.platform.offset)
        * placement.inverse();
    let h = config.platform.ortho_half_height;
    let a = aspect.get();
    let ortho = Mat4::orthographic_rh_gl(-h * a, h * a, -h, h, config.lens.near, config.lens.far);
    Ok(CameraMatrices {
        view,
        projection: lerp(perspective(config.lens, aspect), ortho, ortho_factor),
    })
}

fn perspective(lens: Lens, aspect: Aspect) -> Mat4 {
    Mat4::perspective_rh_gl(lens.fov_y, aspect.get(), lens.near, lens.far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use rackview_layout::{LayoutConfig, PlatformSpec, TraySize, WarehouseBuilder, generate};

    fn aspect() -> Aspect {
        Aspect::from_viewport(800, 500).unwrap()
    }

    fn clip_to_ndc(clip: Vec4) -> Vec3 {
        clip.truncate() / clip.w
    }

    #[test]
    fn aspect_rejects_degenerate_ratios() {
        assert!(Aspect::new(1.6).is_ok());
        assert_eq!(Aspect::new(0.0), Err(CameraError::InvalidAspect(0.0)));
        assert!(Aspect::new(-1.0).is_err());
        assert!(Aspect::new(f32::NAN).is_err());
        assert!(Aspect::from_viewport(800, 0).is_err());
    }

    #[test]
    fn plan_projection_ignores_depth() {
        let m = plan(aspect(), &CameraConfig::default());
        let vp = m.view_projection();
        // Same floor-plan (x, z), different heights.
        let low = clip_to_ndc(vp * Vec4::new(3.0, 0.0, 4.0, 1.0));
        let high = clip_to_ndc(vp * Vec4::new(3.0, 6.0, 4.0, 1.0));
        assert!((low.x - high.x).abs() < 1e-6);
        assert!((low.y - high.y).abs() < 1e-6);
        assert!(low.z != high.z);
    }

    #[test]
    fn plan_looks_down_at_its_center() {
        let config = CameraConfig::default();
        let m = plan(aspect(), &config);
        let center = Vec4::new(
            config.plan.center.x as f32,
            0.0,
            config.plan.center.y as f32,
            1.0,
        );
        let ndc = clip_to_ndc(m.view_projection() * center);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0, "floor must lie inside the depth range");
    }

    #[test]
    fn plan_is_wide_enough_for_its_extent_at_any_aspect() {
        let mut config = CameraConfig::default();
        config.plan.half_extent = kurbo::Size::new(2.0, 6.0);
        for ratio in [0.5_f32, 1.0, 1.6, 3.0] {
            let m = plan(Aspect::new(ratio).unwrap(), &config);
            // Column 0 scales x by 1 / half_width, column 1 scales y by 1 / half_height.
            let half_width = 1.0 / m.projection.x_axis.x;
            let half_height = 1.0 / m.projection.y_axis.y;
            assert!(half_width >= 2.0 - 1e-4);
            assert!(half_height >= 6.0 - 1e-4);
        }
    }

    #[test]
    fn degenerate_plan_framing_stays_finite() {
        let site = kurbo::Rect::new(1.0, 1.0, 1.0, 1.0);
        let mut config = CameraConfig::default();
        config.plan = PlanFraming::fit(site, 1.1);
        let m = plan(aspect(), &config);
        assert!(m.projection.is_finite());
        assert!(m.view.is_finite());

        // A hand-written zero extent is held to the same minimum.
        config.plan.half_extent = kurbo::Size::ZERO;
        assert!(plan(aspect(), &config).projection.is_finite());
    }

    #[test]
    fn free_roam_keeps_orbit_distance() {
        let config = CameraConfig::default();
        for now in [0.0, 1234.0, 98_765.0] {
            let m = free_roam(aspect(), now, &config);
            let eye = m.view.inverse().transform_point3(Vec3::ZERO);
            let horizontal = Vec3::new(eye.x, 0.0, eye.z).length();
            assert!((horizontal - config.orbit.radius).abs() < 1e-3);
            assert!((eye.y - config.orbit.height).abs() < 1e-3);
        }
    }

    #[test]
    fn free_roam_moves_with_time() {
        let config = CameraConfig::default();
        let a = free_roam(aspect(), 0.0, &config);
        let b = free_roam(aspect(), 500.0, &config);
        assert_ne!(a.view, b.view);
        assert_eq!(a.projection, b.projection);
    }

    #[test]
    fn platform_front_face_is_centered_in_front_of_camera() {
        let w = generate(&LayoutConfig::default());
        let config = CameraConfig::default();
        let id = w.zone_platform(1, 12).unwrap();
        let m = platform(&w, id, aspect(), 0.0, &config).unwrap();
        // Center of the front face of a 4-stack, 3-tray platform in local space.
        let size = w.tray_size();
        let local_center = Vec3::new(2.0 * size.width, 1.5 * size.height, 0.0);
        let world = w.platform_matrix(id).unwrap().transform_point3(local_center);
        let eye_space = m.view.transform_point3(world);
        assert!(eye_space.z < 0.0, "platform must be in front of the camera");
        assert!(eye_space.x.abs() < 1e-4);
        assert!((eye_space.z + config.platform.offset.z).abs() < 1e-4);
    }

    #[test]
    fn platform_camera_rides_with_a_rotated_platform() {
        let mut b = WarehouseBuilder::new(TraySize::default());
        let zone = b.add_zone("Zone A");
        let placements = [
            Mat4::from_translation(Vec3::new(3.0, 1.25, 0.0)),
            Mat4::from_translation(Vec3::new(-2.0, 0.5, 6.0))
                * Mat4::from_rotation_y(0.7)
                * Mat4::from_rotation_x(0.2),
        ];
        let ids = placements.map(|transform| {
            b.add_platform(
                zone,
                PlatformSpec {
                    label: "A-1-1".into(),
                    kind: "Static Shelving".into(),
                    is_lateral: false,
                    transform,
                },
            )
        });
        let w = b.build();
        let config = CameraConfig::default();

        let size = w.tray_size();
        let face_center = Vec3::new(2.0 * size.width, 1.5 * size.height, 0.0);
        let [straight, turned] = ids.map(|id| {
            let m = platform(&w, id, aspect(), 0.0, &config).unwrap();
            let eye_from_local = m.view * w.platform_matrix(id).unwrap();
            (eye_from_local, eye_from_local.transform_point3(face_center))
        });
        assert!(straight.0.abs_diff_eq(turned.0, 1e-5));
        assert!(straight.1.abs_diff_eq(turned.1, 1e-5));
        assert!(turned.1.x.abs() < 1e-5);
        assert!((turned.1.z + config.platform.offset.z).abs() < 1e-5);
    }

    #[test]
    fn platform_ortho_factor_endpoints() {
        let w = generate(&LayoutConfig::default());
        let config = CameraConfig::default();
        let id = w.zone_platform(0, 0).unwrap();
        let persp = platform(&w, id, aspect(), 0.0, &config).unwrap();
        let ortho = platform(&w, id, aspect(), 1.0, &config).unwrap();
        assert_eq!(persp.projection, perspective(config.lens, aspect()));
        // Orthographic: no w dependence on depth.
        assert_eq!(ortho.projection.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(persp.view, ortho.view);
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let w = generate(&LayoutConfig {
            zones: 1,
            ..LayoutConfig::default()
        });
        let other = generate(&LayoutConfig::default());
        let foreign = other.zone_platform(2, 0).unwrap();
        assert_eq!(
            synthesize(&w, Focus::Platform(foreign), aspect(), 0.0, &CameraConfig::default()),
            Err(CameraError::UnknownPlatform(foreign))
        );
    }

    #[test]
    fn synthesis_is_pure() {
        let w = generate(&LayoutConfig::default());
        let config = CameraConfig::default();
        let p = w.zone_platform(0, 3).unwrap();
        for focus in [Focus::Free, Focus::Plan, Focus::Platform(p)] {
            let a = synthesize(&w, focus, aspect(), 4321.0, &config).unwrap();
            let b = synthesize(&w, focus, aspect(), 4321.0, &config).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Mat4::from_rotation_z(0.3) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Mat4::perspective_rh_gl(1.0, 1.5, 0.1, 100.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        let mid = lerp(a, b, 0.5);
        assert!(mid.abs_diff_eq((a + b) * 0.5, 1e-6));
    }
}
