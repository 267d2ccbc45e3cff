// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space placement of trays and floor-plan footprints.
//!
//! All matrices are column-major `glam::Mat4`, and composition always reads
//! `parent * local`: the innermost (tray) factor is on the right.

use glam::{Mat4, Vec3};
use kurbo::Rect;

use crate::types::{PlatformId, TrayId, TraySize};
use crate::warehouse::Warehouse;

/// A tray and its world placement, ready for draw submission.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawItem {
    /// The tray being drawn.
    pub tray: TrayId,
    /// `platform.transform * tray.local_transform`.
    pub world: Mat4,
}

impl Warehouse {
    /// World placement of a platform.
    pub fn platform_matrix(&self, id: PlatformId) -> Option<Mat4> {
        self.platform(id).map(|p| p.transform)
    }

    /// World placement of a tray: its platform's matrix times the tray's local matrix.
    ///
    /// Stacks contribute no transform of their own; tray offsets already account for
    /// stack position.
    pub fn world_matrix(&self, id: TrayId) -> Option<Mat4> {
        let tray = self.tray(id)?;
        let platform = self.tray_platform(id)?;
        Some(self.platform_matrix(platform)? * tray.local_transform)
    }

    /// Every tray with its world placement, in flattening order.
    pub fn draw_list(&self) -> impl Iterator<Item = DrawItem> + '_ {
        self.platforms().flat_map(move |p| {
            let platform_tf = self.platforms[p.idx()].transform;
            self.platform_trays(p).map(move |tray| DrawItem {
                tray,
                world: platform_tf * self.trays[tray.idx()].local_transform,
            })
        })
    }

    /// Floor-plan bounds (world x horizontally, world z vertically) of a platform's trays.
    ///
    /// `None` for unknown or empty platforms.
    pub fn platform_footprint(&self, id: PlatformId) -> Option<Rect> {
        let platform_tf = self.platform_matrix(id)?;
        self.platform_trays(id)
            .map(|t| box_footprint(platform_tf * self.trays[t.idx()].local_transform, self.tray_size))
            .reduce(|acc, r| acc.union(r))
    }

    /// Floor-plan bounds of every tray in the warehouse. `None` if there are no trays.
    pub fn site_footprint(&self) -> Option<Rect> {
        self.platforms()
            .filter_map(|p| self.platform_footprint(p))
            .reduce(|acc, r| acc.union(r))
    }
}

/// Project the eight corners of a transformed tray box onto the x/z plane and
/// return their bounding rectangle.
pub(crate) fn box_footprint(world: Mat4, size: TraySize) -> Rect {
    let extent = size.extent();
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for corner in 0..8_u8 {
        let local = Vec3::new(
            if corner & 1 == 0 { 0.0 } else { extent.x },
            if corner & 2 == 0 { 0.0 } else { extent.y },
            if corner & 4 == 0 { 0.0 } else { extent.z },
        );
        let p = world.transform_point3(local);
        let (x, z) = (f64::from(p.x), f64::from(p.z));
        min = (min.0.min(x), min.1.min(z));
        max = (max.0.max(x), max.1.max(z));
    }
    Rect::new(min.0, min.1, max.0, max.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutConfig, generate};

    #[test]
    fn world_matrix_is_platform_times_local() {
        let w = generate(&LayoutConfig::default());
        for tray in w.trays() {
            let platform = w.tray_platform(tray).unwrap();
            let expected =
                w.platform_matrix(platform).unwrap() * w.tray(tray).unwrap().local_transform();
            assert_eq!(w.world_matrix(tray), Some(expected));
        }
    }

    #[test]
    fn draw_list_matches_world_matrix_in_order() {
        let w = generate(&LayoutConfig::default());
        let trays: Vec<_> = w.trays().collect();
        let items: Vec<_> = w.draw_list().collect();
        assert_eq!(items.len(), trays.len());
        for (item, tray) in items.iter().zip(trays) {
            assert_eq!(item.tray, tray);
            assert_eq!(Some(item.world), w.world_matrix(tray));
        }
    }

    #[test]
    fn composition_order_matters() {
        // A rotated platform must rotate the tray offset, not the other way round.
        let platform = Mat4::from_rotation_y(core::f32::consts::FRAC_PI_2);
        let local = Mat4::from_translation(Vec3::X);
        let world = platform * local;
        let origin = world.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn unit_footprint_of_translated_box() {
        let size = TraySize {
            width: 1.0,
            height: 1.0,
            length: 2.0,
        };
        let r = box_footprint(Mat4::from_translation(Vec3::new(3.0, 5.0, -1.0)), size);
        assert_eq!(r, Rect::new(3.0, -1.0, 4.0, 1.0));
    }

    #[test]
    fn site_footprint_covers_every_platform() {
        let w = generate(&LayoutConfig::default());
        let site = w.site_footprint().unwrap();
        for p in w.platforms() {
            let fp = w.platform_footprint(p).unwrap();
            assert_eq!(site.union(fp), site);
        }
    }
}
