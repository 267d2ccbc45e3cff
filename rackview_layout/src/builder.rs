// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot construction of a [`Warehouse`], including the navigation link passes.

use crate::types::{PlatformId, PlatformSpec, StackId, TrayId, TraySize, TraySpec, ZoneId};
use crate::warehouse::{Links, Platform, Stack, Tray, Warehouse, Zone};

/// Builds a [`Warehouse`] top-down and wires its navigation graph.
///
/// Ids handed out by a builder are only meaningful to that builder and the warehouse it
/// produces. Passing a foreign id to one of the `add_*` or `link_*` methods is a programming
/// error and panics.
///
/// ```
/// use glam::Mat4;
/// use rackview_layout::{Direction, PlatformSpec, TraySize, TraySpec, WarehouseBuilder};
///
/// let mut b = WarehouseBuilder::new(TraySize::default());
/// let zone = b.add_zone("Zone A");
/// let row: Vec<_> = (0..3)
///     .map(|i| {
///         b.add_platform(
///             zone,
///             PlatformSpec {
///                 label: format!("A-1-{}", i + 1),
///                 kind: "Shelving".into(),
///                 is_lateral: false,
///                 transform: Mat4::from_translation(glam::Vec3::X * 3.0 * i as f32),
///             },
///         )
///     })
///     .collect();
/// b.link_grid(&[row.clone()]);
/// let warehouse = b.build();
///
/// assert_eq!(warehouse.platform_neighbor(row[0], Direction::Left), Some(row[1]));
/// assert_eq!(warehouse.platform_neighbor(row[1], Direction::Right), Some(row[0]));
/// assert_eq!(warehouse.platform_neighbor(row[0], Direction::Right), None);
/// ```
#[derive(Debug)]
pub struct WarehouseBuilder {
    warehouse: Warehouse,
}

impl WarehouseBuilder {
    /// Start an empty warehouse whose trays share `tray_size`.
    pub fn new(tray_size: TraySize) -> Self {
        Self {
            warehouse: Warehouse {
                tray_size,
                ..Warehouse::default()
            },
        }
    }

    /// Append a zone.
    pub fn add_zone(&mut self, name: impl Into<String>) -> ZoneId {
        let id = ZoneId::new(self.warehouse.zones.len());
        self.warehouse.zones.push(Zone {
            name: name.into(),
            platforms: Vec::new(),
        });
        id
    }

    /// Append a platform to `zone`.
    pub fn add_platform(&mut self, zone: ZoneId, spec: PlatformSpec) -> PlatformId {
        let id = PlatformId::new(self.warehouse.platforms.len());
        self.zone_mut(zone).platforms.push(id);
        self.warehouse.platforms.push(Platform {
            zone,
            stacks: Vec::new(),
            label: spec.label,
            kind: spec.kind,
            is_lateral: spec.is_lateral,
            transform: spec.transform,
            links: Links::default(),
        });
        id
    }

    /// Append a stack to `platform`.
    pub fn add_stack(&mut self, platform: PlatformId, max_height: u32) -> StackId {
        let id = StackId::new(self.warehouse.stacks.len());
        self.platform_mut(platform).stacks.push(id);
        self.warehouse.stacks.push(Stack {
            platform,
            trays: Vec::new(),
            max_height,
            links: Links::default(),
        });
        id
    }

    /// Place a tray on top of `stack`.
    pub fn add_tray(&mut self, stack: StackId, spec: TraySpec) -> TrayId {
        let id = TrayId::new(self.warehouse.trays.len());
        self.stack_mut(stack).trays.push(id);
        self.warehouse.trays.push(Tray {
            stack,
            local_transform: spec.local_transform,
            category: spec.category,
            expiry: spec.expiry,
            weight: spec.weight,
        });
        id
    }

    /// Link consecutive platforms of one row: each later platform becomes the
    /// `left` neighbor of the one before it, which becomes its `right` neighbor.
    pub fn link_row(&mut self, row: &[PlatformId]) {
        for pair in row.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            self.platform_mut(previous).links.left = Some(current);
            self.platform_mut(current).links.right = Some(previous);
        }
    }

    /// Link two consecutive rows column by column: `upper[i]` is `up` from `lower[i]`.
    ///
    /// Only the first `min(lower.len(), upper.len())` columns are paired; the extra
    /// platforms of a longer row keep no vertical link on that side.
    pub fn link_rows(&mut self, lower: &[PlatformId], upper: &[PlatformId]) {
        for (&below, &above) in lower.iter().zip(upper) {
            self.platform_mut(below).links.up = Some(above);
            self.platform_mut(above).links.down = Some(below);
        }
    }

    /// Link a whole (possibly ragged) grid, rows ordered bottom to top.
    pub fn link_grid(&mut self, rows: &[Vec<PlatformId>]) {
        for row in rows {
            self.link_row(row);
        }
        for pair in rows.windows(2) {
            self.link_rows(&pair[0], &pair[1]);
        }
    }

    /// Link the stacks of `platform` left/right with the same fold as [`link_row`](Self::link_row).
    pub fn link_stacks(&mut self, platform: PlatformId) {
        let stacks = self.platform_mut(platform).stacks.clone();
        for pair in stacks.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            self.stack_mut(previous).links.left = Some(current);
            self.stack_mut(current).links.right = Some(previous);
        }
    }

    /// Finish construction.
    pub fn build(self) -> Warehouse {
        let warehouse = self.warehouse;
        debug_assert!(
            warehouse.verify_links().is_ok(),
            "navigation links must be symmetric: {:?}",
            warehouse.verify_links()
        );
        tracing::debug!(
            zones = warehouse.zones.len(),
            platforms = warehouse.platforms.len(),
            stacks = warehouse.stacks.len(),
            trays = warehouse.trays.len(),
            "built warehouse"
        );
        warehouse
    }

    fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        self.warehouse
            .zones
            .get_mut(id.idx())
            .expect("dangling ZoneId")
    }

    fn platform_mut(&mut self, id: PlatformId) -> &mut Platform {
        self.warehouse
            .platforms
            .get_mut(id.idx())
            .expect("dangling PlatformId")
    }

    fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        self.warehouse
            .stacks
            .get_mut(id.idx())
            .expect("dangling StackId")
    }
}
