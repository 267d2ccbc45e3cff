// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The containment tree: warehouse, zones, platforms, stacks, trays.

use glam::Mat4;

use crate::types::{ExpiryRange, PlatformId, StackId, TrayId, TraySize, ZoneId};

/// A named region owning an ordered sequence of platforms.
#[derive(Clone, Debug)]
pub struct Zone {
    pub(crate) name: String,
    pub(crate) platforms: Vec<PlatformId>,
}

impl Zone {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned platforms in construction order.
    pub fn platforms(&self) -> &[PlatformId] {
        &self.platforms
    }
}

/// Optional neighbor handles in each direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Links<Id> {
    pub(crate) up: Option<Id>,
    pub(crate) down: Option<Id>,
    pub(crate) left: Option<Id>,
    pub(crate) right: Option<Id>,
}

// Written out so that ids need not implement `Default`.
impl<Id> Default for Links<Id> {
    fn default() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }
}

/// A located shelf unit owning an ordered sequence of stacks.
#[derive(Clone, Debug)]
pub struct Platform {
    pub(crate) zone: ZoneId,
    pub(crate) stacks: Vec<StackId>,
    pub(crate) label: String,
    pub(crate) kind: String,
    pub(crate) is_lateral: bool,
    pub(crate) transform: Mat4,
    pub(crate) links: Links<PlatformId>,
}

impl Platform {
    /// Owning zone.
    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// Owned stacks, left to right in the platform's local x order.
    pub fn stacks(&self) -> &[StackId] {
        &self.stacks
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Category tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Lateral rather than vertical orientation.
    pub fn is_lateral(&self) -> bool {
        self.is_lateral
    }

    /// Placement in world space (zone offset included).
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Arrow glyphs for stepping backwards and forwards through a zone's platforms.
    ///
    /// Lateral platforms step sideways, others step vertically.
    pub fn step_glyphs(&self) -> (&'static str, &'static str) {
        if self.is_lateral {
            ("←", "→")
        } else {
            ("↓", "↑")
        }
    }
}

/// An ordered column of trays; index 0 is the lowest tray.
#[derive(Clone, Debug)]
pub struct Stack {
    pub(crate) platform: PlatformId,
    pub(crate) trays: Vec<TrayId>,
    pub(crate) max_height: u32,
    pub(crate) links: Links<StackId>,
}

impl Stack {
    /// Owning platform.
    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    /// Owned trays, bottom to top.
    pub fn trays(&self) -> &[TrayId] {
        &self.trays
    }

    /// Capacity in trays.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}

/// A leaf storage unit.
#[derive(Clone, Debug)]
pub struct Tray {
    pub(crate) stack: StackId,
    pub(crate) local_transform: Mat4,
    pub(crate) category: Option<String>,
    pub(crate) expiry: Option<ExpiryRange>,
    pub(crate) weight: Option<f32>,
}

impl Tray {
    /// Owning stack.
    pub fn stack(&self) -> StackId {
        self.stack
    }

    /// Offset within the owning platform's frame.
    pub fn local_transform(&self) -> Mat4 {
        self.local_transform
    }

    /// Content category, if uniform.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Expiry window, if known.
    pub fn expiry(&self) -> Option<&ExpiryRange> {
        self.expiry.as_ref()
    }

    /// Weight in kilograms, if known.
    pub fn weight(&self) -> Option<f32> {
        self.weight
    }

    /// The category, or `"Mixed"` when the tray has none.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Mixed")
    }

    /// The weight as `"<n>kg"`, or `"-"` when unknown.
    pub fn weight_label(&self) -> String {
        match self.weight {
            Some(w) => format!("{w}kg"),
            None => "-".into(),
        }
    }

    /// The expiry label, or `"-"` when unknown.
    pub fn expiry_label(&self) -> &str {
        self.expiry.as_ref().map_or("-", |e| e.label.as_str())
    }
}

/// Root of the containment tree.
///
/// Entities live in per-kind arenas and refer to each other by id. Parents own the
/// ordered child lists; children keep a plain back-reference to their parent.
/// The tree is built once through [`WarehouseBuilder`](crate::WarehouseBuilder) and is
/// read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Warehouse {
    pub(crate) zones: Vec<Zone>,
    pub(crate) platforms: Vec<Platform>,
    pub(crate) stacks: Vec<Stack>,
    pub(crate) trays: Vec<Tray>,
    pub(crate) tray_size: TraySize,
}

impl Warehouse {
    /// Zones in order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        (0..self.zones.len()).map(ZoneId::new)
    }

    /// All platforms, zone by zone.
    pub fn platforms(&self) -> impl Iterator<Item = PlatformId> + '_ {
        self.zones.iter().flat_map(|z| z.platforms.iter().copied())
    }

    /// All stacks, zone by zone then platform by platform.
    pub fn stacks(&self) -> impl Iterator<Item = StackId> + '_ {
        self.platforms()
            .flat_map(move |p| self.platforms[p.idx()].stacks.iter().copied())
    }

    /// All trays in zone, platform, stack, then bottom-to-top order.
    pub fn trays(&self) -> impl Iterator<Item = TrayId> + '_ {
        self.stacks()
            .flat_map(move |s| self.stacks[s.idx()].trays.iter().copied())
    }

    /// Trays of one platform in stack, then bottom-to-top order.
    pub fn platform_trays(&self, id: PlatformId) -> impl Iterator<Item = TrayId> + '_ {
        self.platform(id)
            .into_iter()
            .flat_map(|p| p.stacks.iter())
            .flat_map(move |s| self.stacks[s.idx()].trays.iter().copied())
    }

    /// Size of every tray box in this warehouse.
    pub fn tray_size(&self) -> TraySize {
        self.tray_size
    }

    /// Look up a zone.
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.idx())
    }

    /// Look up a platform.
    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(id.idx())
    }

    /// Look up a stack.
    pub fn stack(&self, id: StackId) -> Option<&Stack> {
        self.stacks.get(id.idx())
    }

    /// Look up a tray.
    pub fn tray(&self, id: TrayId) -> Option<&Tray> {
        self.trays.get(id.idx())
    }

    /// The platform holding a tray.
    pub fn tray_platform(&self, id: TrayId) -> Option<PlatformId> {
        let tray = self.tray(id)?;
        self.stack(tray.stack).map(|s| s.platform)
    }

    /// The `platform_index`-th platform of the `zone_index`-th zone.
    ///
    /// Out-of-range indices yield `None`, so callers can step through zones and
    /// platforms by index and stop at the ends.
    pub fn zone_platform(&self, zone_index: usize, platform_index: usize) -> Option<PlatformId> {
        self.zones
            .get(zone_index)?
            .platforms
            .get(platform_index)
            .copied()
    }
}
