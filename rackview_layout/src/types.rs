// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout: entity identifiers, directions, and tray data.

use chrono::NaiveDate;
use glam::Vec3;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            pub(crate) fn new(idx: usize) -> Self {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "Arenas never hold more than u32::MAX entries."
                )]
                let raw = idx as u32;
                Self(raw)
            }

            pub(crate) const fn idx(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Identifier for a [`Zone`](crate::Zone) within a [`Warehouse`](crate::Warehouse).
    ZoneId
);
arena_id!(
    /// Identifier for a [`Platform`](crate::Platform) within a [`Warehouse`](crate::Warehouse).
    ///
    /// This is the handle carried by a platform focus and by navigation links.
    PlatformId
);
arena_id!(
    /// Identifier for a [`Stack`](crate::Stack) within a [`Warehouse`](crate::Warehouse).
    StackId
);
arena_id!(
    /// Identifier for a [`Tray`](crate::Tray) within a [`Warehouse`](crate::Warehouse).
    TrayId
);

/// A step direction in the navigation graph.
///
/// Platforms link in all four directions. Stacks only link [`Left`](Direction::Left)
/// and [`Right`](Direction::Right); vertical queries on a stack always yield `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// One shelf level higher.
    Up,
    /// One shelf level lower.
    Down,
    /// Leftwards as seen from a platform-focused camera.
    Left,
    /// Rightwards as seen from a platform-focused camera.
    Right,
}

impl Direction {
    /// All four directions, in `Up`, `Down`, `Left`, `Right` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

bitflags::bitflags! {
    /// A set of directions, used to report which neighbors exist.
    ///
    /// Returned by [`Warehouse::platform_directions`](crate::Warehouse::platform_directions)
    /// so a navigation UI can enable or disable its step buttons.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        /// A neighbor exists above.
        const UP    = 0b0000_0001;
        /// A neighbor exists below.
        const DOWN  = 0b0000_0010;
        /// A neighbor exists to the left.
        const LEFT  = 0b0000_0100;
        /// A neighbor exists to the right.
        const RIGHT = 0b0000_1000;
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

/// Dimensions of a single tray box, in world units.
///
/// Trays are modelled as axis-aligned boxes spanning `[0, width] × [0, height] × [0, length]`
/// in their local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraySize {
    /// Extent along local x (across a platform).
    pub width: f32,
    /// Extent along local y (up a stack).
    pub height: f32,
    /// Extent along local z (depth of the platform).
    pub length: f32,
}

impl TraySize {
    /// The size as a vector `(width, height, length)`.
    pub fn extent(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }
}

impl Default for TraySize {
    fn default() -> Self {
        Self {
            width: 2.0 / 3.0,
            height: 1.0 / 3.0,
            length: 1.0,
        }
    }
}

/// An inclusive expiry window with a human-readable label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiryRange {
    /// First day of the window.
    pub from: NaiveDate,
    /// Last day of the window.
    pub to: NaiveDate,
    /// Display label, e.g. `"Mar 2026"`.
    pub label: String,
}

impl ExpiryRange {
    /// Returns true if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Construction data for a platform.
#[derive(Clone, Debug)]
pub struct PlatformSpec {
    /// Display label.
    pub label: String,
    /// Category tag, e.g. `"Shelving"`.
    pub kind: String,
    /// Lateral (side-to-side stepping) rather than vertical orientation.
    pub is_lateral: bool,
    /// Placement in world space with the zone offset already pre-multiplied.
    pub transform: glam::Mat4,
}

/// Construction data for a tray.
#[derive(Clone, Debug, Default)]
pub struct TraySpec {
    /// Offset within the owning platform's frame (accounts for stack position).
    pub local_transform: glam::Mat4,
    /// Optional content category.
    pub category: Option<String>,
    /// Optional expiry window.
    pub expiry: Option<ExpiryRange>,
    /// Optional weight in kilograms.
    pub weight: Option<f32>,
}
