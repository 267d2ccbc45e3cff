// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rackview Layout: the storage hierarchy of a warehouse, placed in world space.
//!
//! - Represents a containment tree `Warehouse → Zone → Platform → Stack → Tray` in per-kind arenas.
//! - Places every tray in world space by composing its platform's matrix with the tray's local matrix.
//! - Links neighboring platforms (up/down/left/right) and stacks (left/right) so a UI can step
//!   between them in O(1).
//!
//! The tree is built once, either by hand through [`WarehouseBuilder`] or by the synthetic
//! [`generate`] routine, and is read-only afterwards.
//!
//! ## Transform convention
//!
//! Matrices are column-major [`glam::Mat4`]. Composition reads `parent * local` everywhere:
//!
//! ```text
//! world(tray) = platform.transform * tray.local_transform
//! ```
//!
//! A zone's offset is pre-multiplied into its platforms' transforms when they are built, and a
//! stack has no transform of its own; tray offsets already include the stack position.
//!
//! ## Navigation
//!
//! Within a row, each later platform is the `left` neighbor of the one before it (and that one
//! is its `right` neighbor). Rows are ordered bottom to top and paired column by column, so a
//! ragged grid simply leaves the overhanging platforms without a vertical neighbor.
//! Queries return `None` at a boundary. [`Warehouse::verify_links`] checks that every link has
//! its mirror.
//!
//! ## API overview
//!
//! - [`Warehouse`]: the tree, flattening iterators ([`platforms`](Warehouse::platforms),
//!   [`stacks`](Warehouse::stacks), [`trays`](Warehouse::trays)) and lookups.
//! - [`Warehouse::world_matrix`] / [`Warehouse::draw_list`]: world placements for drawing.
//! - [`Warehouse::platform_neighbor`] / [`Warehouse::stack_neighbor`]: directional steps.
//! - [`Warehouse::platform_footprint`] / [`Warehouse::site_footprint`]: floor-plan bounds as
//!   Kurbo rectangles (world x across, world z down).
//! - [`ShelfTable`]: a platform as a table of trays.
//! - [`mesh`]: vertex data for the tray box and origin marker.
//!
//! ## Minimal usage
//!
//! ```
//! use rackview_layout::{Direction, LayoutConfig, generate};
//!
//! let warehouse = generate(&LayoutConfig::default());
//! assert_eq!(warehouse.trays().count(), 900);
//!
//! // Step left and back again.
//! let start = warehouse.zone_platform(0, 12).unwrap();
//! let left = warehouse.platform_neighbor(start, Direction::Left).unwrap();
//! assert_eq!(warehouse.platform_neighbor(left, Direction::Right), Some(start));
//!
//! // Hand every tray to a renderer.
//! for item in warehouse.draw_list() {
//!     let _ = (item.tray, item.world);
//! }
//! ```

mod builder;
mod generate;
pub mod mesh;
mod navigation;
mod table;
mod transform;
mod types;
mod warehouse;

pub use builder::WarehouseBuilder;
pub use generate::{LayoutConfig, generate};
pub use navigation::LinkError;
pub use table::ShelfTable;
pub use transform::DrawItem;
pub use types::{
    Direction, Directions, ExpiryRange, PlatformId, PlatformSpec, StackId, TrayId, TraySize,
    TraySpec, ZoneId,
};
pub use warehouse::{Platform, Stack, Tray, Warehouse, Zone};
