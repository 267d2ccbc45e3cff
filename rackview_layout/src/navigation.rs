// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional neighbor queries over the navigation graph.
//!
//! Links are wired once by [`WarehouseBuilder`](crate::WarehouseBuilder). A query returns
//! `None` at a grid boundary; that is a normal terminal condition, not an error.

use crate::types::{Direction, Directions, PlatformId, StackId};
use crate::warehouse::{Links, Warehouse};

/// A navigation link without its mirror image.
///
/// Reported by [`Warehouse::verify_links`]. Seeing one means the warehouse was wired
/// incorrectly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// `from` points at `to` in `direction`, but `to` does not point back.
    #[error("platform {from:?} links {direction:?} to {to:?} without a matching back link")]
    Platform {
        /// Origin of the one-sided link.
        from: PlatformId,
        /// Target of the one-sided link.
        to: PlatformId,
        /// Direction of the one-sided link.
        direction: Direction,
    },
    /// `from` points at `to` in `direction`, but `to` does not point back.
    #[error("stack {from:?} links {direction:?} to {to:?} without a matching back link")]
    Stack {
        /// Origin of the one-sided link.
        from: StackId,
        /// Target of the one-sided link.
        to: StackId,
        /// Direction of the one-sided link.
        direction: Direction,
    },
}

impl<Id: Copy> Links<Id> {
    pub(crate) fn get(&self, direction: Direction) -> Option<Id> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn directions(&self) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|d| self.get(*d).is_some())
            .fold(Directions::empty(), |acc, d| acc | Directions::from(d))
    }
}

impl Warehouse {
    /// The platform adjacent to `id` in `direction`, if any.
    pub fn platform_neighbor(&self, id: PlatformId, direction: Direction) -> Option<PlatformId> {
        self.platform(id)?.links.get(direction)
    }

    /// The stack adjacent to `id` in `direction`, if any.
    ///
    /// Stacks only link sideways, so `Up` and `Down` always yield `None`.
    pub fn stack_neighbor(&self, id: StackId, direction: Direction) -> Option<StackId> {
        self.stack(id)?.links.get(direction)
    }

    /// Directions in which `id` has a neighbor. Empty for unknown ids.
    pub fn platform_directions(&self, id: PlatformId) -> Directions {
        self.platform(id)
            .map(|p| p.links.directions())
            .unwrap_or_default()
    }

    /// Directions in which `id` has a neighbor. Empty for unknown ids.
    pub fn stack_directions(&self, id: StackId) -> Directions {
        self.stack(id)
            .map(|s| s.links.directions())
            .unwrap_or_default()
    }

    /// Check that every link has its mirror: if `a.right == b` then `b.left == a`,
    /// and likewise for up/down and for stacks.
    pub fn verify_links(&self) -> Result<(), LinkError> {
        for from in self.platforms() {
            for direction in Direction::ALL {
                let Some(to) = self.platform_neighbor(from, direction) else {
                    continue;
                };
                if self.platform_neighbor(to, direction.opposite()) != Some(from) {
                    return Err(LinkError::Platform {
                        from,
                        to,
                        direction,
                    });
                }
            }
        }
        for from in self.stacks() {
            for direction in Direction::ALL {
                let Some(to) = self.stack_neighbor(from, direction) else {
                    continue;
                };
                if self.stack_neighbor(to, direction.opposite()) != Some(from) {
                    return Err(LinkError::Stack {
                        from,
                        to,
                        direction,
                    });
                }
            }
        }
        Ok(())
    }
}
