// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The camera's target: free-roam, plan, or one platform.

use rackview_layout::{PlatformId, Warehouse};

/// What the camera is looking at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Continuous orbit around the origin.
    Free,
    /// Static overhead view of the whole site.
    Plan,
    /// Facing one platform.
    Platform(PlatformId),
}

impl Focus {
    /// The focused platform, if any.
    pub fn platform(self) -> Option<PlatformId> {
        match self {
            Self::Platform(id) => Some(id),
            Self::Free | Self::Plan => None,
        }
    }

    /// Heading text: `"Free"`, `"Plan"`, or the platform label.
    pub fn label(self, warehouse: &Warehouse) -> &str {
        match self {
            Self::Free => "Free",
            Self::Plan => "Plan",
            Self::Platform(id) => warehouse.platform(id).map_or("?", |p| p.label()),
        }
    }
}

impl From<PlatformId> for Focus {
    fn from(id: PlatformId) -> Self {
        Self::Platform(id)
    }
}
