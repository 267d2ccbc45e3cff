// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building camera matrices.

use rackview_layout::PlatformId;

/// Errors from camera synthesis.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// The viewport aspect ratio is not a finite, positive number.
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspect(f32),
    /// The focus names a platform that is not in the warehouse.
    #[error("focus refers to unknown platform {0:?}")]
    UnknownPlatform(PlatformId),
}
