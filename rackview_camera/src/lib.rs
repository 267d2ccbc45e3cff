// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rackview Camera: view and projection matrices for looking at a warehouse.
//!
//! The camera always has a [`Focus`]:
//!
//! - [`Focus::Free`] orbits the world origin, one revolution every `2π` seconds.
//! - [`Focus::Plan`] looks straight down at the site with an orthographic projection.
//! - [`Focus::Platform`] faces one platform from a fixed offset in the platform's frame.
//!
//! [`synthesize`] turns a focus into [`CameraMatrices`] at rest. When the focus moves from one
//! platform to another, an [`Animator`] blends the two cameras over a short [`Transition`]:
//! the view eases along a cosine curve while the projection swings towards orthographic and
//! back. Whether changes involving free-roam or plan animate, and how an interrupted
//! transition restarts, is chosen by [`TransitionConfig`].
//!
//! [`Viewer`] ties these together with a [`FrameScheduler`], so a host only has to forward
//! focus changes and ask for a frame whenever [`Viewer::needs_redraw`] is true.
//!
//! ## Conventions
//!
//! Matrices are column-major [`glam::Mat4`]; projections use OpenGL clip space. Time is a
//! monotonic clock reading in milliseconds, supplied by the host.
//!
//! ## Minimal usage
//!
//! ```
//! use rackview_camera::{Aspect, CameraConfig, Focus, Viewer};
//! use rackview_layout::{Direction, LayoutConfig, generate};
//!
//! let warehouse = generate(&LayoutConfig::default());
//! let config = CameraConfig::framed(&warehouse);
//! let aspect = Aspect::from_viewport(1280, 720).unwrap();
//!
//! let start = warehouse.zone_platform(0, 12).unwrap();
//! let mut viewer = Viewer::new(Focus::Platform(start), config);
//! viewer.frame(&warehouse, aspect, 0.0).unwrap();
//! assert!(!viewer.needs_redraw());
//!
//! // Step up a shelf level; the camera animates for half a second.
//! assert!(viewer.step(&warehouse, Direction::Up, 1000.0));
//! let mut now = 1000.0;
//! while viewer.needs_redraw() {
//!     now += 16.0;
//!     let camera = viewer.frame(&warehouse, aspect, now).unwrap();
//!     let _ = camera.view_projection();
//! }
//! assert!(now >= 1500.0);
//! ```

mod config;
mod error;
mod focus;
mod scheduler;
mod synth;
mod transition;
mod viewer;

pub use config::{
    CameraConfig, EndpointPolicy, Lens, Orbit, PlanFraming, PlatformFraming, RetargetPolicy,
    TransitionConfig,
};
pub use error::CameraError;
pub use focus::Focus;
pub use scheduler::{FrameScheduler, Redraw};
pub use synth::{Aspect, CameraMatrices, free_roam, lerp, plan, platform, synthesize};
pub use transition::{
    Animator, AnimatorState, Origin, Progress, Transition, ease_in_out, ortho_bump,
};
pub use viewer::Viewer;
