// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace a platform-to-platform transition frame by frame.
//!
//! Prints the blend weights and where the focused platform's front face lands in clip
//! space, showing the swing towards orthographic at the midpoint.
//!
//! Run:
//! - `RUST_LOG=rackview_camera=trace cargo run -p rackview_demos --example transition_trace`

use glam::Vec3;
use rackview_camera::{Aspect, AnimatorState, CameraConfig, Focus, Viewer};
use rackview_layout::{Direction, LayoutConfig, generate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let warehouse = generate(&LayoutConfig::default());
    let aspect = Aspect::new(16.0 / 9.0)?;
    let from = warehouse
        .zone_platform(1, 12)
        .ok_or("generated site has no platform 12 in zone B")?;
    let to = warehouse
        .platform_neighbor(from, Direction::Up)
        .ok_or("platform has no upper neighbor")?;
    let target = warehouse
        .platform_matrix(to)
        .ok_or("unknown platform")?
        .transform_point3(Vec3::ZERO);

    let mut viewer = Viewer::new(Focus::Platform(from), CameraConfig::default());
    viewer.frame(&warehouse, aspect, 0.0)?;
    viewer.set_focus(Focus::Platform(to), 0.0);
    println!(
        "{} -> {}",
        Focus::Platform(from).label(&warehouse),
        viewer.focus().label(&warehouse)
    );

    let mut now = 0.0;
    while viewer.needs_redraw() {
        let progress = match viewer.animation() {
            AnimatorState::Transitioning(transition) => Some(transition.progress(now)),
            AnimatorState::Idle => None,
        };
        let camera = viewer.frame(&warehouse, aspect, now)?;
        let clip = camera.view_projection() * target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        match progress {
            Some(p) => println!(
                "{now:6.1} ms  t={:.2} view_t={:.2} ortho_t={:.2}  origin ndc=({:+.3}, {:+.3})",
                p.t, p.view_t, p.ortho_t, ndc.x, ndc.y
            ),
            None => println!("{now:6.1} ms  at rest             origin ndc=({:+.3}, {:+.3})", ndc.x, ndc.y),
        }
        now += 50.0;
    }
    Ok(())
}
