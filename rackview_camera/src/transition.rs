// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated focus changes.
//!
//! A transition blends the camera of its origin into the camera of its target over a fixed
//! duration. Two curves drive it:
//!
//! - `view_t = 0.5 - cos(π t) / 2` eases the view matrix from origin to target.
//! - `ortho_t = 4 t (1 - t)` is a bump that is zero at both ends and one at `t = 0.5`.
//!   Between two platforms it blends towards the target's orthographic projection, so the
//!   camera passes through a flat, overhead-like moment mid-flight.
//!
//! The [`Animator`] is the two-state machine (idle or transitioning) that owns the current
//! transition and decides, per [`TransitionConfig`], whether a focus change animates at all.

use core::f32::consts::PI;

use rackview_layout::Warehouse;

use crate::config::{CameraConfig, EndpointPolicy, RetargetPolicy, TransitionConfig};
use crate::error::CameraError;
use crate::focus::Focus;
use crate::synth::{self, Aspect, CameraMatrices};

/// The orthographic bump `4 t (1 - t)`.
pub fn ortho_bump(t: f32) -> f32 {
    4.0 * t * (1.0 - t)
}

/// The ease-in-out curve `0.5 - cos(π t) / 2`.
pub fn ease_in_out(t: f32) -> f32 {
    0.5 - (PI * t).cos() / 2.0
}

/// Normalized time and the blend weights derived from it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Elapsed fraction of the transition in `[0, 1]`.
    pub t: f32,
    /// Projection weight, [`ortho_bump`] of `t`.
    pub ortho_t: f32,
    /// View weight, [`ease_in_out`] of `t`.
    pub view_t: f32,
}

impl Progress {
    /// Weights at normalized time `t` (clamped to `[0, 1]`).
    pub fn at(t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            t,
            ortho_t: ortho_bump(t),
            view_t: ease_in_out(t),
        }
    }
}

/// Where a transition starts from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Origin {
    /// The resting camera of a focus.
    Focus(Focus),
    /// A fixed snapshot, typically the last frame of an interrupted transition.
    Pose(CameraMatrices),
}

/// A single in-flight focus change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Starting camera.
    pub from: Origin,
    /// Target focus.
    pub to: Focus,
    /// Clock reading when the change happened.
    pub start_ms: f64,
    /// Length of the transition.
    pub duration_ms: f64,
}

impl Transition {
    /// Progress at `now_ms`, clamped to the transition's span.
    pub fn progress(&self, now_ms: f64) -> Progress {
        if self.duration_ms <= 0.0 {
            return Progress::at(1.0);
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "t is clamped to [0, 1] before narrowing."
        )]
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32;
        Progress::at(t)
    }

    /// Returns true once `now_ms` has reached the end of the transition.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms
    }

    /// Camera matrices at `progress`.
    ///
    /// Between two platforms, the origin is evaluated in perspective and the target in
    /// orthographic; views blend by `view_t` and projections by `ortho_t`. Any other pairing
    /// eases both matrices by `view_t`.
    pub fn evaluate(
        &self,
        warehouse: &Warehouse,
        progress: Progress,
        aspect: Aspect,
        now_ms: f64,
        config: &CameraConfig,
    ) -> Result<CameraMatrices, CameraError> {
        if let (Origin::Focus(Focus::Platform(from)), Focus::Platform(to)) = (self.from, self.to) {
            let from = synth::platform(warehouse, from, aspect, 0.0, config)?;
            let to = synth::platform(warehouse, to, aspect, 1.0, config)?;
            return Ok(from.blend(&to, progress.view_t, progress.ortho_t));
        }
        let from = match self.from {
            Origin::Focus(focus) => synth::synthesize(warehouse, focus, aspect, now_ms, config)?,
            Origin::Pose(pose) => pose,
        };
        let to = synth::synthesize(warehouse, self.to, aspect, now_ms, config)?;
        Ok(from.blend(&to, progress.view_t, progress.view_t))
    }
}

/// Animator state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum AnimatorState {
    /// No transition; the current focus is drawn at rest.
    #[default]
    Idle,
    /// A transition is in flight.
    Transitioning(Transition),
}

/// Starts, supersedes and retires focus transitions.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    state: AnimatorState,
    config: TransitionConfig,
}

impl Animator {
    /// An idle animator.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            state: AnimatorState::Idle,
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Returns true while a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, AnimatorState::Transitioning(_))
    }

    /// React to the focus changing from `previous` to `next` at `now_ms`.
    ///
    /// `last_pose` is the most recently drawn camera; it is only used when
    /// [`RetargetPolicy::FromCurrentPose`] interrupts an in-flight transition.
    pub fn retarget(
        &mut self,
        previous: Focus,
        next: Focus,
        last_pose: Option<CameraMatrices>,
        now_ms: f64,
    ) {
        if previous == next {
            return;
        }
        let touches_overview = previous.platform().is_none() || next.platform().is_none();
        if self.config.duration_ms <= 0.0
            || (touches_overview && self.config.endpoints == EndpointPolicy::Cut)
        {
            tracing::debug!(?previous, ?next, "focus cut");
            self.state = AnimatorState::Idle;
            return;
        }
        let from = match (self.state, self.config.retarget, last_pose) {
            (AnimatorState::Transitioning(_), RetargetPolicy::FromCurrentPose, Some(pose)) => {
                Origin::Pose(pose)
            }
            _ => Origin::Focus(previous),
        };
        tracing::debug!(?previous, ?next, start_ms = now_ms, "transition started");
        self.state = AnimatorState::Transitioning(Transition {
            from,
            to: next,
            start_ms: now_ms,
            duration_ms: self.config.duration_ms,
        });
    }

    /// Sample the animator at `now_ms`.
    ///
    /// Returns the in-flight transition and its progress, or `None` when idle. A transition
    /// that has run its full duration is retired here, and `None` is returned from then on.
    pub fn advance(&mut self, now_ms: f64) -> Option<(Transition, Progress)> {
        let AnimatorState::Transitioning(transition) = self.state else {
            return None;
        };
        if transition.is_finished(now_ms) {
            tracing::debug!(to = ?transition.to, "transition finished");
            self.state = AnimatorState::Idle;
            return None;
        }
        let progress = transition.progress(now_ms);
        tracing::trace!(t = progress.t, "transition frame");
        Some((transition, progress))
    }
}
