// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame driver a host embeds: focus in, matrices out.

use rackview_layout::{Direction, Warehouse};

use crate::config::CameraConfig;
use crate::error::CameraError;
use crate::focus::Focus;
use crate::scheduler::{FrameScheduler, Redraw};
use crate::synth::{Aspect, CameraMatrices, synthesize};
use crate::transition::{Animator, AnimatorState};

/// Camera state for one view of a warehouse.
///
/// The host forwards focus changes with [`set_focus`](Self::set_focus) (or
/// [`step`](Self::step)), and while [`needs_redraw`](Self::needs_redraw) is true calls
/// [`frame`](Self::frame) once per tick and draws with the returned matrices.
#[derive(Clone, Debug)]
pub struct Viewer {
    focus: Focus,
    animator: Animator,
    scheduler: FrameScheduler,
    config: CameraConfig,
    last_pose: Option<CameraMatrices>,
}

impl Viewer {
    /// Start looking at `focus`. The first frame is scheduled.
    pub fn new(focus: Focus, config: CameraConfig) -> Self {
        let mut scheduler = FrameScheduler::new();
        scheduler.request();
        Self {
            focus,
            animator: Animator::new(config.transition),
            scheduler,
            config,
            last_pose: None,
        }
    }

    /// The selected focus (the target, if a transition is in flight).
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Active configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Animator state.
    pub fn animation(&self) -> AnimatorState {
        self.animator.state()
    }

    /// Redraw state.
    pub fn redraw(&self) -> Redraw {
        self.scheduler.state()
    }

    /// Returns true if the host should call [`frame`](Self::frame) on the next tick.
    pub fn needs_redraw(&self) -> bool {
        self.scheduler.is_scheduled()
    }

    /// Select a new focus at `now_ms`. Selecting the current focus does nothing.
    pub fn set_focus(&mut self, focus: Focus, now_ms: f64) {
        if focus == self.focus {
            return;
        }
        tracing::debug!(from = ?self.focus, to = ?focus, "focus changed");
        self.animator
            .retarget(self.focus, focus, self.last_pose, now_ms);
        self.focus = focus;
        self.scheduler.request();
    }

    /// Move a platform focus one step in `direction`.
    ///
    /// Returns false, leaving the focus alone, at a grid boundary or when the focus is
    /// free-roam or plan.
    pub fn step(&mut self, warehouse: &Warehouse, direction: Direction, now_ms: f64) -> bool {
        let Some(next) = self
            .focus
            .platform()
            .and_then(|p| warehouse.platform_neighbor(p, direction))
        else {
            return false;
        };
        self.set_focus(Focus::Platform(next), now_ms);
        true
    }

    /// Produce the camera for the frame at `now_ms` and update the redraw state.
    ///
    /// On error no further frame is scheduled unless the focus is free-roam.
    pub fn frame(
        &mut self,
        warehouse: &Warehouse,
        aspect: Aspect,
        now_ms: f64,
    ) -> Result<CameraMatrices, CameraError> {
        let result = match self.animator.advance(now_ms) {
            Some((transition, progress)) => {
                transition.evaluate(warehouse, progress, aspect, now_ms, &self.config)
            }
            None => synthesize(warehouse, self.focus, aspect, now_ms, &self.config),
        };
        let matrices = match result {
            Ok(matrices) => matrices,
            Err(err) => {
                tracing::debug!(focus = ?self.focus, %err, "frame failed");
                self.scheduler.settle(self.focus == Focus::Free);
                return Err(err);
            }
        };
        self.scheduler
            .settle(self.animator.is_transitioning() || self.focus == Focus::Free);
        self.last_pose = Some(matrices);
        Ok(matrices)
    }
}
