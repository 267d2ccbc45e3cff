// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw bookkeeping polled by the host's frame driver.

/// Whether the host should draw another frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing changes until the focus does.
    #[default]
    Idle,
    /// Draw on the next frame tick.
    Scheduled,
}

/// Explicit redraw state; replaces a self-rescheduling draw callback.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    state: Redraw,
}

impl FrameScheduler {
    /// A scheduler with no frame pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> Redraw {
        self.state
    }

    /// Returns true if a frame is pending.
    pub fn is_scheduled(&self) -> bool {
        self.state == Redraw::Scheduled
    }

    /// Ask for one more frame.
    pub fn request(&mut self) {
        self.state = Redraw::Scheduled;
    }

    /// Settle after drawing a frame: keep drawing only while something moves.
    pub fn settle(&mut self, animating: bool) {
        self.state = if animating {
            Redraw::Scheduled
        } else {
            Redraw::Idle
        };
    }
}
