//! Transition planner.
//!
//! When the mode changes, legs glide on straight lines from where they are to
//! the new gait's time-0 pose instead of jumping there.
use heapless::Vec;

use crate::kinematics::gait::Gait;
use crate::robot::{
    config::{add, scale, sub, Position, DEFAULT_POSE, MAX_SWITCH_STEPS},
    leg::{Leg, LEG_COUNT},
};

/// Absolute foot positions of all six legs.
pub type Frame = [Position; LEG_COUNT];

pub const MAX_FRAMES: usize = MAX_SWITCH_STEPS + 1;

/// Frames waiting for playback. The last frame stored is played first.
#[derive(Debug, Clone, Default)]
pub struct TransitionPath {
    frames: Vec<Frame, MAX_FRAMES>,
}

impl TransitionPath {
    /// Plans `steps + 1` frames from `current` (absolute positions) to the
    /// time-0 pose of `target`.
    ///
    /// Frame `k` sits at `end + k * (start - end) / steps`, so the playback
    /// order (frame `steps` down to frame 0) starts exactly at `current` and
    /// ends exactly at the new pose.
    pub fn plan(current: &Frame, target: &Gait, steps: usize) -> Self {
        let steps = steps.clamp(1, MAX_SWITCH_STEPS);

        let mut ends = [[0.0; 3]; LEG_COUNT];
        let mut deltas = [[0.0; 3]; LEG_COUNT];
        for leg in Leg::ALL {
            let start = sub(current[leg], DEFAULT_POSE[leg]);
            let (end, _) = target.pose(leg, 0);
            ends[leg] = end;
            deltas[leg] = scale(sub(start, end), 1.0 / steps as f32);
        }

        let mut frames = Vec::new();
        for k in 0..=steps {
            let mut frame = [[0.0; 3]; LEG_COUNT];
            for leg in Leg::ALL {
                let offset = if k == steps {
                    // exact, no accumulated rounding on the first frame played
                    sub(current[leg], DEFAULT_POSE[leg])
                } else {
                    add(ends[leg], scale(deltas[leg], k as f32))
                };
                frame[leg] = add(offset, DEFAULT_POSE[leg]);
            }
            // capacity holds MAX_SWITCH_STEPS + 1 frames
            let _ = frames.push(frame);
        }

        Self { frames }
    }

    /// Next frame to play, or `None` once the path is done.
    pub fn next_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
