//! Gait library.
//!
//! Each gait is a pose generator: given a leg and a time index it reports the
//! foot offset from the default pose and the time index of the next tick.
use crate::kinematics::tables::{self, PerLegTable};
use crate::robot::{commands::Mode, config::Position, leg::Leg};

/// Which way a directional cycle steps through its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
}

/// Tables read by the directional gaits.
#[derive(Debug, Clone, Copy)]
pub enum Cycle {
    /// Shared step, x mirrored on the right side.
    Walk(&'static [Position]),
    /// Sideways sway derived from the walking step.
    Shift(&'static [Position]),
    /// One row per leg.
    Turn(&'static PerLegTable),
}

impl Cycle {
    pub fn period(&self) -> usize {
        match self {
            Cycle::Walk(table) | Cycle::Shift(table) => table.len(),
            Cycle::Turn(table) => table[0].len(),
        }
    }

    fn offset(&self, leg: Leg, index: usize) -> Position {
        match self {
            Cycle::Walk(table) => {
                let [x, y, z] = table[index];
                if leg.is_left() {
                    [x, y, z]
                } else {
                    [-x, y, z]
                }
            }
            Cycle::Shift(table) => {
                let [_, y, z] = table[index];
                [y / 1.5, 0.0, z]
            }
            Cycle::Turn(table) => table[leg][index],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Gait {
    /// Body lowered by 20mm.
    Adjust,
    Stop,
    /// Per-leg cycle that only ever advances.
    Tabulated(&'static PerLegTable),
    /// Cycle phased per leg, stepping in `direction`.
    Directional { cycle: Cycle, direction: Direction },
}

impl Gait {
    /// Number of time indices in one cycle, `None` for stationary poses.
    pub fn period(&self) -> Option<usize> {
        match self {
            Gait::Adjust | Gait::Stop => None,
            Gait::Tabulated(table) => Some(table[0].len()),
            Gait::Directional { cycle, .. } => Some(cycle.period()),
        }
    }

    /// Offset of `leg` from its default pose at `time`, and the next time index.
    pub fn pose(&self, leg: Leg, time: usize) -> (Position, usize) {
        match self {
            Gait::Adjust => ([0.0, 0.0, -20.0], time),
            Gait::Stop => ([0.0, 0.0, 0.0], time),
            Gait::Tabulated(table) => {
                let n = table[0].len();
                let time = if time >= n { 0 } else { time };
                (table[leg][time], (time + 1) % n)
            }
            Gait::Directional { cycle, direction } => {
                let n = cycle.period();
                let time = time % n;
                let index = (time + phase_offset(leg, n)) % n;
                let next = match direction {
                    Direction::Advance => (time + 1) % n,
                    Direction::Retreat => (time + n - 1) % n,
                };
                (cycle.offset(leg, index), next)
            }
        }
    }
}

/// Even legs run a quarter cycle ahead, odd legs another half cycle on.
pub fn phase_offset(leg: Leg, period: usize) -> usize {
    let quarter = period / 4;
    if leg.is_even() {
        quarter
    } else {
        quarter + period / 2
    }
}

impl Mode {
    pub fn gait(self) -> Gait {
        use Direction::{Advance, Retreat};

        let directional =
            |cycle: Cycle, direction: Direction| Gait::Directional { cycle, direction };
        match self {
            Mode::Adjust => Gait::Adjust,
            Mode::Stop => Gait::Stop,
            Mode::Dance1 => Gait::Tabulated(&tables::DANCE_FRONT_BACK),
            Mode::Dance2 => Gait::Tabulated(&tables::DANCE_SIDEWAYS),
            Mode::Dance3 => Gait::Tabulated(&tables::DANCE_TWIST),
            Mode::Forward => directional(Cycle::Walk(&tables::WALK), Advance),
            Mode::Backward => directional(Cycle::Walk(&tables::WALK), Retreat),
            Mode::ShiftLeft => directional(Cycle::Shift(&tables::WALK), Retreat),
            Mode::ShiftRight => directional(Cycle::Shift(&tables::WALK), Advance),
            Mode::TurnLeft => directional(Cycle::Turn(&tables::TURN), Advance),
            Mode::TurnRight => directional(Cycle::Turn(&tables::TURN), Retreat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_poses_keep_time() {
        assert_eq!(Gait::Adjust.pose(Leg::RearLeft, 7), ([0.0, 0.0, -20.0], 7));
        assert_eq!(Gait::Stop.pose(Leg::FrontRight, 3), ([0.0, 0.0, 0.0], 3));
        assert_eq!(Gait::Stop.period(), None);
    }

    #[test]
    fn tabulated_cycle_visits_every_row_once() {
        for mode in [Mode::Dance1, Mode::Dance2, Mode::Dance3] {
            let gait = mode.gait();
            let n = gait.period().unwrap();
            let mut seen = vec![false; n];
            let mut time = 0;
            for _ in 0..n {
                assert!(!seen[time], "{mode:?} revisited {time}");
                seen[time] = true;
                time = gait.pose(Leg::FrontLeft, time).1;
            }
            assert_eq!(time, 0);
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn tabulated_cycle_restarts_past_the_end() {
        let gait = Mode::Dance3.gait();
        let n = gait.period().unwrap();
        let (offset, next) = gait.pose(Leg::MiddleLeft, n + 4);
        assert_eq!(offset, tables::DANCE_TWIST[1][0]);
        assert_eq!(next, 1);
    }

    #[test]
    fn walk_phases_tripods() {
        assert_eq!(phase_offset(Leg::FrontLeft, 20), 5);
        assert_eq!(phase_offset(Leg::MiddleLeft, 20), 15);
        assert_eq!(phase_offset(Leg::RearLeft, 20), 5);
        assert_eq!(phase_offset(Leg::RearRight, 20), 15);
        assert_eq!(phase_offset(Leg::MiddleRight, 20), 5);
        assert_eq!(phase_offset(Leg::FrontRight, 20), 15);
    }

    #[test]
    fn walk_direction_steps_index() {
        let forward = Mode::Forward.gait();
        let backward = Mode::Backward.gait();
        for leg in Leg::ALL {
            assert_eq!(forward.pose(leg, 0).1, 1);
            assert_eq!(forward.pose(leg, 19).1, 0);
            assert_eq!(backward.pose(leg, 0).1, 19);
            assert_eq!(backward.pose(leg, 5).1, 4);
        }
    }

    #[test]
    fn walk_mirrors_x_on_the_right() {
        let gait = Mode::Forward.gait();
        let (left, _) = gait.pose(Leg::FrontLeft, 1);
        let (right, _) = gait.pose(Leg::MiddleRight, 1);
        assert_eq!(left, tables::WALK[6]);
        assert_eq!(right, [-tables::WALK[6][0], tables::WALK[6][1], tables::WALK[6][2]]);
    }

    #[test]
    fn shift_reuses_walk_columns() {
        let gait = Mode::ShiftRight.gait();
        let (offset, next) = gait.pose(Leg::FrontLeft, 0);
        let [_, y, z] = tables::WALK[5];
        assert_eq!(offset, [y / 1.5, 0.0, z]);
        assert_eq!(next, 1);
        assert_eq!(Mode::ShiftLeft.gait().pose(Leg::FrontLeft, 0).1, 19);
    }

    #[test]
    fn turn_reads_the_leg_row() {
        let gait = Mode::TurnRight.gait();
        let (offset, next) = gait.pose(Leg::RearRight, 2);
        assert_eq!(offset, tables::TURN[3][(2 + 15) % 20]);
        assert_eq!(next, 1);
    }
}
