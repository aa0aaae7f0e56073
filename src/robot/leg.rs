use core::fmt::Display;
use core::ops::{Index, IndexMut};

pub const LEG_COUNT: usize = 6;

/// Legs in mounting order, counter clockwise seen from above starting at the
/// front left corner. Body frame: x > 0 is left, y > 0 is front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    FrontLeft = 0,
    MiddleLeft = 1,
    RearLeft = 2,
    RearRight = 3,
    MiddleRight = 4,
    FrontRight = 5,
}

impl Leg {
    pub const ALL: [Leg; LEG_COUNT] = [
        Leg::FrontLeft,
        Leg::MiddleLeft,
        Leg::RearLeft,
        Leg::RearRight,
        Leg::MiddleRight,
        Leg::FrontRight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_left(self) -> bool {
        (self as usize) < 3
    }

    /// Legs alternate between the two tripods of the walking gaits.
    pub const fn is_even(self) -> bool {
        (self as usize) % 2 == 0
    }
}

impl Display for Leg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Leg::FrontLeft => f.write_str("Front left"),
            Leg::MiddleLeft => f.write_str("Middle left"),
            Leg::RearLeft => f.write_str("Rear left"),
            Leg::RearRight => f.write_str("Rear right"),
            Leg::MiddleRight => f.write_str("Middle right"),
            Leg::FrontRight => f.write_str("Front right"),
        }
    }
}

impl TryFrom<usize> for Leg {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Leg::ALL.get(value).copied().ok_or(value)
    }
}

/// Any per-leg table can be indexed by [`Leg`] directly.
impl<T> Index<Leg> for [T; LEG_COUNT] {
    type Output = T;

    fn index(&self, leg: Leg) -> &Self::Output {
        &self[leg as usize]
    }
}

impl<T> IndexMut<Leg> for [T; LEG_COUNT] {
    fn index_mut(&mut self, leg: Leg) -> &mut Self::Output {
        &mut self[leg as usize]
    }
}
