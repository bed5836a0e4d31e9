use std::ops::Neg;

use crate::geometry::{Point, Segment};

/// Side of a directed line on which a point lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Collinear,
    Right,
}

impl Orientation {
    /// `-1` for left, `0` for collinear, `1` for right.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Collinear => 0,
            Self::Right => 1,
        }
    }
}

impl Neg for Orientation {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Collinear => Self::Collinear,
            Self::Right => Self::Left,
        }
    }
}

/// Classifies `point` against the line through `segment`, following the
/// segment's direction.
///
/// Evaluates `p1.y·(p2.x − x) + p2.y·(x − p1.x) + y·(p1.x − p2.x)`, which is
/// twice the signed area of the triangle `(p1, p2, point)` with the sign
/// flipped: negative is [`Orientation::Left`], positive is
/// [`Orientation::Right`].
///
/// The zero test is exact. Points that are only nearly collinear may be
/// classified either way depending on rounding, and callers needing a
/// tolerance band must perturb or filter their inputs.
#[must_use]
pub fn orientation(segment: &Segment, point: &Point) -> Orientation {
    let (p1, p2) = (segment.p1(), segment.p2());
    let v = p1.y * (p2.x - point.x) + p2.y * (point.x - p1.x) + point.y * (p1.x - p2.x);
    if v < 0.0 {
        Orientation::Left
    } else if v > 0.0 {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}
