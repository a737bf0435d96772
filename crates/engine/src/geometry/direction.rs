use std::f32::consts::PI;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One of the eight compass directions a road edge can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Unit grid step for this direction.
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::N => IVec2::new(0, -1),
            Direction::S => IVec2::new(0, 1),
            Direction::E => IVec2::new(1, 0),
            Direction::W => IVec2::new(-1, 0),
            Direction::NE => IVec2::new(1, -1),
            Direction::NW => IVec2::new(-1, -1),
            Direction::SE => IVec2::new(1, 1),
            Direction::SW => IVec2::new(-1, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NE | Direction::NW | Direction::SE | Direction::SW
        )
    }

    /// Map any delta to the direction of its sign pattern. `None` for a zero delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Direction::N),
            (0, 1) => Some(Direction::S),
            (1, 0) => Some(Direction::E),
            (-1, 0) => Some(Direction::W),
            (1, -1) => Some(Direction::NE),
            (-1, -1) => Some(Direction::NW),
            (1, 1) => Some(Direction::SE),
            (-1, 1) => Some(Direction::SW),
            _ => None,
        }
    }

    /// Straight (axis) direction for a horizontal or vertical run.
    pub(crate) fn straight(horizontal: bool, sign: i32) -> Direction {
        match (horizontal, sign > 0) {
            (true, true) => Direction::E,
            (true, false) => Direction::W,
            (false, true) => Direction::S,
            (false, false) => Direction::N,
        }
    }

    /// Angle in radians used to order edges around a junction.
    ///
    /// E is 0 and the angle increases counter-clockwise on screen (through N,
    /// then W, then S).
    pub fn angle(self) -> f32 {
        match self {
            Direction::E => 0.0,
            Direction::NE => PI / 4.0,
            Direction::N => PI / 2.0,
            Direction::NW => 3.0 * PI / 4.0,
            Direction::W => PI,
            Direction::SW => 5.0 * PI / 4.0,
            Direction::S => 3.0 * PI / 2.0,
            Direction::SE => 7.0 * PI / 4.0,
        }
    }
}
