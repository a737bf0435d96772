use serde::{Deserialize, Serialize};

/// Building rotation. Only the four half-turn classes exist: 180° folds onto
/// 0°, 225° onto 45°, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R45,
    R90,
    R135,
}

/// Error returned when a degree value is not a multiple of 45.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub u16);

impl std::fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rotation {}° is not one of 0, 45, 90, 135", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

impl Rotation {
    /// Cycle order used by the rotation toggles.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R45, Rotation::R90, Rotation::R135];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R45 => 45,
            Rotation::R90 => 90,
            Rotation::R135 => 135,
        }
    }

    /// Normalize any multiple of 45 degrees modulo 180.
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        match degrees.rem_euclid(180) {
            0 => Some(Rotation::R0),
            45 => Some(Rotation::R45),
            90 => Some(Rotation::R90),
            135 => Some(Rotation::R135),
            _ => None,
        }
    }

    /// 45° and 135° produce rotated rectangles; 0° and 90° stay grid aligned.
    pub fn is_diagonal(self) -> bool {
        self.degrees() % 90 != 0
    }

    /// Apply a rotation delta, wrapping modulo 180.
    pub fn rotated_by(self, delta: Rotation) -> Rotation {
        Rotation::ALL[(self.index() + delta.index()) % Rotation::ALL.len()]
    }

    /// Step through [`Rotation::ALL`], forwards for a positive step.
    pub fn cycle(self, step: i32) -> Rotation {
        let len = Rotation::ALL.len() as i32;
        let index = (self.index() as i32 + step).rem_euclid(len);
        Rotation::ALL[index as usize]
    }

    fn index(self) -> usize {
        (self.degrees() / 45) as usize
    }
}

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            45 => Ok(Rotation::R45),
            90 => Ok(Rotation::R90),
            135 => Ok(Rotation::R135),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}
