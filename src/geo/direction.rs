use crate::codec::EnumCodec;
use serde::{Deserialize, Serialize};

crate::described_enum! {
    #[derive(Default, Serialize, Deserialize)]
    pub enum Direction {
        #[default]
        North => "N",
        South => "S",
        East => "E",
        West => "W",
    }
}

crate::described_enum! {
    #[derive(Default, Serialize, Deserialize)]
    pub enum CoordinateUnit {
        #[default]
        Latitude,
        Longitude,
    }
}

impl CoordinateUnit {
    pub fn limit(self) -> f64 {
        match self {
            CoordinateUnit::Latitude => 90.0,
            CoordinateUnit::Longitude => 180.0,
        }
    }
}

impl Direction {
    pub fn unit(self) -> CoordinateUnit {
        match self {
            Direction::North | Direction::South => CoordinateUnit::Latitude,
            Direction::East | Direction::West => CoordinateUnit::Longitude,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::South | Direction::West => -1.0,
            Direction::North | Direction::East => 1.0,
        }
    }

    /// 0 視為 South/West
    pub fn infer(unit: CoordinateUnit, coordinate: f64) -> Self {
        match (unit, coordinate > 0.0) {
            (CoordinateUnit::Latitude, true) => Direction::North,
            (CoordinateUnit::Latitude, false) => Direction::South,
            (CoordinateUnit::Longitude, true) => Direction::East,
            (CoordinateUnit::Longitude, false) => Direction::West,
        }
    }

    pub fn parse_lenient(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::VARIANTS
            .iter()
            .find(|info| {
                info.tag()
                    .is_some_and(|code| code.eq_ignore_ascii_case(text))
            })
            .map(|info| info.variant)
            .or_else(|| Self::try_from_name(text, None))
    }
}
