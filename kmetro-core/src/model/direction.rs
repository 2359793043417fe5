use serde::{Deserialize, Serialize};

/// one of the two terminus-bound travel senses of the line, keyed by the
/// GTFS `direction_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// direction_id 0
    Thrippunithura,
    /// direction_id 1
    Aluva,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Thrippunithura, Direction::Aluva];

    pub fn direction_id(&self) -> u8 {
        match self {
            Direction::Thrippunithura => 0,
            Direction::Aluva => 1,
        }
    }

    /// the terminus a train in this direction is heading towards.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Thrippunithura => "Thrippunithura",
            Direction::Aluva => "Aluva",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Thrippunithura),
            1 => Ok(Direction::Aluva),
            other => Err(format!("unknown direction_id {other}, expected 0 or 1")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Direction;

    #[test]
    fn test_direction_id_mapping() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Thrippunithura));
        assert_eq!(Direction::try_from(1), Ok(Direction::Aluva));
        assert!(Direction::try_from(2).is_err());
        assert_eq!(Direction::Aluva.label(), "Aluva");
        assert_eq!(Direction::Thrippunithura.direction_id(), 0);
    }
}
