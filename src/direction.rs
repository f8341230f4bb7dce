use crate::error::AreaError;
use std::fmt;
use std::str::FromStr;

/// A direction to expand, shrink or shift a region in.
///
/// `All` and `Sides` are composites: each region variant decides what they mean
/// for its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    North,
    South,
    East,
    West,
    /// North, south, east, west, up and down.
    All,
    /// North, south, east and west.
    Sides,
}

/// Which bound of an axis a single direction moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Direction {
    pub const ALL_VALUES: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::All,
        Direction::Sides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::All => "ALL",
            Direction::Sides => "SIDES",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Direction::All | Direction::Sides)
    }

    /// True for directions that touch the y axis, including `All`.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down | Direction::All)
    }

    /// The single directions a composite stands for. A single direction maps to itself.
    pub fn components(&self) -> &'static [Direction] {
        match self {
            Direction::Up => &[Direction::Up],
            Direction::Down => &[Direction::Down],
            Direction::North => &[Direction::North],
            Direction::South => &[Direction::South],
            Direction::East => &[Direction::East],
            Direction::West => &[Direction::West],
            Direction::All => &[
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
                Direction::Up,
                Direction::Down,
            ],
            Direction::Sides => &[
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
            ],
        }
    }

    /// Axis and bound moved by a single direction; `None` for composites.
    ///
    /// North is toward negative z, east toward positive x.
    pub fn axis_side(&self) -> Option<(Axis, Side)> {
        match self {
            Direction::Up => Some((Axis::Y, Side::Max)),
            Direction::Down => Some((Axis::Y, Side::Min)),
            Direction::North => Some((Axis::Z, Side::Min)),
            Direction::South => Some((Axis::Z, Side::Max)),
            Direction::East => Some((Axis::X, Side::Max)),
            Direction::West => Some((Axis::X, Side::Min)),
            Direction::All | Direction::Sides => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL_VALUES
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AreaError::InvalidDirection(format!("Invalid direction specified: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" Sides ".parse::<Direction>().unwrap(), Direction::Sides);
        assert_eq!("WEST".parse::<Direction>().unwrap(), Direction::West);
    }

    #[test]
    fn test_parse_unknown_direction() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(err, AreaError::InvalidDirection(_)));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for d in Direction::ALL_VALUES {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
    }

    #[test]
    fn test_composites() {
        assert_eq!(Direction::All.components().len(), 6);
        assert!(!Direction::Sides.components().contains(&Direction::Up));
        assert!(Direction::Sides.axis_side().is_none());
        assert_eq!(Direction::North.axis_side(), Some((Axis::Z, Side::Min)));
        assert!(Direction::All.is_vertical());
        assert!(!Direction::Sides.is_vertical());
    }
}
