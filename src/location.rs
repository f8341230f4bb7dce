use crate::world::WorldRef;
use std::fmt;

/// A real-valued position in a world.
#[derive(Debug, Clone)]
pub struct Location {
    pub world: WorldRef,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: WorldRef, x: f64, y: f64, z: f64) -> Self {
        Location { world, x, y, z }
    }

    pub fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// The cell this location falls in.
    pub fn block(&self) -> Block {
        Block::new(
            self.world.clone(),
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    /// Coordinate bit patterns, for exact-equality hashing.
    pub(crate) fn coord_bits(&self) -> (u64, u64, u64) {
        (self.x.to_bits(), self.y.to_bits(), self.z.to_bits())
    }
}

// Exact comparison: -0.0 and 0.0 are different locations.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.world == other.world && self.coord_bits() == other.coord_bits()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub world: WorldRef,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Block {
    pub fn new(world: WorldRef, x: i32, y: i32, z: i32) -> Self {
        Block { world, x, y, z }
    }

    pub fn position(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {}, {}]", self.world, self.x, self.y, self.z)
    }
}

/// Anything with a position in a world.
pub trait Locatable {
    /// Plural name used in error messages, e.g. "Blocks on separate worlds".
    const KIND: &'static str;

    fn location(&self) -> Location;

    fn world(&self) -> &WorldRef;
}

impl Locatable for Location {
    const KIND: &'static str = "Locations";

    fn location(&self) -> Location {
        self.clone()
    }

    fn world(&self) -> &WorldRef {
        &self.world
    }
}

impl Locatable for Block {
    const KIND: &'static str = "Blocks";

    fn location(&self) -> Location {
        Location::new(
            self.world.clone(),
            self.x as f64,
            self.y as f64,
            self.z as f64,
        )
    }

    fn world(&self) -> &WorldRef {
        &self.world
    }
}
