use super::{check_amount, check_same_world, rejected, Region};
use crate::direction::Direction;
use crate::entity::Entity;
use crate::error::{AreaError, Result};
use crate::location::{Block, Locatable, Location};
use crate::world::WorldRef;
use rustc_hash::FxHashSet;

/// An explicit, ordered list of points.
///
/// Membership is exact: a location is inside only if it equals one of the
/// stored points. Nothing between the points is filled in, so four corners
/// of a square do not contain the square's interior.
#[derive(Debug, Clone)]
pub struct PointSetRegion {
    points: Vec<Location>,
    index: FxHashSet<(u64, u64, u64)>,
    world: Option<WorldRef>,
}

impl PointSetRegion {
    /// Every point must be on the same world as the first one.
    pub fn new<L: Locatable>(points: &[L]) -> Result<Self> {
        let first = points.first().ok_or_else(|| {
            AreaError::InvalidValue("A point set needs at least one point".to_string())
        })?;
        let world = first.world().clone();
        for point in points {
            check_same_world(L::KIND, &world, point.world())?;
        }
        Ok(Self::build(
            points.iter().map(Locatable::location).collect(),
            Some(world),
        ))
    }

    pub fn from_locations(locations: &[Location]) -> Result<Self> {
        Self::new(locations)
    }

    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        Self::new(blocks)
    }

    /// Builds a point set from entity positions without checking their worlds.
    /// The region's world is left unset.
    pub fn from_entities(entities: &[Entity]) -> Self {
        Self::build(entities.iter().map(Locatable::location).collect(), None)
    }

    fn build(points: Vec<Location>, world: Option<WorldRef>) -> Self {
        let index = points.iter().map(Location::coord_bits).collect();
        Self {
            points,
            index,
            world,
        }
    }

    pub fn points(&self) -> &[Location] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Region for PointSetRegion {
    fn world(&self) -> Option<&WorldRef> {
        self.world.as_ref()
    }

    fn contains_location(&self, location: &Location) -> bool {
        if !self.index.contains(&location.coord_bits()) {
            return false;
        }
        match &self.world {
            Some(world) => *world == location.world,
            // Entity-built sets can mix worlds.
            None => self.points.iter().any(|p| p == location),
        }
    }

    /// Not supported.
    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()> {
        check_amount(amount)
            .and_then(|_| Err(AreaError::Unsupported("Cannot expand this region".to_string())))
            .map_err(rejected("point_set", "expand", direction, amount))
    }

    /// Not supported.
    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()> {
        check_amount(amount)
            .and_then(|_| Err(AreaError::Unsupported("Cannot shrink this region".to_string())))
            .map_err(rejected("point_set", "shrink", direction, amount))
    }

    /// Not supported.
    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()> {
        check_amount(amount)
            .and_then(|_| Err(AreaError::Unsupported("Cannot shift this region".to_string())))
            .map_err(rejected("point_set", "shift", direction, amount))
    }

    /// The cell under each stored point, in insertion order.
    fn for_each_block(&self, f: &mut dyn FnMut(Block)) {
        for point in &self.points {
            f(point.block());
        }
    }

    fn cell_count(&self) -> usize {
        self.points.len()
    }

    fn total_blocks(&self) -> i64 {
        self.points.len() as i64
    }
}
