use super::{
    check_amount, check_cell_range, check_not_inverted, check_same_world, grow_axis,
    reject_composite_shift, reject_vertical, rejected, shift_axis, Region,
};
use crate::bounds::{min_max, Span};
use crate::direction::{Axis, Direction};
use crate::error::{AreaError, Result};
use crate::location::{Block, Locatable, Location};
use crate::world::WorldRef;

/// An x/z rectangle on a single y level.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRegion {
    x: Span,
    z: Span,
    plane: i32,
    world: WorldRef,
}

impl PlaneRegion {
    /// Both corners must sit on the same y level (after truncation) and the same world.
    pub fn new<L: Locatable>(a: &L, b: &L) -> Result<Self> {
        let (a, b) = (a.location(), b.location());
        if a.y as i32 != b.y as i32 {
            return Err(AreaError::PlaneMismatch(format!("{} on separate planes", L::KIND)));
        }
        check_same_world(L::KIND, &a.world, &b.world)?;
        let (min, max) = min_max(a.coords(), b.coords());
        let (x, z) = (Span::new(min.0, max.0), Span::new(min.2, max.2));
        check_cell_range(&[x, z])?;
        Ok(Self {
            x,
            z,
            plane: a.y as i32,
            world: a.world,
        })
    }

    pub fn plane(&self) -> i32 {
        self.plane
    }

    /// `(min_x, min_z)`
    pub fn min(&self) -> (f64, f64) {
        (self.x.min, self.z.min)
    }

    /// `(max_x, max_z)`
    pub fn max(&self) -> (f64, f64) {
        (self.x.max, self.z.max)
    }

    pub fn length(&self) -> f64 {
        self.x.length()
    }

    pub fn width(&self) -> f64 {
        self.z.length()
    }

    fn resize(&mut self, op: &'static str, direction: Direction, amount: i32, sign: f64) -> Result<()> {
        let (x, z) = check_amount(amount)
            .and_then(|a| {
                reject_vertical(op, direction)?;
                let x = grow_axis(self.x, Axis::X, direction, a * sign);
                let z = grow_axis(self.z, Axis::Z, direction, a * sign);
                check_not_inverted(&[x, z])?;
                check_cell_range(&[x, z])?;
                Ok((x, z))
            })
            .map_err(rejected("plane", op, direction, amount))?;

        self.x = x;
        self.z = z;
        Ok(())
    }

    fn shifted_plane(&self, direction: Direction, amount: i32) -> Result<i32> {
        let plane = match direction {
            Direction::Up => self.plane as i64 + amount as i64,
            Direction::Down => self.plane as i64 - amount as i64,
            _ => return Ok(self.plane),
        };
        if plane < self.world.min_height() as i64 {
            return Err(AreaError::InvalidDirection("Minimum height reached".to_string()));
        }
        if plane > self.world.max_height() as i64 {
            return Err(AreaError::InvalidDirection("Maximum height reached".to_string()));
        }
        Ok(plane as i32)
    }
}

impl Region for PlaneRegion {
    fn world(&self) -> Option<&WorldRef> {
        Some(&self.world)
    }

    fn contains_location(&self, location: &Location) -> bool {
        location.y as i32 == self.plane
            && location.world == self.world
            && self.x.contains(location.x)
            && self.z.contains(location.z)
    }

    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("expand", direction, amount, 1.0)
    }

    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("shrink", direction, amount, -1.0)
    }

    /// Horizontal shifts move the rectangle; `Up` and `Down` move the plane
    /// itself, within the world's height limits.
    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()> {
        let (x, z, plane) = check_amount(amount)
            .and_then(|a| {
                reject_composite_shift(direction)?;
                let x = shift_axis(self.x, Axis::X, direction, a);
                let z = shift_axis(self.z, Axis::Z, direction, a);
                check_cell_range(&[x, z])?;
                Ok((x, z, self.shifted_plane(direction, amount)?))
            })
            .map_err(rejected("plane", "shift", direction, amount))?;

        self.x = x;
        self.z = z;
        self.plane = plane;
        Ok(())
    }

    fn for_each_block(&self, f: &mut dyn FnMut(Block)) {
        for x in self.x.cells() {
            for z in self.z.cells() {
                f(self.world.block_at(x, self.plane, z));
            }
        }
    }

    fn cell_count(&self) -> usize {
        self.x.cell_count().saturating_mul(self.z.cell_count())
    }

    fn total_blocks(&self) -> i64 {
        (self.length() as i64).saturating_mul(self.width() as i64)
    }
}
