use super::{
    check_amount, check_cell_range, check_not_inverted, check_same_world, grow_axis,
    reject_composite_shift, reject_vertical, rejected, shift_axis, Region,
};
use crate::bounds::{min_max, Span};
use crate::direction::{Axis, Direction};
use crate::error::Result;
use crate::location::{Block, Locatable, Location};
use crate::world::WorldRef;

/// An x/z rectangle with no height limit: every y level of the world is inside.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRegion {
    x: Span,
    z: Span,
    world: WorldRef,
}

impl ColumnRegion {
    /// Creates a column from two corners; their y values are ignored.
    pub fn new<L: Locatable>(a: &L, b: &L) -> Result<Self> {
        check_same_world(L::KIND, a.world(), b.world())?;
        let (a, b) = (a.location(), b.location());
        let (min, max) = min_max(a.coords(), b.coords());
        let (x, z) = (Span::new(min.0, max.0), Span::new(min.2, max.2));
        check_cell_range(&[x, z])?;
        Ok(Self { x, z, world: a.world })
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
            .map_err(rejected("column", op, direction, amount))?;

        self.x = x;
        self.z = z;
        log::trace!("column {} {} by {}: {:?} -> {:?}", op, direction, amount, self.min(), self.max());
        Ok(())
    }

    fn height_levels(&self) -> std::ops::RangeInclusive<i32> {
        self.world.min_height()..=self.world.max_height()
    }
}

impl Region for ColumnRegion {
    fn world(&self) -> Option<&WorldRef> {
        Some(&self.world)
    }

    fn contains_location(&self, location: &Location) -> bool {
        location.world == self.world && self.x.contains(location.x) && self.z.contains(location.z)
    }

    /// `All`, `Up` and `Down` always fail: there is no vertical bound to move.
    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("expand", direction, amount, 1.0)
    }

    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("shrink", direction, amount, -1.0)
    }

    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()> {
        let (x, z) = check_amount(amount)
            .and_then(|a| {
                reject_vertical("shift", direction)?;
                reject_composite_shift(direction)?;
                let x = shift_axis(self.x, Axis::X, direction, a);
                let z = shift_axis(self.z, Axis::Z, direction, a);
                check_cell_range(&[x, z])?;
                Ok((x, z))
            })
            .map_err(rejected("column", "shift", direction, amount))?;

        self.x = x;
        self.z = z;
        Ok(())
    }

    /// Scans the full height of the world for every x/z cell, so this is the
    /// most expensive enumeration of all region kinds.
    fn for_each_block(&self, f: &mut dyn FnMut(Block)) {
        for x in self.x.cells() {
            for y in self.height_levels() {
                for z in self.z.cells() {
                    f(self.world.block_at(x, y, z));
                }
            }
        }
    }

    fn cell_count(&self) -> usize {
        let levels = self.height_levels();
        let height = if levels.is_empty() {
            0
        } else {
            (*levels.end() as i64 - *levels.start() as i64 + 1) as usize
        };
        self.x
            .cell_count()
            .saturating_mul(self.z.cell_count())
            .saturating_mul(height)
    }

    fn total_blocks(&self) -> i64 {
        (self.length() as i64)
            .saturating_mul(self.width() as i64)
            .saturating_mul(self.world.max_height() as i64)
    }
}
