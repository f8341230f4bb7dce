mod column;
mod cuboid;
mod plane;
mod point_set;

pub use column::ColumnRegion;
pub use cuboid::CuboidRegion;
pub use plane::PlaneRegion;
pub use point_set::PointSetRegion;

use crate::bounds::Span;
use crate::direction::{Axis, Direction, Side};
use crate::error::{AreaError, Result};
use crate::location::{Block, Locatable, Location};
use crate::world::WorldRef;

/// Upper bound on the up-front allocation in [`Region::blocks`].
const PREALLOC_LIMIT: usize = 1 << 16;

/// Operations shared by every region variant.
///
/// [`Region::contains`] is generic, so trait objects get the same method
/// through the inherent impl on `dyn Region`.
pub trait Region {
    /// The world the region belongs to. `None` only for point sets built from
    /// entities, which skip the world check.
    fn world(&self) -> Option<&WorldRef>;

    fn contains_location(&self, location: &Location) -> bool;

    /// Checks a location, block or entity against the region.
    fn contains<L: Locatable>(&self, target: &L) -> bool
    where
        Self: Sized,
    {
        self.contains_location(&target.location())
    }

    /// True if every cell of `other` is also a cell of this region.
    ///
    /// A candidate with more cells is rejected without enumerating anything.
    /// Otherwise `other` is enumerated in full, so this costs as much as
    /// `other.blocks()`.
    fn contains_region(&self, other: &dyn Region) -> bool {
        if other.cell_count() > self.cell_count() {
            return false;
        }
        other
            .blocks()
            .iter()
            .all(|block| self.contains_location(&block.location()))
    }

    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()>;

    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()>;

    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()>;

    fn for_each_block(&self, f: &mut dyn FnMut(Block));

    /// Materializes every cell of the region into a new vector.
    fn blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(self.cell_count().min(PREALLOC_LIMIT));
        self.for_each_block(&mut |block| blocks.push(block));
        log::trace!("enumerated {} blocks", blocks.len());
        blocks
    }

    /// Exact number of cells `blocks()` yields, computed without enumerating.
    /// Saturates at `usize::MAX`.
    fn cell_count(&self) -> usize;

    /// Block count from the truncated extents of the region.
    ///
    /// An estimate, usually below [`Region::cell_count`] because the extents
    /// are `max - min` rather than inclusive cell counts.
    fn total_blocks(&self) -> i64;
}

impl<'a> dyn Region + 'a {
    /// Checks a location, block or entity against the region.
    pub fn contains<L: Locatable>(&self, target: &L) -> bool {
        self.contains_location(&target.location())
    }
}

// ============================================================================
// Delegate macro for RegionEnum
// ============================================================================

macro_rules! delegate_region {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            RegionEnum::Cuboid(r) => r.$method($($arg),*),
            RegionEnum::Column(r) => r.$method($($arg),*),
            RegionEnum::Plane(r) => r.$method($($arg),*),
            RegionEnum::PointSet(r) => r.$method($($arg),*),
        }
    };
}

/// Any region variant, for hosts that keep mixed regions in one collection.
#[derive(Debug, Clone)]
pub enum RegionEnum {
    Cuboid(CuboidRegion),
    Column(ColumnRegion),
    Plane(PlaneRegion),
    PointSet(PointSetRegion),
}

impl RegionEnum {
    pub fn kind(&self) -> &'static str {
        match self {
            RegionEnum::Cuboid(_) => "cuboid",
            RegionEnum::Column(_) => "column",
            RegionEnum::Plane(_) => "plane",
            RegionEnum::PointSet(_) => "point_set",
        }
    }
}

impl Region for RegionEnum {
    fn world(&self) -> Option<&WorldRef> {
        delegate_region!(self, world)
    }

    fn contains_location(&self, location: &Location) -> bool {
        delegate_region!(self, contains_location, location)
    }

    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()> {
        delegate_region!(self, expand, direction, amount)
    }

    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()> {
        delegate_region!(self, shrink, direction, amount)
    }

    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()> {
        delegate_region!(self, shift, direction, amount)
    }

    fn for_each_block(&self, f: &mut dyn FnMut(Block)) {
        delegate_region!(self, for_each_block, f)
    }

    fn cell_count(&self) -> usize {
        delegate_region!(self, cell_count)
    }

    fn total_blocks(&self) -> i64 {
        delegate_region!(self, total_blocks)
    }
}

impl From<CuboidRegion> for RegionEnum {
    fn from(r: CuboidRegion) -> Self {
        RegionEnum::Cuboid(r)
    }
}

impl From<ColumnRegion> for RegionEnum {
    fn from(r: ColumnRegion) -> Self {
        RegionEnum::Column(r)
    }
}

impl From<PlaneRegion> for RegionEnum {
    fn from(r: PlaneRegion) -> Self {
        RegionEnum::Plane(r)
    }
}

impl From<PointSetRegion> for RegionEnum {
    fn from(r: PointSetRegion) -> Self {
        RegionEnum::PointSet(r)
    }
}

// ============================================================================
// Shared resize helpers
// ============================================================================

pub(crate) fn check_same_world(kind: &str, a: &WorldRef, b: &WorldRef) -> Result<()> {
    if a != b {
        return Err(AreaError::WorldMismatch(format!(
            "{} on separate worlds",
            kind
        )));
    }
    Ok(())
}

/// Resize amounts are non-negative; the direction decides which way bounds move.
pub(crate) fn check_amount(amount: i32) -> Result<f64> {
    if amount < 0 {
        return Err(AreaError::InvalidValue(format!(
            "Amount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount as f64)
}

/// Logs a rejected resize and passes the error through.
pub(crate) fn rejected(
    region: &'static str,
    op: &'static str,
    direction: Direction,
    amount: i32,
) -> impl FnOnce(AreaError) -> AreaError {
    move |err| {
        log::debug!("{} {} {} by {} rejected: {}", region, op, direction, amount, err);
        err
    }
}

/// Moves every bound of `axis` that `direction` names outward by `delta`.
pub(crate) fn grow_axis(span: Span, axis: Axis, direction: Direction, delta: f64) -> Span {
    direction
        .components()
        .iter()
        .filter_map(|d| d.axis_side())
        .filter(|(a, _)| *a == axis)
        .fold(span, |s, (_, side)| match side {
            Side::Min => s.grow(delta, 0.0),
            Side::Max => s.grow(0.0, delta),
        })
}

/// Translates `span` if `direction` is a single direction along `axis`.
pub(crate) fn shift_axis(span: Span, axis: Axis, direction: Direction, amount: f64) -> Span {
    match direction.axis_side() {
        Some((a, Side::Max)) if a == axis => span.translate(amount),
        Some((a, Side::Min)) if a == axis => span.translate(-amount),
        _ => span,
    }
}

/// Bounds must stay inside block coordinates so enumeration and
/// `cell_count` agree with `contains`.
pub(crate) fn check_cell_range(spans: &[Span]) -> Result<()> {
    if spans.iter().any(|s| !s.within_cell_range()) {
        return Err(AreaError::InvalidValue(
            "Bounds outside the block coordinate range".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn check_not_inverted(spans: &[Span]) -> Result<()> {
    if spans.iter().any(|s| !s.is_valid()) {
        return Err(AreaError::InvalidDirection(
            "Cannot shrink past the opposite bound".to_string(),
        ));
    }
    Ok(())
}

/// Fails if `new` moved a vertical bound outward past the world's floor or ceiling.
pub(crate) fn check_height(old: Span, new: Span, world: &WorldRef) -> Result<()> {
    if new.min < old.min && new.min < world.min_height() as f64 {
        return Err(AreaError::InvalidDirection(
            "Minimum height reached".to_string(),
        ));
    }
    if new.max > old.max && new.max > world.max_height() as f64 {
        return Err(AreaError::InvalidDirection(
            "Maximum height reached".to_string(),
        ));
    }
    Ok(())
}

/// Columns and planes have no vertical bounds to move.
pub(crate) fn reject_vertical(op: &str, direction: Direction) -> Result<()> {
    if direction.is_vertical() {
        return Err(AreaError::InvalidDirection(format!(
            "Cannot {} in direction {}",
            op, direction
        )));
    }
    Ok(())
}

pub(crate) fn reject_composite_shift(direction: Direction) -> Result<()> {
    if direction.is_composite() {
        return Err(AreaError::InvalidDirection(format!(
            "Cannot shift in direction {}",
            direction
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    fn world() -> WorldRef {
        World::named("test").into_ref()
    }

    #[test]
    fn test_grow_axis_composites() {
        let span = Span::new(0.0, 10.0);
        assert_eq!(grow_axis(span, Axis::Y, Direction::All, 2.0), Span::new(-2.0, 12.0));
        assert_eq!(grow_axis(span, Axis::Y, Direction::Sides, 2.0), span);
        assert_eq!(grow_axis(span, Axis::X, Direction::East, 2.0), Span::new(0.0, 12.0));
        assert_eq!(grow_axis(span, Axis::Z, Direction::North, -3.0), Span::new(3.0, 10.0));
    }

    #[test]
    fn test_shift_axis() {
        let span = Span::new(0.0, 10.0);
        assert_eq!(shift_axis(span, Axis::X, Direction::West, 4.0), Span::new(-4.0, 6.0));
        assert_eq!(shift_axis(span, Axis::Z, Direction::West, 4.0), span);
    }

    #[test]
    fn test_check_height_only_outward() {
        let w = world();
        let old = Span::new(250.0, 300.0);
        // Already above the ceiling; shrinking is still allowed.
        assert!(check_height(old, Span::new(250.0, 290.0), &w).is_ok());
        assert!(check_height(old, Span::new(250.0, 301.0), &w).is_err());
        assert!(check_height(Span::new(0.0, 5.0), Span::new(-1.0, 5.0), &w).is_err());
    }

    #[test]
    fn test_check_cell_range() {
        assert!(check_cell_range(&[Span::new(-5.0, 5.0), Span::new(0.0, i32::MAX as f64)]).is_ok());
        assert!(matches!(
            check_cell_range(&[Span::new(0.0, 5.0), Span::new(0.0, 3e9)]),
            Err(AreaError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_dyn_region_contains() {
        let w = world();
        let region: Box<dyn Region> = Box::new(
            CuboidRegion::new(&w.block_at(0, 0, 0), &w.block_at(2, 2, 2)).unwrap(),
        );
        assert!(region.contains(&w.block_at(1, 1, 1)));
        assert!(!region.contains(&w.location(3.5, 1.0, 1.0)));
    }

    #[test]
    fn test_check_amount() {
        assert_eq!(check_amount(3).unwrap(), 3.0);
        assert!(matches!(check_amount(-1), Err(AreaError::InvalidValue(_))));
    }

    #[test]
    fn test_region_enum_delegates() {
        let w = world();
        let mut region: RegionEnum =
            CuboidRegion::new(&w.block_at(0, 0, 0), &w.block_at(2, 2, 2))
                .unwrap()
                .into();
        assert_eq!(region.kind(), "cuboid");
        assert_eq!(region.cell_count(), 27);
        region.expand(Direction::East, 1).unwrap();
        assert_eq!(region.blocks().len(), 36);
        assert!(region.contains(&w.block_at(3, 1, 1)));
        assert_eq!(region.world(), Some(&w));
    }

    #[test]
    fn test_mixed_regions_in_one_collection() {
        let w = world();
        let regions: Vec<RegionEnum> = vec![
            CuboidRegion::new(&w.block_at(0, 0, 0), &w.block_at(4, 4, 4))
                .unwrap()
                .into(),
            PlaneRegion::new(&w.block_at(0, 2, 0), &w.block_at(4, 2, 4))
                .unwrap()
                .into(),
            PointSetRegion::new(&[w.block_at(1, 1, 1)]).unwrap().into(),
        ];
        let probe = w.location(1.0, 2.0, 1.0);
        let hits = regions.iter().filter(|r| r.contains_location(&probe)).count();
        assert_eq!(hits, 2);
    }
}
