use super::{
    check_amount, check_cell_range, check_height, check_not_inverted, check_same_world, grow_axis,
    reject_composite_shift, rejected, shift_axis, Region,
};
use crate::bounds::{min_max, Span};
use crate::direction::{Axis, Direction};
use crate::error::Result;
use crate::location::{Block, Locatable, Location};
use crate::world::WorldRef;

/// A box bounded on all three axes.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidRegion {
    x: Span,
    y: Span,
    z: Span,
    world: WorldRef,
}

impl CuboidRegion {
    /// Creates a cuboid spanning two corners, in any order.
    pub fn new<L: Locatable>(a: &L, b: &L) -> Result<Self> {
        check_same_world(L::KIND, a.world(), b.world())?;
        let (a, b) = (a.location(), b.location());
        let (min, max) = min_max(a.coords(), b.coords());
        let (x, y, z) = (
            Span::new(min.0, max.0),
            Span::new(min.1, max.1),
            Span::new(min.2, max.2),
        );
        check_cell_range(&[x, y, z])?;
        Ok(Self { x, y, z, world: a.world })
    }

    pub fn min(&self) -> (f64, f64, f64) {
        (self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> (f64, f64, f64) {
        (self.x.max, self.y.max, self.z.max)
    }

    /// Extent along x.
    pub fn length(&self) -> f64 {
        self.x.length()
    }

    /// Extent along z.
    pub fn width(&self) -> f64 {
        self.z.length()
    }

    pub fn height(&self) -> f64 {
        self.y.length()
    }

    pub fn world_ref(&self) -> &WorldRef {
        &self.world
    }

    fn resize(&mut self, op: &'static str, direction: Direction, amount: i32, sign: f64) -> Result<()> {
        let (x, y, z) = check_amount(amount)
            .and_then(|a| {
                let delta = a * sign;
                let x = grow_axis(self.x, Axis::X, direction, delta);
                let y = grow_axis(self.y, Axis::Y, direction, delta);
                let z = grow_axis(self.z, Axis::Z, direction, delta);
                check_not_inverted(&[x, y, z])?;
                check_cell_range(&[x, y, z])?;
                check_height(self.y, y, &self.world)?;
                Ok((x, y, z))
            })
            .map_err(rejected("cuboid", op, direction, amount))?;

        self.x = x;
        self.y = y;
        self.z = z;
        log::trace!("cuboid {} {} by {}: {:?} -> {:?}", op, direction, amount, self.min(), self.max());
        Ok(())
    }
}

impl Region for CuboidRegion {
    fn world(&self) -> Option<&WorldRef> {
        Some(&self.world)
    }

    fn contains_location(&self, location: &Location) -> bool {
        location.world == self.world
            && self.x.contains(location.x)
            && self.y.contains(location.y)
            && self.z.contains(location.z)
    }

    /// `All` grows every axis both ways, `Sides` only x and z. Vertical growth
    /// stops at the world's floor and ceiling.
    fn expand(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("expand", direction, amount, 1.0)
    }

    /// Fails instead of letting any axis invert.
    fn shrink(&mut self, direction: Direction, amount: i32) -> Result<()> {
        self.resize("shrink", direction, amount, -1.0)
    }

    fn shift(&mut self, direction: Direction, amount: i32) -> Result<()> {
        let (x, y, z) = check_amount(amount)
            .and_then(|a| {
                reject_composite_shift(direction)?;
                let x = shift_axis(self.x, Axis::X, direction, a);
                let y = shift_axis(self.y, Axis::Y, direction, a);
                let z = shift_axis(self.z, Axis::Z, direction, a);
                check_cell_range(&[x, y, z])?;
                check_height(self.y, y, &self.world)?;
                Ok((x, y, z))
            })
            .map_err(rejected("cuboid", "shift", direction, amount))?;

        self.x = x;
        self.y = y;
        self.z = z;
        Ok(())
    }

    fn for_each_block(&self, f: &mut dyn FnMut(Block)) {
        for x in self.x.cells() {
            for y in self.y.cells() {
                for z in self.z.cells() {
                    f(self.world.block_at(x, y, z));
                }
            }
        }
    }

    fn cell_count(&self) -> usize {
        self.x
            .cell_count()
            .saturating_mul(self.y.cell_count())
            .saturating_mul(self.z.cell_count())
    }

    fn total_blocks(&self) -> i64 {
        (self.length() as i64)
            .saturating_mul(self.width() as i64)
            .saturating_mul(self.height() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AreaError;
    use crate::world::{World, WorldSettings};

    fn world() -> WorldRef {
        World::named("test").into_ref()
    }

    fn cuboid(w: &WorldRef, a: (i32, i32, i32), b: (i32, i32, i32)) -> CuboidRegion {
        CuboidRegion::new(&w.block_at(a.0, a.1, a.2), &w.block_at(b.0, b.1, b.2)).unwrap()
    }

    #[test]
    fn test_corners_are_normalized() {
        let w = world();
        let region = cuboid(&w, (20, 5, 10), (10, 15, 0));
        assert_eq!(region.min(), (10.0, 5.0, 0.0));
        assert_eq!(region.max(), (20.0, 15.0, 10.0));
        assert_eq!(region.length(), 10.0);
        assert_eq!(region.width(), 10.0);
        assert_eq!(region.height(), 10.0);
    }

    #[test]
    fn test_separate_worlds() {
        let a = World::named("test").into_ref();
        let b = World::named("nether").into_ref();
        let err = CuboidRegion::new(&a.block_at(0, 0, 0), &b.block_at(1, 1, 1)).unwrap_err();
        match err {
            AreaError::WorldMismatch(msg) => assert_eq!(msg, "Blocks on separate worlds"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let w = world();
        let region = cuboid(&w, (10, 10, 10), (20, 20, 20));
        assert!(region.contains(&w.location(15.0, 15.0, 15.0)));
        assert!(region.contains(&w.location(10.0, 20.0, 10.0)));
        assert!(!region.contains(&w.location(25.0, 15.0, 15.0)));
        assert!(!region.contains(&w.location(15.0, 15.0, 21.0)));
        assert!(!region.contains(&World::named("other").into_ref().location(15.0, 15.0, 15.0)));
    }

    #[test]
    fn test_expand_each_direction() {
        let w = world();
        let mut region = cuboid(&w, (0, 10, 0), (10, 20, 10));
        region.expand(Direction::Sides, 2).unwrap();
        assert_eq!(region.min(), (-2.0, 10.0, -2.0));
        assert_eq!(region.max(), (12.0, 20.0, 12.0));

        region.expand(Direction::North, 1).unwrap();
        region.expand(Direction::South, 1).unwrap();
        region.expand(Direction::West, 1).unwrap();
        region.expand(Direction::East, 1).unwrap();
        region.expand(Direction::Up, 1).unwrap();
        region.expand(Direction::Down, 1).unwrap();
        assert_eq!(region.min(), (-3.0, 9.0, -3.0));
        assert_eq!(region.max(), (13.0, 21.0, 13.0));
    }

    #[test]
    fn test_expand_height_limits() {
        let w = world();
        let mut region = cuboid(&w, (0, 2, 0), (4, 250, 4));
        let err = region.expand(Direction::Up, 7).unwrap_err();
        assert!(matches!(err, AreaError::InvalidDirection(ref m) if m == "Maximum height reached"));
        let err = region.expand(Direction::Down, 3).unwrap_err();
        assert!(matches!(err, AreaError::InvalidDirection(ref m) if m == "Minimum height reached"));
        assert!(region.expand(Direction::All, 3).is_err());
        // Nothing was committed by the failed calls.
        assert_eq!(region.min(), (0.0, 2.0, 0.0));
        assert_eq!(region.max(), (4.0, 250.0, 4.0));

        region.expand(Direction::Up, 6).unwrap();
        assert_eq!(region.max().1, 256.0);
    }

    #[test]
    fn test_expand_respects_custom_floor() {
        let w = World::new(WorldSettings {
            name: "deep".into(),
            min_height: -64,
            max_height: 320,
        })
        .into_ref();
        let mut region = cuboid(&w, (0, 0, 0), (1, 1, 1));
        region.expand(Direction::Down, 64).unwrap();
        assert!(region.expand(Direction::Down, 1).is_err());
    }

    #[test]
    fn test_shrink_every_axis_checks_inversion() {
        let w = world();
        let mut region = cuboid(&w, (0, 0, 0), (4, 4, 4));
        for direction in Direction::ALL_VALUES {
            let mut copy = region.clone();
            let err = copy.shrink(direction, 5).unwrap_err();
            assert!(matches!(err, AreaError::InvalidDirection(_)), "{direction}");
            assert_eq!(copy, region);
        }
        region.shrink(Direction::All, 2).unwrap();
        assert_eq!(region.min(), (2.0, 2.0, 2.0));
        assert_eq!(region.max(), (2.0, 2.0, 2.0));
        assert_eq!(region.cell_count(), 1);
    }

    #[test]
    fn test_negative_amount() {
        let w = world();
        let mut region = cuboid(&w, (0, 0, 0), (4, 4, 4));
        assert!(matches!(region.expand(Direction::Up, -1), Err(AreaError::InvalidValue(_))));
        assert!(matches!(region.shift(Direction::Up, -1), Err(AreaError::InvalidValue(_))));
    }

    #[test]
    fn test_shift_translates() {
        let w = world();
        let mut region = cuboid(&w, (0, 0, 0), (4, 4, 4));
        region.shift(Direction::East, 10).unwrap();
        region.shift(Direction::North, 3).unwrap();
        region.shift(Direction::Up, 5).unwrap();
        assert_eq!(region.min(), (10.0, 5.0, -3.0));
        assert_eq!(region.max(), (14.0, 9.0, 1.0));

        assert!(region.shift(Direction::Down, 6).is_err());
        assert!(region.shift(Direction::Up, 248).is_err());
        assert!(region.shift(Direction::All, 1).is_err());
        assert!(region.shift(Direction::Sides, 1).is_err());
        assert_eq!(region.min(), (10.0, 5.0, -3.0));
    }

    #[test]
    fn test_bounds_stay_in_block_range() {
        let w = world();
        let mut region = cuboid(&w, (0, 0, 0), (4, 4, 4));
        region.expand(Direction::East, i32::MAX - 4).unwrap();
        assert_eq!(region.max().0, i32::MAX as f64);

        let err = region.expand(Direction::East, 10).unwrap_err();
        assert!(matches!(err, AreaError::InvalidValue(_)));
        assert!(matches!(region.shift(Direction::East, i32::MAX), Err(AreaError::InvalidValue(_))));
        assert_eq!(region.max().0, i32::MAX as f64);
        assert_eq!(region.cell_count(), (i32::MAX as usize + 1) * 25);

        let far = w.location(3e9, 0.0, 0.0);
        assert!(!region.contains(&far));
        assert!(matches!(
            CuboidRegion::new(&w.location(0.0, 0.0, 0.0), &far),
            Err(AreaError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_huge_cell_count_saturates() {
        let w = world();
        let mut big = cuboid(&w, (0, 0, 0), (4, 255, 4));
        big.expand(Direction::Sides, 2_000_000_000).unwrap();
        assert_eq!(big.cell_count(), usize::MAX);
        assert_eq!(big.total_blocks(), i64::MAX);

        let small = cuboid(&w, (0, 10, 0), (2, 12, 2));
        assert!(big.contains_region(&small));
        assert!(!small.contains_region(&big));
    }

    #[test]
    fn test_blocks_and_counts() {
        let w = world();
        let region = cuboid(&w, (0, 0, 0), (2, 3, 4));
        let blocks = region.blocks();
        assert_eq!(blocks.len(), 3 * 4 * 5);
        assert_eq!(region.cell_count(), blocks.len());
        assert!(blocks.iter().all(|b| region.contains(b)));
        assert_eq!(region.total_blocks(), 2 * 3 * 4);
    }

    #[test]
    fn test_fractional_bounds_enumerate_inner_cells() {
        let w = world();
        let region = CuboidRegion::new(&w.location(0.5, 0.5, 0.5), &w.location(2.5, 1.5, 1.0)).unwrap();
        let positions: Vec<_> = region.blocks().iter().map(Block::position).collect();
        assert_eq!(positions, vec![(1, 1, 1), (2, 1, 1)]);
        assert_eq!(region.total_blocks(), 0);
    }
}
