//! Regions over a voxel world grid.
//!
//! A region is built from two corners (or a list of points) on one world and
//! answers containment queries for locations, blocks and entities:
//!
//! - [`CuboidRegion`] - bounded on x, y and z
//! - [`ColumnRegion`] - bounded on x and z, every y level inside
//! - [`PlaneRegion`] - bounded on x and z at a single y level
//! - [`PointSetRegion`] - an explicit list of points
//!
//! Bounded regions can be expanded, shrunk and shifted by [`Direction`].
//!
//! ```
//! use gridarea::{CuboidRegion, Direction, Region, World};
//!
//! let world = World::named("test").into_ref();
//! let mut region = CuboidRegion::new(&world.block_at(10, 10, 10), &world.block_at(20, 20, 20))?;
//! assert!(region.contains(&world.block_at(15, 15, 15)));
//! assert!(!region.contains(&world.block_at(25, 15, 15)));
//!
//! region.expand(Direction::East, 5)?;
//! assert!(region.contains(&world.block_at(25, 15, 15)));
//! # Ok::<(), gridarea::AreaError>(())
//! ```

pub mod bounds;
pub mod direction;
pub mod entity;
pub mod error;
pub mod location;
pub mod region;
pub mod world;

pub use bounds::{min_max, Span};
pub use direction::Direction;
pub use entity::Entity;
pub use error::{AreaError, Result};
pub use location::{Block, Locatable, Location};
pub use region::{ColumnRegion, CuboidRegion, PlaneRegion, PointSetRegion, Region, RegionEnum};
pub use world::{Grid, World, WorldRef, WorldSettings};
