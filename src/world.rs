use crate::error::Result;
use crate::location::{Block, Location};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

/// The grid a region lives on.
///
/// Implemented by the host for its own world type; [`World`] is a plain
/// in-memory implementation driven by [`WorldSettings`].
pub trait Grid: Send + Sync {
    /// Identity of the world. Two grids with the same name are the same world.
    fn name(&self) -> &str;

    /// Highest y level a region may reach.
    fn max_height(&self) -> i32;

    /// Lowest y level a region may reach.
    fn min_height(&self) -> i32 {
        0
    }
}

/// Settings for a [`World`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    #[serde(default = "default_world_name")]
    pub name: SmolStr,
    #[serde(default)]
    pub min_height: i32,
    #[serde(default = "default_max_height")]
    pub max_height: i32,
}

fn default_world_name() -> SmolStr {
    SmolStr::new("world")
}
fn default_max_height() -> i32 {
    256
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            name: default_world_name(),
            min_height: 0,
            max_height: default_max_height(),
        }
    }
}

impl WorldSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone)]
pub struct World {
    settings: WorldSettings,
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        World { settings }
    }

    pub fn named(name: impl Into<SmolStr>) -> Self {
        World::new(WorldSettings {
            name: name.into(),
            ..WorldSettings::default()
        })
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn into_ref(self) -> WorldRef {
        WorldRef::new(self)
    }
}

impl Grid for World {
    fn name(&self) -> &str {
        self.settings.name.as_str()
    }

    fn max_height(&self) -> i32 {
        self.settings.max_height
    }

    fn min_height(&self) -> i32 {
        self.settings.min_height
    }
}

/// Shared handle to a [`Grid`]. Handles compare equal when the world names match.
#[derive(Clone)]
pub struct WorldRef(Arc<dyn Grid>);

impl WorldRef {
    pub fn new<G: Grid + 'static>(grid: G) -> Self {
        WorldRef(Arc::new(grid))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn max_height(&self) -> i32 {
        self.0.max_height()
    }

    pub fn min_height(&self) -> i32 {
        self.0.min_height()
    }

    /// The cell at the given grid coordinates.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Block {
        Block::new(self.clone(), x, y, z)
    }

    pub fn location(&self, x: f64, y: f64, z: f64) -> Location {
        Location::new(self.clone(), x, y, z)
    }
}

impl PartialEq for WorldRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.name() == other.name()
    }
}

impl Eq for WorldRef {}

impl fmt::Debug for WorldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldRef")
            .field("name", &self.name())
            .field("min_height", &self.min_height())
            .field("max_height", &self.max_height())
            .finish()
    }
}

impl fmt::Display for WorldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<World> for WorldRef {
    fn from(world: World) -> Self {
        WorldRef::new(world)
    }
}
