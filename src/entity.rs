use crate::location::{Locatable, Location};
use crate::world::WorldRef;

/// A located thing such as a player or mob.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: String,
    pub world: WorldRef,
    pub position: (f64, f64, f64),
}

impl Entity {
    pub fn new(id: String, world: WorldRef, position: (f64, f64, f64)) -> Self {
        Entity {
            id,
            world,
            position,
        }
    }

    pub fn teleport(&mut self, location: &Location) {
        self.world = location.world.clone();
        self.position = location.coords();
    }
}

impl Locatable for Entity {
    const KIND: &'static str = "Entities";

    fn location(&self) -> Location {
        Location::new(
            self.world.clone(),
            self.position.0,
            self.position.1,
            self.position.2,
        )
    }

    fn world(&self) -> &WorldRef {
        &self.world
    }
}
