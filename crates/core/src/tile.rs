use slotmap::SlotMap;

use crate::actor::Actor;
use crate::content::tile_sprite;
use crate::types::{EntityId, SpriteRef, TileKind};

/// One grid cell. Occupants are keys into the world roster; the tile never
/// owns the actors it lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub sprite: SpriteRef,
    occupants: Vec<EntityId>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self { kind, sprite: tile_sprite(kind), occupants: Vec::new() }
    }

    pub fn is_solid(&self) -> bool {
        self.kind.is_solid()
    }

    /// Occupants in stacking order.
    pub fn occupants(&self) -> &[EntityId] {
        &self.occupants
    }

    pub fn add_occupant(&mut self, id: EntityId) {
        self.occupants.push(id);
    }

    /// Returns `false` when `id` was not listed.
    pub fn remove_occupant(&mut self, id: EntityId) -> bool {
        match self.occupants.iter().position(|occupant| *occupant == id) {
            Some(index) => {
                self.occupants.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_collidable(&self, actors: &SlotMap<EntityId, Actor>) -> bool {
        self.is_solid()
            || self
                .occupants
                .iter()
                .any(|id| actors.get(*id).is_some_and(Actor::is_collidable))
    }
}
