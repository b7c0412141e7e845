use crate::content::{Tint, actor_template};
use crate::types::{ActorKind, EntityId, Facing, Pos, SpriteRef};

/// Frames for one actor, indexed by `Facing::index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSet {
    pub tint: Tint,
    pub frames: Vec<SpriteRef>,
}

impl SpriteSet {
    pub fn for_kind(kind: ActorKind) -> Self {
        let template = actor_template(kind);
        let frames =
            (0..template.facings).map(|col| SpriteRef::new(template.sprite_row, col)).collect();
        Self { tint: template.tint, frames }
    }

    pub fn frame(&self, facing: Facing) -> Option<SpriteRef> {
        self.frames.get(facing.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Pos,
    pub facing: Facing,
    pub sprites: SpriteSet,
    pub health: i32,
    pub attack: i32,
}

impl Actor {
    /// Builds an actor with its template stats. `id` is filled in once the
    /// actor is inserted into a roster.
    pub fn spawn(kind: ActorKind, pos: Pos) -> Self {
        let template = actor_template(kind);
        Self {
            id: EntityId::default(),
            kind,
            pos,
            facing: Facing::Front,
            sprites: SpriteSet::for_kind(kind),
            health: template.health,
            attack: template.attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_collidable(&self) -> bool {
        true
    }

    /// Ignored when the sprite set has no frame for `facing`.
    pub fn turn(&mut self, facing: Facing) {
        if facing.index() < self.sprites.len() {
            self.facing = facing;
        }
    }

    /// Horizontal first, then vertical, so a diagonal step ends up facing
    /// up or down.
    pub fn face_towards(&mut self, dx: i32, dy: i32) {
        if dx < 0 {
            self.turn(Facing::Left);
        } else if dx > 0 {
            self.turn(Facing::Right);
        }
        if dy < 0 {
            self.turn(Facing::Back);
        } else if dy > 0 {
            self.turn(Facing::Front);
        }
    }

    pub fn sprite(&self) -> Option<SpriteRef> {
        self.sprites.frame(self.facing)
    }
}
