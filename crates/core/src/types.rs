use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Floor,
    Wall,
}

impl TileKind {
    pub fn is_solid(self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Monster,
}

/// Direction an actor is drawn facing. The discriminant is the column of the
/// matching frame in the actor's sprite row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Left = 0,
    Front = 1,
    Back = 2,
    Right = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Left, Facing::Front, Facing::Back, Facing::Right];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Keys the game reacts to, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Enter,
    Q,
    W,
    A,
    S,
    D,
}

/// Cell of a sprite sheet, `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteRef {
    pub row: usize,
    pub col: usize,
}

impl SpriteRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
