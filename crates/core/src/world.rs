//! The gameplay screen: tile grid, actor roster, camera and HUD.

use slotmap::SlotMap;

use crate::actor::Actor;
use crate::camera::{Viewport, center_on};
use crate::content::actor_template;
use crate::map::GameMap;
use crate::screen::ScreenAction;
use crate::tile::Tile;
use crate::types::{ActorKind, EntityId, Key, Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    pub viewport_cols: usize,
    pub viewport_rows: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { viewport_cols: 9, viewport_rows: 12 }
    }
}

/// Player stat a HUD item tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudStat {
    Health,
    Attack,
}

impl HudStat {
    pub fn label(self) -> &'static str {
        match self {
            HudStat::Health => "Health",
            HudStat::Attack => "Attack",
        }
    }

    fn read(self, actor: &Actor) -> i32 {
        match self {
            HudStat::Health => actor.health,
            HudStat::Attack => actor.attack,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudItem {
    pub stat: HudStat,
    pub value: i32,
}

impl HudItem {
    pub fn new(stat: HudStat) -> Self {
        Self { stat, value: 0 }
    }

    pub fn line(&self) -> String {
        format!("{}: {}", self.stat.label(), self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    Moved { actor: EntityId, to: Pos },
    Attacked { attacker: EntityId, defender: EntityId, dealt: i32, taken: i32 },
    Died { actor: EntityId, kind: ActorKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    OutOfBounds,
    /// Target is a solid tile.
    Blocked,
    /// Target held collidable occupants and was bumped instead of entered.
    Collided,
    /// The actor is no longer in the roster.
    Missing,
}

/// Screen-space slot of a visible grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleCell {
    pub col: usize,
    pub row: usize,
    pub pos: Pos,
}

pub struct World {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    actors: SlotMap<EntityId, Actor>,
    player_id: EntityId,
    config: WorldConfig,
    viewport: Option<Viewport>,
    hud: Vec<HudItem>,
    events: Vec<WorldEvent>,
}

impl World {
    pub fn new(map: &GameMap, config: WorldConfig) -> Self {
        let (width, height) = (map.width(), map.height());
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let pos = Pos::new(x as i32, y as i32);
                tiles.push(Tile::new(map.tile_kind_at(pos).unwrap_or(TileKind::Wall)));
            }
        }

        let mut world = Self {
            width,
            height,
            tiles,
            actors: SlotMap::with_key(),
            player_id: EntityId::default(),
            config,
            viewport: None,
            hud: vec![HudItem::new(HudStat::Health), HudItem::new(HudStat::Attack)],
            events: Vec::new(),
        };
        world.player_id = world.spawn(ActorKind::Player, map.player_spawn());
        for &pos in map.monster_spawns() {
            world.spawn(ActorKind::Monster, pos);
        }
        world.center();
        world.refresh_hud();
        log::debug!(
            "World built: {}x{}, {} monsters",
            width,
            height,
            map.monster_spawns().len()
        );
        world
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|index| &self.tiles[index])
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn monster_count(&self) -> usize {
        self.actors.values().filter(|actor| actor.kind == ActorKind::Monster).count()
    }

    pub fn player_id(&self) -> EntityId {
        self.player_id
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actors.get(self.player_id)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn hud(&self) -> &[HudItem] {
        &self.hud
    }

    pub fn hud_lines(&self) -> Vec<String> {
        self.hud.iter().map(HudItem::line).collect()
    }

    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    pub fn visible_cells(&self) -> Vec<VisibleCell> {
        let Some(view) = self.viewport else {
            return Vec::new();
        };
        view.positions()
            .map(|pos| VisibleCell {
                col: pos.x as usize - view.x,
                row: pos.y as usize - view.y,
                pos,
            })
            .collect()
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        let player = self.player_id;
        match key {
            Key::W => {
                self.move_by(player, 0, -1);
            }
            Key::A => {
                self.move_by(player, -1, 0);
            }
            Key::S => {
                self.move_by(player, 0, 1);
            }
            Key::D => {
                self.move_by(player, 1, 0);
            }
            Key::Q => return ScreenAction::Quit,
            Key::Up | Key::Down | Key::Enter => {}
        }
        ScreenAction::None
    }

    pub fn update(&mut self, _dt: f32) -> ScreenAction {
        if self.player().is_none() {
            return ScreenAction::MainMenu;
        }
        ScreenAction::None
    }

    pub fn move_by(&mut self, id: EntityId, dx: i32, dy: i32) -> MoveOutcome {
        let Some(actor) = self.actors.get(id) else {
            return MoveOutcome::Missing;
        };
        let target = actor.pos.offset(dx, dy);
        self.move_to(id, target)
    }

    /// Checked move: turns the actor towards `target`, then either steps onto
    /// it or bumps whatever stands there.
    pub fn move_to(&mut self, id: EntityId, target: Pos) -> MoveOutcome {
        let Some(actor) = self.actors.get_mut(id) else {
            return MoveOutcome::Missing;
        };
        actor.face_towards(target.x - actor.pos.x, target.y - actor.pos.y);
        let recenters_camera = actor_template(actor.kind).recenters_camera;

        let Some(index) = self.index(target) else {
            return MoveOutcome::OutOfBounds;
        };
        let tile = &self.tiles[index];
        if tile.is_solid() {
            return MoveOutcome::Blocked;
        }
        if tile.is_collidable(&self.actors) {
            self.collide_tile(target, id);
            return MoveOutcome::Collided;
        }

        self.relocate(id, target);
        if recenters_camera {
            self.center();
        }
        MoveOutcome::Moved
    }

    /// Unchecked move: transfers the actor between occupant lists and updates
    /// its position.
    pub fn relocate(&mut self, id: EntityId, target: Pos) {
        let Some(target_index) = self.index(target) else {
            return;
        };
        let Some(actor) = self.actors.get_mut(id) else {
            return;
        };
        let from = actor.pos;
        actor.pos = target;
        if let Some(from_index) = self.index(from) {
            let removed = self.tiles[from_index].remove_occupant(id);
            debug_assert!(removed, "actor {id:?} missing from its tile at {from:?}");
        }
        self.tiles[target_index].add_occupant(id);
        self.events.push(WorldEvent::Moved { actor: id, to: target });
    }

    /// Dispatches a bump from `collider` to every occupant of the tile at
    /// `pos`, in stacking order. Solid tiles ignore it.
    pub fn collide_tile(&mut self, pos: Pos, collider: EntityId) {
        let Some(tile) = self.tile(pos) else {
            return;
        };
        if tile.is_solid() {
            return;
        }
        let occupants = tile.occupants().to_vec();
        for occupant in occupants {
            self.collide(occupant, collider);
        }
    }

    /// Melee exchange between `attacker` and `defender`. Actors whose health
    /// drops to zero leave both their tile and the roster.
    pub fn collide(&mut self, defender: EntityId, attacker: EntityId) {
        if defender == attacker {
            return;
        }
        let Some(defender_kind) = self.actors.get(defender).map(|actor| actor.kind) else {
            return;
        };
        let Some(counter_damage) = actor_template(defender_kind).counter_damage else {
            return;
        };
        let Some(attacker_actor) = self.actors.get_mut(attacker) else {
            return;
        };
        let dealt = attacker_actor.attack;
        attacker_actor.health -= counter_damage;
        if let Some(defender_actor) = self.actors.get_mut(defender) {
            defender_actor.health -= dealt;
        }

        self.events.push(WorldEvent::Attacked {
            attacker,
            defender,
            dealt,
            taken: counter_damage,
        });
        log::info!(
            "{:?} hit {:?} for {}, took {} back",
            attacker,
            defender_kind,
            dealt,
            counter_damage
        );
        self.refresh_hud();

        for id in [defender, attacker] {
            if self.actors.get(id).is_some_and(|actor| !actor.is_alive()) {
                self.remove_actor(id);
            }
        }
    }

    pub fn remove_actor(&mut self, id: EntityId) -> Option<Actor> {
        let actor = self.actors.remove(id)?;
        if let Some(index) = self.index(actor.pos) {
            self.tiles[index].remove_occupant(id);
        }
        self.events.push(WorldEvent::Died { actor: id, kind: actor.kind });
        log::info!("{:?} at {:?} died", actor.kind, actor.pos);
        Some(actor)
    }

    /// Re-centres the viewport on the player. Keeps the current viewport if
    /// the player is gone.
    pub fn center(&mut self) {
        let Some(player) = self.player() else {
            return;
        };
        self.viewport = Some(center_on(
            player.pos,
            self.width,
            self.height,
            self.config.viewport_cols,
            self.config.viewport_rows,
        ));
    }

    pub fn refresh_hud(&mut self) {
        let Some(player) = self.actors.get(self.player_id) else {
            return;
        };
        for item in &mut self.hud {
            item.value = item.stat.read(player);
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as usize) * self.width + (pos.x as usize))
        } else {
            None
        }
    }

    fn spawn(&mut self, kind: ActorKind, pos: Pos) -> EntityId {
        let id = self.actors.insert(Actor::spawn(kind, pos));
        self.actors[id].id = id;
        if let Some(index) = self.index(pos) {
            self.tiles[index].add_occupant(id);
        }
        id
    }
}
