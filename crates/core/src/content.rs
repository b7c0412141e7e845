use crate::types::{ActorKind, SpriteRef, TileKind};

/// Damage a monster deals back to whoever bumps into it, regardless of the
/// attacker's own attack value.
pub const COUNTER_DAMAGE: i32 = 10;

pub const CREDITS: &[&str] = &["Programming: the tilecrawl contributors", "Built with macroquad"];

/// Palette swap applied to an actor's frames once, when the sheet is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    Dark,
}

impl Tint {
    /// Remaps one RGBA pixel. Fully transparent pixels are left alone.
    pub fn apply(self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        if a == 0 {
            return [r, g, b, a];
        }
        match self {
            Tint::Red => {
                let luma = ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000)
                    as u8;
                [luma.max(r), g / 4, b / 4, a]
            }
            Tint::Dark => [r / 2, g / 2, b / 2, a],
        }
    }
}

pub struct ActorTemplate {
    pub health: i32,
    pub attack: i32,
    /// Damage dealt back to a collider. `None` means bumping into this actor
    /// does nothing.
    pub counter_damage: Option<i32>,
    pub recenters_camera: bool,
    pub sprite_row: usize,
    pub facings: usize,
    pub tint: Tint,
}

pub fn actor_template(kind: ActorKind) -> ActorTemplate {
    match kind {
        ActorKind::Player => ActorTemplate {
            health: 100,
            attack: 10,
            counter_damage: None,
            recenters_camera: true,
            sprite_row: 0,
            facings: 4,
            tint: Tint::Red,
        },
        ActorKind::Monster => ActorTemplate {
            health: 30,
            attack: 5,
            counter_damage: Some(COUNTER_DAMAGE),
            recenters_camera: false,
            sprite_row: 0,
            facings: 4,
            tint: Tint::Dark,
        },
    }
}

pub fn tile_sprite(kind: TileKind) -> SpriteRef {
    match kind {
        TileKind::Floor => SpriteRef::new(0, 0),
        TileKind::Wall => SpriteRef::new(0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_preserve_alpha_and_skip_transparent_pixels() {
        assert_eq!(Tint::Red.apply([10, 20, 30, 0]), [10, 20, 30, 0]);
        assert_eq!(Tint::Dark.apply([200, 100, 50, 255]), [100, 50, 25, 255]);
    }

    #[test]
    fn red_tint_pushes_white_towards_red() {
        let [r, g, b, a] = Tint::Red.apply([255, 255, 255, 128]);
        assert_eq!((r, g, b, a), (255, 63, 63, 128));
    }

    #[test]
    fn only_monsters_hit_back() {
        assert_eq!(actor_template(ActorKind::Monster).counter_damage, Some(COUNTER_DAMAGE));
        assert_eq!(actor_template(ActorKind::Player).counter_damage, None);
    }
}
