use game_core::{GameMap, Key, Pos, World, WorldConfig};
use proptest::prelude::*;

const ARENA: &str = "6 5\n\n\
0 0 0 0 0 0\n\
0 1 0 1 M 0\n\
0 0 P 0 0 0\n\
0 1 0 M 1 0\n\
M 0 0 0 0 0\n";

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![Just(Key::W), Just(Key::A), Just(Key::S), Just(Key::D)]
}

fn assert_occupancy_invariant(world: &World) {
    for actor in world.actors() {
        for y in 0..world.height() {
            for x in 0..world.width() {
                let pos = Pos::new(x as i32, y as i32);
                let tile = world.tile(pos).expect("in bounds");
                let listed = tile.occupants().iter().filter(|id| **id == actor.id).count();
                let expected = usize::from(pos == actor.pos);
                assert_eq!(listed, expected, "{:?} listed {listed} times at {pos:?}", actor.id);
            }
        }
    }
}

proptest! {
    #[test]
    fn actors_are_listed_exactly_on_their_own_tile(
        keys in prop::collection::vec(key_strategy(), 0..80),
    ) {
        let map = GameMap::parse(ARENA).expect("arena should parse");
        let mut world = World::new(&map, WorldConfig { viewport_cols: 3, viewport_rows: 3 });

        for key in keys {
            let before = world.player().map(|actor| actor.pos);
            world.handle_key(key);
            if let (Some(before), Some(player)) = (before, world.player()) {
                let step = (player.pos.x - before.x).abs() + (player.pos.y - before.y).abs();
                prop_assert!(step <= 1);
                prop_assert!(!world.tile(player.pos).expect("in bounds").is_solid());
            }
            assert_occupancy_invariant(&world);

            let view = world.viewport().expect("viewport");
            prop_assert!(view.x + view.cols <= world.width());
            prop_assert!(view.y + view.rows <= world.height());
        }
    }
}
