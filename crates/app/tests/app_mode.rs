use game_core::{Game, GameMap, Screen, WorldConfig};
use macroquad::prelude::KeyCode;
use tilecrawl::app_loop::{AppMode, AppState};

const ARENA: &str = "4 3\n\n1 1 1 1\n1 P 0 M\n1 1 1 1\n";

fn new_game() -> Game {
    let map = GameMap::parse(ARENA).expect("arena should parse");
    Game::new(map, WorldConfig::default())
}

#[test]
fn keys_in_one_frame_are_dispatched_in_order() {
    let mut game = new_game();
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::KpEnter, KeyCode::D], &[], 0.016);

    assert_eq!(app.mode, AppMode::Running);
    let Screen::World(world) = game.screen() else {
        panic!("expected world screen after New Game");
    };
    assert_eq!(world.player().map(|player| player.pos.x), Some(2));
}

#[test]
fn unbound_keys_leave_the_menu_untouched() {
    let mut game = new_game();
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Space, KeyCode::Right, KeyCode::Escape], &[], 0.016);

    let Screen::MainMenu(menu) = game.screen() else {
        panic!("expected main menu");
    };
    assert_eq!(menu.selected(), 0);
    assert_eq!(app.mode, AppMode::Running);
}

#[test]
fn quitting_stops_the_loop_and_drops_later_keys() {
    let mut game = new_game();
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Enter], &[], 0.016);
    app.tick(&mut game, &[KeyCode::Q, KeyCode::D], &[], 0.016);
    assert_eq!(app.mode, AppMode::Stopped);

    let Screen::World(world) = game.screen() else {
        panic!("quit should not switch screens");
    };
    assert_eq!(world.player().map(|player| player.pos.x), Some(1));

    app.tick(&mut game, &[KeyCode::Enter], &[], 0.016);
    assert_eq!(app.mode, AppMode::Stopped);
}

#[test]
fn exit_menu_item_stops_the_loop() {
    let mut game = new_game();
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Up, KeyCode::Enter], &[], 0.016);

    assert_eq!(app.mode, AppMode::Stopped);
    assert!(!game.is_running());
}

#[test]
fn held_movement_key_repeats_after_the_delay() {
    let map = GameMap::parse("8 1\n\nP 0 0 0 0 0 0 M\n").expect("corridor should parse");
    let mut game = Game::new(map, WorldConfig::default());
    let mut app = AppState::new();
    app.tick(&mut game, &[KeyCode::Enter], &[KeyCode::Enter], 0.016);

    let player_x = |game: &Game| match game.screen() {
        Screen::World(world) => world.player().map(|player| player.pos.x),
        _ => None,
    };

    app.tick(&mut game, &[KeyCode::D], &[KeyCode::D], 0.016);
    assert_eq!(player_x(&game), Some(1));

    app.tick(&mut game, &[], &[KeyCode::D], 0.25);
    assert_eq!(player_x(&game), Some(1), "no repeat before the delay");

    app.tick(&mut game, &[], &[KeyCode::D], 0.25);
    assert_eq!(player_x(&game), Some(2));

    app.tick(&mut game, &[], &[KeyCode::D], 0.0625);
    assert_eq!(player_x(&game), Some(4));

    app.tick(&mut game, &[], &[], 0.016);
    app.tick(&mut game, &[], &[KeyCode::D], 1.0);
    assert_eq!(player_x(&game), Some(4), "released keys stop repeating");
}
