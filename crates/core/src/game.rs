use crate::map::GameMap;
use crate::menu::Menu;
use crate::screen::{Screen, ScreenAction};
use crate::types::Key;
use crate::world::{World, WorldConfig};

/// Owns the active screen and switches it wholesale on transitions. The map
/// is parsed once up front; each "New Game" builds a fresh world from it.
pub struct Game {
    map: GameMap,
    config: WorldConfig,
    screen: Screen,
    running: bool,
}

impl Game {
    pub fn new(map: GameMap, config: WorldConfig) -> Self {
        Self { map, config, screen: Screen::MainMenu(Menu::main_menu()), running: true }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_key(&mut self, key: Key) {
        if !self.running {
            return;
        }
        let action = self.screen.handle_key(key);
        self.apply(action);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        let action = self.screen.update(dt);
        self.apply(action);
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::NewGame => {
                self.switch(Screen::World(Box::new(World::new(&self.map, self.config))));
            }
            ScreenAction::MainMenu => self.switch(Screen::MainMenu(Menu::main_menu())),
            ScreenAction::Credits => self.switch(Screen::Credits(Menu::credits())),
            ScreenAction::Quit => {
                log::info!("Quit requested from {}", self.screen.name());
                self.running = false;
            }
        }
    }

    fn switch(&mut self, next: Screen) {
        log::debug!("Screen transition: {} -> {}", self.screen.name(), next.name());
        self.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{EXAMPLE_MAP, parse};

    fn new_game() -> Game {
        Game::new(parse(EXAMPLE_MAP), WorldConfig::default())
    }

    #[test]
    fn starts_on_main_menu() {
        let game = new_game();
        assert!(matches!(game.screen(), Screen::MainMenu(_)));
        assert!(game.is_running());
    }

    #[test]
    fn q_in_world_stops_the_game() {
        let mut game = new_game();
        game.handle_key(Key::Enter);
        game.handle_key(Key::D);
        let Screen::World(world) = game.screen() else {
            panic!("expected world screen");
        };
        assert_eq!(world.player().map(|player| player.pos.x), Some(1));

        game.handle_key(Key::Q);
        assert!(!game.is_running());
        game.handle_key(Key::Q);
        assert!(matches!(game.screen(), Screen::World(_)));
    }

    #[test]
    fn credits_round_trip_to_main_menu() {
        let mut game = new_game();
        game.handle_key(Key::Down);
        game.handle_key(Key::Enter);
        assert!(matches!(game.screen(), Screen::Credits(_)));

        game.handle_key(Key::Q);
        let Screen::MainMenu(menu) = game.screen() else {
            panic!("expected main menu");
        };
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn exit_item_stops_the_game() {
        let mut game = new_game();
        game.handle_key(Key::Up);
        game.handle_key(Key::Enter);
        assert!(!game.is_running());
    }

    #[test]
    fn dead_player_returns_to_main_menu_and_new_game_starts_fresh() {
        // Four monsters in a row outlast 100 health at 10 damage per bump.
        let mut game = Game::new(parse("6 1\n\nP M M M M 0\n"), WorldConfig::default());
        game.handle_key(Key::Enter);
        for _ in 0..40 {
            game.handle_key(Key::D);
            game.update(0.016);
        }
        assert!(matches!(game.screen(), Screen::MainMenu(_)));
        assert!(game.is_running());

        game.handle_key(Key::Enter);
        let Screen::World(world) = game.screen() else {
            panic!("expected world screen");
        };
        assert_eq!(world.player().map(|player| player.health), Some(100));
        assert_eq!(world.monster_count(), 4);
    }
}
