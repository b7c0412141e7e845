use crate::menu::{Menu, MenuAction};
use crate::types::Key;
use crate::world::World;

/// What the active screen asks the game to do after handling input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    NewGame,
    MainMenu,
    Credits,
    Quit,
}

impl From<MenuAction> for ScreenAction {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::NewGame => ScreenAction::NewGame,
            MenuAction::Credits => ScreenAction::Credits,
            MenuAction::Back => ScreenAction::MainMenu,
            MenuAction::Exit => ScreenAction::Quit,
        }
    }
}

pub enum Screen {
    MainMenu(Menu),
    Credits(Menu),
    World(Box<World>),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu(_) => "MainMenu",
            Screen::Credits(_) => "Credits",
            Screen::World(_) => "World",
        }
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        match self {
            Screen::MainMenu(menu) => match key {
                Key::Q => ScreenAction::Quit,
                _ => menu.handle_key(key).map_or(ScreenAction::None, ScreenAction::from),
            },
            Screen::Credits(menu) => match key {
                Key::Q => ScreenAction::MainMenu,
                _ => menu.handle_key(key).map_or(ScreenAction::None, ScreenAction::from),
            },
            Screen::World(world) => world.handle_key(key),
        }
    }

    pub fn update(&mut self, dt: f32) -> ScreenAction {
        match self {
            Screen::MainMenu(_) | Screen::Credits(_) => ScreenAction::None,
            Screen::World(world) => world.update(dt),
        }
    }
}
