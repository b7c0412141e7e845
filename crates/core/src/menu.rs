use crate::content::CREDITS;
use crate::types::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Credits,
    Back,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: &str, action: MenuAction) -> Self {
        Self { label: label.to_string(), action }
    }
}

/// A titled list of items with a wrapping selection cursor and optional body
/// text drawn above the items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub title: String,
    pub body: Vec<String>,
    items: Vec<MenuItem>,
    selected: usize,
}

impl Menu {
    pub fn new(title: &str, items: Vec<MenuItem>) -> Self {
        Self { title: title.to_string(), body: Vec::new(), items, selected: 0 }
    }

    pub fn main_menu() -> Self {
        Self::new(
            "tilecrawl",
            vec![
                MenuItem::new("New Game", MenuAction::NewGame),
                MenuItem::new("Credits", MenuAction::Credits),
                MenuItem::new("Exit", MenuAction::Exit),
            ],
        )
    }

    pub fn credits() -> Self {
        let mut menu = Self::new("Credits", vec![MenuItem::new("Back", MenuAction::Back)]);
        menu.body = CREDITS.iter().map(|line| line.to_string()).collect();
        menu
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn activate(&self) -> Option<MenuAction> {
        self.items.get(self.selected).map(|item| item.action)
    }

    /// Up/Down move the cursor; Enter yields the selected item's action.
    pub fn handle_key(&mut self, key: Key) -> Option<MenuAction> {
        match key {
            Key::Up => self.select_previous(),
            Key::Down => self.select_next(),
            Key::Enter => return self.activate(),
            _ => {}
        }
        None
    }
}
