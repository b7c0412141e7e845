//! Window configuration for the desktop app.

use macroquad::window::Conf;
use tilecrawl::APP_NAME;

const DEFAULT_WINDOW_WIDTH: i32 = 720;
const DEFAULT_WINDOW_HEIGHT: i32 = 1024;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // The tile grid is laid out in fixed pixels.
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn window_is_fixed_size() {
        let conf = build_window_conf();
        assert!(!conf.window_resizable);
    }

    #[test]
    fn uses_expected_default_window_size() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 720);
        assert_eq!(conf.window_height, 1024);
        assert_eq!(conf.window_title, "tilecrawl");
    }
}
