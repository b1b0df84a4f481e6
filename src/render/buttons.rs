//! Fixed world-space button layout for the start and game-over screens.

use super::{Painter, Rgba};
use crate::core::modes::GameMode;
use crate::core::session::GameState;

const BODY: Rgba = Rgba::rgb(240, 180, 60);
const BODY_SELECTED: Rgba = Rgba::rgb(250, 220, 100);
const LABEL: Rgba = Rgba::rgb(50, 30, 0);
const SHADOW: Rgba = Rgba::rgba(0, 0, 0, 100);
const NAME_BOX: Rgba = Rgba::rgba(0, 0, 0, 50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    SelectMode(GameMode),
    ToggleRainbow,
    NameBox,
    Restart,
    Continue,
    Share,
    Challenge,
}

/// An axis-aligned button, positioned by its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub action: ButtonAction,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Button {
    const fn new(action: ButtonAction, label: &'static str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            action,
            label,
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// Strict containment; edges do not count.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.left() && x < self.x + self.width / 2.0 && y > self.top() && y < self.y + self.height / 2.0
    }

    pub fn draw(&self, painter: &mut dyn Painter, highlighted: bool) {
        if self.action == ButtonAction::NameBox {
            painter.fill_rect(self.left(), self.top(), self.width, self.height, NAME_BOX);
            return;
        }
        painter.fill_rect(self.left() + 3.0, self.top() + 3.0, self.width, self.height, SHADOW);
        let body = if highlighted { BODY_SELECTED } else { BODY };
        painter.fill_rect(self.left(), self.top(), self.width, self.height, body);
        painter.text(self.x, self.y, self.label, LABEL);
    }
}

/// Vertical position of the mode button row.
pub const MODE_ROW_Y: f64 = 330.0;
const MODE_BUTTON_WIDTH: f64 = 90.0;
const MODE_BUTTON_SPACING: f64 = 95.0;

/// Mode buttons, rainbow toggle and the name box.
pub fn start_screen_buttons(world_width: f64) -> Vec<Button> {
    let cx = world_width / 2.0;
    let first = cx - MODE_BUTTON_SPACING * (GameMode::ALL.len() as f64 - 1.0) / 2.0;
    let mut buttons: Vec<Button> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, &mode)| {
            Button::new(
                ButtonAction::SelectMode(mode),
                mode.name(),
                first + i as f64 * MODE_BUTTON_SPACING,
                MODE_ROW_Y,
                MODE_BUTTON_WIDTH,
                40.0,
            )
        })
        .collect();
    buttons.push(Button::new(ButtonAction::ToggleRainbow, "RAINBOW MODE", cx, 380.0, 180.0, 40.0));
    buttons.push(Button::new(ButtonAction::NameBox, "", cx, 435.0, 200.0, 30.0));
    buttons
}

/// Restart, continue, share and challenge.
pub fn game_over_buttons(world_width: f64, world_height: f64) -> Vec<Button> {
    let cx = world_width / 2.0;
    let cy = world_height / 2.0;
    vec![
        Button::new(ButtonAction::Restart, "RESTART", cx, cy + 50.0, 180.0, 50.0),
        Button::new(ButtonAction::Continue, "CONTINUE", cx, cy + 120.0, 180.0, 50.0),
        Button::new(ButtonAction::Share, "SHARE", cx - 95.0, cy + 190.0, 180.0, 50.0),
        Button::new(ButtonAction::Challenge, "CHALLENGE", cx + 95.0, cy + 190.0, 180.0, 50.0),
    ]
}

/// Buttons visible in `state`.
pub fn buttons_for(state: GameState, world_width: f64, world_height: f64) -> Vec<Button> {
    match state {
        GameState::Start => start_screen_buttons(world_width),
        GameState::GameOver => game_over_buttons(world_width, world_height),
        GameState::Playing(_) | GameState::WatchingAd { .. } => Vec::new(),
    }
}

/// The button under `(x, y)` in `state`, if any.
pub fn hit_test(state: GameState, world_width: f64, world_height: f64, x: f64, y: f64) -> Option<ButtonAction> {
    buttons_for(state, world_width, world_height)
        .into_iter()
        .find(|b| b.contains(x, y))
        .map(|b| b.action)
}
