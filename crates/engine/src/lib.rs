//! DemoEngine: a minimal conforming engine for the default binary.
//!
//! This is a stand-in, not a simulation: a menu screen and a single
//! falling cell whose landings count toward the score. It exists so
//! the front end has something to drive out of the box and so
//! integration tests can run the full loop against a real `Engine`
//! implementation. Any engine honoring the tick contract can replace
//! it.

use gridfall_types::{Action, Engine, FrameResult, Timestamp, BACKGROUND};

/// Gravity interval for the falling cell.
const STEP_MS: u64 = 120;

/// Menu lines; `true` marks a selectable item.
const MENU: [(&str, bool); 4] = [
    ("* G R I D F A L L *", false),
    ("", false),
    ("start demo", true),
    ("exit", true),
];

const START_ITEM: usize = 2;
const EXIT_ITEM: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Falling,
}

#[derive(Debug)]
struct Fall {
    col: u16,
    row: u16,
    category: u8,
    next_category: u8,
    score: u32,
    last_step: Timestamp,
}

impl Fall {
    fn new(cols: u16, now: Timestamp) -> Self {
        Self {
            col: cols / 2,
            row: 0,
            category: 1,
            next_category: 2,
            score: 0,
            last_step: now,
        }
    }

    fn respawn(&mut self, cols: u16) {
        self.col = cols / 2;
        self.row = 0;
        self.category = self.next_category;
        self.next_category = self.next_category % 7 + 1;
    }
}

/// A conforming engine showing a menu and a single falling cell.
pub struct DemoEngine {
    cols: u16,
    rows: u16,
    screen: Screen,
    selected: usize,
    fall: Fall,
    menu_dirty: bool,
}

impl DemoEngine {
    pub fn new(cols: u16, rows: u16, now: Timestamp) -> Self {
        Self {
            cols,
            rows,
            screen: Screen::Menu,
            selected: START_ITEM,
            fall: Fall::new(cols, now),
            menu_dirty: true,
        }
    }

    fn menu_frame(&self) -> FrameResult {
        let items: Vec<&str> = MENU.iter().map(|(line, _)| *line).collect();
        FrameResult::Text {
            items: items.join("\n"),
            selected: Some(self.selected),
        }
    }

    fn draw_frame(&self) -> FrameResult {
        let mut main = vec![BACKGROUND; self.cols as usize * self.rows as usize];
        let idx = self.fall.row as usize * self.cols as usize + self.fall.col as usize;
        main[idx] = self.fall.category;

        // Next block shown as a 2x2 in the middle of the preview box.
        let mut preview = vec![BACKGROUND; 16];
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            preview[y * 4 + x] = self.fall.next_category;
        }

        FrameResult::Draw {
            main,
            preview,
            score: self.fall.score,
        }
    }

    fn select_next(&mut self) {
        let after = MENU
            .iter()
            .enumerate()
            .find(|(idx, (_, selectable))| *idx > self.selected && *selectable);
        self.selected = match after {
            Some((idx, _)) => idx,
            None => MENU.iter().position(|(_, s)| *s).unwrap_or(self.selected),
        };
    }

    fn select_prev(&mut self) {
        let before = MENU
            .iter()
            .enumerate()
            .rev()
            .find(|(idx, (_, selectable))| *idx < self.selected && *selectable);
        self.selected = match before {
            Some((idx, _)) => idx,
            None => MENU.iter().rposition(|(_, s)| *s).unwrap_or(self.selected),
        };
    }

    fn tick_menu(&mut self, now: Timestamp, action: Option<Action>) -> FrameResult {
        match action {
            Some(Action::Up) => {
                self.select_prev();
                self.menu_dirty = true;
            }
            Some(Action::Down) => {
                self.select_next();
                self.menu_dirty = true;
            }
            Some(Action::Drop) => {
                if self.selected == EXIT_ITEM {
                    return FrameResult::Exit;
                }
                if self.selected == START_ITEM {
                    self.fall = Fall::new(self.cols, now);
                    self.screen = Screen::Falling;
                    return self.draw_frame();
                }
            }
            Some(Action::Escape) => return FrameResult::Exit,
            _ => {}
        }

        if self.menu_dirty {
            self.menu_dirty = false;
            self.menu_frame()
        } else {
            FrameResult::Idle
        }
    }

    fn tick_falling(&mut self, now: Timestamp, action: Option<Action>) -> FrameResult {
        let mut changed = false;

        match action {
            Some(Action::Left) => {
                if self.fall.col > 0 {
                    self.fall.col -= 1;
                    changed = true;
                }
            }
            Some(Action::Right) => {
                if self.fall.col + 1 < self.cols {
                    self.fall.col += 1;
                    changed = true;
                }
            }
            Some(Action::Up) => {
                self.fall.category = self.fall.category % 7 + 1;
                changed = true;
            }
            Some(Action::Down) => {
                self.step();
                changed = true;
            }
            Some(Action::Drop) => {
                self.fall.row = self.rows - 1;
                self.land();
                changed = true;
            }
            Some(Action::Escape) => {
                self.screen = Screen::Menu;
                self.menu_dirty = false;
                return self.menu_frame();
            }
            None => {}
        }

        while now.saturating_sub(self.fall.last_step) >= STEP_MS {
            self.fall.last_step += STEP_MS;
            self.step();
            changed = true;
        }

        if changed {
            self.draw_frame()
        } else {
            FrameResult::Idle
        }
    }

    fn step(&mut self) {
        if self.fall.row + 1 >= self.rows {
            self.land();
        } else {
            self.fall.row += 1;
        }
    }

    fn land(&mut self) {
        self.fall.score += 10;
        self.fall.respawn(self.cols);
    }
}

impl Engine for DemoEngine {
    fn tick(&mut self, now: Timestamp, action: Option<Action>) -> FrameResult {
        match self.screen {
            Screen::Menu => self.tick_menu(now, action),
            Screen::Falling => self.tick_falling(now, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DemoEngine {
        DemoEngine::new(10, 20, 0)
    }

    #[test]
    fn test_first_tick_shows_menu() {
        let mut engine = engine();
        match engine.tick(0, None) {
            FrameResult::Text { items, selected } => {
                assert!(items.contains("start demo"));
                assert_eq!(selected, Some(START_ITEM));
            }
            other => panic!("expected menu, got {}", other.variant()),
        }
    }

    #[test]
    fn test_unchanged_menu_goes_idle() {
        let mut engine = engine();
        engine.tick(0, None);
        assert_eq!(engine.tick(16, None), FrameResult::Idle);
    }

    #[test]
    fn test_selection_wraps_over_selectable_items() {
        let mut engine = engine();
        engine.tick(0, None);

        match engine.tick(16, Some(Action::Down)) {
            FrameResult::Text { selected, .. } => assert_eq!(selected, Some(EXIT_ITEM)),
            other => panic!("expected menu, got {}", other.variant()),
        }
        match engine.tick(32, Some(Action::Down)) {
            FrameResult::Text { selected, .. } => assert_eq!(selected, Some(START_ITEM)),
            other => panic!("expected menu, got {}", other.variant()),
        }
    }

    #[test]
    fn test_start_switches_to_draw_frames() {
        let mut engine = engine();
        engine.tick(0, None);
        match engine.tick(16, Some(Action::Drop)) {
            FrameResult::Draw { main, preview, score } => {
                assert_eq!(main.len(), 200);
                assert_eq!(preview.len(), 16);
                assert_eq!(score, 0);
                assert_eq!(main.iter().filter(|c| **c != BACKGROUND).count(), 1);
            }
            other => panic!("expected draw, got {}", other.variant()),
        }
    }

    #[test]
    fn test_exit_item_exits() {
        let mut engine = engine();
        engine.tick(0, None);
        engine.tick(16, Some(Action::Down));
        assert_eq!(engine.tick(32, Some(Action::Drop)), FrameResult::Exit);
    }

    #[test]
    fn test_escape_in_menu_exits() {
        let mut engine = engine();
        engine.tick(0, None);
        assert_eq!(engine.tick(16, Some(Action::Escape)), FrameResult::Exit);
    }

    #[test]
    fn test_gravity_moves_the_cell() {
        let mut engine = engine();
        engine.tick(0, None);
        engine.tick(0, Some(Action::Drop));

        match engine.tick(STEP_MS, None) {
            FrameResult::Draw { main, .. } => {
                let idx = main.iter().position(|c| *c != BACKGROUND).unwrap();
                assert_eq!(idx / 10, 1, "cell should have fallen one row");
            }
            other => panic!("expected draw, got {}", other.variant()),
        }
    }

    #[test]
    fn test_hard_drop_lands_and_scores() {
        let mut engine = engine();
        engine.tick(0, None);
        engine.tick(0, Some(Action::Drop));

        match engine.tick(1, Some(Action::Drop)) {
            FrameResult::Draw { score, .. } => assert_eq!(score, 10),
            other => panic!("expected draw, got {}", other.variant()),
        }
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut engine = engine();
        engine.tick(0, None);
        engine.tick(0, Some(Action::Drop));
        match engine.tick(1, Some(Action::Escape)) {
            FrameResult::Text { items, .. } => assert!(items.contains("exit")),
            other => panic!("expected menu, got {}", other.variant()),
        }
    }

    #[test]
    fn test_quiet_fall_frame_is_idle() {
        let mut engine = engine();
        engine.tick(0, None);
        engine.tick(0, Some(Action::Drop));
        // Well before the next gravity step, with no input.
        assert_eq!(engine.tick(10, None), FrameResult::Idle);
    }
}
