//! Keyboard and pointer input: tweak panel keys and orbit controls.
//!
//! Up/Down pick a control, Left/Right adjust it (Shift for coarse steps),
//! and releasing Left/Right commits a slider. Color controls step through
//! the preset palette and regenerate right away. `R` forces a regeneration
//! and Escape quits.

use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

use galaxy_config::{ControlEvent, ControlId, ControlKind, CONTROLS};

use super::core::GalaxyApp;
use super::types::{COARSE_STEPS, PIXELS_PER_NOTCH};

/// A tweak panel gesture decoded from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PanelKey {
    SelectPrevious,
    SelectNext,
    Adjust(i32),
    Commit,
    Regenerate,
    Exit,
}

/// Decode a key event. Key repeats keep adjusting; other repeats are ignored.
pub(super) fn map_key(key: &Key, state: ElementState, repeat: bool, shift: bool) -> Option<PanelKey> {
    let pressed = state == ElementState::Pressed;
    let steps = if shift { COARSE_STEPS } else { 1 };

    match key {
        Key::Named(NamedKey::ArrowUp) if pressed => Some(PanelKey::SelectPrevious),
        Key::Named(NamedKey::ArrowDown) if pressed => Some(PanelKey::SelectNext),
        Key::Named(NamedKey::ArrowLeft) if pressed => Some(PanelKey::Adjust(-steps)),
        Key::Named(NamedKey::ArrowRight) if pressed => Some(PanelKey::Adjust(steps)),
        Key::Named(NamedKey::ArrowLeft | NamedKey::ArrowRight) => Some(PanelKey::Commit),
        Key::Named(NamedKey::Escape) if pressed && !repeat => Some(PanelKey::Exit),
        Key::Character(c) if pressed && !repeat && c.eq_ignore_ascii_case("r") => {
            Some(PanelKey::Regenerate)
        }
        _ => None,
    }
}

/// Control `delta` positions away from `current`, wrapping around.
pub(super) fn step_selection(current: ControlId, delta: i32) -> ControlId {
    let len = CONTROLS.len() as i32;
    let index = (current.index() as i32 + delta).rem_euclid(len) as usize;
    ControlId::from_index(index).unwrap_or(current)
}

impl GalaxyApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let shift = self.modifiers.shift_key();
        let Some(action) = map_key(&event.logical_key, event.state, event.repeat, shift) else {
            return;
        };
        self.handle_panel_key(action);
    }

    pub(super) fn handle_panel_key(&mut self, action: PanelKey) {
        match action {
            PanelKey::SelectPrevious | PanelKey::SelectNext => {
                // Moving away from a held slider finishes its interaction
                self.commit_adjustment();
                let delta = if action == PanelKey::SelectNext { 1 } else { -1 };
                self.selected = step_selection(self.selected, delta);
                self.last_title = None;
            }
            PanelKey::Adjust(steps) => {
                let id = self.selected;
                let event = match id.spec().kind {
                    ControlKind::Slider { .. } => {
                        self.adjusting = Some(id);
                        self.panel.nudge(id, steps)
                    }
                    ControlKind::Color => self.panel.cycle_color(id, steps.signum()),
                };
                self.apply_control_event(event);
            }
            PanelKey::Commit => self.commit_adjustment(),
            PanelKey::Regenerate => {
                let params = self.panel.snapshot();
                self.apply_control_event(ControlEvent::Regenerate(params));
            }
            PanelKey::Exit => {
                tracing::info!("Escape pressed, exiting");
                self.should_exit = true;
            }
        }
    }

    /// Finish the held slider interaction, if any.
    pub(super) fn commit_adjustment(&mut self) {
        if let Some(id) = self.adjusting.take() {
            let event = self.panel.finish_change(id);
            self.apply_control_event(event);
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let (true, Some((px, py))) = (self.dragging, self.cursor) {
            let height = self
                .render_state
                .as_ref()
                .map(|rs| rs.gpu.size.height as f32)
                .unwrap_or(self.config.window.height as f32);
            self.camera.rotate((x - px) as f32, (y - py) as f32, height);
        }
        self.cursor = Some((x, y));
    }

    pub(super) fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(p) => (p.y / PIXELS_PER_NOTCH) as f32,
        };
        self.camera.zoom(notches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_config::GalaxyConfig;

    fn app() -> GalaxyApp {
        GalaxyApp::new(GalaxyConfig::default())
    }

    #[test]
    fn arrow_keys_map_to_panel_actions() {
        let up = Key::Named(NamedKey::ArrowUp);
        let right = Key::Named(NamedKey::ArrowRight);
        let left = Key::Named(NamedKey::ArrowLeft);
        assert_eq!(
            map_key(&up, ElementState::Pressed, false, false),
            Some(PanelKey::SelectPrevious)
        );
        assert_eq!(map_key(&up, ElementState::Released, false, false), None);
        assert_eq!(
            map_key(&right, ElementState::Pressed, true, false),
            Some(PanelKey::Adjust(1))
        );
        assert_eq!(
            map_key(&left, ElementState::Pressed, false, true),
            Some(PanelKey::Adjust(-COARSE_STEPS))
        );
        assert_eq!(
            map_key(&left, ElementState::Released, false, false),
            Some(PanelKey::Commit)
        );
    }

    #[test]
    fn regenerate_and_exit_ignore_repeats() {
        let r = Key::Character("R".into());
        let esc = Key::Named(NamedKey::Escape);
        assert_eq!(
            map_key(&r, ElementState::Pressed, false, false),
            Some(PanelKey::Regenerate)
        );
        assert_eq!(map_key(&r, ElementState::Pressed, true, false), None);
        assert_eq!(
            map_key(&esc, ElementState::Pressed, false, false),
            Some(PanelKey::Exit)
        );
        assert_eq!(map_key(&Key::Character("x".into()), ElementState::Pressed, false, false), None);
    }

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(step_selection(ControlId::Count, -1), ControlId::OutsideColor);
        assert_eq!(step_selection(ControlId::OutsideColor, 1), ControlId::Count);
        assert_eq!(step_selection(ControlId::Size, 1), ControlId::Radius);
    }

    #[test]
    fn slider_adjust_waits_for_commit() {
        let mut app = app();
        app.selected = ControlId::Branches;

        app.handle_panel_key(PanelKey::Adjust(2));
        assert_eq!(app.panel.params().branches, 5);
        assert!(app.panel.is_uncommitted(ControlId::Branches));
        assert_eq!(app.adjusting, Some(ControlId::Branches));

        app.handle_panel_key(PanelKey::Commit);
        assert!(!app.panel.is_uncommitted(ControlId::Branches));
        assert!(app.adjusting.is_none());
    }

    #[test]
    fn changing_selection_commits_held_slider() {
        let mut app = app();
        app.selected = ControlId::Spin;
        app.handle_panel_key(PanelKey::Adjust(1));
        app.handle_panel_key(PanelKey::SelectNext);
        assert!(!app.panel.is_uncommitted(ControlId::Spin));
        assert_eq!(app.selected, ControlId::Randomness);
    }

    #[test]
    fn color_adjust_cycles_presets() {
        let mut app = app();
        app.selected = ControlId::InsideColor;
        let before = app.panel.params().inside_color.clone();
        app.handle_panel_key(PanelKey::Adjust(1));
        assert_ne!(app.panel.params().inside_color, before);
        assert!(app.adjusting.is_none());
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = app();
        app.handle_panel_key(PanelKey::Exit);
        assert!(app.should_exit);
    }

    #[test]
    fn drag_rotates_only_while_pressed() {
        let mut app = app();
        let before = app.camera.position();

        app.handle_cursor_moved(10.0, 10.0);
        app.handle_cursor_moved(200.0, 10.0);
        app.camera.update();
        assert_eq!(app.camera.position(), before);

        app.handle_mouse_input(ElementState::Pressed, MouseButton::Left);
        app.handle_cursor_moved(400.0, 10.0);
        app.camera.update();
        assert_ne!(app.camera.position(), before);
    }

    #[test]
    fn wheel_zooms_camera() {
        let mut app = app();
        let before = app.camera.distance();
        app.handle_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        assert!(app.camera.distance() < before);
    }
}
