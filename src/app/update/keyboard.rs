// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::keyboard::{Key, Modifiers};
use iced::{Task, event};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers, status) => {
                self.core.modifiers = *modifiers;
                // Plain characters the focused input took are typing, not shortcuts
                if *status == event::Status::Captured && is_typing(key, modifiers) {
                    return Some(Task::none());
                }
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ModifiersChanged(modifiers) => {
                self.core.modifiers = *modifiers;
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Keybinding action: {}", action.display_name());
        match action {
            Action::Expand => self.update(Message::Activate),
            Action::Collapse => self.update(Message::Collapse),
            Action::MoreSuggestions => {
                if self.ui.ask.shell().show_expanded() {
                    self.update(Message::MoreSuggestions)
                } else {
                    Task::none()
                }
            }
        }
    }
}

fn is_typing(key: &Key, modifiers: &Modifiers) -> bool {
    matches!(key, Key::Character(_))
        && !(modifiers.control() || modifiers.alt() || modifiers.logo())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use std::time::Duration;

    use iced::event::Status;
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};
    use iced::time::Instant;

    use crate::app::{App, Message};
    use crate::features::ask::WidgetState;
    use crate::features::keybindings::{KeyBinding, KeyCode};
    use crate::features::{Action, Settings};
    use crate::features::hooks::testing::RecordingHooks;

    fn app() -> App {
        App::new(Settings::default(), Arc::new(RecordingHooks::default())).0
    }

    fn expanded_app() -> App {
        let mut app = app();
        let _ = app.update(Message::Activate);
        let mut t = Instant::now();
        for _ in 0..250 {
            t += Duration::from_millis(16);
            app.ui.tick(t);
        }
        assert_eq!(app.ui.ask.state(), WidgetState::Expanded);
        app
    }

    #[test]
    fn ctrl_k_expands() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(Key::Character("k".into()), Modifiers::CTRL, Status::Ignored));
        assert_eq!(app.ui.ask.state(), WidgetState::Expanding);
    }

    #[test]
    fn unbound_key_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(Key::Named(Named::Tab), Modifiers::empty(), Status::Ignored));
        assert_eq!(app.ui.ask.state(), WidgetState::Collapsed);
    }

    #[test]
    fn more_is_ignored_while_collapsed() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(Key::Character("m".into()), Modifiers::ALT, Status::Ignored));
        assert!(!app.ui.ask.suggestions().is_loading());
    }

    #[test]
    fn escape_collapses_while_input_has_focus() {
        let mut app = expanded_app();
        // The focused input captures Escape to drop focus; it still collapses
        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            Modifiers::empty(),
            Status::Captured,
        ));
        assert_eq!(app.ui.ask.state(), WidgetState::Collapsing);
    }

    #[test]
    fn alt_m_loads_more_without_typing_into_the_query() {
        let mut app = expanded_app();
        let _ = app.update(Message::QueryChanged("ca".to_string()));

        // Runtime order: modifier change, the input's edit, then the key itself
        let _ = app.update(Message::ModifiersChanged(Modifiers::ALT));
        let _ = app.update(Message::QueryChanged("cam".to_string()));
        let _ = app.update(Message::KeyPressed(
            Key::Character("m".into()),
            Modifiers::ALT,
            Status::Captured,
        ));

        assert_eq!(app.ui.ask.query(), "ca");
        assert!(app.ui.ask.suggestions().is_loading());
    }

    #[test]
    fn typing_a_bound_letter_is_not_a_shortcut() {
        let mut settings = Settings::default();
        settings.keybindings.set(
            Action::MoreSuggestions,
            vec![KeyBinding::new(KeyCode::Char('m'))],
        );
        let mut app = App::new(settings, Arc::new(RecordingHooks::default())).0;
        let _ = app.update(Message::Activate);
        app.ui.tick(Instant::now() + Duration::from_secs(1));

        let _ = app.update(Message::QueryChanged("m".to_string()));
        let _ = app.update(Message::KeyPressed(
            Key::Character("m".into()),
            Modifiers::empty(),
            Status::Captured,
        ));
        assert_eq!(app.ui.ask.query(), "m");
        assert!(!app.ui.ask.suggestions().is_loading());
    }
}
