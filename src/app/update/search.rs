// src/app/update/search.rs
//! Search input handlers: typing, submit, voice and mirrored rows

use iced::Task;
use iced::keyboard::Key;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::QueryChanged(query) => {
                if self.is_shortcut_echo(query) {
                    tracing::debug!("Dropping edit typed by a shortcut");
                    return Some(Task::none());
                }
                let now = Instant::now();
                self.ui.ask.set_query(query.clone(), now);
                self.ui.sync(now);
                Some(Task::none())
            }

            Message::Submit => {
                self.submit_query();
                Some(Task::none())
            }

            Message::MirroredPicked(text) => {
                let now = Instant::now();
                self.ui.ask.pick(text, now);
                self.ui.sync(now);
                self.submit_query();
                Some(Task::none())
            }

            Message::VoiceInput => {
                tracing::debug!("Microphone pressed");
                self.core.hooks.on_voice_input();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Whether `next` is the query plus one character that was really a
    /// modified shortcut (the focused input still inserts it as text)
    fn is_shortcut_echo(&self, next: &str) -> bool {
        let modifiers = self.core.modifiers;
        if !(modifiers.control() || modifiers.alt()) {
            return false;
        }
        inserted_char(self.ui.ask.query(), next).is_some_and(|c| {
            let key = Key::Character(c.to_string().into());
            self.core.settings.keybindings.find_action(&key, &modifiers).is_some()
        })
    }

    /// Hand the current query to the host, skipping blank ones
    pub(crate) fn submit_query(&self) {
        match self.ui.ask.submission() {
            Some(query) => {
                tracing::debug!("Submitting query {:?}", query);
                self.core.hooks.on_submit(query);
            }
            None => tracing::debug!("Ignoring submit of blank query"),
        }
    }
}

/// The single character inserted to turn `before` into `after`, if that is the only change
fn inserted_char(before: &str, after: &str) -> Option<char> {
    let prefix = before
        .chars()
        .zip(after.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let mut rest = after.chars().skip(prefix);
    let inserted = rest.next()?;
    rest.eq(before.chars().skip(prefix)).then_some(inserted)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iced::keyboard::Modifiers;
    use iced::time::Instant;

    use super::inserted_char;
    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::features::hooks::testing::RecordingHooks;

    fn app() -> (App, Arc<RecordingHooks>) {
        let hooks = Arc::new(RecordingHooks::default());
        let (app, _) = App::new(Settings::default(), hooks.clone());
        (app, hooks)
    }

    #[test]
    fn enter_submits_query_once() {
        let (mut app, hooks) = app();
        let _ = app.update(Message::QueryChanged("cat".to_string()));
        let _ = app.update(Message::Submit);
        assert_eq!(hooks.submitted(), vec!["cat".to_string()]);
    }

    #[test]
    fn blank_submit_skips_hooks() {
        let (mut app, hooks) = app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::QueryChanged("   ".to_string()));
        let _ = app.update(Message::Submit);
        assert!(hooks.submitted().is_empty());
    }

    #[test]
    fn typing_hides_title_and_shows_mirrored_rows() {
        let (mut app, _) = app();
        let _ = app.update(Message::QueryChanged("cat".to_string()));
        assert!(!app.ui.ask.show_title());
        assert_eq!(app.ui.ask.mirrored().len(), 3);
        assert!(app.ui.mirrored_rows.is_animating(Instant::now()));
    }

    #[test]
    fn mirrored_pick_sets_query_and_submits() {
        let (mut app, hooks) = app();
        let _ = app.update(Message::QueryChanged("cat".to_string()));
        let _ = app.update(Message::MirroredPicked("cat".to_string()));
        assert_eq!(app.ui.ask.query(), "cat");
        assert_eq!(hooks.submitted(), vec!["cat".to_string()]);
    }

    #[test]
    fn microphone_reaches_hooks() {
        let (mut app, hooks) = app();
        let _ = app.update(Message::VoiceInput);
        assert_eq!(hooks.voice_presses(), 1);
        assert!(hooks.submitted().is_empty());
    }

    #[test]
    fn single_insertions_are_detected() {
        assert_eq!(inserted_char("ca", "cam"), Some('m'));
        assert_eq!(inserted_char("ct", "cat"), Some('a'));
        assert_eq!(inserted_char("", "k"), Some('k'));
        assert_eq!(inserted_char("cat", "cat"), None);
        assert_eq!(inserted_char("cat", "ca"), None);
        assert_eq!(inserted_char("ca", "cats"), None);
        assert_eq!(inserted_char("ca", "xam"), None);
    }

    #[test]
    fn modified_text_that_is_not_a_shortcut_is_kept() {
        let (mut app, _) = app();
        // AltGr layouts report Ctrl+Alt for characters such as '@'
        let _ = app.update(Message::ModifiersChanged(Modifiers::CTRL | Modifiers::ALT));
        let _ = app.update(Message::QueryChanged("@".to_string()));
        assert_eq!(app.ui.ask.query(), "@");
    }

    #[test]
    fn ctrl_k_echo_is_dropped() {
        let (mut app, _) = app();
        let _ = app.update(Message::ModifiersChanged(Modifiers::CTRL));
        let _ = app.update(Message::QueryChanged("k".to_string()));
        assert_eq!(app.ui.ask.query(), "");
    }
}
