// src/app/update/widget.rs
//! Expand/collapse and animation frame handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ask::ShellEvent;
use crate::ui::components::search_input::SEARCH_INPUT_ID;

impl App {
    pub fn handle_widget(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Activate => {
                self.shell_event(ShellEvent::Activate, Instant::now());
                Some(Task::none())
            }

            Message::Collapse => {
                self.shell_event(ShellEvent::Collapse, Instant::now());
                Some(Task::none())
            }

            Message::AnimationTick => {
                let was_open = self.ui.ask.shell().show_expanded();
                self.ui.tick(Instant::now());
                if !was_open && self.ui.ask.shell().show_expanded() {
                    return Some(iced::widget::operation::focus(iced::widget::Id::new(
                        SEARCH_INPUT_ID,
                    )));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Feed a trigger to the shell and line the animations up with the result
    pub(crate) fn shell_event(&mut self, event: ShellEvent, now: Instant) {
        if self.ui.ask.handle(event, now).is_none() {
            tracing::trace!(
                "Ignored {:?} in state {:?}",
                event,
                self.ui.ask.state()
            );
        }
        self.ui.sync(now);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::features::ask::WidgetState;
    use crate::features::hooks::testing::RecordingHooks;

    fn app() -> App {
        App::new(Settings::default(), Arc::new(RecordingHooks::default())).0
    }

    #[test]
    fn activate_starts_expanding() {
        let mut app = app();
        let _ = app.update(Message::Activate);
        assert_eq!(app.ui.ask.state(), WidgetState::Expanding);
        assert!(!app.ui.pill_fade.is_visible());
    }

    #[test]
    fn second_activate_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Activate);
        let deadline = app.ui.ask.next_deadline();
        let _ = app.update(Message::Activate);
        assert_eq!(app.ui.ask.next_deadline(), deadline);
    }

    #[test]
    fn collapse_while_animating_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Activate);
        let _ = app.update(Message::Collapse);
        assert_eq!(app.ui.ask.state(), WidgetState::Expanding);
    }
}
