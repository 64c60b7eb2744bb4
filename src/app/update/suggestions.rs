// src/app/update/suggestions.rs
//! Suggestion row handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_suggestions(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SuggestionPicked(text) => {
                let now = Instant::now();
                self.ui.ask.pick(text, now);
                self.ui.sync(now);
                self.submit_query();
                Some(Task::none())
            }

            Message::MoreSuggestions => {
                let now = Instant::now();
                self.ui.ask.load_more(now);
                self.ui.sync(now);
                Some(Task::none())
            }

            Message::HoverEnter(id) => {
                self.ui.hover.set_hovered(Some(*id));
                Some(Task::none())
            }

            // Entering a neighbour can be reported before leaving this one
            Message::HoverExit(id) => {
                if self.ui.hover.hovered() == Some(id) {
                    self.ui.hover.set_hovered(None);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
