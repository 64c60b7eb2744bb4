//! Message update handlers - thin dispatcher delegating to submodules

mod keyboard;
mod search;
mod suggestions;
mod widget;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_widget(&message) {
            return task;
        }
        if let Some(task) = self.handle_search(&message) {
            return task;
        }
        if let Some(task) = self.handle_suggestions(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }

        Task::none()
    }
}
