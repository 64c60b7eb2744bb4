// src/app/update/window.rs
//! Pointer and window handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ask::ShellEvent;

impl App {
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::MouseMoved(position) => {
                self.core.cursor = Some(*position);
                Some(Task::none())
            }

            Message::MousePressed => {
                if self.is_outside_click() {
                    self.shell_event(ShellEvent::OutsideClick, Instant::now());
                }
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.core.window_size = *size;
                Some(Task::none())
            }

            Message::CloseRequested => {
                tracing::info!("Window closing, tearing down the widget");
                self.ui.reset(Instant::now());
                Some(iced::exit())
            }

            _ => None,
        }
    }

    /// Whether the last known cursor position lies outside the centred widget
    fn is_outside_click(&self) -> bool {
        self.core.cursor.is_some_and(|cursor| {
            !self
                .ui
                .geometry
                .contains(self.core.window_size, cursor)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use iced::time::Instant;
    use iced::{Point, Size};

    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::features::ask::WidgetState;
    use crate::features::hooks::testing::RecordingHooks;

    fn expanded_app() -> App {
        let mut app = App::new(Settings::default(), Arc::new(RecordingHooks::default())).0;
        let _ = app.update(Message::WindowResized(Size::new(800.0, 600.0)));
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
    fn click_outside_collapses() {
        let mut app = expanded_app();
        let _ = app.update(Message::MouseMoved(Point::new(10.0, 10.0)));
        let _ = app.update(Message::MousePressed);
        assert_eq!(app.ui.ask.state(), WidgetState::Collapsing);
    }

    #[test]
    fn click_inside_keeps_panel_open() {
        let mut app = expanded_app();
        let _ = app.update(Message::MouseMoved(Point::new(400.0, 300.0)));
        let _ = app.update(Message::MousePressed);
        assert_eq!(app.ui.ask.state(), WidgetState::Expanded);
    }

    #[test]
    fn click_without_cursor_is_ignored() {
        let mut app = expanded_app();
        let _ = app.update(Message::MousePressed);
        assert_eq!(app.ui.ask.state(), WidgetState::Expanded);
    }

    #[test]
    fn outside_click_while_expanding_is_ignored() {
        let mut app = App::new(Settings::default(), Arc::new(RecordingHooks::default())).0;
        let _ = app.update(Message::Activate);
        let _ = app.update(Message::MouseMoved(Point::new(10.0, 10.0)));
        let _ = app.update(Message::MousePressed);
        assert_eq!(app.ui.ask.state(), WidgetState::Expanding);
    }

    #[test]
    fn resize_moves_hit_area() {
        let mut app = expanded_app();
        let _ = app.update(Message::WindowResized(Size::new(2000.0, 1200.0)));
        // Centre of the old window is now outside the widget
        let _ = app.update(Message::MouseMoved(Point::new(400.0, 300.0)));
        let _ = app.update(Message::MousePressed);
        assert_eq!(app.ui.ask.state(), WidgetState::Collapsing);
    }

    #[test]
    fn close_mid_chain_cancels_timers() {
        let mut app = App::new(Settings::default(), Arc::new(RecordingHooks::default())).0;
        let _ = app.update(Message::QueryChanged("cat".to_string()));
        let _ = app.update(Message::QueryChanged(String::new()));
        let _ = app.update(Message::Activate);
        assert!(app.ui.ask.has_pending_timers());

        let _ = app.update(Message::CloseRequested);
        assert_eq!(app.ui.ask.state(), WidgetState::Collapsed);
        assert!(!app.ui.ask.has_pending_timers());
        assert!(app.ui.ask.show_title());
        assert!(app.ui.pill_fade.is_visible());
    }
}
