//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::sync::Arc;

use iced::{Event, Subscription, Task, Theme, event, keyboard, mouse, window};

use crate::features::{Action, SearchHooks, Settings};
pub use message::{HoverId, Message};
pub use state::{App, CoreState, UiState, WINDOW_SIZE};

impl App {
    /// Create the application around loaded settings and the host's hooks
    pub fn new(settings: Settings, hooks: Arc<dyn SearchHooks>) -> (Self, Task<Message>) {
        tracing::info!(
            "Starting Ask widget (variant {:?}, reduced motion {})",
            settings.widget.variant,
            settings.display.reduced_motion
        );
        for action in Action::all() {
            tracing::debug!(
                "{}: {}",
                action.display_name(),
                settings.keybindings.display_for_action(action)
            );
        }
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings, hooks);
        (Self { core, ui }, Task::none())
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Ask".to_string()
    }

    /// Subscriptions for animation frames, input, resize and close events
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time::Instant;

        // 1. Frames while a chain, timer or animation is in flight
        let animation_sub = if self.ui.has_active_animations(Instant::now()) {
            window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        // 2. Keyboard shortcuts, cursor tracking and outside clicks
        let input_sub = event::listen_with(runtime_event);

        // 3. Window resize, for centring and hit-testing
        let resize_sub = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 4. Close requests tear the widget down before exiting
        let close_sub = window::close_requests().map(|_id| Message::CloseRequested);

        Subscription::batch([animation_sub, input_sub, resize_sub, close_sub])
    }
}

/// Map runtime events to messages.
///
/// Key presses are forwarded even when a widget captured them, so shortcuts
/// keep working while the search input has focus. Clicks only count when no
/// widget handled them.
fn runtime_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed(key, modifiers, status))
        }
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if status == event::Status::Ignored =>
        {
            Some(Message::MousePressed)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::MouseMoved(position)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hooks::testing::RecordingHooks;
    use crate::features::ask::WidgetState;
    use iced::time::Instant;
    use std::time::Duration;

    fn app() -> (App, Arc<RecordingHooks>) {
        let hooks = Arc::new(RecordingHooks::default());
        let (app, _) = App::new(Settings::default(), hooks.clone());
        (app, hooks)
    }

    #[test]
    fn idle_app_needs_no_frames() {
        let (app, _) = app();
        assert!(!app.ui.has_active_animations(Instant::now()));
    }

    #[test]
    fn activation_requests_frames_until_settled() {
        let (mut app, _) = app();
        let _ = app.update(Message::Activate);
        assert!(app.ui.has_active_animations(Instant::now()));

        let mut t = Instant::now();
        for _ in 0..250 {
            t += Duration::from_millis(16);
            app.ui.tick(t);
        }
        assert_eq!(app.ui.ask.state(), WidgetState::Expanded);
        assert!(!app.ui.has_active_animations(t));
    }

    #[test]
    fn uncaptured_click_is_a_press() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let message = runtime_event(press, event::Status::Ignored, window::Id::unique());
        assert!(matches!(message, Some(Message::MousePressed)));
    }

    #[test]
    fn click_handled_by_a_widget_is_dropped() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let message = runtime_event(press, event::Status::Captured, window::Id::unique());
        assert!(message.is_none());
    }

    #[test]
    fn modifier_changes_are_forwarded() {
        let change = Event::Keyboard(keyboard::Event::ModifiersChanged(keyboard::Modifiers::ALT));
        let message = runtime_event(change, event::Status::Captured, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::ModifiersChanged(m)) if m == keyboard::Modifiers::ALT
        ));
    }
}
