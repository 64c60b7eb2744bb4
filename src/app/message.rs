//! Application messages

use iced::event;
use iced::keyboard::{Key, Modifiers};
use iced::{Point, Size};

use crate::features::Action;

/// Elements inside the panel that carry a hover highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverId {
    Suggestion(usize),
    Mirrored(usize),
    More,
    Mic,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Animation ============
    /// Frame tick while a timer is pending or something is moving
    AnimationTick,

    // ============ Widget shell ============
    /// The collapsed pill was clicked
    Activate,
    /// Explicit collapse request (keyboard)
    Collapse,

    // ============ Search input ============
    QueryChanged(String),
    /// Enter pressed in the input
    Submit,
    /// Microphone button pressed
    VoiceInput,

    // ============ Suggestions ============
    SuggestionPicked(String),
    MirroredPicked(String),
    MoreSuggestions,
    HoverEnter(HoverId),
    /// Only clears the highlight if `HoverId` still holds it
    HoverExit(HoverId),

    // ============ Window ============
    /// Left button pressed anywhere not captured by a widget
    MousePressed,
    MouseMoved(Point),
    WindowResized(Size),
    /// The window is closing; the widget is torn down
    CloseRequested,

    // ============ Keyboard ============
    /// Also delivered when the focused input captured the key
    KeyPressed(Key, Modifiers, event::Status),
    ModifiersChanged(Modifiers),
    ExecuteAction(Action),
}
