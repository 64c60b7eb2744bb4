//! SVG icons embedded in the binary
//!
//! Single-colour icons use `currentColor` and are tinted by the `svg` style.
//! The masthead keeps its own colours.

use crate::features::ask::SuggestionIcon;

pub const SPARKLE: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M8 1L9.5 6.5L15 8L9.5 9.5L8 15L6.5 9.5L1 8L6.5 6.5L8 1Z" fill="currentColor"/><path d="M12 3L12.5 4.5L14 5L12.5 5.5L12 7L11.5 5.5L10 5L11.5 4.5L12 3Z" fill="currentColor"/></svg>"#;

pub const ZAP: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 1L3 9H8L7 15L13 7H8L9 1Z" fill="currentColor"/></svg>"#;

pub const MIC: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10 12.5C11.38 12.5 12.5 11.38 12.5 10V5C12.5 3.62 11.38 2.5 10 2.5C8.62 2.5 7.5 3.62 7.5 5V10C7.5 11.38 8.62 12.5 10 12.5Z" fill="currentColor"/><path d="M14.5 8.5V10C14.5 12.48 12.48 14.5 10 14.5C7.52 14.5 5.5 12.48 5.5 10V8.5H4V10C4 13.03 6.27 15.48 9.25 15.93V17.5H10.75V15.93C13.73 15.48 16 13.03 16 10V8.5H14.5Z" fill="currentColor"/></svg>"#;

/// Newspaper masthead: white tile with a black T
pub const MASTHEAD: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="18" height="18" rx="2" fill="white"/><path d="M5 4.5H15V6H11.5V16H9.5V6H5V4.5Z" fill="black"/></svg>"#;

pub const SEARCH: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="7" cy="7" r="4.75" stroke="currentColor" stroke-width="1.5"/><path d="M10.5 10.5L14 14" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/></svg>"#;

pub const WAND: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M2.5 13.5L10 6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/><path d="M11.5 1.5L12.1 3.4L14 4L12.1 4.6L11.5 6.5L10.9 4.6L9 4L10.9 3.4L11.5 1.5Z" fill="currentColor"/><path d="M5 2L5.35 3.15L6.5 3.5L5.35 3.85L5 5L4.65 3.85L3.5 3.5L4.65 3.15L5 2Z" fill="currentColor"/></svg>"#;

/// Logical icon names used by suggestions and settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkle,
    Zap,
    Mic,
    Masthead,
    Search,
    Wand,
}

impl Icon {
    pub fn svg(self) -> &'static str {
        match self {
            Icon::Sparkle => SPARKLE,
            Icon::Zap => ZAP,
            Icon::Mic => MIC,
            Icon::Masthead => MASTHEAD,
            Icon::Search => SEARCH,
            Icon::Wand => WAND,
        }
    }

    /// Resolve a logical name such as `"sparkle"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sparkle" => Some(Icon::Sparkle),
            "zap" => Some(Icon::Zap),
            "mic" | "microphone" => Some(Icon::Mic),
            "masthead" | "times" | "logo" => Some(Icon::Masthead),
            "search" => Some(Icon::Search),
            "wand" => Some(Icon::Wand),
            _ => None,
        }
    }
}

/// How a suggestion's icon is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconView<'a> {
    Svg(Icon),
    /// Literal text such as an emoji
    Glyph(&'a str),
}

impl<'a> IconView<'a> {
    /// Glyphs that name a known icon render as that icon
    pub fn for_suggestion(icon: &'a SuggestionIcon) -> Self {
        match icon {
            SuggestionIcon::Sparkle => IconView::Svg(Icon::Sparkle),
            SuggestionIcon::Zap => IconView::Svg(Icon::Zap),
            SuggestionIcon::Glyph(text) => match Icon::from_name(text) {
                Some(icon) => IconView::Svg(icon),
                None => IconView::Glyph(text),
            },
        }
    }
}
