//! Text with a left-to-right colour gradient
//!
//! iced has no gradient text fill, so the string is cut into short runs and
//! each run becomes a span with a colour interpolated along the string.

use iced::widget::text::Span;
use iced::widget::{rich_text, span};
use iced::{Color, Element, Font};

/// Colour of character `index` out of `count` between `from` and `to`
pub fn stop_color(from: Color, to: Color, index: usize, count: usize) -> Color {
    let t = if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    };
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

/// Split `content` into `(char index, run)` pairs.
///
/// A run only breaks before an ASCII character, so combining marks, emoji
/// sequences and other non-ASCII clusters stay in one span with the
/// character they attach to.
pub fn text_runs(content: &str) -> Vec<(usize, &str)> {
    let mut runs = Vec::new();
    let (mut start, mut start_index) = (0, 0);
    for (index, (byte, c)) in content.char_indices().enumerate() {
        if byte > start && c.is_ascii() {
            runs.push((start_index, &content[start..byte]));
            start = byte;
            start_index = index;
        }
    }
    if start < content.len() {
        runs.push((start_index, &content[start..]));
    }
    runs
}

pub fn gradient_text<'a, Message: 'a>(
    content: &str,
    from: Color,
    to: Color,
    size: f32,
    font: Font,
) -> Element<'a, Message> {
    let count = content.chars().count();
    let spans: Vec<Span<'a, (), Font>> = text_runs(content)
        .into_iter()
        .map(|(i, run)| span(run.to_string()).color(stop_color(from, to, i, count)))
        .collect();
    rich_text(spans).size(size).font(font).into()
}
