//! SVG icon element

use iced::widget::svg;
use iced::{Color, Element};

use crate::ui::icons::Icon;

/// `tint` replaces every fill; `None` keeps the document's colours
pub fn icon<'a, Message: 'a>(
    icon: Icon,
    size: f32,
    tint: Option<Color>,
    opacity: f32,
) -> Element<'a, Message> {
    svg(svg::Handle::from_memory(icon.svg().as_bytes()))
        .width(size)
        .height(size)
        .opacity(opacity.clamp(0.0, 1.0))
        .style(move |_theme, _status| svg::Style { color: tint })
        .into()
}
