//! Collapsed "Ask" pill
//! Sparkle, label and masthead laid out at fixed offsets inside the pill

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Font, font};

use crate::app::Message;
use crate::ui::icons::Icon;
use crate::ui::theme;
use crate::ui::widgets::icon;

pub fn view<'a>(opacity: f32) -> Element<'a, Message> {
    let label = text("Ask")
        .size(14)
        .font(Font {
            weight: font::Weight::Medium,
            ..theme::FONT
        })
        .color(theme::faded(theme::TEXT_PRIMARY, opacity));

    // Offsets: sparkle at 8px, label at 28px, masthead at 58px
    let content = row![
        Space::new().width(8),
        icon(Icon::Sparkle, 16.0, Some(theme::TEXT_PRIMARY), opacity),
        Space::new().width(4),
        container(label).width(30),
        icon(Icon::Masthead, 20.0, None, opacity),
    ]
    .align_y(Alignment::Center);

    button(container(content).height(Fill).align_y(Alignment::Center))
        .width(Fill)
        .height(Fill)
        .padding(0)
        .style(theme::bare_button)
        .on_press(Message::Activate)
        .into()
}
