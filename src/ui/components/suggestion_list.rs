//! Suggestion rows and the More button

use iced::time::Instant;
use iced::widget::{Column, Space, button, container, mouse_area, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{HoverId, Message};
use crate::features::ask::Suggestion;
use crate::ui::animation::{HoverAnimations, Stagger};
use crate::ui::icons::{Icon, IconView};
use crate::ui::theme;
use crate::ui::widgets::{dashed_divider, icon};

/// Horizontal slide distance of a row entrance
const ROW_SLIDE: f32 = 20.0;
const MORE_HEIGHT: f32 = 30.0;

fn leading_icon<'a>(view: IconView<'_>, opacity: f32) -> Element<'a, Message> {
    match view {
        IconView::Svg(name) => icon(name, 16.0, Some(theme::TEXT_PRIMARY), opacity),
        IconView::Glyph(glyph) => text(glyph.to_string())
            .size(14)
            .color(theme::faded(theme::TEXT_PRIMARY, opacity))
            .into(),
    }
}

pub fn rows<'a>(
    suggestions: &[Suggestion],
    stagger: &Stagger,
    hover: &HoverAnimations<HoverId>,
    width: f32,
    opacity: f32,
    now: Instant,
) -> Element<'a, Message> {
    let last = suggestions.len().saturating_sub(1);
    let items = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| -> Element<'a, Message> {
            let progress = stagger.progress(i, now);
            let row_opacity = opacity * progress;
            let id = HoverId::Suggestion(i);
            let highlight = hover.progress(&id);

            let content = row![
                leading_icon(IconView::for_suggestion(&suggestion.icon), row_opacity),
                Space::new().width(8),
                text(suggestion.text.clone()).size(14).font(theme::FONT),
            ]
            .align_y(Alignment::Center);

            let pick = button(content)
                .width(Fill)
                .padding(Padding::new(6.0).left(6.0).right(16.0))
                .style(move |_theme, _status| theme::row_button(highlight, row_opacity))
                .on_press(Message::SuggestionPicked(suggestion.text.clone()));

            let mut entry = Column::new().push(
                mouse_area(pick)
                    .on_enter(Message::HoverEnter(id))
                    .on_exit(Message::HoverExit(id)),
            );
            if i < last {
                entry = entry.push(
                    container(dashed_divider(width - 32.0, 4.0, 4.0, move |_theme| {
                        theme::divider_dash(row_opacity)
                    }))
                    .padding(Padding::new(0.0).left(16.0).right(16.0)),
                );
            }

            container(entry)
                .padding(Padding::new(0.0).left(ROW_SLIDE * (1.0 - progress)))
                .into()
        });

    Column::with_children(items).width(Fill).into()
}

pub fn more_button<'a>(hover: &HoverAnimations<HoverId>, opacity: f32) -> Element<'a, Message> {
    let highlight = hover.progress(&HoverId::More);
    let content = row![
        icon(
            Icon::Wand,
            16.0,
            Some(theme::faded(theme::TEXT_PRIMARY, 0.7 + 0.3 * highlight)),
            opacity,
        ),
        Space::new().width(8),
        text("More").size(14).font(theme::FONT),
    ]
    .align_y(Alignment::Center);

    let more = button(container(content).center_x(Fill).height(Fill).align_y(Alignment::Center))
        .width(Fill)
        .height(MORE_HEIGHT)
        .padding(0)
        .style(move |_theme, _status| theme::more_button(highlight, opacity))
        .on_press(Message::MoreSuggestions);

    container(
        mouse_area(more)
            .on_enter(Message::HoverEnter(HoverId::More))
            .on_exit(Message::HoverExit(HoverId::More)),
    )
    .padding(1)
    .style(theme::pill_ring)
    .into()
}
