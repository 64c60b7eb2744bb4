//! Search field with mirrored suggestions
//!
//! The mirrored rows sit above the field and echo the query; the field has
//! gradient placeholder text and a microphone button.

use iced::widget::{Column, Space, button, container, mouse_area, row, stack, text_input};
use iced::time::Instant;
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{HoverId, Message};
use crate::features::ask::MirroredSuggestion;
use crate::ui::animation::{HoverAnimations, Stagger};
use crate::ui::icons::Icon;
use crate::ui::theme;
use crate::ui::widgets::{gradient_text, icon};

pub const SEARCH_INPUT_ID: &str = "ask-search-input";
pub const PLACEHOLDER: &str = "Ask anything";

const MIRRORED_ROW_HEIGHT: f32 = 22.0;
/// Vertical slide distance of a mirrored row entrance
const MIRRORED_SLIDE: f32 = 10.0;
const MIC_SIZE: f32 = 30.0;

/// Rows echoing the query, bottom-aligned so they grow upwards from the field
pub fn mirrored_rows<'a>(
    rows: &[MirroredSuggestion],
    stagger: &Stagger,
    hover: &HoverAnimations<HoverId>,
    opacity: f32,
    now: Instant,
) -> Element<'a, Message> {
    let items = rows.iter().enumerate().map(|(i, entry)| -> Element<'a, Message> {
        let progress = stagger.progress(i, now);
        let row_opacity = opacity * progress;
        let id = HoverId::Mirrored(i);
        let highlight = hover.progress(&id);

        let content = row![
            icon(Icon::Search, 16.0, Some(theme::RING_START), row_opacity),
            Space::new().width(10),
            gradient_text(
                &entry.text,
                theme::faded(theme::RING_START, row_opacity),
                theme::faded(theme::RING_END, row_opacity),
                14.0,
                theme::FONT,
            ),
        ]
        .align_y(Alignment::Center);

        let pick = button(content)
            .width(Fill)
            .height(MIRRORED_ROW_HEIGHT)
            .padding(Padding::new(0.0).left(16.0).right(16.0))
            .style(move |_theme, _status| theme::row_button(highlight, row_opacity))
            .on_press(Message::MirroredPicked(entry.text.clone()));

        // Slide up into place as the entrance progresses
        container(
            mouse_area(pick)
                .on_enter(Message::HoverEnter(id))
                .on_exit(Message::HoverExit(id)),
        )
            .padding(Padding::new(0.0).top(MIRRORED_SLIDE * (1.0 - progress)))
            .into()
    });

    container(Column::with_children(items).spacing(4))
        .width(Fill)
        .height(Fill)
        .align_y(Alignment::End)
        .into()
}

/// The field inside its gradient ring
pub fn field<'a>(
    query: &str,
    hover: &HoverAnimations<HoverId>,
    opacity: f32,
) -> Element<'a, Message> {
    let input = text_input("", query)
        .id(iced::widget::Id::new(SEARCH_INPUT_ID))
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .padding(Padding::new(16.0).right(0.0))
        .size(14)
        .font(theme::FONT)
        .style(theme::search_input);

    // Drawn underneath the transparent input while it is empty
    let placeholder: Element<'a, Message> = if query.is_empty() {
        container(gradient_text(
            PLACEHOLDER,
            theme::faded(theme::RING_START, opacity),
            theme::faded(theme::RING_END, opacity),
            14.0,
            theme::FONT,
        ))
        .padding(Padding::new(0.0).left(16.0))
        .height(Fill)
        .align_y(Alignment::Center)
        .into()
    } else {
        Space::new().into()
    };

    let mic_highlight = hover.progress(&HoverId::Mic);
    let mic = mouse_area(
        button(icon(
            Icon::Mic,
            20.0,
            Some(theme::faded(theme::TEXT_PRIMARY, 0.7 + 0.3 * mic_highlight)),
            opacity,
        ))
        .width(MIC_SIZE)
        .height(MIC_SIZE)
        .padding(5)
        .style(theme::bare_button)
        .on_press(Message::VoiceInput),
    )
    .on_enter(Message::HoverEnter(HoverId::Mic))
    .on_exit(Message::HoverExit(HoverId::Mic));

    let inner = row![
        stack![placeholder, input].width(Fill).height(50),
        mic,
        Space::new().width(12),
    ]
    .align_y(Alignment::Center);

    container(container(inner).style(theme::pill_surface))
        .padding(1)
        .style(theme::pill_ring)
        .into()
}
